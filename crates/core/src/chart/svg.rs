use std::fmt::Write;

use crate::models::chart::{ChartGeometry, HorizontalAlign, HoverState, VerticalPlacement};

use super::layout::ChartLayout;

pub const NO_DATA_MESSAGE: &str = "No data available";

const LINE_COLOR: &str = "#000000";
const AREA_COLOR: &str = "#000000";
const TOOLTIP_WIDTH: f64 = 84.0;
const TOOLTIP_HEIGHT: f64 = 34.0;

/// Render a laid-out series as a line/area chart, with the hovered point
/// and its tooltip when there is one. An empty layout renders the
/// "no data" placeholder.
pub fn render_chart(layout: &ChartLayout, hover: Option<&HoverState>) -> String {
    let geometry = layout.geometry();
    if layout.is_empty() {
        return render_placeholder(geometry, NO_DATA_MESSAGE);
    }

    let line = line_points(layout);
    let area = area_path(layout);

    let mut body = String::new();
    let _ = write!(
        body,
        r##"<path d="{area}" fill="{AREA_COLOR}" fill-opacity="0.08" stroke="none"/>
<polyline points="{line}" stroke="{LINE_COLOR}" stroke-width="2" fill="none" stroke-linejoin="round"/>
"##
    );

    if let Some(hover) = hover {
        body.push_str(&render_hover(hover, geometry));
    }

    wrap(geometry, &body)
}

/// Static message in place of a chart.
pub fn render_placeholder(geometry: &ChartGeometry, message: &str) -> String {
    let body = format!(
        r##"<text x="{:.1}" y="{:.1}" text-anchor="middle" dominant-baseline="middle" font-size="12" fill="#6b7280">{}</text>
"##,
        geometry.width / 2.0,
        geometry.height / 2.0,
        escape(message)
    );
    wrap(geometry, &body)
}

/// Pulsing grey blocks shown while the series is still loading.
pub fn render_loading(geometry: &ChartGeometry) -> String {
    let body = format!(
        r##"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" rx="4" fill="#e5e7eb">
<animate attributeName="opacity" values="1;0.4;1" dur="1.5s" repeatCount="indefinite"/>
</rect>
"##,
        geometry.pad_x,
        geometry.pad_y,
        geometry.inner_width(),
        geometry.inner_height()
    );
    wrap(geometry, &body)
}

/// `x,y` pairs for the polyline, in sample order.
pub fn line_points(layout: &ChartLayout) -> String {
    let mut out = String::new();
    for (i, p) in layout.points().iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{:.1},{:.1}", p.screen_x, p.screen_y);
    }
    out
}

/// The polyline closed down to the baseline, for the filled area.
pub fn area_path(layout: &ChartLayout) -> String {
    let points = layout.points();
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    let baseline = layout.geometry().baseline();

    let mut out = format!("M{:.1},{:.1}", first.screen_x, baseline);
    for p in points {
        let _ = write!(out, " L{:.1},{:.1}", p.screen_x, p.screen_y);
    }
    let _ = write!(out, " L{:.1},{:.1} Z", last.screen_x, baseline);
    out
}

fn render_hover(hover: &HoverState, geometry: &ChartGeometry) -> String {
    let point = &hover.point;
    let tip = &hover.tooltip;

    let box_x = match tip.align {
        HorizontalAlign::Start => tip.anchor_x,
        HorizontalAlign::Center => tip.anchor_x - TOOLTIP_WIDTH / 2.0,
        HorizontalAlign::End => tip.anchor_x - TOOLTIP_WIDTH,
    };
    let box_y = match tip.vertical {
        VerticalPlacement::Above => tip.anchor_y - TOOLTIP_HEIGHT,
        VerticalPlacement::Below => tip.anchor_y,
    };
    let text_x = box_x + TOOLTIP_WIDTH / 2.0;

    let value = format!("₹{}", point.source.nav_value);
    let date = point.source.date.format("%d %b %Y").to_string();

    format!(
        r##"<line x1="{x:.1}" y1="{top:.1}" x2="{x:.1}" y2="{bottom:.1}" stroke="#9ca3af" stroke-dasharray="2 2"/>
<circle cx="{x:.1}" cy="{y:.1}" r="3" fill="{LINE_COLOR}"/>
<g class="tooltip">
<rect x="{box_x:.1}" y="{box_y:.1}" width="{TOOLTIP_WIDTH:.1}" height="{TOOLTIP_HEIGHT:.1}" rx="4" fill="#111827"/>
<text x="{text_x:.1}" y="{value_y:.1}" text-anchor="middle" font-size="11" font-weight="600" fill="#ffffff">{value}</text>
<text x="{text_x:.1}" y="{date_y:.1}" text-anchor="middle" font-size="9" fill="#d1d5db">{date}</text>
</g>
"##,
        x = point.screen_x,
        y = point.screen_y,
        top = geometry.pad_y,
        bottom = geometry.baseline(),
        value_y = box_y + 14.0,
        date_y = box_y + 27.0,
        value = escape(&value),
        date = escape(&date),
    )
}

fn wrap(geometry: &ChartGeometry, body: &str) -> String {
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w:.0} {h:.0}" width="{w:.0}" height="{h:.0}">
{body}</svg>"##,
        w = geometry.width,
        h = geometry.height,
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
