use crate::models::chart::{
    ChartGeometry, ChartPoint, HorizontalAlign, HoverState, TooltipPlacement, VerticalPlacement,
};

use super::layout::ChartLayout;

// Relative positions past which the tooltip flips away from the edge.
const EDGE_LEFT: f64 = 0.15;
const EDGE_RIGHT: f64 = 0.85;
const EDGE_TOP: f64 = 0.25;
const EDGE_BOTTOM: f64 = 0.75;

/// Gap between the hovered point and the tooltip box.
pub const TOOLTIP_OFFSET: f64 = 8.0;

/// Convert a pointer offset measured on the rendered element into logical
/// canvas units. A non-positive rendered width leaves the offset unscaled.
pub fn to_logical_x(client_x: f64, rendered_width: f64, geometry: &ChartGeometry) -> f64 {
    if rendered_width <= 0.0 || !rendered_width.is_finite() {
        return client_x;
    }
    client_x * geometry.width / rendered_width
}

/// Index of the sample nearest to `pointer_x` (logical units).
///
/// `None` only when there are no samples. Offsets outside the plotting area
/// clamp to the first or last sample.
pub fn resolve_nearest_sample(
    pointer_x: f64,
    sample_count: usize,
    geometry: &ChartGeometry,
) -> Option<usize> {
    match sample_count {
        0 => None,
        1 => Some(0),
        n => {
            let last = n - 1;
            let per_point_width = geometry.inner_width() / last as f64;
            if per_point_width <= 0.0 {
                return Some(0);
            }
            let raw = ((pointer_x - geometry.pad_x) / per_point_width).round();
            // NaN.max(0.0) is 0.0, so a garbage offset lands on the first sample
            Some(raw.max(0.0).min(last as f64) as usize)
        }
    }
}

/// Tooltip anchor and alignment for `point`, flipped away from any edge it
/// would otherwise clip against.
pub fn place_tooltip(point: &ChartPoint, geometry: &ChartGeometry) -> TooltipPlacement {
    let rel_x = relative(point.screen_x, geometry.width);
    let rel_y = relative(point.screen_y, geometry.height);

    let (anchor_x, align) = if rel_x < EDGE_LEFT {
        (point.screen_x + TOOLTIP_OFFSET, HorizontalAlign::Start)
    } else if rel_x > EDGE_RIGHT {
        (point.screen_x - TOOLTIP_OFFSET, HorizontalAlign::End)
    } else {
        (point.screen_x, HorizontalAlign::Center)
    };

    let vertical = match (rel_y < EDGE_TOP, rel_y > EDGE_BOTTOM) {
        // Top quarter: drop below the point
        (true, _) => VerticalPlacement::Below,
        // Bottom quarter: keep clear of the baseline
        (false, true) => VerticalPlacement::Above,
        (false, false) => VerticalPlacement::Above,
    };
    let anchor_y = match vertical {
        VerticalPlacement::Above => point.screen_y - TOOLTIP_OFFSET,
        VerticalPlacement::Below => point.screen_y + TOOLTIP_OFFSET,
    };

    TooltipPlacement {
        anchor_x,
        anchor_y,
        align,
        vertical,
    }
}

/// Resolve a logical pointer offset against a layout.
pub fn hover_at(layout: &ChartLayout, pointer_x: f64) -> Option<HoverState> {
    let geometry = layout.geometry();
    let index = resolve_nearest_sample(pointer_x, layout.len(), geometry)?;
    let point = layout.get(index)?.clone();
    let tooltip = place_tooltip(&point, geometry);
    Some(HoverState {
        index,
        point,
        tooltip,
    })
}

fn relative(position: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        0.5
    } else {
        position / extent
    }
}
