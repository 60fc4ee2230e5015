use crate::errors::CoreError;
use crate::models::chart::{ChartGeometry, HoverState};
use crate::models::nav::NavPoint;
use crate::models::period::NavPeriod;
use crate::sources::traits::NavSource;

use super::interaction::{hover_at, to_logical_x};
use super::layout::ChartLayout;
use super::svg;

/// Lifecycle of one mounted chart: it starts loading and becomes ready
/// once a series (possibly empty) arrives. There is no error state.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartState {
    Loading,
    Ready(ChartLayout),
}

/// Interactive NAV chart: owns its layout and the current hover.
#[derive(Debug, Clone)]
pub struct NavChartView {
    geometry: ChartGeometry,
    state: ChartState,
    hover: Option<HoverState>,
}

impl NavChartView {
    /// A freshly mounted chart waiting for data.
    pub fn new(geometry: ChartGeometry) -> Self {
        Self {
            geometry,
            state: ChartState::Loading,
            hover: None,
        }
    }

    /// A chart that already has its series.
    pub fn ready(series: &[NavPoint], geometry: ChartGeometry) -> Self {
        let mut view = Self::new(geometry);
        view.finish_loading(Ok(series.to_vec()));
        view
    }

    /// Fetch `fund_name` for `period` from `source` and become ready.
    /// Starts over from `Loading` when called on a ready chart.
    pub async fn load(&mut self, source: &dyn NavSource, fund_name: &str, period: NavPeriod) {
        self.state = ChartState::Loading;
        self.hover = None;
        let result = source.fetch_nav_data(fund_name, period).await;
        if let Err(e) = &result {
            tracing::warn!(source = source.name(), fund = fund_name, %period, error = %e, "NAV fetch failed, showing empty chart");
        }
        self.finish_loading(result);
    }

    /// Apply a fetch result. A failed fetch becomes an empty series.
    pub fn finish_loading(&mut self, result: Result<Vec<NavPoint>, CoreError>) {
        let series = result.unwrap_or_default();
        self.state = ChartState::Ready(ChartLayout::compute(&series, self.geometry));
        self.hover = None;
    }

    pub fn state(&self) -> &ChartState {
        &self.state
    }

    pub fn geometry(&self) -> &ChartGeometry {
        &self.geometry
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ChartState::Loading)
    }

    pub fn layout(&self) -> Option<&ChartLayout> {
        match &self.state {
            ChartState::Ready(layout) => Some(layout),
            ChartState::Loading => None,
        }
    }

    pub fn hover(&self) -> Option<&HoverState> {
        self.hover.as_ref()
    }

    /// Pointer moved to `client_x` on an element rendered `rendered_width`
    /// wide. Recomputes the nearest sample on every call.
    pub fn pointer_move(&mut self, client_x: f64, rendered_width: f64) -> Option<&HoverState> {
        let pointer_x = to_logical_x(client_x, rendered_width, &self.geometry);
        self.hover = self.layout().and_then(|layout| hover_at(layout, pointer_x));
        self.hover.as_ref()
    }

    /// Pointer left the canvas.
    pub fn pointer_leave(&mut self) {
        self.hover = None;
    }

    pub fn render(&self) -> String {
        match &self.state {
            ChartState::Loading => svg::render_loading(&self.geometry),
            ChartState::Ready(layout) => svg::render_chart(layout, self.hover.as_ref()),
        }
    }
}
