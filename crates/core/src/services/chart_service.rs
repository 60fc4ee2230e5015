use crate::chart::interaction::{hover_at, to_logical_x};
use crate::chart::layout::ChartLayout;
use crate::chart::svg;
use crate::chart::view::NavChartView;
use crate::models::chart::ChartGeometry;
use crate::models::period::NavPeriod;
use crate::services::nav_service::NavService;
use crate::storage::memory::NavStore;

/// Pointer position on a rendered chart, used for server-side hover renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    /// Offset from the left edge of the rendered element
    pub client_x: f64,
    /// Width the chart is rendered at; the logical width when `None`
    pub rendered_width: Option<f64>,
}

/// Generates chart-ready layouts and SVG straight from the store.
///
/// All coordinates are computed here; a frontend only draws them.
pub struct ChartService {
    nav_service: NavService,
}

impl ChartService {
    pub fn new() -> Self {
        Self {
            nav_service: NavService::new(),
        }
    }

    /// Layout of `fund_name` over `period`. Empty for unknown funds.
    pub fn layout(
        &self,
        store: &NavStore,
        fund_name: &str,
        period: NavPeriod,
        geometry: ChartGeometry,
    ) -> ChartLayout {
        let series = self.nav_service.get_nav_data(store, fund_name, period);
        ChartLayout::compute(&series, geometry)
    }

    /// A ready, interactive chart for `fund_name` over `period`.
    pub fn view(
        &self,
        store: &NavStore,
        fund_name: &str,
        period: NavPeriod,
        geometry: ChartGeometry,
    ) -> NavChartView {
        let series = self.nav_service.get_nav_data(store, fund_name, period);
        NavChartView::ready(&series, geometry)
    }

    /// SVG of the chart, with the tooltip of the sample nearest to
    /// `pointer` when one is given.
    pub fn render_svg(
        &self,
        store: &NavStore,
        fund_name: &str,
        period: NavPeriod,
        geometry: ChartGeometry,
        pointer: Option<PointerPosition>,
    ) -> String {
        let layout = self.layout(store, fund_name, period, geometry);
        let hover = pointer.and_then(|p| {
            let rendered_width = p.rendered_width.unwrap_or(geometry.width);
            hover_at(&layout, to_logical_x(p.client_x, rendered_width, &geometry))
        });
        svg::render_chart(&layout, hover.as_ref())
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
