pub mod chart;
pub mod errors;
pub mod models;
pub mod services;
pub mod sources;
pub mod storage;

use chrono::{DateTime, Utc};
use std::sync::Arc;

use chart::view::NavChartView;
use errors::CoreError;
use models::{
    chart::ChartGeometry, nav::NavPoint, period::NavPeriod, settings::GeneratorSettings,
    summary::NavSummary,
};
use services::{
    analytics_service::AnalyticsService,
    chart_service::{ChartService, PointerPosition},
    nav_service::NavService,
};
use storage::memory::NavStore;

/// Main entry point for the Barakah NAV core library.
/// Owns the seeded store and all services that read from it.
///
/// The store is generated once and never changes, so a `BarakahNav` can be
/// wrapped in an `Arc` and shared by every request handler.
#[must_use]
pub struct BarakahNav {
    store: Arc<NavStore>,
    nav_service: NavService,
    chart_service: ChartService,
    analytics_service: AnalyticsService,
}

impl std::fmt::Debug for BarakahNav {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BarakahNav")
            .field("funds", &self.store.fund_names())
            .field("points", &self.store.len())
            .finish()
    }
}

impl BarakahNav {
    /// Generate every configured fund's series, ending now.
    pub fn seeded(settings: &[GeneratorSettings]) -> Result<Self, CoreError> {
        Self::seeded_at(settings, Utc::now())
    }

    /// Generate every configured fund's series, ending at `now`.
    pub fn seeded_at(settings: &[GeneratorSettings], now: DateTime<Utc>) -> Result<Self, CoreError> {
        let store = NavStore::seeded(settings, now)?;
        Ok(Self::from_store(store))
    }

    /// Wrap an existing store.
    pub fn from_store(store: NavStore) -> Self {
        Self {
            store: Arc::new(store),
            nav_service: NavService::new(),
            chart_service: ChartService::new(),
            analytics_service: AnalyticsService::new(),
        }
    }

    /// Shared handle to the underlying store (e.g. to use it as a `NavSource`).
    #[must_use]
    pub fn store(&self) -> Arc<NavStore> {
        Arc::clone(&self.store)
    }

    #[must_use]
    pub fn fund_names(&self) -> Vec<String> {
        self.store.fund_names()
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// Tail of a fund's series for a raw period token (`1W`, `1M`, `3M`,
    /// `1Y`; anything else means one month). Empty for unknown funds.
    #[must_use]
    pub fn nav_data(&self, fund_name: &str, period_token: Option<&str>) -> Vec<NavPoint> {
        self.nav_service
            .get_nav_data_for_token(&self.store, fund_name, period_token)
    }

    /// Tail of a fund's series for a parsed period.
    #[must_use]
    pub fn nav_data_for(&self, fund_name: &str, period: NavPeriod) -> Vec<NavPoint> {
        self.nav_service.get_nav_data(&self.store, fund_name, period)
    }

    /// Current NAV, daily change and 52-week high. `None` for unknown funds.
    #[must_use]
    pub fn summary(&self, fund_name: &str) -> Option<NavSummary> {
        let year = self.nav_data_for(fund_name, NavPeriod::OneYear);
        self.analytics_service.summarize(&year)
    }

    // ── Charts ──────────────────────────────────────────────────────

    /// A ready, interactive chart for a fund.
    pub fn chart(&self, fund_name: &str, period: NavPeriod, geometry: ChartGeometry) -> NavChartView {
        self.chart_service.view(&self.store, fund_name, period, geometry)
    }

    /// SVG of a fund's chart, optionally hovered at `pointer`.
    #[must_use]
    pub fn chart_svg(
        &self,
        fund_name: &str,
        period: NavPeriod,
        geometry: ChartGeometry,
        pointer: Option<PointerPosition>,
    ) -> String {
        self.chart_service
            .render_svg(&self.store, fund_name, period, geometry, pointer)
    }
}
