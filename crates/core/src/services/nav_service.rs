use crate::models::nav::NavPoint;
use crate::models::period::NavPeriod;
use crate::storage::memory::NavStore;

/// Answers NAV queries against the store.
///
/// Read-only: the store is never touched mutably.
pub struct NavService;

impl NavService {
    pub fn new() -> Self {
        Self
    }

    /// Tail of the fund's series for `period`, ascending by date.
    /// Length is `min(available points, period.row_limit())`.
    pub fn get_nav_data(&self, store: &NavStore, fund_name: &str, period: NavPeriod) -> Vec<NavPoint> {
        let points = store.get_nav_data(fund_name, period.row_limit());
        if points.is_empty() {
            tracing::debug!(fund = fund_name, %period, "no NAV data for fund");
        }
        points
    }

    /// Same as `get_nav_data`, taking the raw period token from a request.
    pub fn get_nav_data_for_token(
        &self,
        store: &NavStore,
        fund_name: &str,
        period_token: Option<&str>,
    ) -> Vec<NavPoint> {
        self.get_nav_data(store, fund_name, NavPeriod::from_token(period_token))
    }
}

impl Default for NavService {
    fn default() -> Self {
        Self::new()
    }
}
