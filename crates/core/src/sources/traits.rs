use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::nav::NavPoint;
use crate::models::period::NavPeriod;

/// Anything a NAV chart can load its series from.
///
/// The in-memory store answers directly; `HttpNavSource` goes through the
/// read endpoint. Charts do not care which one they were given.
#[async_trait]
pub trait NavSource: Send + Sync {
    /// Human-readable name of this source (for logs/errors).
    fn name(&self) -> &str;

    /// Most recent points of `fund_name` for `period`, ascending by date.
    /// An unknown fund yields an empty vector, not an error.
    async fn fetch_nav_data(
        &self,
        fund_name: &str,
        period: NavPeriod,
    ) -> Result<Vec<NavPoint>, CoreError>;
}
