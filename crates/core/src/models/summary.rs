use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::nav::NavValue;

/// Headline figures shown above a NAV chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavSummary {
    pub fund_name: String,

    /// Most recent NAV
    pub current: NavValue,

    /// NAV of the point before `current`, if there is one
    pub previous: Option<NavValue>,

    /// Day-over-day change in percent; 0 when there is no previous point
    pub change_percent: f64,

    /// Highest NAV within the 52 weeks ending at `as_of`
    #[serde(rename = "high52w")]
    pub high_52w: NavValue,

    /// Date of `current`
    pub as_of: DateTime<Utc>,
}
