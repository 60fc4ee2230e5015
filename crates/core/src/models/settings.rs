use serde::{Deserialize, Serialize};

/// Fund seeded when no other fund is configured.
pub const DEFAULT_FUND_NAME: &str = "Barakah Equity Fund";

/// Parameters of one synthetic NAV series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorSettings {
    /// Name every generated point is tagged with.
    pub fund_name: String,

    /// Value carried into the oldest day before its first change is applied.
    pub start_value: f64,

    /// Trailing window length; `days + 1` points are generated (today included).
    pub days: u32,

    /// Upper bound of the uniform daily change (0.03 = up to +3% per day).
    pub max_daily_change: f64,

    /// Uplift reached by the trend factor on the most recent day (0.003 = ×1.003).
    pub trend_uplift: f64,
}

impl GeneratorSettings {
    /// Default shape for a named fund.
    pub fn for_fund(fund_name: impl Into<String>) -> Self {
        Self {
            fund_name: fund_name.into(),
            ..Self::default()
        }
    }
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            fund_name: DEFAULT_FUND_NAME.to_string(),
            start_value: 10.0,
            days: 365,
            max_daily_change: 0.03,
            trend_uplift: 0.003,
        }
    }
}
