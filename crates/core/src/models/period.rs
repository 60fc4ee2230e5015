use serde::{Deserialize, Serialize};

/// Trailing window selected by a period token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NavPeriod {
    /// `1W` — last 7 points
    #[serde(rename = "1W")]
    OneWeek,
    /// `1M` — last 30 points (also the fallback)
    #[default]
    #[serde(rename = "1M")]
    OneMonth,
    /// `3M` — last 90 points
    #[serde(rename = "3M")]
    ThreeMonths,
    /// `1Y` — last 365 points
    #[serde(rename = "1Y")]
    OneYear,
}

impl NavPeriod {
    pub const ALL: [NavPeriod; 4] = [
        NavPeriod::OneWeek,
        NavPeriod::OneMonth,
        NavPeriod::ThreeMonths,
        NavPeriod::OneYear,
    ];

    /// Parse a token. Anything unrecognized, including a missing token,
    /// falls back to one month. Matching is exact: `"1w"` is not `1W`.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some("1W") => NavPeriod::OneWeek,
            Some("1M") => NavPeriod::OneMonth,
            Some("3M") => NavPeriod::ThreeMonths,
            Some("1Y") => NavPeriod::OneYear,
            _ => NavPeriod::default(),
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            NavPeriod::OneWeek => "1W",
            NavPeriod::OneMonth => "1M",
            NavPeriod::ThreeMonths => "3M",
            NavPeriod::OneYear => "1Y",
        }
    }

    /// Number of most-recent points returned for this period.
    pub fn row_limit(self) -> usize {
        match self {
            NavPeriod::OneWeek => 7,
            NavPeriod::OneMonth => 30,
            NavPeriod::ThreeMonths => 90,
            NavPeriod::OneYear => 365,
        }
    }
}

impl std::fmt::Display for NavPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}
