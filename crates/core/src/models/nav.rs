use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// A per-unit fund value with exactly two fractional digits.
///
/// Travels over the wire as a decimal string (`"12.45"`), the way the
/// fund tables store it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct NavValue(f64);

impl NavValue {
    /// Round a raw value to two decimals.
    /// Fails for non-finite or non-positive values.
    pub fn new(raw: f64) -> Result<Self, CoreError> {
        if !raw.is_finite() || raw <= 0.0 {
            return Err(CoreError::InvalidNavValue(format!(
                "NAV must be a positive number, got {raw}"
            )));
        }
        let rounded = (raw * 100.0).round() / 100.0;
        if rounded <= 0.0 {
            return Err(CoreError::InvalidNavValue(format!(
                "NAV {raw} rounds to zero"
            )));
        }
        Ok(Self(rounded))
    }

    /// The rounded numeric value.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl fmt::Display for NavValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl FromStr for NavValue {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: f64 = s
            .trim()
            .parse()
            .map_err(|_| CoreError::InvalidNavValue(format!("not a number: {s:?}")))?;
        Self::new(raw)
    }
}

impl Serialize for NavValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NavValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Text(String),
            Number(f64),
        }

        let parsed = match Wire::deserialize(deserializer)? {
            Wire::Text(s) => s.parse(),
            Wire::Number(n) => NavValue::new(n),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}

/// One daily valuation of a fund.
///
/// Created once by the generator at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavPoint {
    /// Sequential identifier, unique across the whole store
    pub id: u64,

    /// Fund this valuation belongs to (exact-match key for queries)
    pub fund_name: String,

    /// Value per unit, two decimals
    pub nav_value: NavValue,

    /// Valuation timestamp; one point per calendar day per fund
    pub date: DateTime<Utc>,
}

impl NavPoint {
    pub fn new(id: u64, fund_name: impl Into<String>, nav_value: NavValue, date: DateTime<Utc>) -> Self {
        Self {
            id,
            fund_name: fund_name.into(),
            nav_value,
            date,
        }
    }

    /// Numeric value used by chart math.
    pub fn value(&self) -> f64 {
        self.nav_value.get()
    }
}
