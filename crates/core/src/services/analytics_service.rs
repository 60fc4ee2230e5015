use chrono::Duration;

use crate::models::nav::NavPoint;
use crate::models::summary::NavSummary;

/// Length of the "52W high" window.
const HIGH_WINDOW_DAYS: i64 = 365;

/// Computes the headline figures of a NAV series: current value,
/// day-over-day change and 52-week high.
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }

    /// Summarize an ascending series. `None` for an empty slice.
    pub fn summarize(&self, points: &[NavPoint]) -> Option<NavSummary> {
        let latest = points.last()?;
        let previous = points.len().checked_sub(2).map(|i| &points[i]);

        let change_percent = match previous {
            Some(prev) => Self::change_percent(prev.value(), latest.value()),
            None => 0.0,
        };

        let window_start = latest.date - Duration::days(HIGH_WINDOW_DAYS);
        let high_52w = points
            .iter()
            .filter(|p| p.date >= window_start)
            .map(|p| p.nav_value)
            .fold(latest.nav_value, |high, v| if v > high { v } else { high });

        Some(NavSummary {
            fund_name: latest.fund_name.clone(),
            current: latest.nav_value,
            previous: previous.map(|p| p.nav_value),
            change_percent,
            high_52w,
            as_of: latest.date,
        })
    }

    /// Percentage change from `previous` to `current`.
    pub fn change_percent(previous: f64, current: f64) -> f64 {
        if previous == 0.0 {
            return 0.0;
        }
        (current - previous) / previous * 100.0
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}
