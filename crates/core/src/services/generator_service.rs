use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::errors::CoreError;
use crate::models::nav::{NavPoint, NavValue};
use crate::models::settings::GeneratorSettings;

/// Longest series a generator accepts (100 years of daily points).
pub const MAX_DAYS: u32 = 36_500;

/// Produces a synthetic, upward-trending daily NAV series for one fund.
///
/// Every day compounds two factors onto the running value:
/// 1. A random daily change drawn uniformly from `[0, max_daily_change)`
/// 2. A trend factor growing linearly from `1.0` on the oldest day to
///    `1 + trend_uplift` today
///
/// Both factors are ≥ 1, so the unrounded series never decreases.
/// There is no seed: each process gets a new series.
pub struct NavGenerator {
    settings: GeneratorSettings,
}

impl NavGenerator {
    /// Validate settings and build a generator.
    pub fn new(settings: GeneratorSettings) -> Result<Self, CoreError> {
        validate(&settings)?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Number of points a generated series holds (`days + 1`).
    pub fn point_count(&self) -> usize {
        self.settings.days as usize + 1
    }

    /// Generate the series ending at `now` using the thread-local RNG.
    pub fn generate(&self, first_id: u64, now: DateTime<Utc>) -> Result<Vec<NavPoint>, CoreError> {
        self.generate_with_rng(first_id, now, &mut rand::thread_rng())
    }

    /// Generate the series ending at `now`, oldest first, with ids counting
    /// up from `first_id`.
    pub fn generate_with_rng<R: Rng>(
        &self,
        first_id: u64,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<Vec<NavPoint>, CoreError> {
        let days = i64::from(self.settings.days);
        let raw_values = self.simulate_values(rng);

        let mut points = Vec::with_capacity(raw_values.len());
        for (step, raw) in raw_values.into_iter().enumerate() {
            let days_back = days - step as i64;
            points.push(NavPoint::new(
                first_id + step as u64,
                self.settings.fund_name.clone(),
                NavValue::new(raw)?,
                now - Duration::days(days_back),
            ));
        }

        tracing::debug!(
            fund = %self.settings.fund_name,
            points = points.len(),
            last = %points.last().map(|p| p.nav_value.to_string()).unwrap_or_default(),
            "generated NAV series"
        );

        Ok(points)
    }

    /// The unrounded running values, oldest first.
    pub fn simulate_values<R: Rng>(&self, rng: &mut R) -> Vec<f64> {
        let days = self.settings.days;
        let mut values = Vec::with_capacity(self.point_count());
        let mut current = self.settings.start_value;

        for elapsed in 0..=days {
            let change = rng.gen::<f64>() * self.settings.max_daily_change;
            current *= 1.0 + change;
            current *= self.trend_factor(elapsed);
            values.push(current);
        }

        values
    }

    /// Trend multiplier `elapsed` days after the oldest day.
    pub fn trend_factor(&self, elapsed: u32) -> f64 {
        let progress = if self.settings.days == 0 {
            1.0
        } else {
            f64::from(elapsed) / f64::from(self.settings.days)
        };
        1.0 + self.settings.trend_uplift * progress
    }
}

fn validate(settings: &GeneratorSettings) -> Result<(), CoreError> {
    if settings.fund_name.trim().is_empty() {
        return Err(CoreError::InvalidSettings("fund name must not be empty".into()));
    }
    if !settings.start_value.is_finite() || settings.start_value <= 0.0 {
        return Err(CoreError::InvalidSettings(format!(
            "start value must be positive, got {}",
            settings.start_value
        )));
    }
    // Rounding must not collapse the first point to 0.00
    if settings.start_value < 0.005 {
        return Err(CoreError::InvalidSettings(format!(
            "start value {} is below the two-decimal resolution",
            settings.start_value
        )));
    }
    if !settings.max_daily_change.is_finite() || settings.max_daily_change < 0.0 {
        return Err(CoreError::InvalidSettings(format!(
            "max daily change must be non-negative, got {}",
            settings.max_daily_change
        )));
    }
    if !settings.trend_uplift.is_finite() || settings.trend_uplift < 0.0 {
        return Err(CoreError::InvalidSettings(format!(
            "trend uplift must be non-negative, got {}",
            settings.trend_uplift
        )));
    }
    if settings.days > MAX_DAYS {
        return Err(CoreError::InvalidSettings(format!(
            "days must be at most {MAX_DAYS}, got {}",
            settings.days
        )));
    }
    // Upper bound of the final value, in log space; rounding scales by 100
    let steps = f64::from(settings.days) + 1.0;
    let log_ceiling = settings.start_value.ln()
        + steps * (settings.max_daily_change.ln_1p() + settings.trend_uplift.ln_1p());
    if !log_ceiling.is_finite() || log_ceiling >= (f64::MAX / 100.0).ln() {
        return Err(CoreError::InvalidSettings(format!(
            "a {}-day series from {} would overflow",
            settings.days, settings.start_value
        )));
    }
    Ok(())
}
