use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::errors::CoreError;
use crate::models::nav::NavPoint;
use crate::models::period::NavPeriod;
use crate::models::settings::GeneratorSettings;
use crate::services::generator_service::NavGenerator;
use crate::sources::traits::NavSource;

/// Write-once, read-many NAV store keyed by point id.
///
/// Built eagerly at startup and immutable afterwards, so it can be shared
/// behind an `Arc` and read from any number of handlers without locking.
#[derive(Debug, Clone, Default)]
pub struct NavStore {
    points: BTreeMap<u64, NavPoint>,
}

impl NavStore {
    /// Generate one series per entry in `settings`, all ending at `now`.
    /// Ids start at 1 and keep counting across funds.
    pub fn seeded(settings: &[GeneratorSettings], now: DateTime<Utc>) -> Result<Self, CoreError> {
        let mut points = Vec::new();
        let mut next_id = 1;
        for fund in settings {
            let generator = NavGenerator::new(fund.clone())?;
            let series = generator.generate(next_id, now)?;
            next_id += series.len() as u64;
            points.extend(series);
        }
        let store = Self::from_points(points);
        tracing::info!(funds = settings.len(), points = store.len(), "NAV store seeded");
        Ok(store)
    }

    /// Build a store from prepared points. A later point with the same id
    /// replaces an earlier one.
    pub fn from_points(points: impl IntoIterator<Item = NavPoint>) -> Self {
        Self {
            points: points.into_iter().map(|p| (p.id, p)).collect(),
        }
    }

    /// Last `limit` points of `fund_name` (exact match), oldest first.
    /// Unknown funds give an empty vector.
    pub fn get_nav_data(&self, fund_name: &str, limit: usize) -> Vec<NavPoint> {
        let mut matching: Vec<&NavPoint> = self
            .points
            .values()
            .filter(|p| p.fund_name == fund_name)
            .collect();
        matching.sort_by_key(|p| p.date);

        let skip = matching.len().saturating_sub(limit);
        matching.into_iter().skip(skip).cloned().collect()
    }

    pub fn get(&self, id: u64) -> Option<&NavPoint> {
        self.points.get(&id)
    }

    /// Distinct fund names in id order of their first point.
    pub fn fund_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for point in self.points.values() {
            if !names.iter().any(|n| n == &point.fund_name) {
                names.push(point.fund_name.clone());
            }
        }
        names
    }

    pub fn contains_fund(&self, fund_name: &str) -> bool {
        self.points.values().any(|p| p.fund_name == fund_name)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[async_trait]
impl NavSource for NavStore {
    fn name(&self) -> &str {
        "Memory"
    }

    async fn fetch_nav_data(
        &self,
        fund_name: &str,
        period: NavPeriod,
    ) -> Result<Vec<NavPoint>, CoreError> {
        Ok(self.get_nav_data(fund_name, period.row_limit()))
    }
}
