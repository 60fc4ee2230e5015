use crate::models::chart::{ChartGeometry, ChartPoint};
use crate::models::nav::NavPoint;

/// A NAV series mapped onto a chart canvas.
///
/// Higher values sit higher on the canvas (smaller `y`). A flat series is
/// drawn on the vertical midline instead of dividing by a zero range.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    geometry: ChartGeometry,
    points: Vec<ChartPoint>,
    min_value: f64,
    max_value: f64,
}

impl ChartLayout {
    /// Map an ascending series onto `geometry`.
    pub fn compute(series: &[NavPoint], geometry: ChartGeometry) -> Self {
        let (min_value, max_value) = value_bounds(series);
        let count = series.len();

        let points = series
            .iter()
            .enumerate()
            .map(|(i, nav)| ChartPoint {
                screen_x: x_at(i, count, &geometry),
                screen_y: y_at(nav.value(), min_value, max_value, &geometry),
                source: nav.clone(),
            })
            .collect();

        Self {
            geometry,
            points,
            min_value,
            max_value,
        }
    }

    pub fn geometry(&self) -> &ChartGeometry {
        &self.geometry
    }

    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<&ChartPoint> {
        self.points.get(index)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    /// `max - min`, with 1 substituted for a flat series.
    pub fn value_range(&self) -> f64 {
        let range = self.max_value - self.min_value;
        if range == 0.0 {
            1.0
        } else {
            range
        }
    }
}

/// Horizontal position of sample `index` out of `count`.
/// A single sample sits on the left padding.
pub fn x_at(index: usize, count: usize, geometry: &ChartGeometry) -> f64 {
    if count <= 1 {
        return geometry.pad_x;
    }
    geometry.pad_x + index as f64 * geometry.inner_width() / (count - 1) as f64
}

/// Vertical position of `value` within `[min_value, max_value]`.
pub fn y_at(value: f64, min_value: f64, max_value: f64, geometry: &ChartGeometry) -> f64 {
    let range = max_value - min_value;
    if range == 0.0 {
        return geometry.midline();
    }
    geometry.pad_y + ((max_value - value) / range) * geometry.inner_height()
}

fn value_bounds(series: &[NavPoint]) -> (f64, f64) {
    if series.is_empty() {
        return (0.0, 0.0);
    }
    series.iter().map(NavPoint::value).fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(lo, hi), v| (lo.min(v), hi.max(v)),
    )
}
