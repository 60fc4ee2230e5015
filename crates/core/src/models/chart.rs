use serde::{Deserialize, Serialize};

use super::nav::NavPoint;

/// Logical canvas a NAV chart is laid out on.
///
/// All chart coordinates are in these units; the origin is the top-left
/// corner, so larger values map to smaller `y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    /// Left and right margin
    pub pad_x: f64,
    /// Top and bottom margin
    pub pad_y: f64,
}

impl ChartGeometry {
    pub fn new(width: f64, height: f64, pad_x: f64, pad_y: f64) -> Self {
        Self {
            width,
            height,
            pad_x,
            pad_y,
        }
    }

    pub fn inner_width(&self) -> f64 {
        (self.width - 2.0 * self.pad_x).max(0.0)
    }

    pub fn inner_height(&self) -> f64 {
        (self.height - 2.0 * self.pad_y).max(0.0)
    }

    /// Bottom edge of the plotting area; the area fill closes here.
    pub fn baseline(&self) -> f64 {
        self.pad_y + self.inner_height()
    }

    /// Vertical centre of the plotting area.
    pub fn midline(&self) -> f64 {
        self.pad_y + self.inner_height() / 2.0
    }
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self::new(300.0, 160.0, 20.0, 20.0)
    }
}

/// A sample placed on the canvas. Recomputed on every layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub screen_x: f64,
    pub screen_y: f64,
    pub source: NavPoint,
}

/// Which side of the anchor the tooltip box extends to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HorizontalAlign {
    /// Box starts at the anchor and extends right (point near the left edge)
    Start,
    Center,
    /// Box ends at the anchor and extends left (point near the right edge)
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VerticalPlacement {
    Above,
    /// Used when the point sits near the top edge
    Below,
}

/// Where to draw a tooltip for a hovered point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TooltipPlacement {
    pub anchor_x: f64,
    pub anchor_y: f64,
    pub align: HorizontalAlign,
    pub vertical: VerticalPlacement,
}

/// The sample currently under the pointer, with its tooltip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoverState {
    pub index: usize,
    pub point: ChartPoint,
    pub tooltip: TooltipPlacement,
}
