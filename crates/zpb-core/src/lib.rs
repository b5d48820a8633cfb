//! # zpb-core
//!
//! Core data types for the zoom/pan/brush time-series chart.
//! A chart is fed a [`Dataset`] (a list of series of loosely-typed data points)
//! and reads two fields from every point through configurable [`Accessors`].

pub mod datum;
pub mod extent;

pub use datum::*;
pub use extent::*;

// ============================================================================
// ACCESSORS
// ============================================================================

/// Default field name for the temporal x value
pub const DEFAULT_X_ACCESSOR: &str = "date";

/// Default field name for the numeric y value
pub const DEFAULT_Y_ACCESSOR: &str = "value";

/// Field names used to read x/y values out of each data point
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Accessors {
    pub x: String,
    pub y: String,
}

impl Accessors {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Replace either key when a new one is given; `None` keeps the current key.
    pub fn rebind(&mut self, x: Option<&str>, y: Option<&str>) {
        if let Some(x) = x.filter(|k| !k.is_empty()) {
            self.x = x.to_string();
        }
        if let Some(y) = y.filter(|k| !k.is_empty()) {
            self.y = y.to_string();
        }
    }

    /// Read the (x, y) pair of a point, if both fields are numeric
    pub fn read(&self, point: &DataPoint) -> Option<(f64, f64)> {
        point.read(&self.x).zip(point.read(&self.y))
    }
}

impl Default for Accessors {
    fn default() -> Self {
        Self::new(DEFAULT_X_ACCESSOR, DEFAULT_Y_ACCESSOR)
    }
}

// ============================================================================
// COLOR CONSTANTS
// ============================================================================

pub mod colors {
    pub const LINE: &str = "#3b82f6";
    pub const AXIS: &str = "#2a2a2a";
    pub const GRID: &str = "#d4d4d4";
    pub const TEXT_PRIMARY: &str = "#1f1f1f";
    pub const TEXT_MUTED: &str = "#888888";
    pub const BRUSH_FILL: &str = "#94a3b8";

    pub fn line_alpha(alpha: f64) -> String {
        format!("rgba(59, 130, 246, {:.2})", alpha)
    }
}
