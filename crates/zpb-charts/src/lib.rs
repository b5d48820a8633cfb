//! # zpb-charts
//!
//! D3-style zoom/pan/brush time-series chart built with Leptos.
//! A main plot follows wheel zoom and drag pan, while an overview plot below it
//! shows the full data extent with a brush selection mirroring the main view.
//!
//! ## Architecture
//!
//! Uses Strategy pattern for:
//! - Scale computation (linear, time)
//! - Path generation (line, cardinal spline)
//! - Axis rendering
//!
//! The zoom/brush synchronization is a plain state machine over gesture events
//! ([`SyncController`]). The effects it reports are published into Leptos
//! signals ([`ChartSignals`]) that the SVG views read.
//!
//! ## Modules
//!
//! - `chartkit` - Core primitives: scales, paths, axes
//! - `plot` - Scales, axes and line generator of one plot
//! - `layout` - Layout arithmetic and static labels
//! - `updater` - Line data join with transitions
//! - `zoom` / `brush` - Gesture behaviours
//! - `sync` - Zoom/brush synchronization controller
//! - `gesture` - Pointer recognizer
//! - `chart` - The chart and its update entry point
//! - `surface` - SVG views: plots, axes, line group, brush
//! - `web` - DOM host and Leptos component

pub mod brush;
pub mod chart;
pub mod chartkit;
pub mod gesture;
pub mod layout;
pub mod plot;
pub mod surface;
pub mod sync;
pub mod updater;
pub mod web;
pub mod zoom;

pub use brush::{Brush, BrushExtent, BrushHandle, PixelRect};
pub use chart::*;
pub use chartkit::*;
pub use gesture::{PointerTarget, PointerTracker};
pub use layout::{ChartLabels, ChartLayout, PlotFrame};
pub use plot::PlotScales;
pub use surface::{ChartFrame, ChartSignals};
pub use sync::*;
pub use updater::{JoinedLine, LineJoin, LinePhase, TRANSITION_MS};
pub use web::*;
pub use zoom::{ZoomBehavior, ZoomTransform};

// Re-export colors from zpb-core for convenience
pub use zpb_core::colors;

/// Chart margin configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl ChartMargin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    pub const fn uniform(margin: f64) -> Self {
        Self::new(margin, margin, margin, margin)
    }

    /// Room for the title above and axis labels below and to the left
    pub const fn standard() -> Self {
        Self::new(40.0, 50.0, 40.0, 60.0)
    }
}

impl Default for ChartMargin {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_margin() {
        let margin = ChartMargin::default();
        assert_eq!(margin, ChartMargin::new(40.0, 50.0, 40.0, 60.0));
        assert_eq!(ChartMargin::uniform(5.0).left, 5.0);
    }
}
