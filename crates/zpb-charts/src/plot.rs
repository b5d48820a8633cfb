//! Per-plot scales, axes and line generator

use crate::chartkit::{Axis, AxisTick, CardinalLine, LinearScale, PathGenerator, Scale, TimeScale};
use zpb_core::{Accessors, Series, UNDEFINED_DOMAIN};

/// Scales, axis guides and path generator for one plot (main or overview).
///
/// The plot owns its scales; axes and line generation borrow them on every
/// render, so a domain change is picked up by the next redraw.
#[derive(Debug, Clone)]
pub struct PlotScales {
    pub x: TimeScale,
    pub y: LinearScale,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub line: CardinalLine,
}

impl PlotScales {
    pub fn new(width: f64, height: f64, x_domain: (f64, f64), y_domain: (f64, f64)) -> Self {
        Self {
            x: TimeScale::new()
                .domain(x_domain.0, x_domain.1)
                .range(0.0, width),
            y: LinearScale::new()
                .domain(y_domain.0, y_domain.1)
                .range(height, 0.0),
            x_axis: Axis::bottom().tick_size(-height).tick_padding(8.0),
            y_axis: Axis::left().tick_size(-width),
            line: CardinalLine::default(),
        }
    }

    pub fn set_domains(&mut self, x: (f64, f64), y: (f64, f64)) {
        self.x.set_domain(x.0, x.1);
        self.y.set_domain(y.0, y.1);
    }

    pub fn x_domain(&self) -> (f64, f64) {
        self.x.domain_bounds()
    }

    pub fn y_domain(&self) -> (f64, f64) {
        self.y.domain_bounds()
    }

    /// Pixel `(width, height)` covered by the scale ranges
    pub fn size(&self) -> (f64, f64) {
        let (x0, x1) = self.x.range_bounds();
        let (y0, y1) = self.y.range_bounds();
        ((x1 - x0).abs(), (y1 - y0).abs())
    }

    /// Pixel path for a series; points missing either field are skipped
    pub fn line_path(&self, series: &Series, accessors: &Accessors) -> String {
        let points: Vec<(f64, f64)> = series
            .iter()
            .filter_map(|p| accessors.read(p))
            .map(|(x, y)| (self.x.scale(x), self.y.scale(y)))
            .collect();
        self.line.generate(&points)
    }

    pub fn x_ticks(&self) -> Vec<AxisTick> {
        self.x_axis.ticks(&self.x)
    }

    pub fn y_ticks(&self) -> Vec<AxisTick> {
        self.y_axis.ticks(&self.y)
    }

    pub fn x_domain_path(&self) -> String {
        self.x_axis.domain_path(&self.x)
    }

    pub fn y_domain_path(&self) -> String {
        self.y_axis.domain_path(&self.y)
    }
}

/// Zero-sized plot over undefined domains, drawn before a chart is measured
impl Default for PlotScales {
    fn default() -> Self {
        Self::new(0.0, 0.0, UNDEFINED_DOMAIN, UNDEFINED_DOMAIN)
    }
}
