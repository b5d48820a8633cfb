//! Zoom/pan behaviour (D3 v3 `d3.behavior.zoom` semantics)
//!
//! The behaviour keeps reference copies of the scales it was bound to and a
//! view transform `(x, y, k)`. Bound scales are rescaled by mapping the
//! reference range through the inverse transform and the reference inverse.

use crate::chartkit::{LinearScale, Scale, TimeScale};

/// Translation and scale factor of the zoom view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomTransform {
    pub x: f64,
    pub y: f64,
    pub k: f64,
}

impl ZoomTransform {
    pub const IDENTITY: ZoomTransform = ZoomTransform { x: 0.0, y: 0.0, k: 1.0 };

    /// Zoom-space location of a pixel point
    fn location(&self, point: (f64, f64)) -> (f64, f64) {
        ((point.0 - self.x) / self.k, (point.1 - self.y) / self.k)
    }

    /// Translate so that zoom-space `location` sits under pixel `point`
    fn translate_to(&mut self, point: (f64, f64), location: (f64, f64)) {
        self.x = point.0 - location.0 * self.k;
        self.y = point.1 - location.1 * self.k;
    }
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[derive(Debug, Clone)]
pub struct ZoomBehavior {
    x0: TimeScale,
    y0: LinearScale,
    view: ZoomTransform,
    scale_extent: (f64, f64),
    /// Zoom-space point grabbed by an active pan
    grab: Option<(f64, f64)>,
}

impl ZoomBehavior {
    pub fn new(x: &TimeScale, y: &LinearScale) -> Self {
        Self {
            x0: x.clone(),
            y0: y.clone(),
            view: ZoomTransform::IDENTITY,
            scale_extent: (0.0, f64::INFINITY),
            grab: None,
        }
    }

    pub fn scale_extent(mut self, min: f64, max: f64) -> Self {
        self.scale_extent = (min, max);
        self
    }

    /// Re-bind to the given scales: they become the new reference and the
    /// view resets to identity, so the next gesture starts from them.
    pub fn rebind(&mut self, x: &TimeScale, y: &LinearScale) {
        self.x0 = x.clone();
        self.y0 = y.clone();
        self.view = ZoomTransform::IDENTITY;
    }

    pub fn transform(&self) -> ZoomTransform {
        self.view
    }

    /// Wheel zoom anchored at `point`. Returns whether the view changed.
    pub fn wheel(&mut self, point: (f64, f64), delta_y: f64, delta_mode: u32) -> bool {
        let line_height = if delta_mode != 0 { 120.0 } else { 1.0 };
        let delta = -delta_y * line_height / 500.0;
        let before = self.view;
        let anchor = self.view.location(point);

        let (min_k, max_k) = self.scale_extent;
        self.view.k = (self.view.k * 2f64.powf(delta)).clamp(min_k, max_k);
        self.view.translate_to(point, anchor);

        self.view != before
    }

    pub fn pan_start(&mut self, point: (f64, f64)) {
        self.grab = Some(self.view.location(point));
    }

    /// Drag the grabbed point to `point`. Returns whether the view changed.
    pub fn pan_move(&mut self, point: (f64, f64)) -> bool {
        let Some(grab) = self.grab else {
            return false;
        };
        let before = self.view;
        self.view.translate_to(point, grab);
        self.view != before
    }

    pub fn pan_end(&mut self) {
        self.grab = None;
    }

    /// Write the zoomed domains into the bound scales
    pub fn apply(&self, x: &mut TimeScale, y: &mut LinearScale) {
        let (x_min, x_max) = rescaled(&self.x0, self.view.x, self.view.k);
        let (y_min, y_max) = rescaled(&self.y0, self.view.y, self.view.k);
        x.set_domain(x_min, x_max);
        y.set_domain(y_min, y_max);
    }
}

/// Reference range mapped through the inverse view, then the reference inverse
fn rescaled<S: Scale>(reference: &S, offset: f64, k: f64) -> (f64, f64) {
    let (r0, r1) = reference.range_bounds();
    let a = reference.invert((r0 - offset) / k);
    let b = reference.invert((r1 - offset) / k);
    if a <= b { (a, b) } else { (b, a) }
}
