//! Pointer recognizer: raw chart-relative pointer input to [`ChartEvent`]s
//!
//! A press over the main plot starts a pan, a press over the overview starts
//! a brush gesture. The plot that received the press keeps the pointer until
//! release, even when it leaves the plot area.

use crate::{
    layout::ChartLayout,
    sync::{BrushGesture, ChartEvent, ZoomGesture},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Main,
    Overview,
}

#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    active: Option<PointerTarget>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plot holding the pointer, if a gesture is in progress
    pub fn active(&self) -> Option<PointerTarget> {
        self.active
    }

    pub fn pointer_down(&mut self, layout: &ChartLayout, point: (f64, f64)) -> Option<ChartEvent> {
        if layout.overview.contains(point) {
            self.active = Some(PointerTarget::Overview);
            Some(ChartEvent::Brush(BrushGesture::Start(
                layout.overview.to_local(point),
            )))
        } else if layout.main.contains(point) {
            self.active = Some(PointerTarget::Main);
            Some(ChartEvent::Zoom(ZoomGesture::PanStart(
                layout.main.to_local(point),
            )))
        } else {
            None
        }
    }

    pub fn pointer_move(&mut self, layout: &ChartLayout, point: (f64, f64)) -> Option<ChartEvent> {
        match self.active? {
            PointerTarget::Main => Some(ChartEvent::Zoom(ZoomGesture::PanMove(
                layout.main.to_local(point),
            ))),
            PointerTarget::Overview => Some(ChartEvent::Brush(BrushGesture::Move(
                layout.overview.to_local(point),
            ))),
        }
    }

    pub fn pointer_up(&mut self) -> Option<ChartEvent> {
        match self.active.take()? {
            PointerTarget::Main => Some(ChartEvent::Zoom(ZoomGesture::PanEnd)),
            PointerTarget::Overview => Some(ChartEvent::Brush(BrushGesture::End)),
        }
    }

    /// Wheel input zooms only when over the main plot
    pub fn wheel(
        &self,
        layout: &ChartLayout,
        point: (f64, f64),
        delta_y: f64,
        delta_mode: u32,
    ) -> Option<ChartEvent> {
        if !layout.main.contains(point) {
            return None;
        }
        Some(ChartEvent::Zoom(ZoomGesture::Wheel {
            point: layout.main.to_local(point),
            delta_y,
            delta_mode,
        }))
    }
}
