//! Zoom / brush synchronization
//!
//! [`SyncController`] owns the scales of both plots, the zoom behaviour, the
//! brush and the re-entrancy flag. It is a plain state machine: every gesture
//! or programmatic domain change goes in, and a [`SyncEffects`] describing
//! what must be redrawn comes out. It never touches the DOM.
//!
//! The flag marks a zoom event fired by [`SyncController::reset_domains`]
//! rather than by the user. The zoom handler consumes it and skips the line
//! redraw, since the caller rebinds new data right after.

use crate::{
    brush::{Brush, BrushExtent},
    plot::PlotScales,
    zoom::ZoomBehavior,
};
use zpb_core::{Extent, domain_of};

// ============================================================================
// EVENTS AND EFFECTS
// ============================================================================

/// What drove the last state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncPhase {
    #[default]
    Idle,
    ZoomDriven,
    BrushDriven,
    ProgrammaticUpdate,
}

/// Redraw instructions produced by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyncEffects {
    pub phase: SyncPhase,
    pub main_axes: bool,
    pub main_lines: bool,
    pub overview_axes: bool,
    pub brush: bool,
}

impl SyncEffects {
    pub fn none() -> Self {
        Self::default()
    }

    /// Union of two effect sets; the later non-idle phase wins
    pub fn merge(self, other: SyncEffects) -> Self {
        Self {
            phase: if other.phase == SyncPhase::Idle {
                self.phase
            } else {
                other.phase
            },
            main_axes: self.main_axes || other.main_axes,
            main_lines: self.main_lines || other.main_lines,
            overview_axes: self.overview_axes || other.overview_axes,
            brush: self.brush || other.brush,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.main_axes || self.main_lines || self.overview_axes || self.brush)
    }
}

/// Gesture over the main plot, in main-plot pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomGesture {
    Wheel {
        point: (f64, f64),
        delta_y: f64,
        delta_mode: u32,
    },
    PanStart((f64, f64)),
    PanMove((f64, f64)),
    PanEnd,
}

/// Gesture over the overview plot, in overview-plot pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BrushGesture {
    Start((f64, f64)),
    Move((f64, f64)),
    End,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartEvent {
    Zoom(ZoomGesture),
    Brush(BrushGesture),
}

// ============================================================================
// CONTROLLER
// ============================================================================

#[derive(Debug, Clone)]
pub struct SyncController {
    main: PlotScales,
    overview: PlotScales,
    zoom: ZoomBehavior,
    brush: Brush,
    updating: bool,
    phase: SyncPhase,
}

impl SyncController {
    pub fn new(main: PlotScales, overview: PlotScales) -> Self {
        let zoom = ZoomBehavior::new(&main.x, &main.y);
        Self {
            main,
            overview,
            zoom,
            brush: Brush::new(),
            updating: false,
            phase: SyncPhase::Idle,
        }
    }

    pub fn main(&self) -> &PlotScales {
        &self.main
    }

    pub fn overview(&self) -> &PlotScales {
        &self.overview
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn zoom(&self) -> &ZoomBehavior {
        &self.zoom
    }

    /// What drove the most recent transition
    pub fn phase(&self) -> SyncPhase {
        self.phase
    }

    /// Whether a programmatic zoom event is pending
    pub fn is_updating(&self) -> bool {
        self.updating
    }

    /// Current brush selection in overview-domain coordinates
    pub fn brush_extent(&self) -> Option<BrushExtent> {
        self.brush.extent(&self.overview.x, &self.overview.y)
    }

    /// Feed one gesture through the state machine
    pub fn handle(&mut self, event: ChartEvent) -> SyncEffects {
        match event {
            ChartEvent::Zoom(gesture) => {
                let changed = match gesture {
                    ZoomGesture::Wheel {
                        point,
                        delta_y,
                        delta_mode,
                    } => self.zoom.wheel(point, delta_y, delta_mode),
                    ZoomGesture::PanStart(point) => {
                        self.zoom.pan_start(point);
                        false
                    }
                    ZoomGesture::PanMove(point) => self.zoom.pan_move(point),
                    ZoomGesture::PanEnd => {
                        self.zoom.pan_end();
                        false
                    }
                };
                if !changed {
                    return SyncEffects::none();
                }
                self.zoom.apply(&mut self.main.x, &mut self.main.y);
                self.on_zoom()
            }
            ChartEvent::Brush(gesture) => {
                let size = self.overview.size();
                let changed = match gesture {
                    BrushGesture::Start(point) => self.brush.begin(point, size),
                    BrushGesture::Move(point) => self.brush.drag(point, size),
                    BrushGesture::End => {
                        self.brush.end();
                        false
                    }
                };
                if !changed {
                    return SyncEffects::none();
                }
                self.on_brush()
            }
        }
    }

    /// Zoom handler: mirror the main domains into the brush
    pub fn on_zoom(&mut self) -> SyncEffects {
        let mut effects = SyncEffects {
            phase: SyncPhase::ZoomDriven,
            main_axes: true,
            brush: true,
            ..SyncEffects::none()
        };

        let (x_min, x_max) = self.main.x_domain();
        let (y_min, y_max) = self.main.y_domain();
        let (full_x, full_y) = (self.overview.x_domain(), self.overview.y_domain());

        // Bounds taken as-is: an undefined domain fails both checks
        let full_x = Extent {
            min: full_x.0,
            max: full_x.1,
        };
        let full_y = Extent {
            min: full_y.0,
            max: full_y.1,
        };

        if full_x.covers(x_min, x_max) && full_y.covers(y_min, y_max) {
            self.brush.set_extent(
                BrushExtent::new([x_min, y_min], [x_max, y_max]),
                &self.overview.x,
                &self.overview.y,
            );
        } else {
            self.brush.clear();
        }

        if self.updating {
            self.updating = false;
            self.brush.clear();
            effects.phase = SyncPhase::ProgrammaticUpdate;
        } else {
            effects.main_lines = true;
        }

        self.phase = effects.phase;
        tracing::debug!(
            phase = ?effects.phase,
            brush_empty = self.brush.is_empty(),
            "zoom handled"
        );
        effects
    }

    /// Brush handler: focus the main plot on the selection
    pub fn on_brush(&mut self) -> SyncEffects {
        let (x, y) = match self.brush_extent() {
            Some(extent) => (extent.x_domain(), extent.y_domain()),
            None => (self.overview.x_domain(), self.overview.y_domain()),
        };

        self.main.set_domains(x, y);
        self.zoom.rebind(&self.main.x, &self.main.y);

        self.phase = SyncPhase::BrushDriven;
        tracing::debug!(x = ?x, y = ?y, "brush handled");
        SyncEffects {
            phase: SyncPhase::BrushDriven,
            main_axes: true,
            main_lines: true,
            brush: true,
            ..SyncEffects::none()
        }
    }

    /// Reset both plots to new full extents and fire the synthetic zoom event.
    ///
    /// Overview domains are set before main domains, and both before the zoom
    /// event runs. The caller rebinds line data afterwards.
    pub fn reset_domains(&mut self, x: Option<Extent>, y: Option<Extent>) -> SyncEffects {
        self.updating = true;

        let (x, y) = (domain_of(x), domain_of(y));
        self.overview.set_domains(x, y);
        let effects = SyncEffects {
            overview_axes: true,
            ..SyncEffects::none()
        };

        self.main.set_domains(x, y);
        self.zoom.rebind(&self.main.x, &self.main.y);

        effects.merge(self.on_zoom())
    }

    /// Programmatic brush selection; `None` clears it. Runs the brush handler.
    pub fn select(&mut self, extent: Option<BrushExtent>) -> SyncEffects {
        match extent {
            Some(extent) => self
                .brush
                .set_extent(extent, &self.overview.x, &self.overview.y),
            None => self.brush.clear(),
        }
        self.on_brush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> SyncController {
        SyncController::new(
            PlotScales::new(100.0, 100.0, (0.0, 10.0), (0.0, 5.0)),
            PlotScales::new(100.0, 50.0, (0.0, 10.0), (0.0, 5.0)),
        )
    }

    fn wheel(point: (f64, f64), delta_y: f64) -> ChartEvent {
        ChartEvent::Zoom(ZoomGesture::Wheel {
            point,
            delta_y,
            delta_mode: 0,
        })
    }

    #[test]
    fn test_zoom_inside_extent_tracks_brush() {
        let mut sync = controller();
        let effects = sync.handle(wheel((50.0, 50.0), -500.0));

        assert_eq!(effects.phase, SyncPhase::ZoomDriven);
        assert!(effects.main_lines && effects.main_axes && effects.brush);
        assert!(!effects.overview_axes);

        assert_eq!(sync.main().x_domain(), (2.5, 7.5));
        assert_eq!(sync.main().y_domain(), (1.25, 3.75));
        assert_eq!(
            sync.brush_extent().map(|e| e.as_array()),
            Some([[2.5, 1.25], [7.5, 3.75]])
        );
    }

    #[test]
    fn test_zoom_outside_extent_clears_brush() {
        let mut sync = controller();
        sync.handle(wheel((50.0, 50.0), -500.0));
        assert!(sync.brush_extent().is_some());

        // Zooming out past k = 1 exceeds the full extent
        sync.handle(wheel((50.0, 50.0), 1000.0));
        assert!(sync.brush().is_empty());
    }

    #[test]
    fn test_pan_outside_extent_clears_brush() {
        let mut sync = controller();
        sync.handle(ChartEvent::Zoom(ZoomGesture::PanStart((10.0, 10.0))));
        let effects = sync.handle(ChartEvent::Zoom(ZoomGesture::PanMove((30.0, 10.0))));
        sync.handle(ChartEvent::Zoom(ZoomGesture::PanEnd));

        assert!(effects.main_lines);
        assert_eq!(sync.main().x_domain(), (-2.0, 8.0));
        assert!(sync.brush().is_empty());
    }

    #[test]
    fn test_pan_start_alone_has_no_effect() {
        let mut sync = controller();
        let effects = sync.handle(ChartEvent::Zoom(ZoomGesture::PanStart((10.0, 10.0))));
        assert!(effects.is_empty());
        assert_eq!(effects.phase, SyncPhase::Idle);
    }

    #[test]
    fn test_brush_drag_sets_main_domain() {
        let mut sync = controller();
        sync.handle(ChartEvent::Brush(BrushGesture::Start((20.0, 40.0))));
        let effects = sync.handle(ChartEvent::Brush(BrushGesture::Move((60.0, 10.0))));
        sync.handle(ChartEvent::Brush(BrushGesture::End));

        assert_eq!(effects.phase, SyncPhase::BrushDriven);
        assert_eq!(sync.phase(), SyncPhase::BrushDriven);
        assert!(effects.main_lines && effects.main_axes);
        assert_eq!(sync.main().x_domain(), (2.0, 6.0));
        assert_eq!(sync.main().y_domain(), (1.0, 4.0));

        // The zoom reference follows the brushed domains
        assert_eq!(sync.zoom().transform().k, 1.0);
        sync.handle(wheel((50.0, 50.0), -500.0));
        assert_eq!(sync.main().x_domain(), (3.0, 5.0));
    }

    #[test]
    fn test_select_round_trip() {
        let mut sync = controller();
        let extent = BrushExtent::new([1.3, 0.7], [8.1, 4.4]);
        sync.select(Some(extent));

        assert_eq!(sync.main().x_domain(), (1.3, 8.1));
        assert_eq!(sync.main().y_domain(), (0.7, 4.4));

        sync.select(None);
        assert_eq!(sync.main().x_domain(), (0.0, 10.0));
        assert_eq!(sync.main().y_domain(), (0.0, 5.0));
    }

    #[test]
    fn test_background_click_zooms_to_fit() {
        let mut sync = controller();
        sync.select(Some(BrushExtent::new([1.0, 1.0], [2.0, 2.0])));

        sync.handle(ChartEvent::Brush(BrushGesture::Start((90.0, 5.0))));
        sync.handle(ChartEvent::Brush(BrushGesture::End));

        assert!(sync.brush().is_empty());
        assert_eq!(sync.main().x_domain(), (0.0, 10.0));
    }

    #[test]
    fn test_reset_domains_consumes_flag_and_clears_brush() {
        let mut sync = controller();
        sync.select(Some(BrushExtent::new([1.0, 1.0], [2.0, 2.0])));

        let effects = sync.reset_domains(Some(Extent::new(0.0, 20.0)), Some(Extent::new(0.0, 8.0)));

        assert_eq!(effects.phase, SyncPhase::ProgrammaticUpdate);
        assert!(effects.overview_axes && effects.main_axes && effects.brush);
        assert!(!effects.main_lines);
        assert!(!sync.is_updating());
        assert_eq!(sync.phase(), SyncPhase::ProgrammaticUpdate);

        assert_eq!(sync.main().x_domain(), (0.0, 20.0));
        assert_eq!(sync.main().y_domain(), (0.0, 8.0));
        assert_eq!(sync.overview().x_domain(), (0.0, 20.0));
        assert_eq!(sync.overview().y_domain(), (0.0, 8.0));
        assert!(sync.brush().is_empty());
        assert_eq!(sync.zoom().transform().k, 1.0);

        // The next user zoom redraws lines again
        let effects = sync.handle(wheel((50.0, 50.0), -500.0));
        assert!(effects.main_lines);
    }

    #[test]
    fn test_undefined_extents_do_not_panic() {
        let mut sync = controller();
        let effects = sync.reset_domains(None, None);

        assert_eq!(effects.phase, SyncPhase::ProgrammaticUpdate);
        assert!(sync.main().x_domain().0.is_nan());
        assert!(sync.brush().is_empty());

        sync.handle(wheel((50.0, 50.0), -500.0));
        assert!(sync.brush().is_empty());
        sync.select(None);
        assert!(sync.main().y_domain().1.is_nan());
    }

    const T0: f64 = 1.7e12;
    const DAY: f64 = 86_400_000.0;

    fn timestamp_controller() -> SyncController {
        let x = (T0, T0 + 30.0 * DAY);
        let y = (10.0, 250.0);
        SyncController::new(
            PlotScales::new(850.0, 220.0, x, y),
            PlotScales::new(850.0, 150.0, x, y),
        )
    }

    /// The main domain when it lies inside the full extent, else nothing
    fn mirrored_brush(sync: &SyncController) -> Option<BrushExtent> {
        let (x, y) = (sync.main().x_domain(), sync.main().y_domain());
        let (full_x, full_y) = (sync.overview().x_domain(), sync.overview().y_domain());
        let inside = Extent::new(full_x.0, full_x.1).covers(x.0, x.1)
            && Extent::new(full_y.0, full_y.1).covers(y.0, y.1);
        inside.then(|| BrushExtent::new([x.0, y.0], [x.1, y.1]))
    }

    fn wheel_at(point: (f64, f64), delta_y: f64) -> ZoomGesture {
        ZoomGesture::Wheel {
            point,
            delta_y,
            delta_mode: 0,
        }
    }

    fn drag(from: (f64, f64), to: (f64, f64)) -> [ZoomGesture; 3] {
        [
            ZoomGesture::PanStart(from),
            ZoomGesture::PanMove(to),
            ZoomGesture::PanEnd,
        ]
    }

    #[test]
    fn test_brush_mirrors_zoom_on_timestamps() {
        let center = (425.0, 110.0);
        let cases: Vec<(&str, Vec<ZoomGesture>, bool)> = vec![
            ("zoom in at center", vec![wheel_at(center, -500.0)], true),
            (
                "zoom in then nudge",
                [vec![wheel_at(center, -500.0)], drag((400.0, 100.0), (380.0, 95.0)).to_vec()].concat(),
                true,
            ),
            (
                "zoom in twice off center",
                vec![wheel_at((100.0, 50.0), -500.0), wheel_at((700.0, 200.0), -250.0)],
                true,
            ),
            ("pan at full extent", drag((400.0, 100.0), (420.0, 100.0)).to_vec(), false),
            ("zoom out", vec![wheel_at(center, 500.0)], false),
            (
                "zoom in then pan past the end",
                [vec![wheel_at(center, -500.0)], drag((400.0, 100.0), (-500.0, 100.0)).to_vec()].concat(),
                false,
            ),
        ];

        for (name, gestures, inside) in cases {
            let mut sync = timestamp_controller();
            for gesture in gestures {
                sync.handle(ChartEvent::Zoom(gesture));
            }

            assert_eq!(sync.brush_extent(), mirrored_brush(&sync), "{name}");
            assert_eq!(sync.brush_extent().is_some(), inside, "{name}");
            assert_eq!(sync.brush().is_empty(), !inside, "{name}");
        }
    }

    #[test]
    fn test_brush_zoom_brush_round_trip_on_timestamps() {
        let mut sync = timestamp_controller();

        let selected = BrushExtent::new([T0 + 3.0 * DAY, 40.0], [T0 + 12.0 * DAY, 200.0]);
        sync.select(Some(selected));
        assert_eq!(sync.main().x_domain(), selected.x_domain());
        assert_eq!(sync.main().y_domain(), selected.y_domain());

        sync.handle(wheel((425.0, 110.0), -250.0));
        let zoomed = sync.brush_extent().unwrap();
        assert_eq!(zoomed.x_domain(), sync.main().x_domain());
        assert_eq!(zoomed.y_domain(), sync.main().y_domain());
        assert!(zoomed.x0 > selected.x0 && zoomed.x1 < selected.x1);

        sync.select(Some(zoomed));
        assert_eq!(sync.main().x_domain(), zoomed.x_domain());
        assert_eq!(sync.main().y_domain(), zoomed.y_domain());
        assert_eq!(sync.brush_extent(), Some(zoomed));

        sync.handle(wheel((425.0, 110.0), 2000.0));
        assert_eq!(sync.brush_extent(), None);

        sync.select(None);
        assert_eq!(sync.main().x_domain(), (T0, T0 + 30.0 * DAY));
        assert_eq!(sync.main().y_domain(), (10.0, 250.0));
    }

    #[test]
    fn test_non_finite_extents_keep_brush_empty() {
        let mut sync = timestamp_controller();
        sync.reset_domains(
            Some(Extent::new(T0, T0 + DAY)),
            Some(Extent::new(-1e308, 1e308)),
        );

        sync.handle(wheel((425.0, 110.0), -500.0));
        for gesture in drag((400.0, 100.0), (380.0, 90.0)) {
            sync.handle(ChartEvent::Zoom(gesture));
        }
        assert_eq!(sync.brush_extent(), None);

        sync.reset_domains(None, Some(Extent::new(0.0, f64::INFINITY)));
        sync.handle(wheel((425.0, 110.0), -500.0));
        assert_eq!(sync.brush_extent(), None);

        sync.handle(ChartEvent::Brush(BrushGesture::Start((10.0, 10.0))));
        sync.handle(ChartEvent::Brush(BrushGesture::Move((200.0, 100.0))));
        sync.handle(ChartEvent::Brush(BrushGesture::End));
        assert!(sync.main().x_domain().0.is_nan());
    }

    #[test]
    fn test_merge_effects() {
        let a = SyncEffects {
            overview_axes: true,
            ..SyncEffects::none()
        };
        let b = SyncEffects {
            phase: SyncPhase::ZoomDriven,
            brush: true,
            ..SyncEffects::none()
        };
        let merged = a.merge(b);
        assert_eq!(merged.phase, SyncPhase::ZoomDriven);
        assert!(merged.overview_axes && merged.brush);
        assert_eq!(merged.merge(SyncEffects::none()).phase, SyncPhase::ZoomDriven);
    }
}
