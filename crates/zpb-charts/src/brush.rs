//! Two-dimensional brush (D3 v3 `d3.svg.brush` semantics)
//!
//! The selection is kept in overview pixel space. When an extent is set
//! programmatically the domain values are cached as well, so reading the
//! extent back returns exactly what was set rather than a pixel round trip.
//! Scales are borrowed per call; the brush never owns them.

use crate::chartkit::Scale;

/// Half the hit/draw size of a resize handle, in pixels
const HANDLE_HALF: f64 = 3.0;

// ============================================================================
// EXTENT TYPES
// ============================================================================

/// Brush selection `[[x0, y0], [x1, y1]]` in domain coordinates, `x0 <= x1`, `y0 <= y1`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushExtent {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl BrushExtent {
    pub fn new(min: [f64; 2], max: [f64; 2]) -> Self {
        Self {
            x0: min[0].min(max[0]),
            y0: min[1].min(max[1]),
            x1: min[0].max(max[0]),
            y1: min[1].max(max[1]),
        }
    }

    pub fn as_array(&self) -> [[f64; 2]; 2] {
        [[self.x0, self.y0], [self.x1, self.y1]]
    }

    pub fn x_domain(&self) -> (f64, f64) {
        (self.x0, self.x1)
    }

    pub fn y_domain(&self) -> (f64, f64) {
        (self.y0, self.y1)
    }
}

/// Pixel rectangle with `x0 <= x1` and `y0 <= y1` (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelRect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl PixelRect {
    fn from_corners(a: (f64, f64), b: (f64, f64)) -> Self {
        Self {
            x0: a.0.min(b.0),
            y0: a.1.min(b.1),
            x1: a.0.max(b.0),
            y1: a.1.max(b.1),
        }
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Zero width or zero height
    pub fn is_empty(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }

    fn contains(&self, p: (f64, f64)) -> bool {
        p.0 >= self.x0 && p.0 <= self.x1 && p.1 >= self.y0 && p.1 <= self.y1
    }
}

// ============================================================================
// HANDLES
// ============================================================================

/// Resize handles around the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrushHandle {
    N,
    E,
    S,
    W,
    NW,
    NE,
    SE,
    SW,
}

impl BrushHandle {
    pub const ALL: [BrushHandle; 8] = [
        Self::N,
        Self::E,
        Self::S,
        Self::W,
        Self::NW,
        Self::NE,
        Self::SE,
        Self::SW,
    ];

    pub fn class(&self) -> &'static str {
        match self {
            Self::N => "n",
            Self::E => "e",
            Self::S => "s",
            Self::W => "w",
            Self::NW => "nw",
            Self::NE => "ne",
            Self::SE => "se",
            Self::SW => "sw",
        }
    }

    pub fn cursor(&self) -> &'static str {
        match self {
            Self::N | Self::S => "ns-resize",
            Self::E | Self::W => "ew-resize",
            Self::NW | Self::SE => "nwse-resize",
            Self::NE | Self::SW => "nesw-resize",
        }
    }

    fn north(&self) -> bool {
        matches!(self, Self::N | Self::NW | Self::NE)
    }

    fn south(&self) -> bool {
        matches!(self, Self::S | Self::SW | Self::SE)
    }

    fn west(&self) -> bool {
        matches!(self, Self::W | Self::NW | Self::SW)
    }

    fn east(&self) -> bool {
        matches!(self, Self::E | Self::NE | Self::SE)
    }

    /// Where this handle is drawn for a selection `rect`: the translation of
    /// its group and its hit area relative to that translation
    pub fn placement(&self, rect: PixelRect) -> (f64, f64, PixelRect) {
        let tx = if self.east() { rect.x1 } else { rect.x0 };
        let ty = if self.south() { rect.y1 } else { rect.y0 };
        let (x0, y0, x1, y1) = match self {
            Self::N | Self::S => (0.0, -HANDLE_HALF, rect.width(), HANDLE_HALF),
            Self::E | Self::W => (-HANDLE_HALF, 0.0, HANDLE_HALF, rect.height()),
            _ => (-HANDLE_HALF, -HANDLE_HALF, HANDLE_HALF, HANDLE_HALF),
        };
        (tx, ty, PixelRect { x0, y0, x1, y1 })
    }
}

// ============================================================================
// BRUSH
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragMode {
    /// Fresh selection spanning from `origin` to the pointer
    Select { origin: (f64, f64) },
    /// Translate the whole selection
    Move { grab: (f64, f64), start: PixelRect },
    Resize { handle: BrushHandle, start: PixelRect },
}

#[derive(Debug, Clone, Default)]
pub struct Brush {
    pixels: PixelRect,
    domain: Option<BrushExtent>,
    drag: Option<DragMode>,
}

impl Brush {
    pub fn new() -> Self {
        Self::default()
    }

    /// No selection: zero width or zero height
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn clear(&mut self) {
        self.pixels = PixelRect::default();
        self.domain = None;
    }

    /// Select `extent` (domain coordinates) through the given overview scales
    pub fn set_extent<X: Scale, Y: Scale>(&mut self, extent: BrushExtent, x: &X, y: &Y) {
        self.pixels = PixelRect::from_corners(
            (x.scale(extent.x0), y.scale(extent.y0)),
            (x.scale(extent.x1), y.scale(extent.y1)),
        );
        self.domain = Some(extent);
    }

    /// Current selection in domain coordinates; `None` when empty
    pub fn extent<X: Scale, Y: Scale>(&self, x: &X, y: &Y) -> Option<BrushExtent> {
        if self.is_empty() {
            return None;
        }
        if let Some(domain) = self.domain {
            return Some(domain);
        }
        let p = self.pixels;
        Some(BrushExtent::new(
            [x.invert(p.x0), y.invert(p.y0)],
            [x.invert(p.x1), y.invert(p.y1)],
        ))
    }

    // ========================================================================
    // Gestures
    // ========================================================================

    /// Pointer pressed at `point` (overview-local). Returns whether the
    /// selection changed, which is the case for every fresh selection.
    pub fn begin(&mut self, point: (f64, f64), size: (f64, f64)) -> bool {
        let p = clamp_point(point, size);

        if !self.is_empty() {
            if let Some(handle) = self.hit_handle(p) {
                self.drag = Some(DragMode::Resize {
                    handle,
                    start: self.pixels,
                });
                return false;
            }
            if self.pixels.contains(p) {
                self.drag = Some(DragMode::Move {
                    grab: p,
                    start: self.pixels,
                });
                return false;
            }
        }

        self.drag = Some(DragMode::Select { origin: p });
        self.pixels = PixelRect::from_corners(p, p);
        self.domain = None;
        true
    }

    /// Pointer moved during a gesture. Returns whether the selection changed.
    pub fn drag(&mut self, point: (f64, f64), size: (f64, f64)) -> bool {
        let Some(mode) = self.drag else {
            return false;
        };
        let p = clamp_point(point, size);

        let next = match mode {
            DragMode::Select { origin } => PixelRect::from_corners(origin, p),
            DragMode::Move { grab, start } => {
                let dx = (p.0 - grab.0).clamp(-start.x0, size.0 - start.x1);
                let dy = (p.1 - grab.1).clamp(-start.y0, size.1 - start.y1);
                PixelRect {
                    x0: start.x0 + dx,
                    y0: start.y0 + dy,
                    x1: start.x1 + dx,
                    y1: start.y1 + dy,
                }
            }
            DragMode::Resize { handle, start } => {
                let mut a = (start.x0, start.y0);
                let mut b = (start.x1, start.y1);
                if handle.west() {
                    a.0 = p.0;
                }
                if handle.east() {
                    b.0 = p.0;
                }
                if handle.north() {
                    a.1 = p.1;
                }
                if handle.south() {
                    b.1 = p.1;
                }
                PixelRect::from_corners(a, b)
            }
        };

        if next == self.pixels {
            return false;
        }
        self.pixels = next;
        self.domain = None;
        true
    }

    pub fn end(&mut self) {
        self.drag = None;
    }

    fn hit_handle(&self, p: (f64, f64)) -> Option<BrushHandle> {
        let r = self.pixels;
        let near = |a: f64, b: f64| (a - b).abs() <= HANDLE_HALF;
        let within_x = p.0 >= r.x0 - HANDLE_HALF && p.0 <= r.x1 + HANDLE_HALF;
        let within_y = p.1 >= r.y0 - HANDLE_HALF && p.1 <= r.y1 + HANDLE_HALF;

        let n = within_x && near(p.1, r.y0);
        let s = within_x && near(p.1, r.y1);
        let w = within_y && near(p.0, r.x0);
        let e = within_y && near(p.0, r.x1);

        match (n, s, w, e) {
            (true, _, true, _) => Some(BrushHandle::NW),
            (true, _, _, true) => Some(BrushHandle::NE),
            (_, true, true, _) => Some(BrushHandle::SW),
            (_, true, _, true) => Some(BrushHandle::SE),
            (true, ..) => Some(BrushHandle::N),
            (_, true, ..) => Some(BrushHandle::S),
            (_, _, true, _) => Some(BrushHandle::W),
            (.., true) => Some(BrushHandle::E),
            _ => None,
        }
    }

    /// Selection rectangle in overview pixels
    pub fn rect(&self) -> PixelRect {
        self.pixels
    }
}

fn clamp_point(p: (f64, f64), size: (f64, f64)) -> (f64, f64) {
    (p.0.clamp(0.0, size.0.max(0.0)), p.1.clamp(0.0, size.1.max(0.0)))
}
