//! The zoom/pan/brush chart
//!
//! [`ZoomPanBrushChart`] is the DOM-free heart of the widget: it lays out the
//! main and overview plots, owns the [`SyncController`] and the line join,
//! and turns pointer input into gestures. Every mutating call reports the
//! [`SyncEffects`] a renderer has to pick up.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{
    ChartMargin,
    brush::BrushExtent,
    gesture::PointerTracker,
    layout::{ChartLabels, ChartLayout},
    plot::PlotScales,
    sync::{ChartEvent, SyncController, SyncEffects},
    updater::{JoinedLine, LineJoin},
};
use zpb_core::{Accessors, Dataset, dataset_extent, domain_of};

pub const DEFAULT_WIDTH: f64 = 960.0;
pub const DEFAULT_HEIGHT: f64 = 500.0;
pub const DEFAULT_BRUSH_HEIGHT: f64 = 200.0;

/// Space kept free below the chart when clamping to the viewport
const VIEWPORT_PADDING: f64 = 10.0;

// Only keeps `clipPath` ids unique per page; chart state stays per instance
static NEXT_CHART_ID: AtomicUsize = AtomicUsize::new(0);

// ============================================================================
// HOST
// ============================================================================

/// Container the chart is sized against
pub trait HostElement {
    /// Measured `(width, height)` of the container, if known
    fn measured_size(&self) -> Option<(f64, f64)>;

    /// Usable height of the viewport, if known
    fn viewport_height(&self) -> Option<f64>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChartError {
    #[error("no parent container defined")]
    MissingParent,
}
// ============================================================================
// CONFIGURATION
// ============================================================================

/// Sizing and labelling of a chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    /// Outer width; host width or [`DEFAULT_WIDTH`] when unset
    pub width: Option<f64>,
    /// Outer height; host height or [`DEFAULT_HEIGHT`] when unset
    pub height: Option<f64>,
    /// Pixels reserved at the bottom for the overview panel
    pub brush_height: f64,
    pub margin: ChartMargin,
    pub labels: ChartLabels,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            brush_height: DEFAULT_BRUSH_HEIGHT,
            margin: ChartMargin::default(),
            labels: ChartLabels::default(),
        }
    }
}

impl ChartConfig {
    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    pub fn brush_height(mut self, brush_height: f64) -> Self {
        self.brush_height = brush_height;
        self
    }

    pub fn margin(mut self, margin: ChartMargin) -> Self {
        self.margin = margin;
        self
    }

    pub fn labels(mut self, labels: ChartLabels) -> Self {
        self.labels = labels;
        self
    }
}

/// Construction options
#[derive(Debug, Clone)]
pub struct ChartOptions<H> {
    pub parent: Option<H>,
    pub config: ChartConfig,
    pub data: Dataset,
    pub accessors: Accessors,
}

impl<H> Default for ChartOptions<H> {
    fn default() -> Self {
        Self {
            parent: None,
            config: ChartConfig::default(),
            data: Dataset::empty(),
            accessors: Accessors::default(),
        }
    }
}

impl<H> ChartOptions<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parent(mut self, parent: H) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    pub fn data(mut self, data: Dataset) -> Self {
        self.data = data;
        self
    }

    pub fn x_accessor(mut self, key: &str) -> Self {
        self.accessors.rebind(Some(key), None);
        self
    }

    pub fn y_accessor(mut self, key: &str) -> Self {
        self.accessors.rebind(None, Some(key));
        self
    }
}

// ============================================================================
// CHART
// ============================================================================

pub struct ZoomPanBrushChart {
    id: usize,
    layout: ChartLayout,
    labels: ChartLabels,
    accessors: Accessors,
    data: Dataset,
    sync: SyncController,
    lines: LineJoin,
    pointer: PointerTracker,
}

impl ZoomPanBrushChart {
    /// Lay out the chart against `options.parent` and bind the initial data
    pub fn new<H: HostElement>(options: ChartOptions<H>) -> Result<Self, ChartError> {
        let ChartOptions {
            parent,
            config,
            data,
            accessors,
        } = options;
        let host = parent.ok_or(ChartError::MissingParent)?;

        let (width, height) = resolve_size(&host, &config);
        let layout = ChartLayout::compute(width, height, config.brush_height, config.margin);

        let x = domain_of(dataset_extent(&data, &accessors.x));
        let y = domain_of(dataset_extent(&data, &accessors.y));
        let sync = SyncController::new(
            PlotScales::new(layout.main.width, layout.main.height, x, y),
            PlotScales::new(layout.overview.width, layout.overview.height, x, y),
        );

        let id = NEXT_CHART_ID.fetch_add(1, Ordering::Relaxed);
        tracing::info!(
            id,
            width,
            height,
            series = data.len(),
            "zoom/pan/brush chart constructed"
        );

        Ok(Self {
            id,
            layout,
            labels: config.labels,
            lines: LineJoin::from_dataset(&data),
            accessors,
            data,
            sync,
            pointer: PointerTracker::new(),
        })
    }

    /// Public update entry point: rebind `data`, optionally switching field keys.
    ///
    /// Both plots are reset to the full extent of the new data and the brush
    /// is cleared. Lines transition to their new series.
    pub fn update(&mut self, data: Dataset, x_key: Option<&str>, y_key: Option<&str>) {
        self.accessors.rebind(x_key, y_key);
        let x = dataset_extent(&data, &self.accessors.x);
        let y = dataset_extent(&data, &self.accessors.y);

        tracing::info!(
            series = data.len(),
            x_accessor = %self.accessors.x,
            y_accessor = %self.accessors.y,
            "chart data updated"
        );

        let effects = self.sync.reset_domains(x, y);
        self.apply(effects);

        self.lines.update(&data);
        self.data = data;
    }

    /// Feed a gesture to the controller and apply what it reports
    pub fn dispatch(&mut self, event: ChartEvent) -> SyncEffects {
        let effects = self.sync.handle(event);
        self.apply(effects);
        effects
    }

    // ========================================================================
    // Pointer input (chart-relative pixels)
    // ========================================================================

    pub fn pointer_down(&mut self, point: (f64, f64)) -> Option<SyncEffects> {
        let event = self.pointer.pointer_down(&self.layout, point)?;
        Some(self.dispatch(event))
    }

    pub fn pointer_move(&mut self, point: (f64, f64)) -> Option<SyncEffects> {
        let event = self.pointer.pointer_move(&self.layout, point)?;
        Some(self.dispatch(event))
    }

    pub fn pointer_up(&mut self) -> Option<SyncEffects> {
        let event = self.pointer.pointer_up()?;
        Some(self.dispatch(event))
    }

    /// `None` when the pointer is outside the main plot
    pub fn wheel(&mut self, point: (f64, f64), delta_y: f64, delta_mode: u32) -> Option<SyncEffects> {
        let event = self.pointer.wheel(&self.layout, point, delta_y, delta_mode)?;
        Some(self.dispatch(event))
    }

    /// Set the brush selection programmatically; `None` zooms to fit
    pub fn select(&mut self, extent: Option<BrushExtent>) -> SyncEffects {
        let effects = self.sync.select(extent);
        self.apply(effects);
        effects
    }

    /// Finish running line transitions and remove exited lines
    pub fn settle_transitions(&mut self) {
        self.lines.settle();
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn id(&self) -> usize {
        self.id
    }

    /// `clipPath` id of the `main` or `overview` plot
    pub fn clip_id(&self, plot: &str) -> String {
        format!("clip-{}-{}", self.id, plot)
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    pub fn labels(&self) -> &ChartLabels {
        &self.labels
    }

    pub fn accessors(&self) -> &Accessors {
        &self.accessors
    }

    pub fn data(&self) -> &Dataset {
        &self.data
    }

    pub fn sync(&self) -> &SyncController {
        &self.sync
    }

    /// Joined lines, drawn by both plots
    pub fn lines(&self) -> &[JoinedLine] {
        self.lines.lines()
    }

    /// `(x, y)` domains of the main plot
    pub fn main_domain(&self) -> ((f64, f64), (f64, f64)) {
        let main = self.sync.main();
        (main.x_domain(), main.y_domain())
    }

    /// `(x, y)` domains of the overview plot
    pub fn overview_domain(&self) -> ((f64, f64), (f64, f64)) {
        let overview = self.sync.overview();
        (overview.x_domain(), overview.y_domain())
    }

    pub fn brush_extent(&self) -> Option<BrushExtent> {
        self.sync.brush_extent()
    }

    /// Live lines (exiting lines excluded)
    pub fn line_count(&self) -> usize {
        self.lines.live_count()
    }

    fn apply(&mut self, effects: SyncEffects) {
        if effects.main_lines {
            self.lines.redraw();
        }
    }
}

/// Configured size, else the host's measured size, else the defaults.
/// Height never exceeds the viewport.
fn resolve_size<H: HostElement>(host: &H, config: &ChartConfig) -> (f64, f64) {
    let measured = host.measured_size();
    let measured_width = measured.map(|(w, _)| w).filter(|w| *w > 0.0);
    let measured_height = measured.map(|(_, h)| h).filter(|h| *h > 0.0);

    if (config.width.is_none() && measured_width.is_none())
        || (config.height.is_none() && measured_height.is_none())
    {
        tracing::warn!("host reports no size, falling back to defaults");
    }

    let width = config.width.or(measured_width).unwrap_or(DEFAULT_WIDTH);
    let mut height = config.height.or(measured_height).unwrap_or(DEFAULT_HEIGHT);
    if let Some(viewport) = host.viewport_height() {
        height = height.min(viewport - VIEWPORT_PADDING);
    }
    (width, height)
}
