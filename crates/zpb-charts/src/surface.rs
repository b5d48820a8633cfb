//! SVG views of the chart
//!
//! Everything here is plain Leptos `view!` markup driven by [`ChartSignals`].
//! A zoom or brush gesture only touches the signals it changed, so axes,
//! line paths and the brush follow without rebuilding the surrounding tree.

use leptos::prelude::*;
use zpb_core::{Accessors, colors};

use crate::{
    ChartMargin,
    brush::{BrushHandle, PixelRect},
    chart::ZoomPanBrushChart,
    chartkit::{Axis, AxisTick},
    layout::{ChartLabels, ChartLayout, PlotFrame},
    plot::PlotScales,
    sync::SyncEffects,
    updater::{JoinedLine, LinePhase},
};

// ============================================================================
// STATE
// ============================================================================

/// Static frame of a constructed chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFrame {
    pub layout: ChartLayout,
    pub labels: ChartLabels,
    pub main_clip: String,
    pub overview_clip: String,
}

impl ChartFrame {
    pub fn of(chart: &ZoomPanBrushChart) -> Self {
        Self {
            layout: *chart.layout(),
            labels: chart.labels().clone(),
            main_clip: chart.clip_id("main"),
            overview_clip: chart.clip_id("overview"),
        }
    }
}

/// Reactive mirror of what a chart draws
#[derive(Debug, Clone, Copy)]
pub struct ChartSignals {
    /// `None` until the chart has been measured and constructed
    pub frame: RwSignal<Option<ChartFrame>>,
    pub main: RwSignal<PlotScales>,
    pub overview: RwSignal<PlotScales>,
    pub brush: RwSignal<PixelRect>,
    pub lines: RwSignal<Vec<JoinedLine>>,
    pub accessors: RwSignal<Accessors>,
}

impl ChartSignals {
    pub fn new() -> Self {
        Self {
            frame: RwSignal::new(None),
            main: RwSignal::new(PlotScales::default()),
            overview: RwSignal::new(PlotScales::default()),
            brush: RwSignal::new(PixelRect::default()),
            lines: RwSignal::new(Vec::new()),
            accessors: RwSignal::new(Accessors::default()),
        }
    }

    /// Publish the whole chart, after construction or a data update
    pub fn publish_all(&self, chart: &ZoomPanBrushChart) {
        let sync = chart.sync();
        self.accessors.set(chart.accessors().clone());
        self.main.set(sync.main().clone());
        self.overview.set(sync.overview().clone());
        self.brush.set(sync.brush().rect());
        self.lines.set(chart.lines().to_vec());

        // Plots read their axis settings once, so the frame goes last
        let frame = ChartFrame::of(chart);
        if self.frame.with_untracked(|current| current.as_ref() != Some(&frame)) {
            self.frame.set(Some(frame));
        }
    }

    /// Publish only what a gesture reported as changed
    pub fn publish(&self, chart: &ZoomPanBrushChart, effects: SyncEffects) {
        let sync = chart.sync();
        if effects.main_axes || effects.main_lines {
            self.main.set(sync.main().clone());
        }
        if effects.overview_axes {
            self.overview.set(sync.overview().clone());
        }
        if effects.brush {
            self.brush.set(sync.brush().rect());
        }
        // A redraw only matters to lines that were still transitioning
        let transitioning = self.lines.with_untracked(|lines| {
            lines.iter().any(|line| line.phase == LinePhase::Transition)
        });
        if effects.main_lines && transitioning {
            self.publish_lines(chart);
        }
    }

    pub fn publish_lines(&self, chart: &ZoomPanBrushChart) {
        self.lines.set(chart.lines().to_vec());
    }
}

impl Default for ChartSignals {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// CHART
// ============================================================================

/// Outer SVG with the main plot, the overview plot and its brush
#[component]
pub fn ChartSurface(frame: ChartFrame, state: ChartSignals) -> impl IntoView {
    let ChartFrame {
        layout,
        labels,
        main_clip,
        overview_clip,
    } = frame;
    let title = labels.title.clone();
    let title_x = layout.main.width / 2.0;
    let title_y = -layout.margin.top / 3.0;
    let overview = layout.overview;

    view! {
        <svg
            class="zoom-pan-brush"
            width=layout.width
            height=layout.height
            viewBox=layout.viewbox()
        >
            <PlotSurface
                class="main"
                frame=layout.main
                margin=layout.margin
                clip_id=main_clip
                labels=labels.clone()
                plot=state.main
                lines=state.lines
                accessors=state.accessors
            >
                <text
                    class="title"
                    x=title_x
                    y=title_y
                    fill=colors::TEXT_PRIMARY
                    font-size="16"
                    style="text-anchor: middle"
                >
                    {title}
                </text>
            </PlotSurface>
            <PlotSurface
                class="overview"
                frame=overview
                margin=layout.margin
                clip_id=overview_clip
                labels=labels
                plot=state.overview
                lines=state.lines
                accessors=state.accessors
            >
                <BrushOverlay width=overview.width height=overview.height rect=state.brush />
            </PlotSurface>
        </svg>
    }
}

// ============================================================================
// PLOT
// ============================================================================

/// One plot: clip path, both axes with their labels, and the line group
#[component]
pub fn PlotSurface(
    class: &'static str,
    frame: PlotFrame,
    margin: ChartMargin,
    clip_id: String,
    labels: ChartLabels,
    #[prop(into)] plot: Signal<PlotScales>,
    #[prop(into)] lines: Signal<Vec<JoinedLine>>,
    #[prop(into)] accessors: Signal<Accessors>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let x_axis = plot.with_untracked(|p| p.x_axis.clone());
    let y_axis = plot.with_untracked(|p| p.y_axis.clone());
    let clip_path = format!("url(#{})", clip_id);
    let x_label = (frame.width / 2.0, frame.height + margin.bottom);
    let y_label = (-frame.height / 2.0, 5.0 - margin.left);

    view! {
        <g class=class transform=frame.transform()>
            <clipPath id=clip_id>
                <rect x="0" y="0" width=frame.width height=frame.height />
            </clipPath>

            <g class="x axis" transform=format!("translate(0,{})", frame.height)>
                <AxisView
                    axis=x_axis
                    ticks=Signal::derive(move || plot.with(PlotScales::x_ticks))
                    domain=Signal::derive(move || plot.with(PlotScales::x_domain_path))
                />
            </g>
            <text
                class="x label"
                x=x_label.0
                y=x_label.1
                fill=colors::TEXT_PRIMARY
                style="text-anchor: middle"
            >
                {labels.x}
            </text>

            <g class="y axis">
                <AxisView
                    axis=y_axis
                    ticks=Signal::derive(move || plot.with(PlotScales::y_ticks))
                    domain=Signal::derive(move || plot.with(PlotScales::y_domain_path))
                />
            </g>
            <text
                class="y label"
                transform="rotate(-90)"
                x=y_label.0
                y=y_label.1
                dy="1em"
                fill=colors::TEXT_PRIMARY
                style="text-anchor: middle"
            >
                {labels.y}
            </text>

            <g class="line-group" clip-path=clip_path>
                <For
                    each=move || lines.get()
                    key=|line| line.id
                    children=move |line: JoinedLine| {
                        view! { <SeriesLine id=line.id lines=lines plot=plot accessors=accessors /> }
                    }
                />
            </g>

            {children.map(|children| children())}
        </g>
    }
}

/// Tick groups and domain path of one axis
#[component]
fn AxisView(
    axis: Axis,
    #[prop(into)] ticks: Signal<Vec<AxisTick>>,
    #[prop(into)] domain: Signal<String>,
) -> impl IntoView {
    let (x2, y2) = axis.tick_end();
    let label = axis.label_placement();
    let anchor = format!("text-anchor: {}", label.anchor);

    view! {
        {move || {
            ticks
                .get()
                .into_iter()
                .map(|tick| {
                    view! {
                        <g class="tick" transform=axis.tick_transform(tick.position)>
                            <line x2=x2 y2=y2 stroke=colors::GRID />
                            <text
                                x=label.x
                                y=label.y
                                dy=label.dy
                                fill=colors::TEXT_MUTED
                                font-size="10"
                                style=anchor.clone()
                            >
                                {tick.label}
                            </text>
                        </g>
                    }
                })
                .collect_view()
        }}
        <path class="domain" d=domain fill="none" stroke=colors::AXIS />
    }
}

/// Path of one joined line, looked up by its id
#[component]
fn SeriesLine(
    id: u64,
    #[prop(into)] lines: Signal<Vec<JoinedLine>>,
    #[prop(into)] plot: Signal<PlotScales>,
    #[prop(into)] accessors: Signal<Accessors>,
) -> impl IntoView {
    let phase = move || {
        lines.with(|lines| {
            lines
                .iter()
                .find(|line| line.id == id)
                .map_or(LinePhase::Exit, |line| line.phase)
        })
    };
    let d = move || {
        lines.with(|lines| {
            lines
                .iter()
                .find(|line| line.id == id)
                .map(|line| plot.with(|p| accessors.with(|a| p.line_path(&line.series, a))))
                .unwrap_or_default()
        })
    };
    let exiting = move || phase() == LinePhase::Exit;

    view! {
        <path
            class=move || if exiting() { "line exit" } else { "line" }
            d=d
            fill="none"
            stroke=move || {
                if exiting() { colors::line_alpha(0.0) } else { colors::LINE.to_string() }
            }
            stroke-width="1.5"
            style=move || phase().css_transition()
        />
    }
}

// ============================================================================
// BRUSH
// ============================================================================

/// Background, selection rectangle and the eight resize handles
#[component]
pub fn BrushOverlay(
    width: f64,
    height: f64,
    #[prop(into)] rect: Signal<PixelRect>,
) -> impl IntoView {
    let display = move || if rect.with(PixelRect::is_empty) { "none" } else { "inline" };

    view! {
        <g class="x brush">
            <rect
                class="background"
                x="0"
                y="0"
                width=width
                height=height
                fill="transparent"
                style="cursor: crosshair"
            />
            <rect
                class="extent"
                x=move || rect.get().x0
                y=move || rect.get().y0
                width=move || rect.get().width()
                height=move || rect.get().height()
                fill=colors::BRUSH_FILL
                fill-opacity="0.3"
                stroke="#fff"
                shape-rendering="crispEdges"
                style=move || format!("cursor: move; display: {}", display())
            />
            {BrushHandle::ALL
                .into_iter()
                .map(|handle| {
                    let placement = move || handle.placement(rect.get());
                    view! {
                        <g
                            class=format!("resize {}", handle.class())
                            transform=move || {
                                let (tx, ty, _) = placement();
                                format!("translate({},{})", tx, ty)
                            }
                            style=move || {
                                format!("cursor: {}; display: {}", handle.cursor(), display())
                            }
                        >
                            <rect
                                x=move || placement().2.x0
                                y=move || placement().2.y0
                                width=move || placement().2.width()
                                height=move || placement().2.height()
                                fill="transparent"
                            />
                        </g>
                    }
                })
                .collect_view()}
        </g>
    }
}
