//! Browser integration: DOM host and the `ZoomPanBrush` Leptos component

use std::time::Duration;

use leptos::{html, prelude::*};
use zpb_core::Dataset;

use crate::{
    chart::{ChartConfig, ChartOptions, HostElement, ZoomPanBrushChart},
    surface::{ChartSignals, ChartSurface},
    sync::SyncEffects,
    updater::TRANSITION_MS,
};

impl HostElement for web_sys::Element {
    fn measured_size(&self) -> Option<(f64, f64)> {
        let rect = self.get_bounding_client_rect();
        Some((rect.width(), rect.height()))
    }

    fn viewport_height(&self) -> Option<f64> {
        let root = web_sys::window()?.document()?.document_element()?;
        Some(root.client_height() as f64)
    }
}

type ChartSlot = StoredValue<Option<ZoomPanBrushChart>>;

/// Run a gesture against the chart and publish what it changed
fn drive(
    chart: ChartSlot,
    state: ChartSignals,
    gesture: impl FnOnce(&mut ZoomPanBrushChart) -> Option<SyncEffects>,
) -> Option<SyncEffects> {
    chart
        .try_update_value(|slot| {
            let chart = slot.as_mut()?;
            let effects = gesture(chart)?;
            state.publish(chart, effects);
            Some(effects)
        })
        .flatten()
}

/// Zoom/pan/brush chart bound to reactive data.
///
/// The chart is built on first run and afterwards every change of `data` or
/// of an accessor goes through its update entry point.
#[component]
pub fn ZoomPanBrush(
    #[prop(into)] data: Signal<Dataset>,
    #[prop(optional, into)] x_accessor: Option<Signal<String>>,
    #[prop(optional, into)] y_accessor: Option<Signal<String>>,
    #[prop(optional)] config: Option<ChartConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let container = NodeRef::<html::Div>::new();
    let chart: ChartSlot = StoredValue::new(None);
    let state = ChartSignals::new();

    Effect::new(move |_| {
        let data = data.get();
        let x_key = x_accessor.map(|key| key.get());
        let y_key = y_accessor.map(|key| key.get());
        let Some(div) = container.get() else {
            return;
        };

        chart.update_value(|slot| {
            match slot {
                Some(chart) => chart.update(data, x_key.as_deref(), y_key.as_deref()),
                None => {
                    let mut options = ChartOptions::new()
                        .parent(web_sys::Element::from(div))
                        .config(config.clone())
                        .data(data);
                    if let Some(key) = &x_key {
                        options = options.x_accessor(key);
                    }
                    if let Some(key) = &y_key {
                        options = options.y_accessor(key);
                    }
                    match ZoomPanBrushChart::new(options) {
                        Ok(chart) => *slot = Some(chart),
                        Err(err) => tracing::error!(%err, "failed to construct chart"),
                    }
                }
            }
            if let Some(chart) = slot {
                state.publish_all(chart);
            }
        });

        set_timeout(
            move || {
                chart.try_update_value(|slot| {
                    if let Some(chart) = slot {
                        chart.settle_transitions();
                        state.publish_lines(chart);
                    }
                });
            },
            Duration::from_millis(TRANSITION_MS as u64),
        );
    });

    // Client coordinates to chart-relative pixels
    let local_point = move |ev: &web_sys::MouseEvent| {
        let rect = container.get_untracked()?.get_bounding_client_rect();
        Some((
            ev.client_x() as f64 - rect.left(),
            ev.client_y() as f64 - rect.top(),
        ))
    };

    let on_wheel = move |ev: web_sys::WheelEvent| {
        let Some(point) = local_point(&ev) else {
            return;
        };
        let zoomed = drive(chart, state, |chart| {
            chart.wheel(point, ev.delta_y(), ev.delta_mode())
        });
        if zoomed.is_some() {
            ev.prevent_default();
        }
    };

    let on_mouse_down = move |ev: web_sys::MouseEvent| {
        let Some(point) = local_point(&ev) else {
            return;
        };
        ev.prevent_default();
        drive(chart, state, |chart| chart.pointer_down(point));
    };

    let on_mouse_move = move |ev: web_sys::MouseEvent| {
        if let Some(point) = local_point(&ev) {
            drive(chart, state, |chart| chart.pointer_move(point));
        }
    };

    let on_release = move |_: web_sys::MouseEvent| {
        drive(chart, state, |chart| chart.pointer_up());
    };

    view! {
        <div
            class="zoom-pan-brush-chart"
            node_ref=container
            on:wheel=on_wheel
            on:mousedown=on_mouse_down
            on:mousemove=on_mouse_move
            on:mouseup=on_release
            on:mouseleave=on_release
        >
            {move || state.frame.get().map(|frame| view! { <ChartSurface frame=frame state=state /> })}
        </div>
    }
}
