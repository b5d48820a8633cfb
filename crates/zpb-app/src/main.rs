//! Zoom/pan/brush chart demo
//!
//! Shows random-walk series in a [`ZoomPanBrush`] chart, with buttons to
//! regenerate the data and to switch the plotted field.

mod mock;

use leptos::prelude::*;
use zpb_charts::{ChartConfig, ChartLabels, ZoomPanBrush};
use zpb_core::DEFAULT_Y_ACCESSOR;

use crate::mock::random_dataset;

const ALTERNATE_Y_ACCESSOR: &str = "volume";

#[component]
fn App() -> impl IntoView {
    let data = RwSignal::new(random_dataset());
    let y_field = RwSignal::new(DEFAULT_Y_ACCESSOR.to_string());

    let other_field = move || {
        if y_field.get() == DEFAULT_Y_ACCESSOR {
            ALTERNATE_Y_ACCESSOR
        } else {
            DEFAULT_Y_ACCESSOR
        }
    };

    let regenerate = move |_| data.set(random_dataset());
    let toggle_field = move |_| y_field.set(other_field().to_string());

    let config = ChartConfig::default().labels(ChartLabels {
        title: "Random Walk".to_string(),
        ..ChartLabels::default()
    });

    view! {
        <div class="app">
            <header class="app-header">
                <button on:click=regenerate>"New data"</button>
                <button on:click=toggle_field>{move || format!("Plot {}", other_field())}</button>
            </header>
            <ZoomPanBrush data=data y_accessor=y_field config=config />
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    tracing::info!("starting zoom/pan/brush demo");

    leptos::mount::mount_to_body(App);
}
