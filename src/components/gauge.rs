//! Gauge Components
//!
//! Stateless: render from the passed value and forward clicks.

use leptos::prelude::*;

use crate::todo::{filled_cells, GaugeSpec};

/// Segmented gauge (rest bonus)
#[component]
pub fn Gauge(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<i32>,
    spec: GaugeSpec,
    #[prop(into)] on_cell_click: Callback<usize>,
    #[prop(default = true)] enabled: bool,
) -> impl IntoView {
    let filled = move || filled_cells(value.get(), spec);

    view! {
        <div class="gauge">
            <span class="gauge-label">{label}</span>
            <div class="gauge-cells">
                {(0..spec.cells).map(|index| {
                    let cell_class = move || if index < filled() { "gauge-cell filled" } else { "gauge-cell" };
                    view! {
                        <button
                            class=cell_class
                            disabled=!enabled
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_cell_click.run(index);
                            }
                        ></button>
                    }
                }).collect_view()}
            </div>
            <span class="gauge-value">{move || value.get()}</span>
        </div>
    }
}

/// Plus/minus counter (cube tickets)
#[component]
pub fn CounterGauge(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<i32>,
    #[prop(into)] on_decrement: Callback<()>,
    #[prop(into)] on_increment: Callback<()>,
    #[prop(default = true)] enabled: bool,
) -> impl IntoView {
    view! {
        <div class="counter-gauge">
            <span class="gauge-label">{label}</span>
            <button class="counter-btn" disabled=!enabled on:click=move |_| on_decrement.run(())>"−"</button>
            <span class="counter-value">{move || value.get()}</span>
            <button class="counter-btn" disabled=!enabled on:click=move |_| on_increment.run(())>"+"</button>
        </div>
    }
}
