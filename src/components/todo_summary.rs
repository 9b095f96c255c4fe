//! Todo Summary Component
//!
//! Daily and weekly completed/total badges for a server roster. Hidden
//! characters still count toward the weekly total when they earn gold.

use leptos::prelude::*;

use crate::models::Character;
use crate::todo::{daily_totals, weekly_totals, Totals};

#[component]
fn SummaryBadge(label: &'static str, totals: Memo<Totals>) -> impl IntoView {
    view! {
        <div class="summary-badge">
            <span class="summary-label">{label}</span>
            <span class="summary-count">
                {move || format!("{} / {}", totals.get().completed, totals.get().total)}
            </span>
            <div class="summary-bar">
                <div class="summary-bar-fill" style=move || format!("width: {}%;", totals.get().percent())></div>
            </div>
        </div>
    }
}

#[component]
pub fn TodoSummary(#[prop(into)] characters: Signal<Vec<Character>>) -> impl IntoView {
    let daily = Memo::new(move |_| characters.with(|list| daily_totals(list)));
    let weekly = Memo::new(move |_| characters.with(|list| weekly_totals(list)));

    view! {
        <div class="todo-summary">
            <SummaryBadge label="일일 숙제" totals=daily />
            <SummaryBadge label="주간 레이드" totals=weekly />
        </div>
    }
}
