//! Raid Status Board
//!
//! One row per week category that has entries, in catalog order.

use leptos::prelude::*;

use crate::catalog::week_category_order;
use crate::models::Character;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::todo::raid_status;

#[component]
pub fn RaidStatusBoard(#[prop(into)] characters: Signal<Vec<Character>>) -> impl IntoView {
    let store = use_app_store();
    let rows = Memo::new(move |_| {
        let order = week_category_order(&store.contents().read());
        characters.with(|list| raid_status(list, &order))
    });

    view! {
        <div class="raid-status-board">
            <For
                each=move || rows.get()
                key=|row| (row.name.clone(), row.total, row.completed, row.support_count, row.dealer_count)
                children=move |row| {
                    let done = row.total > 0 && row.completed == row.total;
                    view! {
                        <div class=if done { "raid-status-row done" } else { "raid-status-row" }>
                            <span class="raid-status-name">{row.name.clone()}</span>
                            <span class="raid-status-count">{format!("{} / {}", row.completed, row.total)}</span>
                            <span class="raid-status-roles">
                                {format!("서폿 {} · 딜러 {}", row.support_count, row.dealer_count)}
                            </span>
                        </div>
                    }
                }
            />
            <Show when=move || rows.with(|r| r.is_empty())>
                <div class="raid-status-empty">"등록된 주간 레이드가 없습니다"</div>
            </Show>
        </div>
    }
}
