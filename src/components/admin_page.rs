//! Admin Page
//!
//! Sign-up and character registration counts, plus raid catalog editing.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::models::{AdminDashboard, ContentEntry, DailyCount};
use crate::store::{use_app_store, AppStateStoreFields};

const DAY_RANGES: [u32; 3] = [7, 14, 30];

fn total(counts: &[DailyCount]) -> i64 {
    counts.iter().map(|c| c.count).sum()
}

#[component]
fn CountTable(title: &'static str, #[prop(into)] counts: Signal<Vec<DailyCount>>) -> impl IntoView {
    view! {
        <table class="count-table">
            <caption>{move || format!("{} (합계 {})", title, counts.with(|c| total(c)))}</caption>
            <tbody>
                <For
                    each=move || counts.get()
                    key=|c| c.date.clone()
                    children=|c| view! {
                        <tr>
                            <td>{c.date.clone()}</td>
                            <td class="count">{c.count}</td>
                        </tr>
                    }
                />
            </tbody>
        </table>
    }
}

#[component]
fn ContentRow(entry: ContentEntry) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (category, set_category) = signal(entry.category.clone());
    let (sort_order, set_sort_order) = signal(entry.sort_order);
    let original = StoredValue::new(entry);

    let save = move |_| {
        let mut updated = original.get_value();
        updated.category = category.get_untracked().trim().to_string();
        updated.sort_order = sort_order.get_untracked();
        let api = ctx.api();
        spawn_local(async move {
            match api.update_content(&updated).await {
                Ok(saved) => {
                    if let Some(slot) = store.contents().write().iter_mut().find(|c| c.id == saved.id) {
                        *slot = saved;
                    }
                    ctx.toast("저장했습니다");
                }
                Err(e) => ctx.report(e),
            }
        });
    };

    view! {
        <tr>
            <td>{original.with_value(|e| e.name.clone())}</td>
            <td>
                <input
                    type="text"
                    prop:value=category
                    on:input=move |ev| set_category.set(event_target_value(&ev))
                />
            </td>
            <td>
                <input
                    type="number"
                    prop:value=move || sort_order.get().to_string()
                    on:input=move |ev| {
                        if let Ok(n) = event_target_value(&ev).parse::<i32>() {
                            set_sort_order.set(n);
                        }
                    }
                />
            </td>
            <td><button on:click=save>"저장"</button></td>
        </tr>
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (days, set_days) = signal(DAY_RANGES[0]);
    let (dashboard, set_dashboard) = signal(AdminDashboard::default());

    let is_admin = move || store.member().with(|m| m.as_ref().is_some_and(|m| m.is_admin()));

    Effect::new(move |_| {
        let days = days.get();
        if !is_admin() {
            return;
        }
        let api = ctx.api();
        spawn_local(async move {
            match api.dashboard(days).await {
                Ok(loaded) => set_dashboard.set(loaded),
                Err(e) => ctx.report(e),
            }
        });
    });

    let members = Signal::derive(move || dashboard.with(|d| d.new_members.clone()));
    let characters = Signal::derive(move || dashboard.with(|d| d.new_characters.clone()));

    view! {
        <Show
            when=is_admin
            fallback=|| view! { <div class="admin-denied">"관리자만 볼 수 있습니다"</div> }
        >
            <div class="admin-page">
                <section class="admin-dashboard">
                    <div class="day-range">
                        {DAY_RANGES.into_iter().map(|n| view! {
                            <button
                                class=move || if days.get() == n { "range-btn active" } else { "range-btn" }
                                on:click=move |_| set_days.set(n)
                            >
                                {format!("{}일", n)}
                            </button>
                        }).collect_view()}
                    </div>
                    <CountTable title="신규 회원" counts=members />
                    <CountTable title="신규 캐릭터" counts=characters />
                </section>
                <section class="admin-contents">
                    <table class="content-table">
                        <thead>
                            <tr><th>"레이드"</th><th>"분류"</th><th>"순서"</th><th></th></tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || store.contents().get()
                                key=|entry| (entry.id, entry.category.clone(), entry.sort_order)
                                children=|entry| view! { <ContentRow entry=entry /> }
                            />
                        </tbody>
                    </table>
                </section>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_sums_counts() {
        let counts = vec![
            DailyCount { date: "2024-01-01".to_string(), count: 3 },
            DailyCount { date: "2024-01-02".to_string(), count: 4 },
        ];
        assert_eq!(total(&counts), 7);
        assert_eq!(total(&[]), 0);
    }
}
