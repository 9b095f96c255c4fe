//! Todo Page
//!
//! Summaries, raid status board and the character grid for the selected server.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::TodoScope;
use crate::components::character_card::CardPermissions;
use crate::components::{CharacterGrid, RaidStatusBoard, TodoSummary};
use crate::context::use_app_context;
use crate::models::{Character, CharacterSetting};
use crate::storage::browser_preferences;
use crate::store::{characters_on, store_update_character, use_app_store, AppStateStoreFields};

#[component]
pub fn TodoPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (columns, set_columns) = signal(browser_preferences().todo_columns());
    let (refreshing, set_refreshing) = signal(false);

    let roster = Memo::new(move |_| {
        let server = ctx.server.get();
        store.characters().with(|list| characters_on(list, server.as_deref()))
    });
    let shown = Signal::derive(move || {
        roster.with(|list| list.iter().filter(|c| c.settings.show_character).cloned().collect::<Vec<_>>())
    });
    let hidden = Signal::derive(move || {
        roster.with(|list| list.iter().filter(|c| !c.settings.show_character).cloned().collect::<Vec<_>>())
    });

    let change_columns = move |delta: i8| {
        let wanted = columns.get_untracked().saturating_add_signed(delta);
        match browser_preferences().set_todo_columns(wanted) {
            Ok(n) => set_columns.set(n),
            Err(e) => tracing::warn!("[TODO] columns not saved: {}", e),
        }
    };

    let refresh = move |_| {
        set_refreshing.set(true);
        let api = ctx.api();
        spawn_local(async move {
            match api.refresh_characters().await {
                Ok(list) => {
                    tracing::info!("[TODO] refreshed {} characters", list.len());
                    *store.characters().write() = list;
                    ctx.toast("캐릭터 정보를 갱신했습니다");
                }
                Err(e) => ctx.report(e),
            }
            set_refreshing.set(false);
        });
    };

    let show_again = move |character: Character| {
        let api = ctx.api();
        spawn_local(async move {
            match api.update_setting(character.character_id, CharacterSetting::ShowCharacter, true).await {
                Ok(updated) => store_update_character(&store, updated),
                Err(e) => ctx.report(e),
            }
        });
    };

    view! {
        <div class="todo-page">
            <div class="todo-overview">
                <TodoSummary characters=roster />
                <RaidStatusBoard characters=shown />
            </div>
            <div class="todo-toolbar">
                <button class="refresh-btn" disabled=move || refreshing.get() on:click=refresh>
                    {move || if refreshing.get() { "갱신 중..." } else { "캐릭터 정보 갱신" }}
                </button>
                <div class="column-control">
                    <button on:click=move |_| change_columns(-1)>"−"</button>
                    <span>{move || format!("{}열", columns.get())}</span>
                    <button on:click=move |_| change_columns(1)>"+"</button>
                </div>
            </div>
            <CharacterGrid
                characters=roster
                columns=columns
                scope=TodoScope::Mine
                permissions=CardPermissions::OWNER
            />
            <Show when=move || hidden.with(|h| !h.is_empty())>
                <div class="hidden-characters">
                    <span class="hidden-title">"숨긴 캐릭터"</span>
                    <For
                        each=move || hidden.get()
                        key=|c| c.character_id
                        children=move |c| {
                            let label = format!("{} ({})", c.character_name, c.character_class_name);
                            view! {
                                <button class="hidden-character" title="다시 표시" on:click=move |_| show_again(c.clone())>
                                    {label}
                                </button>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
