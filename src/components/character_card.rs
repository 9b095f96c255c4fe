//! Character Card Component
//!
//! One character's daily and weekly todos. Every click sends the change to
//! the backend and replaces the character in the store from the response.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{make_on_mouseleave, make_on_mousedown, make_on_slot_mouseenter, DndSignals, DragKey, DropSlot};

use crate::api::{ApiError, TodoScope};
use crate::components::character_grid::DragGroup;
use crate::components::gauge::{CounterGauge, Gauge};
use crate::context::{use_app_context, AppContext, ModalContent};
use crate::models::{Character, FriendSettings, TodoRaid};
use crate::reorder::raids_in_order;
use crate::store::{store_update_character, store_update_friend_character, use_app_store, AppStore};
use crate::todo::{value_for_click, CubeCounter, REST_GAUGE};

/// What the viewer may see and change on a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardPermissions {
    pub show_day_todo: bool,
    pub check_day_todo: bool,
    pub show_raid: bool,
    pub check_raid: bool,
    /// Settings, gold toggle and reordering
    pub manage: bool,
}

impl CardPermissions {
    pub const OWNER: CardPermissions = CardPermissions {
        show_day_todo: true,
        check_day_todo: true,
        show_raid: true,
        check_raid: true,
        manage: true,
    };

    /// Permissions a friend granted to me
    pub fn from_friend(settings: &FriendSettings) -> Self {
        Self {
            show_day_todo: settings.show_day_todo,
            check_day_todo: settings.check_day_todo,
            show_raid: settings.show_raid,
            check_raid: settings.check_raid,
            manage: false,
        }
    }
}

/// Run a character mutation and store the returned character
fn run_update<F>(ctx: AppContext, store: AppStore, scope: TodoScope, request: F)
where
    F: Future<Output = Result<Character, ApiError>> + 'static,
{
    spawn_local(async move {
        match request.await {
            Ok(updated) => match scope {
                TodoScope::Mine => store_update_character(&store, updated),
                TodoScope::Friend => store_update_friend_character(&store, updated),
            },
            Err(e) => ctx.report(e),
        }
    });
}

fn chaos_label(character: &Character) -> String {
    format!("카오스 던전 {}/2", u8::from(character.chaos_check))
}

fn guardian_label(character: &Character) -> String {
    format!("가디언 토벌 {}/1", u8::from(character.guardian_check))
}

/// A raid row click checks the raid unless it was the release of a drag
fn raid_click_applies(drag_just_ended: bool, can_check: bool) -> bool {
    can_check && !drag_just_ended
}

#[component]
pub fn CharacterCard(
    #[prop(into)] character: Signal<Option<Character>>,
    scope: TodoScope,
    permissions: CardPermissions,
) -> impl IntoView {
    let card_class = move || match character.get() {
        Some(c) if c.gold_character => "character-card gold",
        _ => "character-card",
    };

    view! {
        <Show when=move || character.with(|c| c.is_some())>
            <div class=card_class>
                <CardHeader character=character permissions=permissions />
                <Show when=move || permissions.show_day_todo>
                    <DayTodo character=character scope=scope permissions=permissions />
                </Show>
                <Show when=move || permissions.show_raid>
                    <WeekTodo character=character scope=scope permissions=permissions />
                </Show>
            </div>
        </Show>
    }
}

#[component]
fn CardHeader(character: Signal<Option<Character>>, permissions: CardPermissions) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let id = move || character.get_untracked().map(|c| c.character_id).unwrap_or_default();
    let field = move |f: fn(&Character) -> String| character.with(|c| c.as_ref().map(f).unwrap_or_default());

    let toggle_gold = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let api = ctx.api();
        let id = id();
        run_update(ctx, store, TodoScope::Mine, async move { api.toggle_gold_character(id).await });
    };

    view! {
        <div class="card-header">
            <div class="card-title">
                <span class="card-name">{move || field(|c| c.character_name.clone())}</span>
                <span class="card-class">{move || field(|c| c.character_class_name.clone())}</span>
                <span class="card-level">{move || field(|c| format!("{:.2}", c.item_level))}</span>
            </div>
            <Show when=move || permissions.manage>
                <button
                    class=move || match character.get() {
                        Some(c) if c.gold_character => "gold-btn active",
                        _ => "gold-btn",
                    }
                    title="골드 획득 캐릭터"
                    on:click=toggle_gold
                >
                    "G"
                </button>
                <button
                    class="settings-btn"
                    title="캐릭터 설정"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        ctx.open_modal(ModalContent::CharacterSettings(id()));
                    }
                >
                    "⚙"
                </button>
            </Show>
        </div>
    }
}

#[component]
fn DayTodo(
    character: Signal<Option<Character>>,
    scope: TodoScope,
    permissions: CardPermissions,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let enabled = permissions.check_day_todo;

    let chaos_gauge = Signal::derive(move || character.get().map(|c| c.chaos_gauge).unwrap_or(0));
    let guardian_gauge = Signal::derive(move || character.get().map(|c| c.guardian_gauge).unwrap_or(0));

    let check_chaos = move |_| {
        let Some(c) = character.get_untracked() else { return };
        let api = ctx.api();
        let next = c.chaos_check.next();
        run_update(ctx, store, scope, async move { api.check_chaos(scope, c.character_id, next).await });
    };

    let check_guardian = move |_| {
        let Some(c) = character.get_untracked() else { return };
        let api = ctx.api();
        let next = c.guardian_check.next();
        run_update(ctx, store, scope, async move { api.check_guardian(scope, c.character_id, next).await });
    };

    let click_gauge = move |index: usize, chaos: bool| {
        let Some(c) = character.get_untracked() else { return };
        let (chaos_value, guardian_value) = if chaos {
            (value_for_click(c.chaos_gauge, index, REST_GAUGE), c.guardian_gauge)
        } else {
            (c.chaos_gauge, value_for_click(c.guardian_gauge, index, REST_GAUGE))
        };
        let api = ctx.api();
        run_update(ctx, store, scope, async move {
            api.update_rest_gauge(scope, c.character_id, chaos_value, guardian_value).await
        });
    };

    let settings = move || character.get().map(|c| c.settings).unwrap_or_default();

    view! {
        <div class="day-todo">
            <Show when=move || settings().show_chaos>
                <div class="todo-row">
                    <button
                        class=move || match character.get() {
                            Some(c) if c.chaos_check.is_done() => "todo-check done",
                            _ => "todo-check",
                        }
                        disabled=!enabled
                        on:click=check_chaos
                    >
                        {move || character.get().map(|c| chaos_label(&c)).unwrap_or_default()}
                    </button>
                    <Gauge
                        label="휴식"
                        value=chaos_gauge
                        spec=REST_GAUGE
                        enabled=enabled
                        on_cell_click=move |index: usize| click_gauge(index, true)
                    />
                </div>
            </Show>
            <Show when=move || settings().show_guardian>
                <div class="todo-row">
                    <button
                        class=move || match character.get() {
                            Some(c) if c.guardian_check.is_done() => "todo-check done",
                            _ => "todo-check",
                        }
                        disabled=!enabled
                        on:click=check_guardian
                    >
                        {move || character.get().map(|c| guardian_label(&c)).unwrap_or_default()}
                    </button>
                    <Gauge
                        label="휴식"
                        value=guardian_gauge
                        spec=REST_GAUGE
                        enabled=enabled
                        on_cell_click=move |index: usize| click_gauge(index, false)
                    />
                </div>
            </Show>
        </div>
    }
}

#[component]
fn WeekTodo(
    character: Signal<Option<Character>>,
    scope: TodoScope,
    permissions: CardPermissions,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let dnd = expect_context::<DndSignals<DragGroup>>();
    let enabled = permissions.check_raid;
    let reorderable = permissions.manage && scope == TodoScope::Mine;

    let character_id = move || character.get_untracked().map(|c| c.character_id).unwrap_or_default();
    let raids = Memo::new(move |_| character.get().map(|c| raids_in_order(&c)).unwrap_or_default());
    let cube = Signal::derive(move || character.get().map(|c| c.cube_ticket).unwrap_or(0));

    let check_raid = move |raid: TodoRaid| {
        if !raid_click_applies(dnd.drag_just_ended_read.get_untracked(), enabled) {
            return;
        }
        let api = ctx.api();
        let id = character_id();
        run_update(ctx, store, scope, async move { api.check_raid(scope, id, &raid.week_category).await });
    };

    let set_cube = move |change: fn(CubeCounter) -> CubeCounter| {
        let Some(c) = character.get_untracked() else { return };
        let next = change(CubeCounter(c.cube_ticket)).0;
        if next == c.cube_ticket {
            return;
        }
        let api = ctx.api();
        run_update(ctx, store, scope, async move { api.update_cube_ticket(scope, c.character_id, next).await });
    };

    let show_week = move || character.get().map(|c| c.settings.show_week_todo).unwrap_or(false);
    let show_cube = move || character.get().map(|c| c.settings.show_cube_ticket).unwrap_or(false);
    let raid_rows = move || raids.get().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <div class="week-todo">
            <Show when=show_week>
                <div class="raid-list" on:mouseleave=make_on_mouseleave(dnd)>
                    <For
                        each=raid_rows
                        key=|(index, raid)| (*index, raid.id, raid.check)
                        children=move |(index, raid)| {
                            let group = DragGroup::Raids(character_id());
                            let key = DragKey { group, id: raid.id };
                            let slot = DropSlot { group, position: index };
                            let checked = raid.check;
                            let row_class = move || {
                                let mut class = String::from("raid-row");
                                if checked { class.push_str(" checked"); }
                                if dnd.is_dragging(key) { class.push_str(" dragging"); }
                                if dnd.is_active_slot(slot) { class.push_str(" drop-before"); }
                                class
                            };
                            let gold = raid.gold;
                            let name = raid.name.clone();
                            view! {
                                <div
                                    class=row_class
                                    on:mousedown=move |ev| {
                                        if reorderable {
                                            make_on_mousedown(dnd, key)(ev);
                                        }
                                    }
                                    on:mouseenter=make_on_slot_mouseenter(dnd, slot)
                                    on:click=move |_| check_raid(raid.clone())
                                >
                                    <span class="raid-name">{name}</span>
                                    {(gold > 0).then(|| view! { <span class="raid-gold">{format!("{}G", gold)}</span> })}
                                </div>
                            }
                        }
                    />
                    <Show when=move || reorderable && dnd.is_dragging_group(DragGroup::Raids(character_id()))>
                        {move || {
                            let slot = DropSlot {
                                group: DragGroup::Raids(character_id()),
                                position: raids.with(|r| r.len()),
                            };
                            view! {
                                <div
                                    class=move || if dnd.is_active_slot(slot) { "raid-end-slot active" } else { "raid-end-slot" }
                                    on:mouseenter=make_on_slot_mouseenter(dnd, slot)
                                ></div>
                            }
                        }}
                    </Show>
                </div>
            </Show>
            <Show when=show_cube>
                <CounterGauge
                    label="큐브"
                    value=cube
                    enabled=enabled
                    on_decrement=move |_: ()| set_cube(CubeCounter::decrement)
                    on_increment=move |_: ()| set_cube(CubeCounter::increment)
                />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::fixtures::character;
    use crate::todo::ChaosStage;
    use leptos_dragdrop::suppresses_click;

    #[test]
    fn test_friend_permissions_never_manage() {
        let settings = FriendSettings {
            show_day_todo: true,
            check_day_todo: false,
            show_raid: true,
            check_raid: true,
            setting: true,
        };
        let permissions = CardPermissions::from_friend(&settings);
        assert!(permissions.show_day_todo);
        assert!(!permissions.check_day_todo);
        assert!(permissions.check_raid);
        assert!(!permissions.manage);
        assert!(CardPermissions::OWNER.manage);
    }

    #[test]
    fn test_stage_labels() {
        let mut c = character(1, "바드");
        assert_eq!(chaos_label(&c), "카오스 던전 0/2");
        c.chaos_check = ChaosStage::Once;
        assert_eq!(chaos_label(&c), "카오스 던전 1/2");
        assert_eq!(guardian_label(&c), "가디언 토벌 0/1");
    }

    #[test]
    fn test_raid_click_without_drag_checks() {
        let pressed = DragKey { group: DragGroup::Raids(1), id: 3 };
        // mousedown then mouseup in place: the row stays pending, never dragging
        let just_ended = suppresses_click::<DragGroup>(None);
        assert!(raid_click_applies(just_ended, true));

        let just_ended = suppresses_click(Some(pressed));
        assert!(!raid_click_applies(just_ended, true));
    }

    #[test]
    fn test_raid_click_needs_check_permission() {
        let friend = CardPermissions::from_friend(&FriendSettings::default());
        assert!(!raid_click_applies(false, friend.check_raid));
        assert!(raid_click_applies(false, CardPermissions::OWNER.check_raid));
    }
}
