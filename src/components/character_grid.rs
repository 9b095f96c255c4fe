//! Character Grid Component
//!
//! Cards laid out in a configurable number of columns, with drag-and-drop
//! reordering of characters and of raids inside a card.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{
    bind_global_mouseup, make_on_mouseleave, make_on_mousedown, make_on_slot_mouseenter, DndSignals, DragKey,
    DropSlot,
};

use crate::api::TodoScope;
use crate::components::character_card::{CardPermissions, CharacterCard};
use crate::context::AppContext;
use crate::models::Character;
use crate::reorder::{apply_character_order, reorder_raids, reorder_roster};
use crate::store::{characters_on, store_update_character, AppStateStoreFields, AppStore};

/// Lists that support reordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragGroup {
    /// Cards of the shown server
    Characters,
    /// Raids of one character
    Raids(i64),
}

/// Bind the drop handler once for the whole app
pub fn bind_reorder(dnd: DndSignals<DragGroup>, ctx: AppContext, store: AppStore) {
    bind_global_mouseup(dnd, move |dragged, slot| match dragged.group {
        DragGroup::Characters => drop_character(ctx, store, dragged.id, slot.position),
        DragGroup::Raids(character_id) => drop_raid(ctx, store, character_id, dragged.id, slot.position),
    });
}

fn drop_character(ctx: AppContext, store: AppStore, character_id: i64, slot: usize) {
    let server = ctx.server.get_untracked();
    let roster = characters_on(&store.characters().read_untracked(), server.as_deref());
    let Some(requests) = reorder_roster(&roster, character_id, slot) else {
        return;
    };
    tracing::info!("[DND] character {} dropped at {}", character_id, slot);
    apply_character_order(&mut store.characters().write(), &requests);

    let api = ctx.api();
    spawn_local(async move {
        if let Err(e) = api.sort_characters(&requests).await {
            ctx.report(e);
            ctx.reload();
        }
    });
}

fn drop_raid(ctx: AppContext, store: AppStore, character_id: i64, raid_id: i64, slot: usize) {
    let character = store
        .characters()
        .read_untracked()
        .iter()
        .find(|c| c.character_id == character_id)
        .cloned();
    let Some(character) = character else { return };
    let Some(requests) = reorder_raids(&character, raid_id, slot) else {
        return;
    };
    tracing::info!("[DND] raid {} of {} dropped at {}", raid_id, character_id, slot);

    let mut moved = character.clone();
    for request in &requests {
        if let Some(raid) = moved.todo_list.iter_mut().find(|r| r.id == request.id) {
            raid.sort_number = request.sort_number;
        }
    }
    store_update_character(&store, moved);

    let api = ctx.api();
    spawn_local(async move {
        match api.sort_raids(character_id, &requests).await {
            Ok(updated) => store_update_character(&store, updated),
            Err(e) => {
                ctx.report(e);
                store_update_character(&store, character);
            }
        }
    });
}

/// Cards of `characters` whose `show_character` is on, in the given order
#[component]
pub fn CharacterGrid(
    #[prop(into)] characters: Signal<Vec<Character>>,
    #[prop(into)] columns: Signal<u8>,
    scope: TodoScope,
    permissions: CardPermissions,
) -> impl IntoView {
    let dnd = expect_context::<DndSignals<DragGroup>>();
    let reorderable = permissions.manage && scope == TodoScope::Mine;

    let shown = Memo::new(move |_| {
        characters.with(|list| {
            list.iter()
                .filter(|c| c.settings.show_character)
                .map(|c| c.character_id)
                .collect::<Vec<_>>()
        })
    });
    let grid_style = move || format!("grid-template-columns: repeat({}, minmax(0, 1fr));", columns.get());
    let cells = move || shown.get().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <div class="character-grid" style=grid_style on:mouseleave=make_on_mouseleave(dnd)>
            <For
                each=cells
                key=|(index, id)| (*index, *id)
                children=move |(index, id)| {
                    let key = DragKey { group: DragGroup::Characters, id };
                    let slot = DropSlot { group: DragGroup::Characters, position: index };
                    let character = Signal::derive(move || {
                        characters.with(|list| list.iter().find(|c| c.character_id == id).cloned())
                    });
                    let cell_class = move || {
                        let mut class = String::from("grid-cell");
                        if dnd.is_dragging(key) { class.push_str(" dragging"); }
                        if dnd.is_active_slot(slot) { class.push_str(" drop-before"); }
                        class
                    };
                    view! {
                        <div
                            class=cell_class
                            on:mouseenter=make_on_slot_mouseenter(dnd, slot)
                        >
                            <Show when=move || reorderable>
                                <div class="drag-handle" title="드래그하여 순서 변경" on:mousedown=make_on_mousedown(dnd, key)>
                                    "⠿"
                                </div>
                            </Show>
                            <CharacterCard character=character scope=scope permissions=permissions />
                        </div>
                    }
                }
            />
            <Show when=move || reorderable && dnd.is_dragging_group(DragGroup::Characters)>
                {move || {
                    let slot = DropSlot { group: DragGroup::Characters, position: shown.with(|s| s.len()) };
                    view! {
                        <div
                            class=move || if dnd.is_active_slot(slot) { "grid-end-slot active" } else { "grid-end-slot" }
                            on:mouseenter=make_on_slot_mouseenter(dnd, slot)
                        ></div>
                    }
                }}
            </Show>
            <Show when=move || shown.with(|s| s.is_empty())>
                <div class="grid-empty">"표시할 캐릭터가 없습니다"</div>
            </Show>
        </div>
    }
}
