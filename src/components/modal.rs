//! Modal Component
//!
//! One overlay whose body depends on `ModalContent`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::board_page::{NewPostForm, PostDetail};
use crate::components::DeleteConfirmButton;
use crate::context::{use_app_context, ModalContent};
use crate::models::{CharacterSetting, FriendSetting};
use crate::store::{
    store_remove_character, store_update_character, store_update_friend, use_app_store, AppStateStoreFields,
};

#[component]
pub fn Modal() -> impl IntoView {
    let ctx = use_app_context();

    move || {
        ctx.modal.get().map(|content| {
            let title = match &content {
                ModalContent::CharacterSettings(_) => "캐릭터 설정",
                ModalContent::FriendSettings(_) => "깐부 설정",
                ModalContent::Post(_) => "게시글",
                ModalContent::NewPost => "새 글 쓰기",
                ModalContent::Logs => "로그",
            };
            let body = match content {
                ModalContent::CharacterSettings(id) => view! { <CharacterSettingsPanel character_id=id /> }.into_any(),
                ModalContent::FriendSettings(id) => view! { <FriendSettingsPanel friend_id=id /> }.into_any(),
                ModalContent::Post(id) => view! { <PostDetail post_id=id /> }.into_any(),
                ModalContent::NewPost => view! { <NewPostForm /> }.into_any(),
                ModalContent::Logs => view! { <LogViewer /> }.into_any(),
            };
            view! {
                <div class="modal-backdrop" on:click=move |_| ctx.close_modal()>
                    <div class="modal" on:click=|ev| ev.stop_propagation()>
                        <div class="modal-header">
                            <span class="modal-title">{title}</span>
                            <button class="modal-close" on:click=move |_| ctx.close_modal()>"✕"</button>
                        </div>
                        <div class="modal-body">{body}</div>
                    </div>
                </div>
            }
        })
    }
}

#[component]
fn CharacterSettingsPanel(character_id: i64) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let settings = move || {
        store.characters().with(|list| {
            list.iter()
                .find(|c| c.character_id == character_id)
                .map(|c| c.settings.clone())
        })
    };

    let toggle = move |name: CharacterSetting| {
        let Some(current) = settings() else { return };
        let value = !name.get(&current);
        let api = ctx.api();
        spawn_local(async move {
            match api.update_setting(character_id, name, value).await {
                Ok(updated) => store_update_character(&store, updated),
                Err(e) => ctx.report(e),
            }
        });
    };

    let delete = move |_: ()| {
        let api = ctx.api();
        spawn_local(async move {
            match api.delete_character(character_id).await {
                Ok(()) => {
                    store_remove_character(&store, character_id);
                    ctx.close_modal();
                    ctx.toast("캐릭터를 삭제했습니다");
                }
                Err(e) => ctx.report(e),
            }
        });
    };

    view! {
        <div class="settings-list">
            {CharacterSetting::ALL.into_iter().map(|name| {
                view! {
                    <label class="settings-row">
                        <input
                            type="checkbox"
                            prop:checked=move || settings().is_some_and(|s| name.get(&s))
                            on:change=move |_| toggle(name)
                        />
                        <span>{name.label()}</span>
                    </label>
                }
            }).collect_view()}
        </div>
        <div class="settings-danger">
            <DeleteConfirmButton button_class="delete-btn" label="캐릭터 삭제" on_confirm=delete />
        </div>
    }
}

#[component]
fn FriendSettingsPanel(friend_id: i64) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let friend = move || store.friends().with(|list| list.iter().find(|f| f.friend_id == friend_id).cloned());

    let toggle = move |name: FriendSetting| {
        let Some(current) = friend() else { return };
        let value = !name.get(&current.to_friend_settings);
        let api = ctx.api();
        spawn_local(async move {
            match api.update_friend_setting(friend_id, name, value).await {
                Ok(updated) => store_update_friend(&store, updated),
                Err(e) => ctx.report(e),
            }
        });
    };

    let delete = move |_: ()| {
        let api = ctx.api();
        spawn_local(async move {
            match api.delete_friend(friend_id).await {
                Ok(()) => {
                    store.friends().write().retain(|f| f.friend_id != friend_id);
                    ctx.close_modal();
                    ctx.toast("깐부를 삭제했습니다");
                }
                Err(e) => ctx.report(e),
            }
        });
    };

    view! {
        <p class="settings-hint">
            {move || friend().map(|f| format!("{} 님에게 허용할 권한", f.nick_name)).unwrap_or_default()}
        </p>
        <div class="settings-list">
            {FriendSetting::ALL.into_iter().map(|name| {
                view! {
                    <label class="settings-row">
                        <input
                            type="checkbox"
                            prop:checked=move || friend().is_some_and(|f| name.get(&f.to_friend_settings))
                            on:change=move |_| toggle(name)
                        />
                        <span>{name.label()}</span>
                    </label>
                }
            }).collect_view()}
        </div>
        <div class="settings-danger">
            <DeleteConfirmButton button_class="delete-btn" label="깐부 삭제" on_confirm=delete />
        </div>
    }
}

/// Recent log lines from the rolling logger, newest last
#[component]
fn LogViewer() -> impl IntoView {
    let lines = rolling_logger::recent();

    view! {
        <div class="log-viewer">
            <Show when={
                let empty = lines.is_empty();
                move || empty
            }>
                <p class="log-empty">"기록된 로그가 없습니다"</p>
            </Show>
            <pre class="log-lines">
                {lines.into_iter().map(|line| {
                    let class = format!("log-line level-{}", line.level.as_str().to_lowercase());
                    view! { <div class=class>{line.to_string()}</div> }
                }).collect_view()}
            </pre>
        </div>
    }
}
