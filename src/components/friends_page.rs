//! Friends Page
//!
//! Friend requests and a friend's roster, checked through the friend endpoints
//! within the permissions that friend granted.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::TodoScope;
use crate::components::character_card::CardPermissions;
use crate::components::{CharacterGrid, TodoSummary};
use crate::context::{use_app_context, AppContext, ModalContent};
use crate::models::{Friend, FriendStatus};
use crate::storage::browser_preferences;
use crate::store::{characters_on, use_app_store, AppStateStoreFields, AppStore};

/// Replace the cached friend list from the server
fn reload_friends(ctx: AppContext, store: AppStore) {
    let api = ctx.api();
    spawn_local(async move {
        match api.list_friends().await {
            Ok(friends) => *store.friends().write() = friends,
            Err(e) => ctx.report(e),
        }
    });
}

fn with_status(friends: &[Friend], status: FriendStatus) -> Vec<Friend> {
    friends.iter().filter(|f| f.are_we_friend == status).cloned().collect()
}

#[component]
pub fn FriendsPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (selected, set_selected) = signal(None::<i64>);
    let (username, set_username) = signal(String::new());
    let (columns, set_columns) = signal(browser_preferences().friend_columns());

    let friends = Memo::new(move |_| store.friends().with(|list| with_status(list, FriendStatus::Friend)));
    let received = Memo::new(move |_| store.friends().with(|list| with_status(list, FriendStatus::RequestReceived)));
    let sent = Memo::new(move |_| store.friends().with(|list| with_status(list, FriendStatus::RequestSent)));

    // Re-renders on selection only; card updates flow through the roster signal
    let selected_friend = move || {
        let id = selected.get()?;
        friends.with_untracked(|list| list.iter().find(|f| f.friend_id == id).cloned())
    };

    let send_request = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = username.get_untracked().trim().to_string();
        if name.is_empty() {
            return;
        }
        let api = ctx.api();
        spawn_local(async move {
            match api.request_friend(&name).await {
                Ok(()) => {
                    set_username.set(String::new());
                    ctx.toast("깐부 요청을 보냈습니다");
                    reload_friends(ctx, store);
                }
                Err(e) => ctx.report(e),
            }
        });
    };

    let respond = move |name: String, accept: bool| {
        let api = ctx.api();
        spawn_local(async move {
            match api.respond_friend(&name, accept).await {
                Ok(()) => reload_friends(ctx, store),
                Err(e) => ctx.report(e),
            }
        });
    };

    let change_columns = move |delta: i8| {
        let wanted = columns.get_untracked().saturating_add_signed(delta);
        match browser_preferences().set_friend_columns(wanted) {
            Ok(n) => set_columns.set(n),
            Err(e) => tracing::warn!("[FRIENDS] columns not saved: {}", e),
        }
    };

    view! {
        <div class="friends-page">
            <form class="friend-request-form" on:submit=send_request>
                <input
                    type="text"
                    placeholder="깐부 요청할 아이디"
                    prop:value=username
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
                <button type="submit">"요청"</button>
            </form>

            <Show when=move || received.with(|r| !r.is_empty())>
                <section class="friend-section">
                    <h3>"받은 요청"</h3>
                    <For
                        each=move || received.get()
                        key=|f| f.friend_id
                        children=move |f| {
                            let accept_name = f.friend_username.clone();
                            let reject_name = f.friend_username.clone();
                            view! {
                                <div class="friend-row">
                                    <span>{f.friend_username.clone()}</span>
                                    <button on:click=move |_| respond(accept_name.clone(), true)>"수락"</button>
                                    <button on:click=move |_| respond(reject_name.clone(), false)>"거절"</button>
                                </div>
                            }
                        }
                    />
                </section>
            </Show>

            <Show when=move || sent.with(|s| !s.is_empty())>
                <section class="friend-section">
                    <h3>"보낸 요청"</h3>
                    <For
                        each=move || sent.get()
                        key=|f| f.friend_id
                        children=move |f| view! {
                            <div class="friend-row pending">{f.friend_username.clone()}</div>
                        }
                    />
                </section>
            </Show>

            <section class="friend-section">
                <h3>"깐부 목록"</h3>
                <div class="friend-tabs">
                    <For
                        each=move || friends.get()
                        key=|f| f.friend_id
                        children=move |f| {
                            let id = f.friend_id;
                            let name = if f.nick_name.is_empty() { f.friend_username.clone() } else { f.nick_name.clone() };
                            view! {
                                <button
                                    class=move || if selected.get() == Some(id) { "friend-tab active" } else { "friend-tab" }
                                    on:click=move |_| set_selected.set(Some(id))
                                >
                                    {name}
                                </button>
                            }
                        }
                    />
                </div>
                <Show when=move || friends.with(|f| f.is_empty())>
                    <p class="friend-empty">"등록된 깐부가 없습니다"</p>
                </Show>
            </section>

            {move || selected_friend().map(|friend| {
                let friend_id = friend.friend_id;
                let permissions = CardPermissions::from_friend(&friend.from_friend_settings);
                let roster = Signal::derive(move || {
                    store.friends().with(|list| {
                        list.iter()
                            .find(|f| f.friend_id == friend_id)
                            .map(|f| characters_on(&f.character_list, None))
                            .unwrap_or_default()
                    })
                });
                view! {
                    <section class="friend-roster">
                        <div class="todo-toolbar">
                            <button class="settings-btn" on:click=move |_| ctx.open_modal(ModalContent::FriendSettings(friend_id))>
                                "깐부 설정"
                            </button>
                            <div class="column-control">
                                <button on:click=move |_| change_columns(-1)>"−"</button>
                                <span>{move || format!("{}열", columns.get())}</span>
                                <button on:click=move |_| change_columns(1)>"+"</button>
                            </div>
                        </div>
                        <Show when=move || permissions.show_day_todo || permissions.show_raid>
                            <TodoSummary characters=roster />
                        </Show>
                        <CharacterGrid
                            characters=roster
                            columns=columns
                            scope=TodoScope::Friend
                            permissions=permissions
                        />
                    </section>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FriendSettings;

    fn friend(id: i64, status: FriendStatus) -> Friend {
        Friend {
            friend_id: id,
            friend_username: format!("user{}", id),
            are_we_friend: status,
            nick_name: String::new(),
            character_list: Vec::new(),
            to_friend_settings: FriendSettings::default(),
            from_friend_settings: FriendSettings::default(),
        }
    }

    #[test]
    fn test_with_status_filters_by_relationship() {
        let list = vec![
            friend(1, FriendStatus::Friend),
            friend(2, FriendStatus::RequestReceived),
            friend(3, FriendStatus::Friend),
        ];
        let ids: Vec<_> = with_status(&list, FriendStatus::Friend).iter().map(|f| f.friend_id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(with_status(&list, FriendStatus::Rejected).is_empty());
    }
}
