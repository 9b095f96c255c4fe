//! Notifications Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_app_context, ModalContent, Page};
use crate::models::Notification;
use crate::store::{use_app_store, AppStateStoreFields};

/// Where clicking a notification leads
fn target_of(notification: &Notification) -> Option<ModalContent> {
    notification.board_id.map(ModalContent::Post)
}

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (notifications, set_notifications) = signal(Vec::<Notification>::new());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let api = ctx.api();
        spawn_local(async move {
            match api.list_notifications().await {
                Ok(list) => {
                    *store.has_unread().write() = list.iter().any(|n| !n.is_read);
                    set_notifications.set(list);
                }
                Err(e) => ctx.report(e),
            }
        });
    });

    let mark_read = move |notification: Notification| {
        let id = notification.id;
        let target = target_of(&notification);
        let api = ctx.api();
        spawn_local(async move {
            if !notification.is_read {
                if let Err(e) = api.mark_read(id).await {
                    ctx.report(e);
                    return;
                }
                set_notifications.update(|list| {
                    if let Some(n) = list.iter_mut().find(|n| n.id == id) {
                        n.is_read = true;
                    }
                });
                *store.has_unread().write() = notifications.with_untracked(|l| l.iter().any(|n| !n.is_read));
            }
            match target {
                Some(modal) => {
                    ctx.navigate(Page::Board);
                    ctx.open_modal(modal);
                }
                None if notification.friend_username.is_some() => ctx.navigate(Page::Friends),
                None => {}
            }
        });
    };

    let mark_all = move |_| {
        let api = ctx.api();
        spawn_local(async move {
            match api.mark_all_read().await {
                Ok(()) => {
                    set_notifications.update(|list| list.iter_mut().for_each(|n| n.is_read = true));
                    *store.has_unread().write() = false;
                }
                Err(e) => ctx.report(e),
            }
        });
    };

    view! {
        <div class="notifications-page">
            <div class="notifications-toolbar">
                <button on:click=mark_all disabled=move || notifications.with(|l| l.iter().all(|n| n.is_read))>
                    "모두 읽음"
                </button>
            </div>
            <ul class="notification-list">
                <For
                    each=move || notifications.get()
                    key=|n| (n.id, n.is_read)
                    children=move |n| {
                        let class = if n.is_read { "notification-row read" } else { "notification-row" };
                        let content = n.content.clone();
                        let date = n.created_date.clone();
                        view! {
                            <li class=class on:click=move |_| mark_read(n.clone())>
                                <span class="notification-content">{content}</span>
                                <span class="notification-date">{date}</span>
                            </li>
                        }
                    }
                />
            </ul>
            <Show when=move || notifications.with(|l| l.is_empty())>
                <div class="notification-empty">"알림이 없습니다"</div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(board_id: Option<i64>) -> Notification {
        Notification {
            id: 1,
            content: "새 댓글".to_string(),
            notification_type: "BOARD".to_string(),
            is_read: false,
            created_date: "2024-01-01".to_string(),
            board_id,
            friend_username: None,
        }
    }

    #[test]
    fn test_board_notifications_open_the_post() {
        assert_eq!(target_of(&notification(Some(4))), Some(ModalContent::Post(4)));
        assert_eq!(target_of(&notification(None)), None);
    }
}
