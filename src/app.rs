//! LoaTodo Frontend App
//!
//! Root component: provides context, loads server data and switches pages.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::create_dnd_signals;

use crate::components::{
    bind_reorder, AdminPage, BoardPage, DragGroup, FriendsPage, Header, LoginPage, Modal, NotificationsPage,
    SeasonalEffectView, ToastView, TodoPage,
};
use crate::config::AppConfig;
use crate::context::{AppContext, Page};
use crate::storage::browser_preferences;
use crate::store::{AppState, AppStateStoreFields, AppStore};

/// Load everything cached in the store
fn load_all(ctx: AppContext, store: AppStore) {
    let api = ctx.api();
    spawn_local(async move {
        match api.list_characters().await {
            Ok(list) => {
                tracing::info!("[APP] loaded {} characters", list.len());
                *store.characters().write() = list;
            }
            Err(e) => {
                ctx.report(e);
                // No point asking for the rest with a rejected token
                return;
            }
        }
        match api.me().await {
            Ok(member) => *store.member().write() = Some(member),
            Err(e) => ctx.report(e),
        }
        match api.list_contents().await {
            Ok(contents) if !contents.is_empty() => *store.contents().write() = contents,
            Ok(_) => {}
            Err(e) => tracing::warn!("[APP] keeping built-in raid catalog: {}", e),
        }
        match api.unread_status().await {
            Ok(unread) => *store.has_unread().write() = unread,
            Err(e) => tracing::warn!("[APP] unread status unavailable: {}", e),
        }
        match api.list_friends().await {
            Ok(friends) => *store.friends().write() = friends,
            Err(e) => ctx.report(e),
        }
    });
}

#[component]
pub fn App() -> impl IntoView {
    let prefs = browser_preferences();
    let ctx = AppContext::new(AppConfig::from_env(), prefs.theme(), prefs.token());
    let store = AppStore::new(AppState::new());
    let (seasonal, set_seasonal) = signal(prefs.seasonal_effect());

    provide_context(ctx);
    provide_context(store);

    // Drag-and-drop state and the document listeners live as long as the app
    let dnd = create_dnd_signals::<DragGroup>();
    provide_context(dnd);
    bind_reorder(dnd, ctx, store);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        if ctx.token.get().is_none() {
            store.characters().write().clear();
            store.friends().write().clear();
            *store.member().write() = None;
            *store.has_unread().write() = false;
            return;
        }
        load_all(ctx, store);
    });

    view! {
        <div class=move || format!("app-layout {}", ctx.theme.get().class())>
            <SeasonalEffectView effect=seasonal />
            <Show when=move || ctx.is_logged_in()>
                <Header seasonal=seasonal set_seasonal=set_seasonal />
            </Show>
            <main class="main-content">
                {move || match ctx.page.get() {
                    Page::Todo => view! { <TodoPage /> }.into_any(),
                    Page::Friends => view! { <FriendsPage /> }.into_any(),
                    Page::Board => view! { <BoardPage /> }.into_any(),
                    Page::Notifications => view! { <NotificationsPage /> }.into_any(),
                    Page::Admin => view! { <AdminPage /> }.into_any(),
                    Page::Login => view! { <LoginPage /> }.into_any(),
                }}
            </main>
            <Modal />
            <ToastView />
        </div>
    }
}
