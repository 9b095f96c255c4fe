//! Header Component
//!
//! Navigation, server select, unread badge and display toggles.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_app_context, ModalContent, Page};
use crate::storage::{browser_preferences, SeasonalEffect};
use crate::store::{servers, use_app_store, AppStateStoreFields};

#[component]
pub fn Header(seasonal: ReadSignal<SeasonalEffect>, set_seasonal: WriteSignal<SeasonalEffect>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let server_list = Memo::new(move |_| servers(&store.characters().read()));
    let is_admin = move || store.member().with(|m| m.as_ref().is_some_and(|m| m.is_admin()));
    let pages = move || {
        let mut pages = vec![Page::Todo, Page::Friends, Page::Board, Page::Notifications];
        if is_admin() {
            pages.push(Page::Admin);
        }
        pages
    };

    let on_server_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        ctx.set_server(if value.is_empty() { None } else { Some(value) });
    };

    let cycle_seasonal = move |_| {
        let next = seasonal.get_untracked().next();
        set_seasonal.set(next);
        if let Err(e) = browser_preferences().set_seasonal_effect(next) {
            tracing::warn!("[HEADER] seasonal effect not saved: {}", e);
        }
    };

    let logout = move |_| {
        let api = ctx.api();
        spawn_local(async move {
            // The local token is dropped even when the server call fails
            if let Err(e) = api.logout().await {
                tracing::warn!("[HEADER] logout request failed: {}", e);
            }
            ctx.logout();
        });
    };

    view! {
        <header class="app-header">
            <span class="app-title">"LoaTodo"</span>
            <nav class="app-nav">
                <For
                    each=pages
                    key=|page| *page
                    children=move |page| {
                        view! {
                            <button
                                class=move || if ctx.page.get() == page { "nav-btn active" } else { "nav-btn" }
                                on:click=move |_| ctx.navigate(page)
                            >
                                {page.label()}
                                <Show when=move || page == Page::Notifications && store.has_unread().get()>
                                    <span class="unread-badge"></span>
                                </Show>
                            </button>
                        }
                    }
                />
            </nav>
            <div class="header-controls">
                <select class="server-select" on:change=on_server_change>
                    <option value="" selected=move || ctx.server.get().is_none()>"대표 서버"</option>
                    <For
                        each=move || server_list.get()
                        key=|(name, count)| (name.clone(), *count)
                        children=move |(name, count)| {
                            let selected_name = name.clone();
                            view! {
                                <option
                                    value=name.clone()
                                    selected=move || ctx.server.get().as_deref() == Some(selected_name.as_str())
                                >
                                    {format!("{} ({})", name, count)}
                                </option>
                            }
                        }
                    />
                </select>
                <button class="header-btn" title="테마" on:click=move |_| ctx.toggle_theme()>
                    {move || ctx.theme.get().toggled().label()}
                </button>
                <button class="header-btn" title="눈 효과" on:click=cycle_seasonal>
                    {move || seasonal.get().label()}
                </button>
                <button class="header-btn" title="로그" on:click=move |_| ctx.open_modal(ModalContent::Logs)>
                    "로그"
                </button>
                <button class="header-btn logout" on:click=logout>"로그아웃"</button>
            </div>
        </header>
    }
}
