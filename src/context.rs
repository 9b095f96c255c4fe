//! Application Context
//!
//! Shared UI state provided via Leptos Context API: theme, page, selected
//! server, modal, toast and the auth token.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, ApiError};
use crate::config::AppConfig;
use crate::storage::{browser_preferences, Theme};

/// Top-level views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Todo,
    Friends,
    Board,
    Notifications,
    Admin,
    Login,
}

impl Page {
    pub fn label(self) -> &'static str {
        match self {
            Page::Todo => "숙제",
            Page::Friends => "깐부",
            Page::Board => "모집 게시판",
            Page::Notifications => "알림",
            Page::Admin => "관리자",
            Page::Login => "로그인",
        }
    }
}

/// What the modal is showing
#[derive(Debug, Clone, PartialEq)]
pub enum ModalContent {
    CharacterSettings(i64),
    FriendSettings(i64),
    Post(i64),
    NewPost,
    Logs,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub is_error: bool,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
    /// Trigger to reload server data - read
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
    pub theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
    pub page: ReadSignal<Page>,
    set_page: WriteSignal<Page>,
    /// Server whose characters are shown (None = busiest server)
    pub server: ReadSignal<Option<String>>,
    set_server: WriteSignal<Option<String>>,
    pub modal: ReadSignal<Option<ModalContent>>,
    set_modal: WriteSignal<Option<ModalContent>>,
    pub toast: ReadSignal<Option<Toast>>,
    set_toast: WriteSignal<Option<Toast>>,
    pub token: ReadSignal<Option<String>>,
    set_token: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(config: AppConfig, theme: Theme, token: Option<String>) -> Self {
        let start_page = if token.is_some() { Page::Todo } else { Page::Login };
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        let (theme, set_theme) = signal(theme);
        let (page, set_page) = signal(start_page);
        let (server, set_server) = signal(None::<String>);
        let (modal, set_modal) = signal(None::<ModalContent>);
        let (toast, set_toast) = signal(None::<Toast>);
        let (token, set_token) = signal(token);
        Self {
            config: StoredValue::new(config),
            reload_trigger,
            set_reload_trigger,
            theme,
            set_theme,
            page,
            set_page,
            server,
            set_server,
            modal,
            set_modal,
            toast,
            set_toast,
            token,
            set_token,
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Client carrying the current token
    pub fn api(&self) -> ApiClient {
        let base_url = self.config.with_value(|c| c.api_base_url.clone());
        ApiClient::new(&base_url, self.token.get_untracked())
    }

    /// Trigger a reload of server data
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn navigate(&self, page: Page) {
        self.set_modal.set(None);
        self.set_page.set(page);
    }

    pub fn toggle_theme(&self) {
        let next = self.theme.get_untracked().toggled();
        self.set_theme.set(next);
        if let Err(e) = browser_preferences().set_theme(next) {
            tracing::warn!("[CTX] theme not saved: {}", e);
        }
    }

    pub fn set_server(&self, server: Option<String>) {
        self.set_server.set(server);
    }

    pub fn open_modal(&self, content: ModalContent) {
        self.set_modal.set(Some(content));
    }

    pub fn close_modal(&self) {
        self.set_modal.set(None);
    }

    pub fn toast(&self, message: impl Into<String>) {
        self.show_toast(message.into(), false);
    }

    fn show_toast(&self, message: String, is_error: bool) {
        let id = self.toast.get_untracked().map(|t| t.id + 1).unwrap_or(1);
        self.set_toast.set(Some(Toast { id, message, is_error }));

        let millis = self.config.with_value(|c| c.toast_millis);
        let toast = self.toast;
        let set_toast = self.set_toast;
        spawn_local(async move {
            TimeoutFuture::new(millis).await;
            // A newer toast replaced this one; leave it alone
            if toast.get_untracked().map(|t| t.id) == Some(id) {
                set_toast.set(None);
            }
        });
    }

    /// Surface a failed request. Cached data stays as it was.
    pub fn report(&self, err: ApiError) {
        tracing::error!("[CTX] request failed: {}", err);
        if err.is_unauthorized() {
            self.logout();
        }
        self.show_toast(err.to_string(), true);
    }

    pub fn login(&self, token: String) {
        if let Err(e) = browser_preferences().set_token(Some(&token)) {
            tracing::warn!("[CTX] token not saved: {}", e);
        }
        self.set_token.set(Some(token));
        self.navigate(Page::Todo);
        self.reload();
    }

    /// Drop the token and go to the login page
    pub fn logout(&self) {
        if let Err(e) = browser_preferences().set_token(None) {
            tracing::warn!("[CTX] token not cleared: {}", e);
        }
        self.set_token.set(None);
        self.navigate(Page::Login);
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.get().is_some()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
