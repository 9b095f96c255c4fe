//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (pending, set_pending) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let user = username.get_untracked().trim().to_string();
        let pass = password.get_untracked();
        if user.is_empty() || pass.is_empty() || pending.get_untracked() {
            return;
        }
        set_pending.set(true);
        let api = ctx.api();
        spawn_local(async move {
            match api.login(&user, &pass).await {
                Ok(response) => {
                    tracing::info!("[LOGIN] signed in as {}", user);
                    set_password.set(String::new());
                    ctx.login(response.token);
                }
                Err(e) => ctx.report(e),
            }
            set_pending.set(false);
        });
    };

    view! {
        <div class="login-page">
            <form class="login-form" on:submit=on_submit>
                <h2>"LoaTodo 로그인"</h2>
                <input
                    type="text"
                    placeholder="아이디"
                    autocomplete="username"
                    prop:value=username
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="비밀번호"
                    autocomplete="current-password"
                    prop:value=password
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "로그인 중..." } else { "로그인" }}
                </button>
            </form>
        </div>
    }
}
