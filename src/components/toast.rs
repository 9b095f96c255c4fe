//! Toast Component

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ToastView() -> impl IntoView {
    let ctx = use_app_context();

    move || {
        ctx.toast.get().map(|toast| {
            let class = if toast.is_error { "toast error" } else { "toast" };
            view! { <div class=class role="status">{toast.message}</div> }
        })
    }
}
