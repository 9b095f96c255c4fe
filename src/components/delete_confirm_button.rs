//! Delete Confirm Button Component
//!
//! Deleting a character, friend or post takes two clicks.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Idle,
    Asking,
}

impl Step {
    /// Step after a press; `confirmed` is None for the first button
    fn after(self, confirmed: Option<bool>) -> (Step, bool) {
        match (self, confirmed) {
            (Step::Idle, _) => (Step::Asking, false),
            (Step::Asking, Some(true)) => (Step::Idle, true),
            (Step::Asking, _) => (Step::Idle, false),
        }
    }
}

/// `label` button that turns into `prompt` with ✓/✗.
/// `on_confirm` runs on ✓ and the button returns to its first state.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into, default = "삭제".to_string())] label: String,
    #[prop(into, default = "삭제할까요?".to_string())] prompt: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (step, set_step) = signal(Step::Idle);

    let press = move |ev: web_sys::MouseEvent, confirmed: Option<bool>| {
        ev.stop_propagation();
        let (next, run) = step.get_untracked().after(confirmed);
        set_step.set(next);
        if run {
            on_confirm.run(());
        }
    };

    move || match step.get() {
        Step::Idle => view! {
            <button class=button_class.clone() on:click=move |ev| press(ev, None)>
                {label.clone()}
            </button>
        }
        .into_any(),
        Step::Asking => view! {
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button class="confirm-btn" on:click=move |ev| press(ev, Some(true))>"✓"</button>
                <button class="cancel-btn" on:click=move |ev| press(ev, Some(false))>"✗"</button>
            </span>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_runs_once_and_resets() {
        let (asking, run) = Step::Idle.after(None);
        assert_eq!((asking, run), (Step::Asking, false));
        assert_eq!(asking.after(Some(true)), (Step::Idle, true));
        assert_eq!(asking.after(Some(false)), (Step::Idle, false));
    }
}
