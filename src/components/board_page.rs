//! Recruiting Board Page
//!
//! Category-filtered post list with scroll-triggered pagination, plus the
//! post detail and new post forms shown in the modal.

use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::NewPost;
use crate::components::DeleteConfirmButton;
use crate::context::{use_app_context, ModalContent};
use crate::markdown::{preview, render_post};
use crate::models::{BoardPost, RecruitCategory};
use crate::store::{use_app_store, AppStateStoreFields};

/// Distance from the bottom (px) that triggers the next page
const LOAD_MORE_THRESHOLD: f64 = 200.0;

/// Whether the viewport bottom is within `threshold` of the content end
pub fn is_near_bottom(viewport_bottom: f64, content_height: f64, threshold: f64) -> bool {
    content_height - viewport_bottom <= threshold
}

fn scroll_metrics() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let scroll_y = window.scroll_y().ok()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    let content = window.document()?.document_element()?.scroll_height() as f64;
    Some((scroll_y + viewport, content))
}

fn category_from(value: &str) -> Option<RecruitCategory> {
    RecruitCategory::ALL.into_iter().find(|c| c.as_str() == value)
}

#[component]
pub fn BoardPage() -> impl IntoView {
    let ctx = use_app_context();
    let page_size = ctx.config().board_page_size;
    let throttle_millis = ctx.config().scroll_throttle_millis;

    let (category, set_category) = signal(None::<RecruitCategory>);
    let (posts, set_posts) = signal(Vec::<BoardPost>::new());
    let (next_page, set_next_page) = signal(0u32);
    let (has_more, set_has_more) = signal(true);
    let (loading, set_loading) = signal(false);
    let (throttled, set_throttled) = signal(false);

    // Responses for an older category are dropped
    let (generation, set_generation) = signal(0u32);

    let load_page = move || {
        if loading.get_untracked() || !has_more.get_untracked() {
            return;
        }
        set_loading.set(true);
        let page = next_page.get_untracked();
        let filter = category.get_untracked();
        let requested_for = generation.get_untracked();
        let api = ctx.api();
        spawn_local(async move {
            let result = api.list_posts(filter, page, page_size).await;
            if generation.get_untracked() != requested_for {
                return;
            }
            match result {
                Ok(loaded) => {
                    tracing::debug!("[BOARD] page {} with {} posts", loaded.page, loaded.content.len());
                    set_has_more.set(loaded.has_more());
                    set_next_page.set(loaded.page + 1);
                    set_posts.update(|list| list.extend(loaded.content));
                }
                Err(e) => {
                    set_has_more.set(false);
                    ctx.report(e);
                }
            }
            set_loading.set(false);
        });
    };

    // First page again whenever the filter changes or a post was written
    Effect::new(move |_| {
        let _ = category.get();
        let _ = ctx.reload_trigger.get();
        set_generation.update(|g| *g += 1);
        set_posts.set(Vec::new());
        set_next_page.set(0);
        set_has_more.set(true);
        set_loading.set(false);
        load_page();
    });

    let handle = window_event_listener(ev::scroll, move |_| {
        if throttled.get_untracked() {
            return;
        }
        set_throttled.set(true);
        spawn_local(async move {
            TimeoutFuture::new(throttle_millis).await;
            set_throttled.set(false);
        });
        if let Some((bottom, content)) = scroll_metrics() {
            if is_near_bottom(bottom, content, LOAD_MORE_THRESHOLD) {
                load_page();
            }
        }
    });
    on_cleanup(move || handle.remove());

    let filter_class = move |value: Option<RecruitCategory>| {
        move || if category.get() == value { "filter-btn active" } else { "filter-btn" }
    };

    view! {
        <div class="board-page">
            <div class="board-toolbar">
                <button class=filter_class(None) on:click=move |_| set_category.set(None)>"전체"</button>
                {RecruitCategory::ALL.into_iter().map(|c| {
                    view! {
                        <button class=filter_class(Some(c)) on:click=move |_| set_category.set(Some(c))>
                            {c.label()}
                        </button>
                    }
                }).collect_view()}
                <button class="write-btn" on:click=move |_| ctx.open_modal(ModalContent::NewPost)>"글쓰기"</button>
            </div>
            <ul class="post-list">
                <For
                    each=move || posts.get()
                    key=|post| post.id
                    children=move |post| {
                        let id = post.id;
                        view! {
                            <li class="post-row" on:click=move |_| ctx.open_modal(ModalContent::Post(id))>
                                <span class="post-category">{post.category.label()}</span>
                                <span class="post-title">{post.title.clone()}</span>
                                <span class="post-preview">{preview(&post.body, 60)}</span>
                                <span class="post-meta">
                                    {format!("{} · {} · 조회 {}", post.writer, post.created_date, post.views)}
                                </span>
                            </li>
                        }
                    }
                />
            </ul>
            <Show when=move || loading.get()>
                <div class="board-loading">"불러오는 중..."</div>
            </Show>
            <Show when=move || !loading.get() && posts.with(|p| p.is_empty())>
                <div class="board-empty">"게시글이 없습니다"</div>
            </Show>
            <Show when=move || !loading.get() && has_more.get() && !posts.with(|p| p.is_empty())>
                <button class="load-more-btn" on:click=move |_| load_page()>"더 보기"</button>
            </Show>
        </div>
    }
}

/// Full post with rendered markdown body
#[component]
pub fn PostDetail(post_id: i64) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (post, set_post) = signal(None::<BoardPost>);

    let api = ctx.api();
    spawn_local(async move {
        match api.get_post(post_id).await {
            Ok(loaded) => set_post.set(Some(loaded)),
            Err(e) => ctx.report(e),
        }
    });

    let can_delete = move || {
        let writer = post.with(|p| p.as_ref().map(|p| p.writer.clone()));
        store.member().with(|member| match (member, writer) {
            (Some(member), Some(writer)) => member.is_admin() || member.username == writer,
            _ => false,
        })
    };

    let delete = move |_: ()| {
        let api = ctx.api();
        spawn_local(async move {
            match api.delete_post(post_id).await {
                Ok(()) => {
                    ctx.close_modal();
                    ctx.toast("게시글을 삭제했습니다");
                    ctx.reload();
                }
                Err(e) => ctx.report(e),
            }
        });
    };

    view! {
        {move || match post.get() {
            None => view! { <div class="post-loading">"불러오는 중..."</div> }.into_any(),
            Some(post) => view! {
                <article class="post-detail">
                    <h2 class="post-title">{post.title.clone()}</h2>
                    <div class="post-meta">
                        {format!("{} · {} · {}", post.category.label(), post.writer, post.created_date)}
                    </div>
                    <div class="post-body" inner_html=render_post(&post.body)></div>
                </article>
            }.into_any(),
        }}
        <Show when=can_delete>
            <DeleteConfirmButton button_class="delete-btn" label="글 삭제" on_confirm=delete />
        </Show>
    }
}

/// Form for a new recruiting post
#[component]
pub fn NewPostForm() -> impl IntoView {
    let ctx = use_app_context();
    let (category, set_category) = signal(RecruitCategory::FriendsRecruit);
    let (title, set_title) = signal(String::new());
    let (body, set_body) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let draft = move || NewPost {
        category: category.get(),
        title: title.get(),
        body: body.get(),
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let post = draft();
        if !post.is_valid() || submitting.get_untracked() {
            return;
        }
        set_submitting.set(true);
        let api = ctx.api();
        spawn_local(async move {
            match api.create_post(&post).await {
                Ok(created) => {
                    tracing::info!("[BOARD] created post {}", created.id);
                    ctx.close_modal();
                    ctx.toast("게시글을 등록했습니다");
                    ctx.reload();
                }
                Err(e) => ctx.report(e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="new-post-form" on:submit=on_submit>
            <select on:change=move |ev| {
                if let Some(c) = category_from(&event_target_value(&ev)) {
                    set_category.set(c);
                }
            }>
                {RecruitCategory::ALL.into_iter().map(|c| {
                    view! { <option value=c.as_str() selected=move || category.get() == c>{c.label()}</option> }
                }).collect_view()}
            </select>
            <input
                type="text"
                placeholder="제목"
                prop:value=title
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <textarea
                placeholder="내용 (마크다운, %r%색상%r%)"
                prop:value=body
                on:input=move |ev| set_body.set(event_target_value(&ev))
            ></textarea>
            <button type="submit" disabled=move || submitting.get() || !draft().is_valid()>"등록"</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_near_bottom() {
        assert!(is_near_bottom(900.0, 1000.0, 200.0));
        assert!(is_near_bottom(1000.0, 1000.0, 200.0));
        assert!(!is_near_bottom(700.0, 1000.0, 200.0));
    }

    #[test]
    fn test_category_from_query_value() {
        assert_eq!(category_from("GUILD_RECRUIT"), Some(RecruitCategory::GuildRecruit));
        assert_eq!(category_from("guild"), None);
    }
}
