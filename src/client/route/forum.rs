use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Markdown, Page},
        constant::SITE_NAME,
        model::error::ApiError,
        router::Route,
        store::user::UserState,
        util::format_date,
    },
    model::{
        enums::ForumCategory,
        forum::{CreateThreadDto, ForumAuthorDto, ForumThreadDetailDto, ForumThreadListDto},
    },
};

#[cfg(feature = "web")]
use crate::client::api::forum::{create_reply, create_thread, get_thread, get_threads};

fn author_name(author: &ForumAuthorDto) -> String {
    author.name.clone().unwrap_or_else(|| "Member".to_string())
}

#[component]
pub fn Forum() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let mut category = use_signal(String::new);
    let mut query = use_signal(String::new);
    let mut listing = use_signal(|| None::<ForumThreadListDto>);
    let mut error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move { get_threads(category(), query()).await });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(found) => {
                    listing.set(Some(found.clone()));
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to fetch threads: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    let can_post = user_state.read().is_approved();

    rsx! {
        Title { "Forum | {SITE_NAME}" }
        Page {
            div {
                class: "row spread",
                h1 { "Forum" }
                if can_post {
                    Link { to: Route::NewThread {}, class: "btn btn-primary", "New thread" }
                }
            }
            div {
                class: "tabs",
                button {
                    class: if category().is_empty() { "tab tab-active" } else { "tab" },
                    onclick: move |_| category.set(String::new()),
                    "All"
                }
                for c in ForumCategory::ALL {
                    {
                        let value = c.as_str();
                        let count = listing()
                            .and_then(|l| l.category_counts.iter().find(|cc| cc.category == *c).map(|cc| cc.count))
                            .unwrap_or(0);
                        rsx! {
                            button {
                                key: "{value}",
                                class: if category() == value { "tab tab-active" } else { "tab" },
                                onclick: move |_| category.set(value.to_string()),
                                "{value} ({count})"
                            }
                        }
                    }
                }
            }
            input {
                class: "search",
                placeholder: "Search threads",
                value: "{query}",
                oninput: move |e| query.set(e.value()),
            }
            if let Some(err) = error() {
                p { class: "error", "{err}" }
            } else if let Some(found) = listing() {
                if found.threads.is_empty() {
                    p { class: "muted", "No threads yet" }
                }
                div {
                    class: "list",
                    for thread in found.threads {
                        Link {
                            key: "{thread.id}",
                            to: Route::ForumThread { slug: thread.slug.clone() },
                            class: "card",
                            h3 {
                                if thread.is_pinned {
                                    span { class: "badge badge-accent", "Pinned" }
                                }
                                if thread.is_locked {
                                    span { class: "badge", "Locked" }
                                }
                                "{thread.title}"
                            }
                            p {
                                class: "muted",
                                "{author_name(&thread.author)} · {thread.category} · {thread.reply_count} replies · {thread.view_count} views · {format_date(&thread.created_at)}"
                            }
                        }
                    }
                }
            } else {
                span { class: "spinner" }
            }
        }
    }
}

#[component]
pub fn ForumThread(slug: String) -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let mut detail = use_signal(|| None::<ForumThreadDetailDto>);
    let mut error = use_signal(|| None::<ApiError>);
    let mut refetch_trigger = use_signal(|| 0u32);
    let mut reply = use_signal(String::new);
    let mut reply_error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    {
        let slug = slug.clone();
        let future = use_resource(move || {
            let slug = slug.clone();
            async move {
                let _ = refetch_trigger();
                get_thread(&slug).await
            }
        });

        use_effect(move || {
            match &*future.read_unchecked() {
                Some(Ok(found)) => detail.set(Some(found.clone())),
                Some(Err(err)) => error.set(Some(err.clone())),
                None => (),
            }
        });
    }

    let on_reply = {
        let slug = slug.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let slug = slug.clone();
            let content = reply();

            #[cfg(feature = "web")]
            spawn(async move {
                match create_reply(&slug, content).await {
                    Ok(_) => {
                        reply.set(String::new());
                        reply_error.set(None);
                        refetch_trigger.set(refetch_trigger() + 1);
                    }
                    Err(err) => reply_error.set(Some(err)),
                }
            });
        }
    };

    let can_reply = user_state.read().is_approved();

    rsx! {
        if let Some(d) = detail() {
            Title { "{d.thread.title} | {SITE_NAME}" }
            Page {
                Link { to: Route::Forum {}, "← Back to forum" }
                h1 { "{d.thread.title}" }
                p {
                    class: "muted",
                    "{author_name(&d.thread.author)} · {d.thread.category} · {format_date(&d.thread.created_at)}"
                }
                div {
                    class: "card",
                    Markdown { content: d.content.clone() }
                }
                h2 { "{d.replies.len()} replies" }
                for r in d.replies.iter() {
                    div {
                        key: "{r.id}",
                        class: if r.parent_id.is_some() { "card reply nested" } else { "card reply" },
                        p { class: "muted", "{author_name(&r.author)} · {format_date(&r.created_at)}" }
                        Markdown { content: r.content.clone() }
                    }
                }
                if d.thread.is_locked {
                    p { class: "muted", "This thread is locked." }
                } else if can_reply {
                    form {
                        class: "form",
                        onsubmit: on_reply,
                        textarea {
                            rows: 4,
                            placeholder: "Write a reply",
                            value: "{reply}",
                            oninput: move |e| reply.set(e.value()),
                        }
                        if let Some(err) = reply_error() {
                            p { class: "error", "{err}" }
                        }
                        button { class: "btn btn-primary", r#type: "submit", "Reply" }
                    }
                } else {
                    p { class: "muted", "Approved members can reply." }
                }
            }
        } else if let Some(err) = error() {
            ErrorPage { status: err.status, message: err.message }
        } else {
            LoadingPage {}
        }
    }
}

#[component]
pub fn NewThread() -> Element {
    let nav = navigator();
    let mut title = use_signal(String::new);
    let mut category = use_signal(|| ForumCategory::default().as_str().to_string());
    let mut content = use_signal(String::new);
    let mut error = use_signal(|| None::<ApiError>);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let payload = CreateThreadDto {
            title: title(),
            content: content(),
            category: Some(category()),
        };

        #[cfg(feature = "web")]
        spawn(async move {
            match create_thread(payload).await {
                Ok(created) => {
                    nav.push(Route::ForumThread { slug: created.slug });
                }
                Err(err) => {
                    tracing::error!("Failed to create thread: {}", err);
                    error.set(Some(err));
                }
            }
        });
    };

    rsx! {
        Title { "New thread | {SITE_NAME}" }
        Page {
            h1 { "Start a discussion" }
            form {
                class: "form",
                onsubmit: on_submit,
                label { "Title" }
                input { value: "{title}", oninput: move |e| title.set(e.value()) }
                label { "Category" }
                select {
                    value: "{category}",
                    onchange: move |e| category.set(e.value()),
                    for c in ForumCategory::ALL {
                        option { value: "{c}", "{c}" }
                    }
                }
                label { "Content (markdown)" }
                textarea { rows: 10, value: "{content}", oninput: move |e| content.set(e.value()) }
                if let Some(err) = error() {
                    p { class: "error", "{err}" }
                }
                button { class: "btn btn-primary", r#type: "submit", "Post thread" }
            }
        }
    }
}
