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
        enums::RsvpStatus,
        event::{EventDto, RsvpSummaryDto},
    },
};

#[cfg(feature = "web")]
use crate::client::api::event::{cancel_rsvp, get_event, get_events, get_rsvp_summary, rsvp};

#[component]
pub fn Events() -> Element {
    let mut events = use_signal(|| None::<Vec<EventDto>>);
    let mut error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(|| async move { get_events().await });

        use_effect(move || {
            match &*future.read_unchecked() {
                Some(Ok(list)) => events.set(Some(list.clone())),
                Some(Err(err)) => {
                    tracing::error!("Failed to fetch events: {}", err);
                    error.set(Some(err.clone()));
                }
                None => (),
            }
        });
    }

    rsx! {
        Title { "Events | {SITE_NAME}" }
        if let Some(list) = events() {
            Page {
                h1 { "Upcoming events" }
                if list.is_empty() {
                    p { class: "muted", "No upcoming events. Check back soon." }
                }
                div {
                    class: "grid",
                    for event in list {
                        Link {
                            key: "{event.id}",
                            to: Route::EventDetail { slug: event.slug.clone() },
                            class: if event.is_featured { "card card-featured" } else { "card" },
                            if let Some(cover) = &event.cover_image_url {
                                img { class: "cover", src: "{cover}" }
                            }
                            h3 { "{event.title}" }
                            p {
                                class: "muted",
                                "{format_date(&event.event_date)}"
                                if let Some(time) = &event.event_time {
                                    " · {time}"
                                }
                            }
                            if event.is_virtual {
                                p { "Online" }
                            } else if let Some(city) = &event.city {
                                p { "{city}" }
                            }
                            if let Some(description) = &event.description {
                                p { "{description}" }
                            }
                        }
                    }
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
pub fn EventDetail(slug: String) -> Element {
    let mut event = use_signal(|| None::<EventDto>);
    let mut error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(use_reactive!(|slug| async move { get_event(&slug).await }));

        use_effect(move || {
            match &*future.read_unchecked() {
                Some(Ok(found)) => event.set(Some(found.clone())),
                Some(Err(err)) => error.set(Some(err.clone())),
                None => (),
            }
        });
    }

    rsx! {
        if let Some(e) = event() {
            Title { "{e.title} | {SITE_NAME}" }
            Page {
                if let Some(cover) = &e.cover_image_url {
                    img { class: "cover cover-lg", src: "{cover}" }
                }
                h1 { "{e.title}" }
                p {
                    class: "muted",
                    "{format_date(&e.event_date)}"
                    if let Some(time) = &e.event_time {
                        " · {time}"
                    }
                }
                if let Some(location) = &e.location {
                    p { "{location}" }
                }
                if e.is_virtual {
                    if let Some(link) = &e.virtual_link {
                        p { a { href: "{link}", target: "_blank", "Join online" } }
                    }
                }
                if !e.tags.is_empty() {
                    div {
                        class: "row",
                        for tag in e.tags.iter() {
                            span { class: "badge", "{tag}" }
                        }
                    }
                }
                RsvpPanel { slug: e.slug.clone() }
                if let Some(content) = &e.content {
                    Markdown { content: content.clone() }
                } else if let Some(description) = &e.description {
                    p { "{description}" }
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
fn RsvpPanel(slug: String) -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let mut summary = use_signal(|| None::<RsvpSummaryDto>);
    let mut error = use_signal(|| None::<ApiError>);
    let mut refetch_trigger = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    {
        let slug = slug.clone();
        let future = use_resource(move || {
            let slug = slug.clone();
            async move {
                let _ = refetch_trigger();
                get_rsvp_summary(&slug).await
            }
        });

        use_effect(move || {
            match &*future.read_unchecked() {
                Some(Ok(found)) => summary.set(Some(found.clone())),
                Some(Err(err)) => tracing::error!("Failed to fetch RSVP summary: {}", err),
                None => (),
            }
        });
    }

    let register = {
        let slug = slug.clone();
        move |_| {
            let slug = slug.clone();
            #[cfg(feature = "web")]
            spawn(async move {
                match rsvp(&slug).await {
                    Ok(_) => {
                        error.set(None);
                        refetch_trigger.set(refetch_trigger() + 1);
                    }
                    Err(err) => error.set(Some(err)),
                }
            });
        }
    };

    let cancel = {
        let slug = slug.clone();
        move |_| {
            let slug = slug.clone();
            #[cfg(feature = "web")]
            spawn(async move {
                match cancel_rsvp(&slug).await {
                    Ok(_) => {
                        error.set(None);
                        refetch_trigger.set(refetch_trigger() + 1);
                    }
                    Err(err) => error.set(Some(err)),
                }
            });
        }
    };

    let logged_in = user_state.read().user.is_some();

    rsx! {
        div {
            class: "card stack",
            if let Some(s) = summary() {
                p {
                    "{s.registered} registered"
                    if let Some(capacity) = s.capacity {
                        " of {capacity}"
                    }
                    if s.waitlist > 0 {
                        " · {s.waitlist} on the waitlist"
                    }
                }
                if !logged_in {
                    Link { to: Route::Login {}, class: "btn btn-primary", "Log in to RSVP" }
                } else {
                    match s.user_status {
                        Some(RsvpStatus::Registered) => rsx! {
                            p { class: "success", "You're registered." }
                            button { class: "btn btn-outline", onclick: cancel, "Cancel RSVP" }
                        },
                        Some(RsvpStatus::Waitlist) => rsx! {
                            p { "You're on the waitlist." }
                            button { class: "btn btn-outline", onclick: cancel, "Leave waitlist" }
                        },
                        Some(RsvpStatus::Attended) => rsx! {
                            p { "You attended this event." }
                        },
                        Some(RsvpStatus::Cancelled) | None => rsx! {
                            button { class: "btn btn-primary", onclick: register, "RSVP" }
                        },
                    }
                }
            }
            if let Some(err) = error() {
                p { class: "error", "{err}" }
            }
        }
    }
}
