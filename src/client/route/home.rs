use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::Page,
        constant::{SITE_NAME, SITE_TAGLINE},
        router::Route,
        store::user::UserState,
        util::format_date,
    },
    model::{event::EventDto, gallery::GalleryImageDto},
};

#[cfg(feature = "web")]
use crate::client::api::{event::get_events, gallery::get_gallery};

#[component]
pub fn Home() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let mut images = use_signal(Vec::<GalleryImageDto>::new);
    let mut events = use_signal(Vec::<EventDto>::new);

    #[cfg(feature = "web")]
    {
        let gallery_future = use_resource(|| async move { get_gallery().await });
        let events_future = use_resource(|| async move { get_events().await });

        use_effect(move || {
            match &*gallery_future.read_unchecked() {
                Some(Ok(gallery)) => images.set(gallery.images.clone()),
                Some(Err(err)) => tracing::error!("Failed to fetch gallery: {}", err),
                None => (),
            }
        });

        use_effect(move || {
            match &*events_future.read_unchecked() {
                Some(Ok(list)) => events.set(list.iter().take(3).cloned().collect()),
                Some(Err(err)) => tracing::error!("Failed to fetch events: {}", err),
                None => (),
            }
        });
    }

    let logged_in = user_state.read().user.is_some();

    rsx! {
        Title { "{SITE_NAME}" }
        Page {
            section {
                class: "hero",
                h1 { {SITE_NAME} }
                p { class: "lead", {SITE_TAGLINE} }
                div {
                    class: "row",
                    if logged_in {
                        Link { to: Route::Dashboard {}, class: "btn btn-primary", "Go to dashboard" }
                    } else {
                        Link { to: Route::Login {}, class: "btn btn-primary", "Join the community" }
                    }
                    Link { to: Route::Members {}, class: "btn btn-outline", "Browse members" }
                }
            }

            if !events().is_empty() {
                section {
                    h2 { "Upcoming events" }
                    div {
                        class: "grid",
                        for event in events() {
                            Link {
                                key: "{event.id}",
                                to: Route::EventDetail { slug: event.slug.clone() },
                                class: "card",
                                h3 { "{event.title}" }
                                p { class: "muted", "{format_date(&event.event_date)}" }
                                if let Some(city) = &event.city {
                                    p { "{city}" }
                                }
                            }
                        }
                    }
                }
            }

            if !images().is_empty() {
                section {
                    h2 { "From our gatherings" }
                    div {
                        class: "gallery",
                        for image in images() {
                            img {
                                key: "{image.public_id}",
                                src: "{image.url}",
                                width: "{image.width}",
                                height: "{image.height}",
                                loading: "lazy",
                            }
                        }
                    }
                }
            }
        }
    }
}
