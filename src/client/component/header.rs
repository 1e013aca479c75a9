use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_brands_icons::FaGoogle, Icon};

use crate::client::{constant::SITE_NAME, router::Route, store::user::UserState};

#[component]
pub fn Header() -> Element {
    let user_state = use_context::<Signal<UserState>>();

    let user_logged_in = user_state.read().user.is_some();
    let user_is_admin = user_state.read().is_admin();
    let fetch_completed = user_state.read().fetched;

    rsx!(nav {
        class: "header",
        Link {
            to: Route::Home {},
            class: "brand",
            {SITE_NAME}
        }
        div {
            class: "nav-links",
            Link { to: Route::Startups {}, "Startups" }
            Link { to: Route::Members {}, "Members" }
            Link { to: Route::Events {}, "Events" }
            Link { to: Route::Jobs {}, "Jobs" }
            Link { to: Route::Forum {}, "Forum" }
            Link { to: Route::Pricing {}, "Pricing" }
        }
        div {
            class: "nav-actions",
            if fetch_completed && user_logged_in {
                Link {
                    to: Route::Dashboard {},
                    class: "btn btn-outline",
                    "Dashboard"
                }
                if user_is_admin {
                    Link {
                        to: Route::Admin {},
                        class: "btn btn-outline",
                        "Admin"
                    }
                }
                a {
                    href: "/api/auth/logout",
                    class: "btn btn-outline",
                    "Logout"
                }
            } else if fetch_completed {
                a {
                    href: "/api/auth/login",
                    class: "btn btn-primary",
                    Icon {
                        width: 18,
                        height: 18,
                        icon: FaGoogle
                    }
                    span { "Login" }
                }
            }
        }
    })
}
