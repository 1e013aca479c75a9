use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_brands_icons::FaGoogle, Icon};

use crate::client::{
    component::{LoadingPage, Page},
    constant::{SITE_NAME, SITE_TAGLINE},
    router::Route,
    store::user::UserState,
};

#[component]
pub fn Login() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let nav = navigator();

    // Signed-in users go straight to the dashboard
    use_effect(move || {
        if user_state.read().user.is_some() {
            nav.push(Route::Dashboard {});
        }
    });

    let fetched = user_state.read().fetched;
    let logged_in = user_state.read().user.is_some();

    rsx! {
        Title { "Login | {SITE_NAME}" }
        if !fetched || logged_in {
            LoadingPage {}
        } else {
            Page {
                class: "page-center",
                div {
                    class: "card stack center",
                    h1 { {SITE_NAME} }
                    p { class: "muted", {SITE_TAGLINE} }
                    a {
                        href: "/api/auth/login",
                        class: "btn btn-primary",
                        Icon {
                            width: 20,
                            height: 20,
                            icon: FaGoogle
                        }
                        span { "Continue with Google" }
                    }
                }
            }
        }
    }
}
