use dioxus::prelude::*;

use crate::client::{
    constant::{SITE_NAME, SITE_TAGLINE},
    router::Route,
    store::user::UserState,
};

#[cfg(feature = "web")]
use crate::client::api::user::get_user;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let mut user_state = use_context_provider(|| Signal::new(UserState::default()));

    // Fetch user on first load
    #[cfg(feature = "web")]
    {
        let future = use_resource(|| async move { get_user().await });

        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                let mut state = user_state.write();
                match result {
                    Ok(user) => state.user = user.clone(),
                    Err(err) => {
                        dioxus_logger::tracing::error!("Failed to fetch user: {}", err);
                        state.user = None;
                    }
                }
                state.fetched = true;
            }
        });
    }

    rsx! {
        Title { "{SITE_NAME}" }
        document::Link { rel: "icon", href: FAVICON }
        document::Meta {
            name: "description",
            content: SITE_TAGLINE
        }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
