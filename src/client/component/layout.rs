use dioxus::prelude::*;

use crate::client::{component::Header, constant::SITE_NAME, router::Route};

#[component]
pub fn Layout() -> Element {
    rsx!(div {
        Header {  }
        Outlet::<Route> {}
        footer {
            class: "footer",
            p { "© {SITE_NAME}" }
        }
    })
}
