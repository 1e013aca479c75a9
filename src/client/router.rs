use dioxus::prelude::*;

use crate::client::component::{Layout, RequiresAdmin, RequiresLoggedIn};
use crate::client::route::{
    Admin, BillingSuccess, Dashboard, EditProfile, EventDetail, Events, Forum, ForumThread, Home,
    JobDetail, Jobs, Login, MemberDetail, Members, NewJob, NewStartup, NewThread, NotFound,
    Onboarding, Pricing, Startups,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},

    #[route("/login")]
    Login {},

    #[route("/pricing")]
    Pricing {},

    #[layout(RequiresLoggedIn)]
    #[route("/dashboard")]
    Dashboard {},

    #[route("/onboarding")]
    Onboarding {},

    #[route("/profile/edit")]
    EditProfile {},

    #[route("/billing/success")]
    BillingSuccess {},

    #[route("/jobs/new")]
    NewJob {},

    #[route("/startups/new")]
    NewStartup {},

    #[route("/forum/new")]
    NewThread {},
    #[end_layout]

    #[route("/members")]
    Members {},

    #[route("/members/:id")]
    MemberDetail { id: i32 },

    #[route("/startups")]
    Startups {},

    #[route("/events")]
    Events {},

    #[route("/events/:slug")]
    EventDetail { slug: String },

    #[route("/jobs")]
    Jobs {},

    #[route("/jobs/:id")]
    JobDetail { id: i32 },

    #[route("/forum")]
    Forum {},

    #[route("/forum/:slug")]
    ForumThread { slug: String },

    #[layout(RequiresAdmin)]
    #[route("/admin")]
    Admin {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
