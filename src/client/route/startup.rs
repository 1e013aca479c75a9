use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Page},
        constant::SITE_NAME,
        model::error::ApiError,
        router::Route,
        store::user::UserState,
        util::{non_empty, parse_number},
    },
    model::{
        enums::StartupStage,
        startup::{CreateStartupDto, StartupDto},
    },
};

#[cfg(feature = "web")]
use crate::client::api::startup::{create_startup, get_startups};

#[component]
pub fn Startups() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let mut startups = use_signal(|| None::<Vec<StartupDto>>);
    let mut error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(|| async move { get_startups().await });

        use_effect(move || {
            match &*future.read_unchecked() {
                Some(Ok(list)) => startups.set(Some(list.clone())),
                Some(Err(err)) => {
                    tracing::error!("Failed to fetch startups: {}", err);
                    error.set(Some(err.clone()));
                }
                None => (),
            }
        });
    }

    let logged_in = user_state.read().user.is_some();

    rsx! {
        Title { "Startups | {SITE_NAME}" }
        if let Some(list) = startups() {
            Page {
                div {
                    class: "row spread",
                    h1 { "Startups" }
                    if logged_in {
                        Link { to: Route::NewStartup {}, class: "btn btn-primary", "Add your startup" }
                    }
                }
                if list.is_empty() {
                    p { class: "muted", "No startups listed yet" }
                }
                div {
                    class: "grid",
                    for startup in list {
                        StartupCard { key: "{startup.id}", startup }
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
fn StartupCard(startup: StartupDto) -> Element {
    rsx! {
        div {
            class: if startup.is_featured { "card card-featured" } else { "card" },
            div {
                class: "row",
                if let Some(logo) = &startup.logo_url {
                    img { class: "avatar", src: "{logo}" }
                }
                div {
                    h3 { "{startup.name}" }
                    if let Some(tagline) = &startup.tagline {
                        p { class: "muted", "{tagline}" }
                    }
                }
            }
            div {
                class: "row",
                span { class: "badge", "{startup.stage}" }
                if let Some(sector) = &startup.sector {
                    span { class: "badge", "{sector}" }
                }
                if startup.is_raising {
                    span { class: "badge badge-accent", "Raising" }
                }
            }
            if let Some(description) = &startup.description {
                p { "{description}" }
            }
            if let Some(url) = &startup.website_url {
                a { href: "{url}", target: "_blank", "{url}" }
            }
        }
    }
}

#[component]
pub fn NewStartup() -> Element {
    let nav = navigator();
    let mut name = use_signal(String::new);
    let mut tagline = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut website_url = use_signal(String::new);
    let mut logo_url = use_signal(String::new);
    let mut stage = use_signal(StartupStage::default);
    let mut sector = use_signal(String::new);
    let mut city = use_signal(String::new);
    let mut team_size = use_signal(String::new);
    let mut funding_raised = use_signal(String::new);
    let mut is_raising = use_signal(|| false);
    let mut raise_amount = use_signal(String::new);
    let mut error = use_signal(|| None::<ApiError>);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let payload = CreateStartupDto {
            name: name(),
            tagline: non_empty(tagline()),
            description: non_empty(description()),
            logo_url: non_empty(logo_url()),
            website_url: non_empty(website_url()),
            stage: stage(),
            sector: non_empty(sector()),
            city: non_empty(city()),
            team_size: parse_number(&team_size()),
            funding_raised: non_empty(funding_raised()),
            is_raising: is_raising(),
            raise_amount: non_empty(raise_amount()),
        };

        #[cfg(feature = "web")]
        spawn(async move {
            match create_startup(payload).await {
                Ok(_) => {
                    nav.push(Route::Startups {});
                }
                Err(err) => {
                    tracing::error!("Failed to create startup: {}", err);
                    error.set(Some(err));
                }
            }
        });
    };

    rsx! {
        Title { "Add startup | {SITE_NAME}" }
        Page {
            h1 { "Add your startup" }
            form {
                class: "form",
                onsubmit: on_submit,
                label { "Name" }
                input { value: "{name}", oninput: move |e| name.set(e.value()) }
                label { "Tagline" }
                input { value: "{tagline}", oninput: move |e| tagline.set(e.value()) }
                label { "Description" }
                textarea { rows: 5, value: "{description}", oninput: move |e| description.set(e.value()) }
                label { "Website" }
                input { value: "{website_url}", oninput: move |e| website_url.set(e.value()) }
                label { "Logo URL" }
                input { value: "{logo_url}", oninput: move |e| logo_url.set(e.value()) }
                label { "Stage" }
                select {
                    value: "{stage}",
                    onchange: move |e| {
                        if let Some(parsed) = StartupStage::parse(&e.value()) {
                            stage.set(parsed);
                        }
                    },
                    for s in StartupStage::ALL {
                        option { value: "{s}", "{s}" }
                    }
                }
                label { "Sector" }
                input { value: "{sector}", oninput: move |e| sector.set(e.value()) }
                label { "City" }
                input { value: "{city}", oninput: move |e| city.set(e.value()) }
                label { "Team size" }
                input { r#type: "number", value: "{team_size}", oninput: move |e| team_size.set(e.value()) }
                label { "Funding raised so far" }
                input { value: "{funding_raised}", oninput: move |e| funding_raised.set(e.value()) }
                label {
                    class: "row",
                    input {
                        r#type: "checkbox",
                        checked: is_raising(),
                        onchange: move |e| is_raising.set(e.checked()),
                    }
                    "Currently raising"
                }
                if is_raising() {
                    label { "Raise amount" }
                    input { value: "{raise_amount}", oninput: move |e| raise_amount.set(e.value()) }
                }
                if let Some(err) = error() {
                    p { class: "error", "{err}" }
                }
                button { class: "btn btn-primary", r#type: "submit", "Save startup" }
            }
        }
    }
}
