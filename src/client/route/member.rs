use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Page},
        constant::SITE_NAME,
        model::error::ApiError,
        router::Route,
        store::user::UserState,
        util::non_empty,
    },
    model::{enums::Role, member::MemberDto},
};

#[cfg(feature = "web")]
use crate::client::api::{
    introduction::request_introduction,
    member::{get_member, get_members},
};

#[component]
pub fn Members() -> Element {
    let mut role = use_signal(String::new);
    let mut city = use_signal(String::new);
    let mut query = use_signal(String::new);
    let mut members = use_signal(|| None::<Vec<MemberDto>>);
    let mut error = use_signal(|| None::<ApiError>);

    // Re-runs whenever a filter changes
    #[cfg(feature = "web")]
    let future = use_resource(move || async move { get_members(role(), city(), query()).await });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(list) => {
                    members.set(Some(list.clone()));
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to fetch members: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    rsx! {
        Title { "Members | {SITE_NAME}" }
        Page {
            h1 { "Members" }
            div {
                class: "filters",
                select {
                    value: "{role}",
                    onchange: move |e| role.set(e.value()),
                    option { value: "", "All roles" }
                    for r in Role::ALL {
                        option { value: "{r}", "{r}" }
                    }
                }
                input {
                    placeholder: "City",
                    value: "{city}",
                    oninput: move |e| city.set(e.value()),
                }
                input {
                    placeholder: "Search name, company or bio",
                    value: "{query}",
                    oninput: move |e| query.set(e.value()),
                }
            }
            if let Some(err) = error() {
                p { class: "error", "{err}" }
            } else if let Some(list) = members() {
                if list.is_empty() {
                    p { class: "muted", "No members match these filters" }
                } else {
                    div {
                        class: "grid",
                        for member in list {
                            MemberCard { key: "{member.id}", member }
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
fn MemberCard(member: MemberDto) -> Element {
    let name = member.name.clone().unwrap_or_else(|| "Member".to_string());

    rsx! {
        Link {
            to: Route::MemberDetail { id: member.id },
            class: "card",
            div {
                class: "row",
                if let Some(image) = &member.image {
                    img { class: "avatar", src: "{image}" }
                }
                div {
                    h3 {
                        "{name}"
                        if member.is_verified {
                            span { class: "badge", "Verified" }
                        }
                    }
                    p { class: "muted", "{member.role}" }
                }
            }
            if let (Some(title), Some(company)) = (&member.title, &member.company) {
                p { "{title} at {company}" }
            }
            if let Some(city) = &member.city {
                p { class: "muted", "{city}" }
            }
        }
    }
}

#[component]
pub fn MemberDetail(id: i32) -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let mut member = use_signal(|| None::<MemberDto>);
    let mut error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    let future = use_resource(use_reactive!(|id| async move { get_member(id).await }));

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(found) => member.set(Some(found.clone())),
                Err(err) => error.set(Some(err.clone())),
            }
        }
    });

    let current_user_id = user_state.read().user.as_ref().map(|u| u.id);

    rsx! {
        Title { "Member | {SITE_NAME}" }
        if let Some(m) = member() {
            Page {
                div {
                    class: "card stack",
                    div {
                        class: "row",
                        if let Some(image) = &m.image {
                            img { class: "avatar avatar-lg", src: "{image}" }
                        }
                        div {
                            h1 { {m.name.clone().unwrap_or_else(|| "Member".to_string())} }
                            p { class: "muted", "{m.role}" }
                            if m.is_verified {
                                span { class: "badge", "Verified" }
                            }
                            if m.is_premium {
                                span { class: "badge badge-accent", "Premium" }
                            }
                        }
                    }
                    if let Some(title) = &m.title {
                        p { "{title}" }
                    }
                    if let Some(company) = &m.company {
                        p { "{company}" }
                    }
                    if let Some(city) = &m.city {
                        p { class: "muted", "{city}" }
                    }
                    if let Some(bio) = &m.bio {
                        p { "{bio}" }
                    }
                    if !m.interests.is_empty() {
                        p { strong { "Interests: " } {m.interests.join(", ")} }
                    }
                    if !m.looking_for.is_empty() {
                        p { strong { "Looking for: " } {m.looking_for.join(", ")} }
                    }
                    div {
                        class: "row",
                        if let Some(url) = &m.linkedin_url {
                            a { href: "{url}", target: "_blank", "LinkedIn" }
                        }
                        if let Some(url) = &m.twitter_url {
                            a { href: "{url}", target: "_blank", "Twitter" }
                        }
                        if let Some(url) = &m.website_url {
                            a { href: "{url}", target: "_blank", "Website" }
                        }
                    }
                }
                if current_user_id.is_some() && current_user_id != Some(m.id) {
                    IntroductionRequest { target_id: m.id }
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
fn IntroductionRequest(target_id: i32) -> Element {
    let mut message = use_signal(String::new);
    let mut sent = use_signal(|| false);
    let mut error = use_signal(|| None::<ApiError>);
    let mut submitting = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        submitting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match request_introduction(target_id, non_empty(message())).await {
                Ok(_) => {
                    sent.set(true);
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to request introduction: {}", err);
                    error.set(Some(err));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "card stack",
            h2 { "Request an introduction" }
            if sent() {
                p { class: "success", "Request sent. You'll see the response on your dashboard." }
            } else {
                form {
                    class: "stack",
                    onsubmit: on_submit,
                    textarea {
                        placeholder: "Why would you like to connect?",
                        value: "{message}",
                        oninput: move |e| message.set(e.value()),
                    }
                    if let Some(err) = error() {
                        p { class: "error", "{err}" }
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: submitting(),
                        "Send request"
                    }
                }
            }
        }
    }
}
