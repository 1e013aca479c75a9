use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Page},
        constant::SITE_NAME,
        model::error::ApiError,
        router::Route,
        store::user::UserState,
        util::{join_list, non_empty, split_list},
    },
    model::{enums::Role, profile::UpsertProfileDto},
};

#[cfg(feature = "web")]
use crate::client::api::user::{get_profile, get_user, save_profile};

#[component]
pub fn Onboarding() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let name = user_state
        .read()
        .user
        .as_ref()
        .and_then(|u| u.name.clone());

    rsx! {
        Title { "Welcome | {SITE_NAME}" }
        Page {
            h1 { "Tell the community about yourself" }
            p { class: "muted", "An admin reviews new profiles before they appear in the directory." }
            ProfileForm {
                initial: UpsertProfileDto { name, ..Default::default() },
                submit_label: "Create profile",
            }
        }
    }
}

#[component]
pub fn EditProfile() -> Element {
    let mut initial = use_signal(|| None::<UpsertProfileDto>);
    let mut error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(|| async move { get_profile().await });

        use_effect(move || {
            match &*future.read_unchecked() {
                Some(Ok(mine)) => {
                    let profile = mine.profile.clone();
                    initial.set(Some(UpsertProfileDto {
                        name: mine.user.name.clone(),
                        role: profile.as_ref().map(|p| p.role).unwrap_or_default(),
                        bio: profile.as_ref().and_then(|p| p.bio.clone()),
                        company: profile.as_ref().and_then(|p| p.company.clone()),
                        title: profile.as_ref().and_then(|p| p.title.clone()),
                        city: profile.as_ref().and_then(|p| p.city.clone()),
                        linkedin_url: profile.as_ref().and_then(|p| p.linkedin_url.clone()),
                        twitter_url: profile.as_ref().and_then(|p| p.twitter_url.clone()),
                        website_url: profile.as_ref().and_then(|p| p.website_url.clone()),
                        interests: profile.as_ref().map(|p| p.interests.clone()).unwrap_or_default(),
                        looking_for: profile
                            .as_ref()
                            .map(|p| p.looking_for.clone())
                            .unwrap_or_default(),
                    }));
                }
                Some(Err(err)) => error.set(Some(err.clone())),
                None => (),
            }
        });
    }

    rsx! {
        Title { "Edit profile | {SITE_NAME}" }
        if let Some(dto) = initial() {
            Page {
                h1 { "Edit profile" }
                ProfileForm { initial: dto, submit_label: "Save profile" }
            }
        } else if let Some(err) = error() {
            ErrorPage { status: err.status, message: err.message }
        } else {
            LoadingPage {}
        }
    }
}

#[component]
fn ProfileForm(initial: UpsertProfileDto, submit_label: &'static str) -> Element {
    let mut user_state = use_context::<Signal<UserState>>();
    let nav = navigator();

    let mut name = use_signal(|| initial.name.clone().unwrap_or_default());
    let mut role = use_signal(|| initial.role);
    let mut title = use_signal(|| initial.title.clone().unwrap_or_default());
    let mut company = use_signal(|| initial.company.clone().unwrap_or_default());
    let mut city = use_signal(|| initial.city.clone().unwrap_or_default());
    let mut bio = use_signal(|| initial.bio.clone().unwrap_or_default());
    let mut linkedin_url = use_signal(|| initial.linkedin_url.clone().unwrap_or_default());
    let mut twitter_url = use_signal(|| initial.twitter_url.clone().unwrap_or_default());
    let mut website_url = use_signal(|| initial.website_url.clone().unwrap_or_default());
    let mut interests = use_signal(|| join_list(&initial.interests));
    let mut looking_for = use_signal(|| join_list(&initial.looking_for));
    let mut error = use_signal(|| None::<ApiError>);
    let mut saving = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let payload = UpsertProfileDto {
            name: non_empty(name()),
            role: role(),
            bio: non_empty(bio()),
            company: non_empty(company()),
            title: non_empty(title()),
            city: non_empty(city()),
            linkedin_url: non_empty(linkedin_url()),
            twitter_url: non_empty(twitter_url()),
            website_url: non_empty(website_url()),
            interests: split_list(&interests()),
            looking_for: split_list(&looking_for()),
        };
        saving.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match save_profile(payload).await {
                Ok(_) => {
                    // Refresh the shared user so `has_profile` is current
                    match get_user().await {
                        Ok(user) => user_state.write().user = user,
                        Err(err) => tracing::error!("Failed to refresh user: {}", err),
                    }
                    nav.push(Route::Dashboard {});
                }
                Err(err) => {
                    tracing::error!("Failed to save profile: {}", err);
                    error.set(Some(err));
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        form {
            class: "form",
            onsubmit: on_submit,
            label { "Name" }
            input { value: "{name}", oninput: move |e| name.set(e.value()) }
            label { "Role" }
            select {
                value: "{role}",
                onchange: move |e| {
                    if let Some(parsed) = Role::parse(&e.value()) {
                        role.set(parsed);
                    }
                },
                for r in Role::ALL {
                    option { value: "{r}", "{r}" }
                }
            }
            label { "Title" }
            input { value: "{title}", oninput: move |e| title.set(e.value()) }
            label { "Company" }
            input { value: "{company}", oninput: move |e| company.set(e.value()) }
            label { "City" }
            input { value: "{city}", oninput: move |e| city.set(e.value()) }
            label { "Bio" }
            textarea { rows: 4, value: "{bio}", oninput: move |e| bio.set(e.value()) }
            label { "LinkedIn" }
            input { value: "{linkedin_url}", oninput: move |e| linkedin_url.set(e.value()) }
            label { "Twitter" }
            input { value: "{twitter_url}", oninput: move |e| twitter_url.set(e.value()) }
            label { "Website" }
            input { value: "{website_url}", oninput: move |e| website_url.set(e.value()) }
            label { "Interests (comma separated)" }
            input { value: "{interests}", oninput: move |e| interests.set(e.value()) }
            label { "Looking for (comma separated)" }
            input { value: "{looking_for}", oninput: move |e| looking_for.set(e.value()) }
            if let Some(err) = error() {
                p { class: "error", "{err}" }
            }
            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: saving(),
                {submit_label}
            }
        }
    }
}
