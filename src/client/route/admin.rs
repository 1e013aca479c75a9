use chrono::{NaiveDate, TimeZone, Utc};
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Page},
        constant::SITE_NAME,
        model::error::ApiError,
        router::Route,
        util::{format_date, non_empty, parse_number, split_list},
    },
    model::{
        admin::{AdminMemberDto, UpdateMemberDto},
        event::CreateEventDto,
    },
};

#[cfg(feature = "web")]
use crate::client::api::admin::{create_event, get_all_members, refresh_gallery, update_member};

#[derive(Clone, Copy, PartialEq)]
enum AdminTab {
    Members,
    Events,
    Gallery,
}

#[component]
pub fn Admin() -> Element {
    let mut tab = use_signal(|| AdminTab::Members);

    rsx! {
        Title { "Admin | {SITE_NAME}" }
        Page {
            h1 { "Admin panel" }
            div {
                class: "tabs",
                button {
                    class: if tab() == AdminTab::Members { "tab tab-active" } else { "tab" },
                    onclick: move |_| tab.set(AdminTab::Members),
                    "Members"
                }
                button {
                    class: if tab() == AdminTab::Events { "tab tab-active" } else { "tab" },
                    onclick: move |_| tab.set(AdminTab::Events),
                    "Events"
                }
                button {
                    class: if tab() == AdminTab::Gallery { "tab tab-active" } else { "tab" },
                    onclick: move |_| tab.set(AdminTab::Gallery),
                    "Gallery"
                }
            }
            match tab() {
                AdminTab::Members => rsx! { MemberModeration {} },
                AdminTab::Events => rsx! { EventForm {} },
                AdminTab::Gallery => rsx! { GalleryTools {} },
            }
        }
    }
}

#[component]
fn MemberModeration() -> Element {
    let mut members = use_signal(|| None::<Vec<AdminMemberDto>>);
    let mut error = use_signal(|| None::<ApiError>);
    let refetch_trigger = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_all_members().await
    });

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
        if let Some(list) = members() {
            div {
                class: "overflow",
                table {
                    class: "table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Email" }
                            th { "Role" }
                            th { "Joined" }
                            th { "Approved" }
                            th { "Verified" }
                        }
                    }
                    tbody {
                        for member in list {
                            MemberRow { key: "{member.id}", member, refetch_trigger }
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
fn MemberRow(member: AdminMemberDto, mut refetch_trigger: Signal<u32>) -> Element {
    let mut error = use_signal(|| None::<ApiError>);
    let member_id = member.id;

    let mut update = move |payload: UpdateMemberDto| {
        #[cfg(feature = "web")]
        spawn(async move {
            match update_member(payload).await {
                Ok(_) => refetch_trigger.set(refetch_trigger() + 1),
                Err(err) => {
                    tracing::error!("Failed to update member {}: {}", member_id, err);
                    error.set(Some(err));
                }
            }
        });
    };

    let is_approved = member.is_approved;
    let is_verified = member.is_verified;

    rsx! {
        tr {
            td {
                Link {
                    to: Route::MemberDetail { id: member.id },
                    {member.name.clone().unwrap_or_else(|| "(no name)".to_string())}
                }
                if member.is_admin {
                    span { class: "badge", "Admin" }
                }
                if let Some(err) = error() {
                    p { class: "error", "{err}" }
                }
            }
            td { "{member.email}" }
            td {
                if let Some(role) = member.role {
                    "{role}"
                } else {
                    span { class: "muted", "No profile" }
                }
            }
            td { "{format_date(&member.created_at)}" }
            td {
                input {
                    r#type: "checkbox",
                    checked: is_approved,
                    disabled: !member.has_profile,
                    onchange: move |e| update(UpdateMemberDto {
                        member_id: Some(member_id),
                        is_approved: Some(e.checked()),
                        is_verified: None,
                    }),
                }
            }
            td {
                input {
                    r#type: "checkbox",
                    checked: is_verified,
                    disabled: !member.has_profile,
                    onchange: move |e| update(UpdateMemberDto {
                        member_id: Some(member_id),
                        is_approved: None,
                        is_verified: Some(e.checked()),
                    }),
                }
            }
        }
    }
}

#[component]
fn EventForm() -> Element {
    let nav = navigator();
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut event_date = use_signal(String::new);
    let mut event_time = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut city = use_signal(String::new);
    let mut is_virtual = use_signal(|| false);
    let mut virtual_link = use_signal(String::new);
    let mut capacity = use_signal(String::new);
    let mut cover_image_url = use_signal(String::new);
    let mut is_featured = use_signal(|| false);
    let mut tags = use_signal(String::new);
    let mut error = use_signal(|| None::<ApiError>);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        // Date inputs yield `YYYY-MM-DD`; events are stored at midnight UTC
        let date = NaiveDate::parse_from_str(&event_date(), "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| Utc.from_utc_datetime(&dt));

        let payload = CreateEventDto {
            title: title(),
            description: non_empty(description()),
            content: non_empty(content()),
            cover_image_url: non_empty(cover_image_url()),
            event_date: date,
            event_time: non_empty(event_time()),
            location: non_empty(location()),
            city: non_empty(city()),
            is_virtual: is_virtual(),
            virtual_link: non_empty(virtual_link()),
            capacity: parse_number(&capacity()),
            is_featured: is_featured(),
            tags: split_list(&tags()),
        };

        #[cfg(feature = "web")]
        spawn(async move {
            match create_event(payload).await {
                Ok(event) => {
                    nav.push(Route::EventDetail { slug: event.slug });
                }
                Err(err) => {
                    tracing::error!("Failed to create event: {}", err);
                    error.set(Some(err));
                }
            }
        });
    };

    rsx! {
        form {
            class: "form",
            onsubmit: on_submit,
            label { "Title" }
            input { value: "{title}", oninput: move |e| title.set(e.value()) }
            label { "Summary" }
            input { value: "{description}", oninput: move |e| description.set(e.value()) }
            label { "Details (markdown)" }
            textarea { rows: 8, value: "{content}", oninput: move |e| content.set(e.value()) }
            label { "Date" }
            input { r#type: "date", value: "{event_date}", oninput: move |e| event_date.set(e.value()) }
            label { "Time" }
            input { placeholder: "6:30 PM IST", value: "{event_time}", oninput: move |e| event_time.set(e.value()) }
            label { "Venue" }
            input { value: "{location}", oninput: move |e| location.set(e.value()) }
            label { "City" }
            input { value: "{city}", oninput: move |e| city.set(e.value()) }
            label {
                class: "row",
                input {
                    r#type: "checkbox",
                    checked: is_virtual(),
                    onchange: move |e| is_virtual.set(e.checked()),
                }
                "Virtual event"
            }
            if is_virtual() {
                label { "Meeting link" }
                input { value: "{virtual_link}", oninput: move |e| virtual_link.set(e.value()) }
            }
            label { "Capacity" }
            input { r#type: "number", value: "{capacity}", oninput: move |e| capacity.set(e.value()) }
            label { "Cover image URL" }
            input { value: "{cover_image_url}", oninput: move |e| cover_image_url.set(e.value()) }
            label {
                class: "row",
                input {
                    r#type: "checkbox",
                    checked: is_featured(),
                    onchange: move |e| is_featured.set(e.checked()),
                }
                "Featured"
            }
            label { "Tags (comma separated)" }
            input { value: "{tags}", oninput: move |e| tags.set(e.value()) }
            if let Some(err) = error() {
                p { class: "error", "{err}" }
            }
            button { class: "btn btn-primary", r#type: "submit", "Publish event" }
        }
    }
}

#[component]
fn GalleryTools() -> Element {
    let mut status = use_signal(|| None::<Result<(), ApiError>>);

    let refresh = move |_| {
        #[cfg(feature = "web")]
        spawn(async move {
            let result = refresh_gallery().await.map(|_| ());
            if let Err(err) = &result {
                tracing::error!("Failed to refresh gallery: {}", err);
            }
            status.set(Some(result));
        });
    };

    rsx! {
        div {
            class: "card stack",
            p { "The gallery is cached for ten minutes. Refresh it after uploading new photos to Cloudinary." }
            button { class: "btn btn-primary", onclick: refresh, "Refresh gallery" }
            match status() {
                Some(Ok(())) => rsx! { p { class: "success", "Gallery cache cleared" } },
                Some(Err(err)) => rsx! { p { class: "error", "{err}" } },
                None => rsx! {},
            }
        }
    }
}
