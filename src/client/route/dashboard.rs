use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::Page,
        constant::SITE_NAME,
        model::error::ApiError,
        router::Route,
        store::user::UserState,
        util::format_date,
    },
    model::{
        billing::SubscriptionDto,
        enums::IntroductionStatus,
        introduction::{IntroductionListDto, IntroductionListItemDto},
    },
};

#[cfg(feature = "web")]
use crate::client::{
    api::{
        billing::{get_subscription, open_portal},
        introduction::{get_introductions, respond_to_introduction},
    },
    util::redirect_external,
};

#[component]
pub fn Dashboard() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let nav = navigator();

    // Members without a profile finish onboarding first
    use_effect(move || {
        let state = user_state.read();
        if state.fetched && state.user.is_some() && !state.has_profile() {
            nav.push(Route::Onboarding {});
        }
    });

    let state = user_state.read().clone();
    let greeting = state
        .user
        .as_ref()
        .and_then(|u| u.name.clone())
        .unwrap_or_else(|| "there".to_string());

    rsx! {
        Title { "Dashboard | {SITE_NAME}" }
        Page {
            div {
                class: "row spread",
                h1 { "Welcome, {greeting}" }
                Link { to: Route::EditProfile {}, class: "btn btn-outline", "Edit profile" }
            }
            if state.has_profile() && !state.is_approved() {
                div {
                    class: "notice",
                    "Your profile is awaiting approval. You'll get an email once an admin approves it."
                }
            }
            SubscriptionCard {}
            Introductions {}
        }
    }
}

#[component]
fn SubscriptionCard() -> Element {
    let mut subscription = use_signal(|| None::<SubscriptionDto>);
    let mut error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(|| async move { get_subscription().await });

        use_effect(move || {
            match &*future.read_unchecked() {
                Some(Ok(found)) => subscription.set(Some(found.clone())),
                Some(Err(err)) => tracing::error!("Failed to fetch subscription: {}", err),
                None => (),
            }
        });
    }

    let manage_billing = move |_| {
        #[cfg(feature = "web")]
        spawn(async move {
            match open_portal().await {
                Ok(portal) => redirect_external(&portal.url),
                Err(err) => error.set(Some(err)),
            }
        });
    };

    rsx! {
        div {
            class: "card stack",
            h2 { "Membership" }
            if let Some(sub) = subscription() {
                p {
                    "Plan: "
                    strong { "{sub.plan}" }
                    if let Some(status) = sub.status {
                        " ({status})"
                    }
                }
                if let Some(end) = sub.current_period_end {
                    if sub.cancel_at_period_end {
                        p { class: "muted", "Ends on {format_date(&end)}" }
                    } else {
                        p { class: "muted", "Renews on {format_date(&end)}" }
                    }
                }
                if sub.is_premium {
                    button { class: "btn btn-outline", onclick: manage_billing, "Manage billing" }
                } else {
                    Link { to: Route::Pricing {}, class: "btn btn-primary", "Upgrade" }
                }
            }
            if let Some(err) = error() {
                p { class: "error", "{err}" }
            }
        }
    }
}

#[component]
fn Introductions() -> Element {
    let mut introductions = use_signal(|| None::<IntroductionListDto>);
    let mut error = use_signal(|| None::<ApiError>);
    let refetch_trigger = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let _ = refetch_trigger();
            get_introductions().await
        });

        use_effect(move || {
            match &*future.read_unchecked() {
                Some(Ok(found)) => {
                    introductions.set(Some(found.clone()));
                    error.set(None);
                }
                Some(Err(err)) => {
                    tracing::error!("Failed to fetch introductions: {}", err);
                    error.set(Some(err.clone()));
                }
                None => (),
            }
        });
    }

    rsx! {
        div {
            class: "card stack",
            h2 { "Introductions" }
            if let Some(err) = error() {
                p { class: "error", "{err}" }
            }
            if let Some(list) = introductions() {
                h3 { "Received" }
                if list.received.is_empty() {
                    p { class: "muted", "No introduction requests yet" }
                }
                for intro in list.received {
                    IntroductionRow { key: "{intro.id}", intro, incoming: true, refetch_trigger }
                }
                h3 { "Sent" }
                if list.sent.is_empty() {
                    p { class: "muted", "You haven't requested any introductions" }
                }
                for intro in list.sent {
                    IntroductionRow { key: "{intro.id}", intro, incoming: false, refetch_trigger }
                }
            }
        }
    }
}

#[component]
fn IntroductionRow(
    intro: IntroductionListItemDto,
    incoming: bool,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut error = use_signal(|| None::<ApiError>);
    let id = intro.id;

    let mut respond = move |status: IntroductionStatus| {
        #[cfg(feature = "web")]
        spawn(async move {
            match respond_to_introduction(id, status.as_str()).await {
                Ok(_) => refetch_trigger.set(refetch_trigger() + 1),
                Err(err) => error.set(Some(err)),
            }
        });
    };

    let counterpart = &intro.counterpart;
    let name = counterpart
        .name
        .clone()
        .unwrap_or_else(|| "Member".to_string());
    let pending = intro.status == IntroductionStatus::Pending;

    rsx! {
        div {
            class: "row spread intro",
            div {
                Link { to: Route::MemberDetail { id: counterpart.id }, strong { "{name}" } }
                if let (Some(title), Some(company)) = (&counterpart.title, &counterpart.company) {
                    span { class: "muted", " · {title} at {company}" }
                }
                if let Some(message) = &intro.message {
                    p { "{message}" }
                }
                p { class: "muted", "{format_date(&intro.created_at)}" }
            }
            div {
                class: "row",
                span { class: "badge", "{intro.status}" }
                if incoming && pending {
                    button {
                        class: "btn btn-primary btn-sm",
                        onclick: move |_| respond(IntroductionStatus::Accepted),
                        "Accept"
                    }
                    button {
                        class: "btn btn-outline btn-sm",
                        onclick: move |_| respond(IntroductionStatus::Declined),
                        "Decline"
                    }
                }
                if incoming && intro.status == IntroductionStatus::Accepted {
                    button {
                        class: "btn btn-outline btn-sm",
                        onclick: move |_| respond(IntroductionStatus::Completed),
                        "Mark completed"
                    }
                }
            }
            if let Some(err) = error() {
                p { class: "error", "{err}" }
            }
        }
    }
}
