use dioxus::prelude::*;

use crate::{
    client::{
        component::Page, constant::SITE_NAME, model::error::ApiError, router::Route,
        store::user::UserState,
    },
    model::enums::Plan,
};

#[cfg(feature = "web")]
use crate::client::{api::billing::start_checkout, util::redirect_external};

struct PlanCard {
    plan: Plan,
    price: &'static str,
    features: &'static [&'static str],
}

const PLANS: &[PlanCard] = &[
    PlanCard {
        plan: Plan::Free,
        price: "₹0",
        features: &["Member directory", "Community forum", "Public events"],
    },
    PlanCard {
        plan: Plan::Premium,
        price: "₹2,999 / month",
        features: &[
            "Everything in Free",
            "Warm introductions",
            "Priority event seating",
            "Premium badge",
        ],
    },
    PlanCard {
        plan: Plan::Enterprise,
        price: "₹24,999 / month",
        features: &[
            "Everything in Premium",
            "Featured job listings",
            "Team seats",
        ],
    },
];

#[component]
pub fn Pricing() -> Element {
    let user_state = use_context::<Signal<UserState>>();
    let mut error = use_signal(|| None::<ApiError>);
    let mut pending_plan = use_signal(|| None::<Plan>);

    let logged_in = user_state.read().user.is_some();

    let mut checkout = move |plan: Plan| {
        pending_plan.set(Some(plan));

        #[cfg(feature = "web")]
        spawn(async move {
            match start_checkout(plan.as_str()).await {
                Ok(session) => redirect_external(&session.url),
                Err(err) => {
                    error.set(Some(err));
                    pending_plan.set(None);
                }
            }
        });
    };

    rsx! {
        Title { "Pricing | {SITE_NAME}" }
        Page {
            h1 { "Membership plans" }
            div {
                class: "grid",
                for card in PLANS {
                    div {
                        key: "{card.plan}",
                        class: if card.plan == Plan::Premium { "card card-featured stack" } else { "card stack" },
                        h2 { "{card.plan}" }
                        p { class: "price", "{card.price}" }
                        ul {
                            for feature in card.features {
                                li { "{feature}" }
                            }
                        }
                        if card.plan.is_premium() {
                            if logged_in {
                                {
                                    let plan = card.plan;
                                    rsx! {
                                        button {
                                            class: "btn btn-primary",
                                            disabled: pending_plan().is_some(),
                                            onclick: move |_| checkout(plan),
                                            if pending_plan() == Some(plan) { "Redirecting..." } else { "Choose {plan}" }
                                        }
                                    }
                                }
                            } else {
                                Link { to: Route::Login {}, class: "btn btn-primary", "Log in to subscribe" }
                            }
                        }
                    }
                }
            }
            if let Some(err) = error() {
                p { class: "error", "{err}" }
            }
        }
    }
}

#[component]
pub fn BillingSuccess() -> Element {
    let nav = navigator();

    // Redirect once the Stripe webhook has had time to land
    #[cfg(feature = "web")]
    use_future(move || async move {
        gloo_timers::future::TimeoutFuture::new(4_000).await;
        nav.push(Route::Dashboard {});
    });

    rsx! {
        Title { "Welcome aboard | {SITE_NAME}" }
        Page {
            class: "page-center",
            div {
                class: "card stack center",
                h1 { "Thanks for subscribing" }
                p { "Your membership is being activated. Taking you to your dashboard..." }
                Link { to: Route::Dashboard {}, class: "btn btn-outline", "Go now" }
            }
        }
    }
}
