use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        admin::{self, ADMIN_TAG},
        auth::{self, AUTH_TAG},
        billing::{self, BILLING_TAG},
        event::{self, EVENT_TAG},
        forum::{self, FORUM_TAG},
        gallery::{self, GALLERY_TAG},
        introduction::{self, INTRODUCTION_TAG},
        job::{self, JOB_TAG},
        member::{self, MEMBER_TAG},
        profile::{self, PROFILE_TAG},
        startup::{self, STARTUP_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Founders Club API"),
    tags(
        (name = AUTH_TAG, description = "Google sign-in and session"),
        (name = PROFILE_TAG, description = "The caller's own profile"),
        (name = MEMBER_TAG, description = "Public member directory"),
        (name = INTRODUCTION_TAG, description = "Member-to-member introductions"),
        (name = EVENT_TAG, description = "Events and RSVPs"),
        (name = JOB_TAG, description = "Job board"),
        (name = STARTUP_TAG, description = "Member startups"),
        (name = FORUM_TAG, description = "Discussion forum"),
        (name = BILLING_TAG, description = "Stripe subscriptions"),
        (name = GALLERY_TAG, description = "Community photo gallery"),
        (name = ADMIN_TAG, description = "Moderation and operator tasks")
    )
)]
struct ApiDoc;

/// Builds the API router and serves its OpenAPI document at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        // Auth
        .routes(routes!(auth::login))
        .routes(routes!(auth::callback))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        // Profile and directory
        .routes(routes!(profile::get_profile, profile::upsert_profile))
        .routes(routes!(member::list_members))
        .routes(routes!(member::get_member))
        // Introductions
        .routes(routes!(
            introduction::list_introductions,
            introduction::create_introduction
        ))
        .routes(routes!(
            introduction::get_introduction,
            introduction::update_introduction
        ))
        // Events
        .routes(routes!(event::list_events))
        .routes(routes!(event::get_event))
        .routes(routes!(
            event::get_rsvp_summary,
            event::create_rsvp,
            event::delete_rsvp
        ))
        // Jobs and startups
        .routes(routes!(job::list_jobs, job::create_job))
        .routes(routes!(job::get_job))
        .routes(routes!(startup::list_startups, startup::create_startup))
        // Forum
        .routes(routes!(forum::list_threads, forum::create_thread))
        .routes(routes!(forum::get_thread))
        .routes(routes!(forum::create_reply))
        // Billing
        .routes(routes!(billing::checkout))
        .routes(routes!(billing::portal))
        .routes(routes!(billing::get_subscription))
        .routes(routes!(billing::stripe_webhook))
        // Gallery
        .routes(routes!(gallery::get_gallery))
        // Admin
        .routes(routes!(admin::get_members, admin::update_member))
        .routes(routes!(admin::setup))
        .routes(routes!(admin::migrate))
        .routes(routes!(admin::refresh_gallery))
        .routes(routes!(admin::create_event))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
