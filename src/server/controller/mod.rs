//! HTTP request handlers.
//!
//! Each module groups the endpoints of one resource. Handlers check access with
//! `AuthGuard`, delegate to a service, and convert the returned domain models to
//! DTOs. Every handler carries a `utoipa::path` annotation and is collected into
//! the OpenAPI document by the router.

pub mod admin;
pub mod auth;
pub mod billing;
pub mod event;
pub mod forum;
pub mod gallery;
pub mod introduction;
pub mod job;
pub mod member;
pub mod profile;
pub mod startup;
