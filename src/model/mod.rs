//! Data transfer objects shared by the server API and the web client.
//!
//! Every type here is serialized as JSON with camelCase field names. Types derive
//! `utoipa::ToSchema` when the `server` feature is enabled so they can be referenced
//! from the OpenAPI documentation.

pub mod admin;
pub mod api;
pub mod billing;
pub mod enums;
pub mod event;
pub mod forum;
pub mod gallery;
pub mod introduction;
pub mod job;
pub mod member;
pub mod profile;
pub mod startup;
pub mod user;
