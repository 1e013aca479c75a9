//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Text columns holding closed value sets are parsed into the enums from
//! `crate::model::enums` during that conversion.

pub mod event;
pub mod forum;
pub mod introduction;
pub mod job;
pub mod member;
pub mod profile;
pub mod startup;
pub mod subscription;
pub mod user;
