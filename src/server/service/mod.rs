//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and external services
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **External APIs**: Google sign-in, Stripe, Resend and Cloudinary over `reqwest`

pub mod admin;
pub mod auth;
pub mod billing;
pub mod email;
pub mod event;
pub mod forum;
pub mod gallery;
pub mod introduction;
pub mod job;
pub mod member;
pub mod profile;
pub mod startup;

#[cfg(test)]
mod test;
