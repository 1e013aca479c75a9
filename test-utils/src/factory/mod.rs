//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the ids of the rows they depend on so
//! tests stay explicit about foreign key relationships.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let event = factory::event::create_event(&db).await?;
//!
//!     // Create an approved member with a profile
//!     let (user, profile) = factory::helpers::create_approved_member(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("founder@example.com")
//!     .name("Founder")
//!     .admin(true)
//!     .build()
//!     .await?;
//!
//! let event = factory::event::EventFactory::new(&db)
//!     .capacity(Some(2))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `profile` - Create member profiles
//! - `startup` - Create startups owned by a founder
//! - `job` - Create job listings for a startup
//! - `event` - Create events
//! - `introduction` - Create introduction requests
//! - `forum_thread` - Create forum threads
//! - `subscription` - Create billing subscriptions
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod event;
pub mod forum_thread;
pub mod helpers;
pub mod introduction;
pub mod job;
pub mod profile;
pub mod startup;
pub mod subscription;
pub mod user;

pub use event::create_event;
pub use forum_thread::create_thread;
pub use introduction::create_introduction;
pub use job::create_job;
pub use profile::create_profile;
pub use startup::create_startup;
pub use user::create_user;
