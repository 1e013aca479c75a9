use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Profile};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Profile)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// Initializes an empty builder ready to have entity tables added via `with_table()`.
    /// Chain method calls to configure the test environment before calling `build()`.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called. Chain multiple
    /// calls to add multiple tables. Tables should be added in dependency order (tables
    /// with foreign keys should be added after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables required for member operations.
    ///
    /// Adds in dependency order:
    /// - User
    /// - Profile
    /// - Subscription
    ///
    /// Use this when testing profiles, the member directory, admin actions, or
    /// billing state.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_member_tables(self) -> Self {
        self.with_table(User)
            .with_table(Profile)
            .with_table(Subscription)
    }

    /// Adds the tables required for event RSVP operations.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_event_tables(self) -> Self {
        self.with_table(User)
            .with_table(Event)
            .with_table(EventRsvp)
    }

    /// Adds the tables required for startup and job board operations.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_job_tables(self) -> Self {
        self.with_table(User).with_table(Startup).with_table(Job)
    }

    /// Adds the tables required for forum operations.
    ///
    /// Profiles are included since posting is gated on profile approval.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_forum_tables(self) -> Self {
        self.with_table(User)
            .with_table(Profile)
            .with_table(ForumThread)
            .with_table(ForumReply)
    }

    /// Adds every application table in dependency order.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_all_tables()
    ///     .build()
    ///     .await?;
    /// ```
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_all_tables(self) -> Self {
        self.with_member_tables()
            .with_table(Startup)
            .with_table(Job)
            .with_table(Event)
            .with_table(EventRsvp)
            .with_table(Introduction)
            .with_table(ForumThread)
            .with_table(ForumReply)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`. Tables are created in the order
    /// they were added to the builder.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
