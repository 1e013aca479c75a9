//! Startup factory for creating startups owned by a founder.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test startups.
pub struct StartupFactory<'a> {
    db: &'a DatabaseConnection,
    founder_id: i32,
    name: String,
    stage: String,
    is_featured: bool,
}

impl<'a> StartupFactory<'a> {
    /// Creates a new StartupFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Startup {id}"`
    /// - stage: `"idea"`
    /// - is_featured: `false`
    pub fn new(db: &'a DatabaseConnection, founder_id: i32) -> Self {
        Self {
            db,
            founder_id,
            name: format!("Startup {}", next_id()),
            stage: "idea".to_string(),
            is_featured: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn stage(mut self, stage: impl Into<String>) -> Self {
        self.stage = stage.into();
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.is_featured = featured;
        self
    }

    /// Builds and inserts the startup entity into the database.
    pub async fn build(self) -> Result<entity::startup::Model, DbErr> {
        let now = Utc::now();
        entity::startup::ActiveModel {
            founder_id: ActiveValue::Set(self.founder_id),
            name: ActiveValue::Set(self.name),
            tagline: ActiveValue::Set(None),
            description: ActiveValue::Set(None),
            logo_url: ActiveValue::Set(None),
            website_url: ActiveValue::Set(None),
            stage: ActiveValue::Set(self.stage),
            sector: ActiveValue::Set(None),
            city: ActiveValue::Set(None),
            team_size: ActiveValue::Set(None),
            funding_raised: ActiveValue::Set(None),
            is_raising: ActiveValue::Set(false),
            raise_amount: ActiveValue::Set(None),
            is_featured: ActiveValue::Set(self.is_featured),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a startup with default values for the given founder.
pub async fn create_startup(
    db: &DatabaseConnection,
    founder_id: i32,
) -> Result<entity::startup::Model, DbErr> {
    StartupFactory::new(db, founder_id).build().await
}
