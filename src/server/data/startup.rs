//! Startup data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::startup::{CreateStartupParam, Startup},
};

/// Repository providing database operations for startups.
pub struct StartupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StartupRepository<'a> {
    /// Creates a new StartupRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `StartupRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all startups, featured first then newest.
    ///
    /// # Returns
    /// - `Ok(Vec<Startup>)` - All startups
    /// - `Err(AppError)` - Database error or invalid stored stage
    pub async fn get_all(&self) -> Result<Vec<Startup>, AppError> {
        let entities = entity::prelude::Startup::find()
            .order_by_desc(entity::startup::Column::IsFeatured)
            .order_by_desc(entity::startup::Column::CreatedAt)
            .order_by_desc(entity::startup::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(Startup::from_entity).collect()
    }

    /// Finds the first startup registered by a founder.
    ///
    /// Returns the raw entity since job creation needs it for the joined job model.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The founder's earliest startup
    /// - `Ok(None)` - The user has not registered a startup
    /// - `Err(AppError)` - Database error
    pub async fn find_first_by_founder(
        &self,
        founder_id: i32,
    ) -> Result<Option<entity::startup::Model>, AppError> {
        let entity = entity::prelude::Startup::find()
            .filter(entity::startup::Column::FounderId.eq(founder_id))
            .order_by_asc(entity::startup::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity)
    }

    /// Stores a new startup owned by `param.founder_id`.
    ///
    /// # Returns
    /// - `Ok(Startup)` - The stored startup
    /// - `Err(AppError)` - Database error
    pub async fn create(&self, param: CreateStartupParam) -> Result<Startup, AppError> {
        let now = Utc::now();

        let entity = entity::startup::ActiveModel {
            founder_id: ActiveValue::Set(param.founder_id),
            name: ActiveValue::Set(param.name),
            tagline: ActiveValue::Set(param.tagline),
            description: ActiveValue::Set(param.description),
            logo_url: ActiveValue::Set(param.logo_url),
            website_url: ActiveValue::Set(param.website_url),
            stage: ActiveValue::Set(param.stage.as_str().to_string()),
            sector: ActiveValue::Set(param.sector),
            city: ActiveValue::Set(param.city),
            team_size: ActiveValue::Set(param.team_size),
            funding_raised: ActiveValue::Set(param.funding_raised),
            is_raising: ActiveValue::Set(param.is_raising),
            raise_amount: ActiveValue::Set(param.raise_amount),
            is_featured: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Startup::from_entity(entity)
    }
}
