//! Startup registry.

use sea_orm::DatabaseConnection;

use crate::{
    model::startup::CreateStartupDto,
    server::{
        data::startup::StartupRepository,
        error::AppError,
        model::startup::{CreateStartupParam, Startup},
    },
};

pub struct StartupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StartupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every startup, featured first then newest.
    pub async fn list(&self) -> Result<Vec<Startup>, AppError> {
        StartupRepository::new(self.db).get_all().await
    }

    /// Registers a startup owned by `founder_id`.
    ///
    /// # Returns
    /// - `Ok(Startup)` - The stored startup
    /// - `Err(AppError::BadRequest)` - The name is blank
    /// - `Err(AppError)` - Database error
    pub async fn create(&self, founder_id: i32, dto: CreateStartupDto) -> Result<Startup, AppError> {
        let param = CreateStartupParam::from_dto(founder_id, dto);

        if param.name.is_empty() {
            return Err(AppError::BadRequest("Startup name is required".to_string()));
        }

        StartupRepository::new(self.db).create(param).await
    }
}
