//! Job board service.

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::job::CreateJobDto,
    server::{
        data::{job::JobRepository, startup::StartupRepository},
        error::AppError,
        model::job::{CreateJobParam, Job, JobFilter},
    },
};

/// Days a new listing stays visible.
const JOB_LIFETIME_DAYS: i64 = 30;

pub struct JobService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JobService<'a> {
    /// Creates a new JobService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `JobService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists active, unexpired jobs matching the filters.
    pub async fn list(&self, filter: &JobFilter) -> Result<Vec<Job>, AppError> {
        JobRepository::new(self.db)
            .get_visible(filter, Utc::now())
            .await
    }

    /// Gets a single visible job.
    ///
    /// # Returns
    /// - `Ok(Job)` - The job
    /// - `Err(AppError::NotFound)` - Missing, inactive or expired
    /// - `Err(AppError)` - Database error
    pub async fn get(&self, id: i32) -> Result<Job, AppError> {
        JobRepository::new(self.db)
            .find_visible_by_id(id, Utc::now())
            .await?
            .ok_or_else(|| AppError::NotFound("Job not found".to_string()))
    }

    /// Posts a job for the caller's first startup.
    ///
    /// The listing expires 30 days after creation.
    ///
    /// # Arguments
    /// - `user_id` - The poster, who must own a startup
    /// - `dto` - Job fields from the request body
    ///
    /// # Returns
    /// - `Ok(Job)` - The stored job joined with its startup
    /// - `Err(AppError::BadRequest)` - No startup, or blank title or description
    /// - `Err(AppError)` - Database error
    pub async fn create(&self, user_id: i32, dto: CreateJobDto) -> Result<Job, AppError> {
        let Some(startup) = StartupRepository::new(self.db)
            .find_first_by_founder(user_id)
            .await?
        else {
            return Err(AppError::BadRequest(
                "You need to register a startup first".to_string(),
            ));
        };

        let expires_at = Utc::now() + Duration::days(JOB_LIFETIME_DAYS);
        let param = CreateJobParam::from_dto(startup.id, user_id, dto, expires_at);

        if param.title.is_empty() || param.description.is_empty() {
            return Err(AppError::BadRequest(
                "Title and description are required".to_string(),
            ));
        }

        JobRepository::new(self.db).create(param, &startup).await
    }
}
