//! Job factory for creating job listings.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test job listings.
///
/// Jobs default to active, unfeatured, and expiring 30 days from now.
pub struct JobFactory<'a> {
    db: &'a DatabaseConnection,
    startup_id: i32,
    posted_by_id: i32,
    title: String,
    job_type: String,
    location_type: String,
    city: Option<String>,
    is_active: bool,
    is_featured: bool,
    expires_at: Option<DateTime<Utc>>,
}

impl<'a> JobFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, startup_id: i32, posted_by_id: i32) -> Self {
        Self {
            db,
            startup_id,
            posted_by_id,
            title: format!("Job {}", next_id()),
            job_type: "full-time".to_string(),
            location_type: "hybrid".to_string(),
            city: None,
            is_active: true,
            is_featured: false,
            expires_at: Some(Utc::now() + Duration::days(30)),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn job_type(mut self, job_type: impl Into<String>) -> Self {
        self.job_type = job_type.into();
        self
    }

    pub fn location_type(mut self, location_type: impl Into<String>) -> Self {
        self.location_type = location_type.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.is_featured = featured;
        self
    }

    pub fn expires_at(mut self, expires_at: Option<DateTime<Utc>>) -> Self {
        self.expires_at = expires_at;
        self
    }

    /// Builds and inserts the job entity into the database.
    pub async fn build(self) -> Result<entity::job::Model, DbErr> {
        let now = Utc::now();
        entity::job::ActiveModel {
            startup_id: ActiveValue::Set(self.startup_id),
            posted_by_id: ActiveValue::Set(self.posted_by_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set("Build things".to_string()),
            requirements: ActiveValue::Set(None),
            salary_min: ActiveValue::Set(None),
            salary_max: ActiveValue::Set(None),
            salary_currency: ActiveValue::Set("INR".to_string()),
            job_type: ActiveValue::Set(self.job_type),
            location_type: ActiveValue::Set(self.location_type),
            city: ActiveValue::Set(self.city),
            apply_url: ActiveValue::Set(None),
            apply_email: ActiveValue::Set(None),
            skills: ActiveValue::Set("[]".to_string()),
            is_active: ActiveValue::Set(self.is_active),
            is_featured: ActiveValue::Set(self.is_featured),
            expires_at: ActiveValue::Set(self.expires_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active job with default values.
pub async fn create_job(
    db: &DatabaseConnection,
    startup_id: i32,
    posted_by_id: i32,
) -> Result<entity::job::Model, DbErr> {
    JobFactory::new(db, startup_id, posted_by_id).build().await
}
