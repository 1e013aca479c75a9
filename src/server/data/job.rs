//! Job listing data repository.
//!
//! Every public query applies the visibility rule: a job is listed while it is active
//! and its `expires_at` is unset or still in the future.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::job::{CreateJobParam, Job, JobFilter},
    util::parse::encode_string_list,
};

/// Repository providing database operations for job listings.
pub struct JobRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JobRepository<'a> {
    /// Creates a new JobRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `JobRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Condition selecting jobs that are active and unexpired at `now`.
    fn visible_at(now: DateTime<Utc>) -> Condition {
        Condition::all()
            .add(entity::job::Column::IsActive.eq(true))
            .add(
                Condition::any()
                    .add(entity::job::Column::ExpiresAt.is_null())
                    .add(entity::job::Column::ExpiresAt.gt(now)),
            )
    }

    /// Lists visible jobs matching the filters, featured first then newest.
    ///
    /// # Arguments
    /// - `filter` - Optional job type, location type, city and free-text filters
    /// - `now` - Reference time for expiry
    ///
    /// # Returns
    /// - `Ok(Vec<Job>)` - Visible jobs joined with their startup
    /// - `Err(AppError)` - Database error or invalid stored value
    pub async fn get_visible(
        &self,
        filter: &JobFilter,
        now: DateTime<Utc>,
    ) -> Result<Vec<Job>, AppError> {
        use entity::job::Column;

        let mut query = entity::prelude::Job::find()
            .find_also_related(entity::prelude::Startup)
            .filter(Self::visible_at(now));

        if let Some(job_type) = filter.job_type {
            query = query.filter(Column::JobType.eq(job_type.as_str()));
        }

        if let Some(location_type) = filter.location_type {
            query = query.filter(Column::LocationType.eq(location_type.as_str()));
        }

        if let Some(city) = filter.city.as_deref().filter(|c| !c.trim().is_empty()) {
            query = query.filter(Column::City.contains(city.trim()));
        }

        if let Some(text) = filter.query.as_deref().filter(|q| !q.trim().is_empty()) {
            let text = text.trim();
            query = query.filter(
                Condition::any()
                    .add(Column::Title.contains(text))
                    .add(Column::Description.contains(text))
                    .add(entity::startup::Column::Name.contains(text)),
            );
        }

        let rows = query
            .order_by_desc(Column::IsFeatured)
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(self.db)
            .await?;

        let mut jobs = Vec::with_capacity(rows.len());
        for (job, startup) in rows {
            if let Some(startup) = startup {
                jobs.push(Job::from_entity(job, &startup)?);
            }
        }

        Ok(jobs)
    }

    /// Finds a single visible job.
    ///
    /// # Returns
    /// - `Ok(Some(Job))` - The job exists and is visible at `now`
    /// - `Ok(None)` - Missing, inactive or expired
    /// - `Err(AppError)` - Database error or invalid stored value
    pub async fn find_visible_by_id(
        &self,
        id: i32,
        now: DateTime<Utc>,
    ) -> Result<Option<Job>, AppError> {
        let row = entity::prelude::Job::find_by_id(id)
            .find_also_related(entity::prelude::Startup)
            .filter(Self::visible_at(now))
            .one(self.db)
            .await?;

        match row {
            Some((job, Some(startup))) => Ok(Some(Job::from_entity(job, &startup)?)),
            _ => Ok(None),
        }
    }

    /// Stores a new active job listing.
    ///
    /// # Arguments
    /// - `param` - Job fields with defaults already applied
    /// - `startup` - The owning startup, used for the returned model
    ///
    /// # Returns
    /// - `Ok(Job)` - The stored job
    /// - `Err(AppError)` - Database error
    pub async fn create(
        &self,
        param: CreateJobParam,
        startup: &entity::startup::Model,
    ) -> Result<Job, AppError> {
        let now = Utc::now();

        let entity = entity::job::ActiveModel {
            startup_id: ActiveValue::Set(param.startup_id),
            posted_by_id: ActiveValue::Set(param.posted_by_id),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            requirements: ActiveValue::Set(param.requirements),
            salary_min: ActiveValue::Set(param.salary_min),
            salary_max: ActiveValue::Set(param.salary_max),
            salary_currency: ActiveValue::Set(param.salary_currency),
            job_type: ActiveValue::Set(param.job_type.as_str().to_string()),
            location_type: ActiveValue::Set(param.location_type.as_str().to_string()),
            city: ActiveValue::Set(param.city),
            apply_url: ActiveValue::Set(param.apply_url),
            apply_email: ActiveValue::Set(param.apply_email),
            skills: ActiveValue::Set(encode_string_list(&param.skills)),
            is_active: ActiveValue::Set(true),
            is_featured: ActiveValue::Set(false),
            expires_at: ActiveValue::Set(Some(param.expires_at)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Job::from_entity(entity, startup)
    }
}
