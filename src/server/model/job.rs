//! Job listing domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        enums::{JobType, LocationType},
        job::{CreateJobDto, JobDto},
    },
    server::{
        error::AppError,
        util::parse::{normalize_optional, parse_stored, parse_string_list},
    },
};

/// Job listing joined with the name and logo of its startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    pub id: i32,
    pub startup_id: i32,
    pub startup_name: String,
    pub startup_logo_url: Option<String>,
    pub posted_by_id: i32,
    pub title: String,
    pub description: String,
    pub requirements: Option<String>,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub salary_currency: String,
    pub job_type: JobType,
    pub location_type: LocationType,
    pub city: Option<String>,
    pub apply_url: Option<String>,
    pub apply_email: Option<String>,
    pub skills: Vec<String>,
    pub is_active: bool,
    pub is_featured: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Job {
    /// Converts a job entity and its startup into a domain model.
    ///
    /// # Returns
    /// - `Ok(Job)` - The converted job
    /// - `Err(AppError::InternalErr(_))` - Stored job or location type is unknown
    pub fn from_entity(
        entity: entity::job::Model,
        startup: &entity::startup::Model,
    ) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            startup_id: entity.startup_id,
            startup_name: startup.name.clone(),
            startup_logo_url: startup.logo_url.clone(),
            posted_by_id: entity.posted_by_id,
            title: entity.title,
            description: entity.description,
            requirements: entity.requirements,
            salary_min: entity.salary_min,
            salary_max: entity.salary_max,
            salary_currency: entity.salary_currency,
            job_type: parse_stored("job.job_type", entity.job_type, JobType::parse)?,
            location_type: parse_stored(
                "job.location_type",
                entity.location_type,
                LocationType::parse,
            )?,
            city: entity.city,
            apply_url: entity.apply_url,
            apply_email: entity.apply_email,
            skills: parse_string_list("job.skills", &entity.skills)?,
            is_active: entity.is_active,
            is_featured: entity.is_featured,
            expires_at: entity.expires_at,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> JobDto {
        JobDto {
            id: self.id,
            startup_id: self.startup_id,
            startup_name: self.startup_name,
            startup_logo_url: self.startup_logo_url,
            title: self.title,
            description: self.description,
            requirements: self.requirements,
            salary_min: self.salary_min,
            salary_max: self.salary_max,
            salary_currency: self.salary_currency,
            job_type: self.job_type,
            location_type: self.location_type,
            city: self.city,
            apply_url: self.apply_url,
            apply_email: self.apply_email,
            skills: self.skills,
            is_featured: self.is_featured,
            expires_at: self.expires_at,
            created_at: self.created_at,
        }
    }
}

/// Public job board filters.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    pub job_type: Option<JobType>,
    pub location_type: Option<LocationType>,
    pub city: Option<String>,
    /// Free text matched against title, description and startup name.
    pub query: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateJobParam {
    pub startup_id: i32,
    pub posted_by_id: i32,
    pub title: String,
    pub description: String,
    pub requirements: Option<String>,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub salary_currency: String,
    pub job_type: JobType,
    pub location_type: LocationType,
    pub city: Option<String>,
    pub apply_url: Option<String>,
    pub apply_email: Option<String>,
    pub skills: Vec<String>,
    pub expires_at: DateTime<Utc>,
}

impl CreateJobParam {
    /// Builds parameters from the posting form, applying INR, full-time and hybrid
    /// defaults.
    pub fn from_dto(
        startup_id: i32,
        posted_by_id: i32,
        dto: CreateJobDto,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            startup_id,
            posted_by_id,
            title: dto.title.trim().to_string(),
            description: dto.description.trim().to_string(),
            requirements: normalize_optional(dto.requirements),
            salary_min: dto.salary_min,
            salary_max: dto.salary_max,
            salary_currency: normalize_optional(dto.salary_currency)
                .unwrap_or_else(|| "INR".to_string()),
            job_type: dto.job_type.unwrap_or_default(),
            location_type: dto.location_type.unwrap_or_default(),
            city: normalize_optional(dto.city),
            apply_url: normalize_optional(dto.apply_url),
            apply_email: normalize_optional(dto.apply_email),
            skills: dto.skills,
            expires_at,
        }
    }
}
