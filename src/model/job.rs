use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::enums::{JobType, LocationType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct JobDto {
    pub id: i32,
    pub startup_id: i32,
    pub startup_name: String,
    pub startup_logo_url: Option<String>,
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
    pub is_featured: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Job posting form. Missing enum fields fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateJobDto {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(default)]
    pub salary_min: Option<i32>,
    #[serde(default)]
    pub salary_max: Option<i32>,
    #[serde(default)]
    pub salary_currency: Option<String>,
    #[serde(default)]
    pub job_type: Option<JobType>,
    #[serde(default)]
    pub location_type: Option<LocationType>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub apply_url: Option<String>,
    #[serde(default)]
    pub apply_email: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}
