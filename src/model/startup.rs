use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::enums::StartupStage;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct StartupDto {
    pub id: i32,
    pub founder_id: i32,
    pub name: String,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
    pub stage: StartupStage,
    pub sector: Option<String>,
    pub city: Option<String>,
    pub team_size: Option<i32>,
    pub funding_raised: Option<String>,
    pub is_raising: bool,
    pub raise_amount: Option<String>,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateStartupDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub stage: StartupStage,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub team_size: Option<i32>,
    #[serde(default)]
    pub funding_raised: Option<String>,
    #[serde(default)]
    pub is_raising: bool,
    #[serde(default)]
    pub raise_amount: Option<String>,
}
