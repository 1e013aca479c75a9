//! Startup domain model and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        enums::StartupStage,
        startup::{CreateStartupDto, StartupDto},
    },
    server::{
        error::AppError,
        util::parse::{normalize_optional, parse_stored},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Startup {
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

impl Startup {
    pub fn from_entity(entity: entity::startup::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            founder_id: entity.founder_id,
            name: entity.name,
            tagline: entity.tagline,
            description: entity.description,
            logo_url: entity.logo_url,
            website_url: entity.website_url,
            stage: parse_stored("startup.stage", entity.stage, StartupStage::parse)?,
            sector: entity.sector,
            city: entity.city,
            team_size: entity.team_size,
            funding_raised: entity.funding_raised,
            is_raising: entity.is_raising,
            raise_amount: entity.raise_amount,
            is_featured: entity.is_featured,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> StartupDto {
        StartupDto {
            id: self.id,
            founder_id: self.founder_id,
            name: self.name,
            tagline: self.tagline,
            description: self.description,
            logo_url: self.logo_url,
            website_url: self.website_url,
            stage: self.stage,
            sector: self.sector,
            city: self.city,
            team_size: self.team_size,
            funding_raised: self.funding_raised,
            is_raising: self.is_raising,
            raise_amount: self.raise_amount,
            is_featured: self.is_featured,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateStartupParam {
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
}

impl CreateStartupParam {
    pub fn from_dto(founder_id: i32, dto: CreateStartupDto) -> Self {
        Self {
            founder_id,
            name: dto.name.trim().to_string(),
            tagline: normalize_optional(dto.tagline),
            description: normalize_optional(dto.description),
            logo_url: normalize_optional(dto.logo_url),
            website_url: normalize_optional(dto.website_url),
            stage: dto.stage,
            sector: normalize_optional(dto.sector),
            city: normalize_optional(dto.city),
            team_size: dto.team_size,
            funding_raised: normalize_optional(dto.funding_raised),
            is_raising: dto.is_raising,
            raise_amount: normalize_optional(dto.raise_amount),
        }
    }
}
