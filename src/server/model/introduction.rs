//! Introduction domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        enums::IntroductionStatus,
        introduction::{IntroductionDto, IntroductionListItemDto, IntroductionPartyDto},
    },
    server::{error::AppError, util::parse::parse_stored},
};

/// A request from `requester_id` to be introduced to `target_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Introduction {
    pub id: i32,
    pub requester_id: i32,
    pub target_id: i32,
    pub connector_id: Option<i32>,
    pub status: IntroductionStatus,
    pub message: Option<String>,
    pub outcome: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Introduction {
    pub fn from_entity(entity: entity::introduction::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            requester_id: entity.requester_id,
            target_id: entity.target_id,
            connector_id: entity.connector_id,
            status: parse_stored(
                "introduction.status",
                entity.status,
                IntroductionStatus::parse,
            )?,
            message: entity.message,
            outcome: entity.outcome,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> IntroductionDto {
        IntroductionDto {
            id: self.id,
            requester_id: self.requester_id,
            target_id: self.target_id,
            connector_id: self.connector_id,
            status: self.status,
            message: self.message,
            outcome: self.outcome,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Whether `user_id` is the requester or the target.
    pub fn involves(&self, user_id: i32) -> bool {
        self.requester_id == user_id || self.target_id == user_id
    }
}

#[derive(Debug, Clone)]
pub struct CreateIntroductionParam {
    pub requester_id: i32,
    pub target_id: i32,
    pub message: Option<String>,
}

/// Display fields for the other member on an introduction.
#[derive(Debug, Clone, PartialEq)]
pub struct IntroductionParty {
    pub id: i32,
    pub name: Option<String>,
    pub image: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
}

/// An introduction from the point of view of one participant.
#[derive(Debug, Clone, PartialEq)]
pub struct IntroductionListItem {
    pub introduction: Introduction,
    pub counterpart: IntroductionParty,
}

impl IntroductionListItem {
    pub fn into_dto(self) -> IntroductionListItemDto {
        IntroductionListItemDto {
            id: self.introduction.id,
            status: self.introduction.status,
            message: self.introduction.message,
            created_at: self.introduction.created_at,
            counterpart: IntroductionPartyDto {
                id: self.counterpart.id,
                name: self.counterpart.name,
                image: self.counterpart.image,
                title: self.counterpart.title,
                company: self.counterpart.company,
            },
        }
    }
}
