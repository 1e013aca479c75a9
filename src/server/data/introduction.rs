//! Introduction data repository.
//!
//! Stores introduction requests and resolves the counterpart's display fields for the
//! dashboard lists.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    model::enums::IntroductionStatus,
    server::{
        error::AppError,
        model::introduction::{
            CreateIntroductionParam, Introduction, IntroductionListItem, IntroductionParty,
        },
    },
};

/// Repository providing database operations for introductions.
pub struct IntroductionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IntroductionRepository<'a> {
    /// Creates a new IntroductionRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `IntroductionRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new introduction request in the `pending` state.
    ///
    /// # Arguments
    /// - `param` - Requester, target and optional message
    ///
    /// # Returns
    /// - `Ok(Introduction)` - The stored introduction
    /// - `Err(AppError)` - Database error
    pub async fn create(&self, param: CreateIntroductionParam) -> Result<Introduction, AppError> {
        let now = Utc::now();

        let entity = entity::introduction::ActiveModel {
            requester_id: ActiveValue::Set(param.requester_id),
            target_id: ActiveValue::Set(param.target_id),
            connector_id: ActiveValue::Set(None),
            status: ActiveValue::Set(IntroductionStatus::Pending.as_str().to_string()),
            message: ActiveValue::Set(param.message),
            outcome: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Introduction::from_entity(entity)
    }

    /// Finds an introduction by id.
    ///
    /// # Returns
    /// - `Ok(Some(Introduction))` - Introduction found
    /// - `Ok(None)` - No introduction with that id
    /// - `Err(AppError)` - Database error or invalid stored status
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Introduction>, AppError> {
        let entity = entity::prelude::Introduction::find_by_id(id)
            .one(self.db)
            .await?;

        entity.map(Introduction::from_entity).transpose()
    }

    /// Sets the status of an introduction and refreshes `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Introduction))` - The updated introduction
    /// - `Ok(None)` - No introduction with that id
    /// - `Err(AppError)` - Database error
    pub async fn update_status(
        &self,
        id: i32,
        status: IntroductionStatus,
    ) -> Result<Option<Introduction>, AppError> {
        let Some(entity) = entity::prelude::Introduction::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::introduction::ActiveModel = entity.into();
        active.status = ActiveValue::Set(status.as_str().to_string());
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(Introduction::from_entity(updated)?))
    }

    /// Lists introductions received by the user, newest first.
    ///
    /// Each entry carries the requester's display fields.
    pub async fn get_received(&self, user_id: i32) -> Result<Vec<IntroductionListItem>, AppError> {
        let entities = entity::prelude::Introduction::find()
            .filter(entity::introduction::Column::TargetId.eq(user_id))
            .order_by_desc(entity::introduction::Column::CreatedAt)
            .order_by_desc(entity::introduction::Column::Id)
            .all(self.db)
            .await?;

        self.with_counterparts(entities, |intro| intro.requester_id)
            .await
    }

    /// Lists introductions requested by the user, newest first.
    ///
    /// Each entry carries the target's display fields.
    pub async fn get_sent(&self, user_id: i32) -> Result<Vec<IntroductionListItem>, AppError> {
        let entities = entity::prelude::Introduction::find()
            .filter(entity::introduction::Column::RequesterId.eq(user_id))
            .order_by_desc(entity::introduction::Column::CreatedAt)
            .order_by_desc(entity::introduction::Column::Id)
            .all(self.db)
            .await?;

        self.with_counterparts(entities, |intro| intro.target_id)
            .await
    }

    /// Loads the counterpart user and profile for each introduction in two queries.
    async fn with_counterparts(
        &self,
        entities: Vec<entity::introduction::Model>,
        counterpart_id: fn(&Introduction) -> i32,
    ) -> Result<Vec<IntroductionListItem>, AppError> {
        let introductions = entities
            .into_iter()
            .map(Introduction::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        let ids: Vec<i32> = introductions.iter().map(counterpart_id).collect();
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let parties: HashMap<i32, IntroductionParty> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids))
            .find_also_related(entity::prelude::Profile)
            .all(self.db)
            .await?
            .into_iter()
            .map(|(user, profile)| {
                (
                    user.id,
                    IntroductionParty {
                        id: user.id,
                        name: user.name,
                        image: user.image,
                        title: profile.as_ref().and_then(|p| p.title.clone()),
                        company: profile.and_then(|p| p.company),
                    },
                )
            })
            .collect();

        Ok(introductions
            .into_iter()
            .map(|introduction| {
                let id = counterpart_id(&introduction);
                let counterpart = parties.get(&id).cloned().unwrap_or(IntroductionParty {
                    id,
                    name: None,
                    image: None,
                    title: None,
                    company: None,
                });

                IntroductionListItem {
                    introduction,
                    counterpart,
                }
            })
            .collect())
    }
}
