//! Introduction factory for creating introduction requests.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test introductions between two users.
pub struct IntroductionFactory<'a> {
    db: &'a DatabaseConnection,
    requester_id: i32,
    target_id: i32,
    status: String,
    message: Option<String>,
}

impl<'a> IntroductionFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, requester_id: i32, target_id: i32) -> Self {
        Self {
            db,
            requester_id,
            target_id,
            status: "pending".to_string(),
            message: None,
        }
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Builds and inserts the introduction entity into the database.
    pub async fn build(self) -> Result<entity::introduction::Model, DbErr> {
        let now = Utc::now();
        entity::introduction::ActiveModel {
            requester_id: ActiveValue::Set(self.requester_id),
            target_id: ActiveValue::Set(self.target_id),
            connector_id: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            message: ActiveValue::Set(self.message),
            outcome: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending introduction from `requester_id` to `target_id`.
pub async fn create_introduction(
    db: &DatabaseConnection,
    requester_id: i32,
    target_id: i32,
) -> Result<entity::introduction::Model, DbErr> {
    IntroductionFactory::new(db, requester_id, target_id)
        .build()
        .await
}
