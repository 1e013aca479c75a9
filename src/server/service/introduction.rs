//! Introduction requests between members.
//!
//! Access to a single introduction is checked by `AuthGuard` before these methods run;
//! the service handles the rules that depend on the request body.

use sea_orm::DatabaseConnection;

use crate::{
    model::{enums::IntroductionStatus, introduction::CreateIntroductionDto},
    server::{
        data::{introduction::IntroductionRepository, user::UserRepository},
        error::AppError,
        model::introduction::{CreateIntroductionParam, Introduction, IntroductionListItem},
        util::parse::normalize_optional,
    },
};

pub struct IntroductionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IntroductionService<'a> {
    /// Creates a new IntroductionService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `IntroductionService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Requests an introduction from `requester_id` to the target in the body.
    ///
    /// # Returns
    /// - `Ok(Introduction)` - The stored request in the `pending` state
    /// - `Err(AppError::BadRequest)` - Missing target id, or the target is the requester
    /// - `Err(AppError::NotFound)` - The target user does not exist
    /// - `Err(AppError)` - Database error
    pub async fn create(
        &self,
        requester_id: i32,
        dto: CreateIntroductionDto,
    ) -> Result<Introduction, AppError> {
        let Some(target_id) = dto.target_id else {
            return Err(AppError::BadRequest("Target ID is required".to_string()));
        };

        if target_id == requester_id {
            return Err(AppError::BadRequest(
                "Cannot request introduction to yourself".to_string(),
            ));
        }

        if UserRepository::new(self.db)
            .find_by_id(target_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Target user not found".to_string()));
        }

        IntroductionRepository::new(self.db)
            .create(CreateIntroductionParam {
                requester_id,
                target_id,
                message: normalize_optional(dto.message),
            })
            .await
    }

    /// Gets an introduction by id.
    pub async fn get(&self, id: i32) -> Result<Introduction, AppError> {
        IntroductionRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Introduction not found".to_string()))
    }

    /// Moves an introduction to a response status.
    ///
    /// # Returns
    /// - `Ok(Introduction)` - The updated introduction
    /// - `Err(AppError::NotFound)` - The introduction does not exist
    /// - `Err(AppError)` - Database error
    pub async fn update_status(
        &self,
        id: i32,
        status: IntroductionStatus,
    ) -> Result<Introduction, AppError> {
        IntroductionRepository::new(self.db)
            .update_status(id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("Introduction not found".to_string()))
    }

    /// Lists the user's received and sent introductions, newest first.
    pub async fn list(
        &self,
        user_id: i32,
    ) -> Result<(Vec<IntroductionListItem>, Vec<IntroductionListItem>), AppError> {
        let repo = IntroductionRepository::new(self.db);

        let received = repo.get_received(user_id).await?;
        let sent = repo.get_sent(user_id).await?;

        Ok((received, sent))
    }
}

/// Parses the requested status, accepting only the target's responses.
///
/// # Returns
/// - `Ok(IntroductionStatus)` - `accepted`, `declined` or `completed`
/// - `Err(AppError::BadRequest)` - Anything else, including `pending` or no status
pub fn parse_response_status(value: Option<&str>) -> Result<IntroductionStatus, AppError> {
    value
        .and_then(IntroductionStatus::parse)
        .filter(IntroductionStatus::is_response)
        .ok_or_else(|| AppError::BadRequest("Invalid status".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_only_response_statuses() {
        assert_eq!(
            parse_response_status(Some("accepted")).ok(),
            Some(IntroductionStatus::Accepted)
        );
        assert_eq!(
            parse_response_status(Some("completed")).ok(),
            Some(IntroductionStatus::Completed)
        );
        assert!(matches!(
            parse_response_status(Some("pending")),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            parse_response_status(Some("ACCEPTED")),
            Err(AppError::BadRequest(_))
        ));
    }

    /// Tests that a missing status is rejected as a validation error.
    ///
    /// Expected: Err(AppError::BadRequest) for a missing or empty status
    #[test]
    fn rejects_missing_status() {
        assert!(matches!(
            parse_response_status(None),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            parse_response_status(Some("")),
            Err(AppError::BadRequest(_))
        ));
    }
}
