//! Public member directory.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::profile::ProfileRepository,
    error::AppError,
    model::member::{Member, MemberFilter},
};

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists approved members matching the filters.
    pub async fn list(&self, filter: &MemberFilter) -> Result<Vec<Member>, AppError> {
        ProfileRepository::new(self.db).find_approved(filter).await
    }

    /// Gets an approved member by user id.
    ///
    /// # Returns
    /// - `Ok(Member)` - The member
    /// - `Err(AppError::NotFound)` - No such user, or the profile is missing or unapproved
    /// - `Err(AppError)` - Database error
    pub async fn get(&self, user_id: i32) -> Result<Member, AppError> {
        ProfileRepository::new(self.db)
            .find_approved_member(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found".to_string()))
    }
}
