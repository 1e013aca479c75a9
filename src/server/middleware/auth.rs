use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{
        introduction::IntroductionRepository, profile::ProfileRepository, user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::{introduction::Introduction, user::User},
};

/// Access requirements checked by [`AuthGuard::require`].
pub enum Permission {
    /// The user has the admin flag.
    Admin,
    /// The user has a profile and an admin approved it.
    ApprovedMember,
    /// The user is the requester or target of the introduction.
    IntroductionParticipant(i32),
    /// The user is the target of the introduction.
    IntroductionTarget(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the signed-in user and checks every permission in order.
    ///
    /// # Returns
    /// - `Ok(User)` - The signed-in user satisfies every permission
    /// - `Err(AppError::AuthErr(UserNotInSession | UserNotInDatabase))` - 401
    /// - `Err(AppError::AuthErr(AccessDenied))` - 403 for the first failed permission
    /// - `Err(AppError::NotFound)` - An introduction permission names a missing introduction
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted to access an admin route without admin permissions"
                                .to_string(),
                        )
                        .into());
                    }
                }
                Permission::ApprovedMember => {
                    let approved = ProfileRepository::new(self.db)
                        .find_by_user_id(user_id)
                        .await?
                        .is_some_and(|profile| profile.is_approved);

                    if !approved {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted to post without an approved profile".to_string(),
                        )
                        .into());
                    }
                }
                Permission::IntroductionParticipant(intro_id) => {
                    let intro = self.find_introduction(*intro_id).await?;

                    if !intro.involves(user_id) {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            format!(
                                "User attempted to view introduction {} they are not part of",
                                intro_id
                            ),
                        )
                        .into());
                    }
                }
                Permission::IntroductionTarget(intro_id) => {
                    let intro = self.find_introduction(*intro_id).await?;

                    if intro.target_id != user_id {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            format!(
                                "User attempted to update introduction {} without being its target",
                                intro_id
                            ),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    /// Resolves the signed-in user when there is one.
    ///
    /// A session pointing at a deleted user is treated as anonymous.
    pub async fn optional(&self) -> Result<Option<User>, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Ok(None);
        };

        Ok(UserRepository::new(self.db).find_by_id(user_id).await?)
    }

    async fn find_introduction(&self, intro_id: i32) -> Result<Introduction, AppError> {
        IntroductionRepository::new(self.db)
            .find_by_id(intro_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Introduction not found".to_string()))
    }
}
