//! Member moderation and operator bootstrap.

use dioxus_logger::tracing;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use subtle::ConstantTimeEq;

use crate::{
    model::admin::{AdminSetupDto, UpdateMemberDto},
    server::{
        data::{profile::ProfileRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        model::{member::AdminMember, profile::{Profile, UpdateProfileFlagsParam}},
        service::email::EmailService,
    },
};

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    /// Creates a new AdminService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AdminService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every user with their profile fields, if any.
    pub async fn list_members(&self) -> Result<Vec<AdminMember>, AppError> {
        UserRepository::new(self.db).get_all_with_profiles().await
    }

    /// Updates a member's approval and verification flags.
    ///
    /// Only flags present in `dto` are written. When the update moves the member from
    /// unapproved to approved, the approval email is sent; its failure is logged only.
    ///
    /// # Arguments
    /// - `dto` - Target member id and the flags to write
    /// - `email` - Email service used for the approval notice
    ///
    /// # Returns
    /// - `Ok(Profile)` - The updated profile
    /// - `Err(AppError::BadRequest)` - `memberId` is missing
    /// - `Err(AppError::NotFound)` - The member has no profile
    /// - `Err(AppError)` - Database error
    pub async fn update_member(
        &self,
        dto: UpdateMemberDto,
        email: &EmailService,
    ) -> Result<Profile, AppError> {
        let Some(member_id) = dto.member_id else {
            return Err(AppError::BadRequest("Member ID required".to_string()));
        };

        let (before, after) = ProfileRepository::new(self.db)
            .update_flags(UpdateProfileFlagsParam {
                user_id: member_id,
                is_approved: dto.is_approved,
                is_verified: dto.is_verified,
            })
            .await?
            .ok_or_else(|| AppError::NotFound("Member profile not found".to_string()))?;

        if !before.is_approved && after.is_approved {
            tracing::info!("Member {} approved", member_id);

            match UserRepository::new(self.db).find_by_id(member_id).await? {
                Some(user) => {
                    email
                        .send_approval(user.id, &user.email, user.name.as_deref())
                        .await;
                }
                None => tracing::warn!("Approved member {} has no user row", member_id),
            }
        }

        Ok(after)
    }

    /// Grants admin rights to an existing user and approves their profile.
    ///
    /// # Arguments
    /// - `dto` - Email of the user and the setup secret
    /// - `setup_secret` - The configured `SETUP_SECRET`
    ///
    /// # Returns
    /// - `Ok(String)` - Confirmation message
    /// - `Err(AppError::Forbidden)` - The secret does not match
    /// - `Err(AppError::BadRequest)` - No email given
    /// - `Err(AppError::NotFound)` - No user has the email
    /// - `Err(AppError)` - Database error
    pub async fn setup(&self, dto: AdminSetupDto, setup_secret: &str) -> Result<String, AppError> {
        if !secret_matches(dto.secret.as_deref(), setup_secret) {
            return Err(AppError::Forbidden("Invalid secret".to_string()));
        }

        let Some(email) = dto
            .email
            .map(|email| email.trim().to_lowercase())
            .filter(|email| !email.is_empty())
        else {
            return Err(AppError::BadRequest("Email required".to_string()));
        };

        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        user_repo.set_admin(user.id, true).await?;
        ProfileRepository::new(self.db)
            .approve_and_verify(user.id)
            .await?;

        tracing::info!("User {} ({}) granted admin via setup", user.id, email);

        Ok(format!("{} is now an admin", email))
    }

    /// Applies pending migrations when the secret matches.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of migrations applied
    /// - `Err(AppError::AuthErr(InvalidSecret))` - The secret does not match
    /// - `Err(AppError)` - Migration failed
    pub async fn migrate(&self, secret: Option<&str>, setup_secret: &str) -> Result<usize, AppError> {
        if !secret_matches(secret, setup_secret) {
            return Err(AuthError::InvalidSecret.into());
        }

        let pending = Migrator::get_pending_migrations(self.db).await?.len();
        Migrator::up(self.db, None).await?;

        tracing::info!("Applied {} pending migrations", pending);

        Ok(pending)
    }
}

/// Compares a provided secret with the configured one in constant time.
fn secret_matches(provided: Option<&str>, expected: &str) -> bool {
    match provided {
        Some(provided) if !expected.is_empty() => {
            provided.as_bytes().ct_eq(expected.as_bytes()).into()
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::secret_matches;

    #[test]
    fn secret_comparison() {
        assert!(secret_matches(Some("s3cret"), "s3cret"));
        assert!(!secret_matches(Some("s3cre"), "s3cret"));
        assert!(!secret_matches(None, "s3cret"));
        assert!(!secret_matches(Some(""), ""));
    }
}
