//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles user creation on sign-in, lookups, admin status and the Stripe customer
//! link, with conversion between entity models and domain models at the boundary.

use crate::server::{
    error::AppError,
    model::{
        member::AdminMember,
        profile::Profile,
        user::{UpsertUserParam, User},
    },
};
use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and querying user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a user from a Google sign-in.
    ///
    /// Inserts a new user or refreshes the name and image of the existing user with the
    /// same email. Admin status and the Stripe customer link are never touched here.
    ///
    /// # Arguments
    /// - `param` - Email, name and image reported by Google
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated user
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<User, DbErr> {
        let now = Utc::now();

        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            email: ActiveValue::Set(param.email),
            name: ActiveValue::Set(param.name),
            image: ActiveValue::Set(param.image),
            is_admin: ActiveValue::Set(false),
            stripe_customer_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::Email)
                .update_columns([
                    entity::user::Column::Name,
                    entity::user::Column::Image,
                    entity::user::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by email address.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds the user linked to a Stripe customer.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - A user carries this customer id
    /// - `Ok(None)` - No user is linked to the customer
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_stripe_customer_id(
        &self,
        customer_id: &str,
    ) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::StripeCustomerId.eq(customer_id))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Sets the admin flag on a user.
    ///
    /// # Arguments
    /// - `user_id` - Id of the user to update
    /// - `is_admin` - New admin status
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated (0 when the user does not exist)
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_admin(&self, user_id: i32, is_admin: bool) -> Result<u64, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::IsAdmin,
                sea_orm::sea_query::Expr::value(is_admin),
            )
            .col_expr(
                entity::user::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Replaces the display name chosen during onboarding.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated (0 when the user does not exist)
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_name(&self, user_id: i32, name: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::Name,
                sea_orm::sea_query::Expr::value(name.to_string()),
            )
            .col_expr(
                entity::user::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Links a Stripe customer to a user.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated (0 when the user does not exist)
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_stripe_customer_id(
        &self,
        user_id: i32,
        customer_id: &str,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::StripeCustomerId,
                sea_orm::sea_query::Expr::value(customer_id.to_string()),
            )
            .col_expr(
                entity::user::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets every user with their profile, newest first.
    ///
    /// Used by the admin member list; users who have not onboarded yet have no profile.
    ///
    /// # Returns
    /// - `Ok(Vec<AdminMember>)` - All users with optional profiles
    /// - `Err(AppError)` - Database error or invalid stored profile
    pub async fn get_all_with_profiles(&self) -> Result<Vec<AdminMember>, AppError> {
        let rows = entity::prelude::User::find()
            .find_also_related(entity::prelude::Profile)
            .order_by_desc(entity::user::Column::CreatedAt)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(user, profile)| {
                Ok(AdminMember {
                    user: User::from_entity(user),
                    profile: profile.map(Profile::from_entity).transpose()?,
                })
            })
            .collect()
    }
}
