//! Event RSVP data repository.
//!
//! Seats are claimed with a single conditional update of the event's
//! `registered_count`, so concurrent RSVPs can never push the count past capacity.
//! Whether that update touched a row decides between `registered` and `waitlist`.
//! The counter is first resynced from the RSVP rows in the same transaction, so
//! rows removed by a user cascade delete free their seats.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    EntityTrait, PaginatorTrait, QueryFilter, SqlErr, TransactionTrait,
};

use crate::{
    model::enums::RsvpStatus,
    server::{
        error::AppError,
        model::event::{Event, Rsvp, RsvpOutcome, RsvpSummary},
    },
};

/// Repository providing database operations for event RSVPs.
pub struct RsvpRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RsvpRepository<'a> {
    /// Creates a new RsvpRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `RsvpRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a user for an event, or waitlists them when the event is full.
    ///
    /// Runs in one transaction: rejects an existing RSVP, resyncs `registered_count`
    /// with the stored `registered` rows, then increments
    /// `registered_count` only where `capacity IS NULL OR registered_count < capacity`.
    /// One affected row stores a `registered` RSVP, zero stores a `waitlist` RSVP. A
    /// unique violation from a concurrent duplicate is reported as already registered.
    ///
    /// # Arguments
    /// - `event_id` - Id of an existing event
    /// - `user_id` - Id of the user registering
    ///
    /// # Returns
    /// - `Ok(RsvpOutcome::Created(status))` - RSVP stored with the given status
    /// - `Ok(RsvpOutcome::AlreadyRegistered)` - The user already has an RSVP
    /// - `Err(AppError)` - Database error
    pub async fn create(&self, event_id: i32, user_id: i32) -> Result<RsvpOutcome, AppError> {
        use entity::event::Column as EventColumn;
        use entity::event_rsvp::Column;

        let txn = self.db.begin().await?;

        let existing = entity::prelude::EventRsvp::find()
            .filter(Column::EventId.eq(event_id))
            .filter(Column::UserId.eq(user_id))
            .one(&txn)
            .await?;

        if existing.is_some() {
            return Ok(RsvpOutcome::AlreadyRegistered);
        }

        entity::prelude::Event::update_many()
            .col_expr(
                EventColumn::RegisteredCount,
                Expr::cust_with_values(
                    format!(
                        "(SELECT COUNT(*) FROM event_rsvp WHERE event_rsvp.event_id = ? AND event_rsvp.status = '{}')",
                        RsvpStatus::Registered.as_str()
                    ),
                    [event_id],
                ),
            )
            .filter(EventColumn::Id.eq(event_id))
            .exec(&txn)
            .await?;

        let seat = entity::prelude::Event::update_many()
            .col_expr(
                EventColumn::RegisteredCount,
                Expr::cust("registered_count + 1"),
            )
            .filter(EventColumn::Id.eq(event_id))
            .filter(
                Condition::any()
                    .add(EventColumn::Capacity.is_null())
                    .add(Expr::cust("registered_count < capacity")),
            )
            .exec(&txn)
            .await?;

        let status = if seat.rows_affected == 1 {
            RsvpStatus::Registered
        } else {
            RsvpStatus::Waitlist
        };

        let inserted = entity::event_rsvp::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            user_id: ActiveValue::Set(user_id),
            status: ActiveValue::Set(status.as_str().to_string()),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await;

        match inserted {
            Ok(_) => {}
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                return Ok(RsvpOutcome::AlreadyRegistered);
            }
            Err(err) => return Err(err.into()),
        }

        txn.commit().await?;

        Ok(RsvpOutcome::Created(status))
    }

    /// Removes a user's RSVP, releasing their seat when they held one.
    ///
    /// # Returns
    /// - `Ok(Some(status))` - The RSVP existed and was removed; `status` is what it held
    /// - `Ok(None)` - The user had no RSVP for the event
    /// - `Err(AppError)` - Database error or invalid stored status
    pub async fn delete(&self, event_id: i32, user_id: i32) -> Result<Option<RsvpStatus>, AppError> {
        use entity::event::Column as EventColumn;
        use entity::event_rsvp::Column;

        let txn = self.db.begin().await?;

        let Some(entity) = entity::prelude::EventRsvp::find()
            .filter(Column::EventId.eq(event_id))
            .filter(Column::UserId.eq(user_id))
            .one(&txn)
            .await?
        else {
            return Ok(None);
        };

        let rsvp = Rsvp::from_entity(entity)?;

        entity::prelude::EventRsvp::delete_by_id(rsvp.id)
            .exec(&txn)
            .await?;

        if rsvp.status == RsvpStatus::Registered {
            entity::prelude::Event::update_many()
                .col_expr(
                    EventColumn::RegisteredCount,
                    Expr::cust("registered_count - 1"),
                )
                .filter(EventColumn::Id.eq(event_id))
                .filter(EventColumn::RegisteredCount.gt(0))
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;

        Ok(Some(rsvp.status))
    }

    /// Finds a user's RSVP for an event.
    ///
    /// # Returns
    /// - `Ok(Some(Rsvp))` - The user has an RSVP
    /// - `Ok(None)` - No RSVP
    /// - `Err(AppError)` - Database error or invalid stored status
    pub async fn find(&self, event_id: i32, user_id: i32) -> Result<Option<Rsvp>, AppError> {
        let entity = entity::prelude::EventRsvp::find()
            .filter(entity::event_rsvp::Column::EventId.eq(event_id))
            .filter(entity::event_rsvp::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        entity.map(Rsvp::from_entity).transpose()
    }

    /// Counts registered and waitlisted RSVPs and resolves the caller's own status.
    ///
    /// # Arguments
    /// - `event` - The event to summarize
    /// - `user_id` - The caller, `None` when anonymous
    ///
    /// # Returns
    /// - `Ok(RsvpSummary)` - Counts, capacity and the caller's status
    /// - `Err(AppError)` - Database error or invalid stored status
    pub async fn summary(
        &self,
        event: &Event,
        user_id: Option<i32>,
    ) -> Result<RsvpSummary, AppError> {
        let registered = self.count_with_status(event.id, RsvpStatus::Registered).await?;
        let waitlist = self.count_with_status(event.id, RsvpStatus::Waitlist).await?;

        let user_status = match user_id {
            Some(user_id) => self.find(event.id, user_id).await?.map(|rsvp| rsvp.status),
            None => None,
        };

        Ok(RsvpSummary {
            registered,
            waitlist,
            capacity: event.capacity,
            user_status,
        })
    }

    async fn count_with_status(&self, event_id: i32, status: RsvpStatus) -> Result<u64, AppError> {
        let count = entity::prelude::EventRsvp::find()
            .filter(entity::event_rsvp::Column::EventId.eq(event_id))
            .filter(entity::event_rsvp::Column::Status.eq(status.as_str()))
            .count(self.db)
            .await?;

        Ok(count)
    }
}
