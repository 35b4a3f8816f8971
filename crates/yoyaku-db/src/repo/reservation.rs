//! Reservation repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::MySqlPool;

use crate::DbResult;

/// A reservation row to insert: a booking by a company for a date and party
/// size. The `id` column is assigned by the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    pub company_name: String,
    pub reservation_date: NaiveDate,
    pub number_of_people: i32,
}

#[async_trait]
pub trait ReservationRepo: Send + Sync {
    /// Number of rows in the `Reservations` table.
    async fn count(&self) -> DbResult<i64>;
}

/// MySQL implementation of [`ReservationRepo`].
pub struct MySqlReservationRepo {
    pool: MySqlPool,
}

impl MySqlReservationRepo {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationRepo for MySqlReservationRepo {
    async fn count(&self) -> DbResult<i64> {
        // One scalar query per call; the pooled connection is released when
        // the query completes, on the error path included.
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM Reservations")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
