//! Idempotent schema bootstrap.
//!
//! Runs once at process start: creates the database and the `Reservations`
//! table if absent, then seeds one fixed sample row unless an identical row
//! already exists. Safe to run on every start.

use chrono::NaiveDate;
use sqlx::{Connection, MySqlConnection};
use tracing::debug;
use yoyaku_config::Config;

use crate::repo::NewReservation;
use crate::{DbError, DbResult, database_options, server_options};

const CREATE_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS Reservations (
    id INT AUTO_INCREMENT PRIMARY KEY,
    company_name VARCHAR(255) NOT NULL,
    reservation_date DATE NOT NULL,
    number_of_people INT NOT NULL
)";

// Guarded on the full business-field triple: there is no unique constraint
// on the table, the guard alone keeps repeated bootstraps from duplicating
// the sample row.
const SEED_RESERVATION: &str = "\
INSERT INTO Reservations (company_name, reservation_date, number_of_people)
SELECT ?, ?, ?
FROM DUAL
WHERE NOT EXISTS (
    SELECT 1 FROM Reservations
    WHERE company_name = ? AND reservation_date = ? AND number_of_people = ?
)";

/// The row seeded into an otherwise empty `Reservations` table.
pub fn sample_reservation() -> NewReservation {
    NewReservation {
        company_name: "株式会社テスト".to_string(),
        reservation_date: NaiveDate::from_ymd_opt(2024, 4, 21).expect("fixed date is valid"),
        number_of_people: 5,
    }
}

/// Ensure the database, the table, and the sample row exist.
///
/// Steps run in order and the first failure aborts the rest. The caller
/// decides whether the process keeps running.
pub async fn bootstrap(config: &Config) -> DbResult<()> {
    let mut conn = MySqlConnection::connect_with(&server_options(config))
        .await
        .map_err(DbError::Connect)?;
    sqlx::query(&format!(
        "CREATE DATABASE IF NOT EXISTS `{}`",
        config.db_name
    ))
    .execute(&mut conn)
    .await
    .map_err(DbError::CreateDatabase)?;
    conn.close().await.ok();

    let mut conn = MySqlConnection::connect_with(&database_options(config))
        .await
        .map_err(DbError::Connect)?;
    sqlx::query(CREATE_TABLE)
        .execute(&mut conn)
        .await
        .map_err(DbError::CreateTable)?;

    let seed = sample_reservation();
    let result = sqlx::query(SEED_RESERVATION)
        .bind(&seed.company_name)
        .bind(seed.reservation_date)
        .bind(seed.number_of_people)
        .bind(&seed.company_name)
        .bind(seed.reservation_date)
        .bind(seed.number_of_people)
        .execute(&mut conn)
        .await
        .map_err(DbError::SeedData)?;
    debug!(rows = result.rows_affected(), "sample reservation insert");
    conn.close().await.ok();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_reservation_is_the_fixed_seed_row() {
        let seed = sample_reservation();
        assert_eq!(seed.company_name, "株式会社テスト");
        assert_eq!(seed.reservation_date.to_string(), "2024-04-21");
        assert_eq!(seed.number_of_people, 5);
    }

    #[test]
    fn schema_statements_only_create_when_absent() {
        assert!(CREATE_TABLE.starts_with("CREATE TABLE IF NOT EXISTS Reservations"));
    }

    #[test]
    fn seed_insert_is_guarded_on_every_business_field() {
        let (_, guard) = SEED_RESERVATION
            .split_once("WHERE NOT EXISTS")
            .expect("seed insert has an existence guard");
        for column in ["company_name", "reservation_date", "number_of_people"] {
            assert!(guard.contains(&format!("{column} = ?")), "{column} unguarded");
        }
    }
}
