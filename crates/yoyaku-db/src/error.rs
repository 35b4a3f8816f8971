//! Database error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("failed to connect to database server: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("failed to create database: {0}")]
    CreateDatabase(#[source] sqlx::Error),

    #[error("failed to create table: {0}")]
    CreateTable(#[source] sqlx::Error),

    #[error("failed to insert sample data: {0}")]
    SeedData(#[source] sqlx::Error),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub type DbResult<T> = std::result::Result<T, DbError>;
