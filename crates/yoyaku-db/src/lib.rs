//! Database layer for the Yoyaku reservation API.
//!
//! Provides the idempotent schema bootstrap, the reservation repository, and
//! MySQL pool construction.

pub mod bootstrap;
pub mod error;
pub mod repo;

pub use bootstrap::{bootstrap, sample_reservation};
pub use error::{DbError, DbResult};
pub use repo::*;

use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use yoyaku_config::Config;

/// Create a connection pool for the configured database.
///
/// The pool connects lazily: construction always succeeds, and unreachable or
/// misconfigured targets surface as errors on first use. The HTTP server can
/// therefore start without a working database.
pub fn create_pool(config: &Config) -> MySqlPool {
    MySqlPoolOptions::new()
        .max_connections(10)
        .connect_lazy_with(database_options(config))
}

/// Connection options for the database server with no database selected.
/// The bootstrap needs this form because the database may not exist yet.
pub(crate) fn server_options(config: &Config) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
        .host(&config.db_servername)
        .port(parse_port(&config.db_port))
        .username(&config.db_username)
        .password(&config.db_password)
}

/// Connection options with the target database selected.
pub(crate) fn database_options(config: &Config) -> MySqlConnectOptions {
    server_options(config).database(&config.db_name)
}

// An unusable DB_PORT maps to port 0 so it fails at connect time the same
// way an unreachable host does.
fn parse_port(port: &str) -> u16 {
    port.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ports_parse() {
        assert_eq!(parse_port("3306"), 3306);
    }

    #[test]
    fn unusable_ports_map_to_zero() {
        assert_eq!(parse_port(""), 0);
        assert_eq!(parse_port("not-a-port"), 0);
        assert_eq!(parse_port("99999"), 0);
    }
}
