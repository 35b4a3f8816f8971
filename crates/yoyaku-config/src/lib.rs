//! Environment configuration for the Yoyaku reservation API.
//!
//! Settings come from process environment variables, optionally pre-populated
//! from a local `.env` file. They are read once at startup into a [`Config`]
//! that is passed explicitly to the other crates; nothing reads the
//! environment ad hoc after that.

use std::env;

/// Listen port used when `API_PORT` is unset or empty.
pub const DEFAULT_API_PORT: &str = "8080";

/// Connection and listener settings.
///
/// Database fields are kept as raw text, empty when the variable is unset.
/// No validation happens at load time; unusable values surface downstream as
/// connection or bind errors.
#[derive(Debug, Clone)]
pub struct Config {
    /// Database login name (`DB_USERNAME`).
    pub db_username: String,
    /// Database login secret (`DB_PASSWORD`).
    pub db_password: String,
    /// Database host (`DB_SERVERNAME`).
    pub db_servername: String,
    /// Database port (`DB_PORT`).
    pub db_port: String,
    /// Target database name (`DB_NAME`).
    pub db_name: String,
    /// HTTP listen port (`API_PORT`).
    pub api_port: String,
}

impl Config {
    /// Load the optional `.env` file, then read the process environment.
    ///
    /// Variables already set in the environment win over the file; a missing
    /// file is not an error.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).unwrap_or_default();
        Self {
            db_username: var("DB_USERNAME"),
            db_password: var("DB_PASSWORD"),
            db_servername: var("DB_SERVERNAME"),
            db_port: var("DB_PORT"),
            db_name: var("DB_NAME"),
            api_port: lookup("API_PORT")
                .filter(|port| !port.is_empty())
                .unwrap_or_else(|| DEFAULT_API_PORT.to_string()),
        }
    }

    /// Address the HTTP listener binds to.
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.api_port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let env: HashMap<&str, &str> = pairs.iter().copied().collect();
        Config::from_lookup(|key| env.get(key).map(|value| value.to_string()))
    }

    #[test]
    fn missing_variables_become_empty_strings() {
        let config = config_from(&[]);
        assert_eq!(config.db_username, "");
        assert_eq!(config.db_password, "");
        assert_eq!(config.db_servername, "");
        assert_eq!(config.db_port, "");
        assert_eq!(config.db_name, "");
    }

    #[test]
    fn api_port_defaults_to_8080() {
        let config = config_from(&[]);
        assert_eq!(config.api_port, "8080");
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn empty_api_port_falls_back_to_default() {
        let config = config_from(&[("API_PORT", "")]);
        assert_eq!(config.api_port, "8080");
    }

    #[test]
    fn set_variables_are_read_verbatim() {
        let config = config_from(&[
            ("DB_USERNAME", "app"),
            ("DB_PASSWORD", "secret"),
            ("DB_SERVERNAME", "db.internal"),
            ("DB_PORT", "3306"),
            ("DB_NAME", "reservations"),
            ("API_PORT", "9000"),
        ]);
        assert_eq!(config.db_username, "app");
        assert_eq!(config.db_password, "secret");
        assert_eq!(config.db_servername, "db.internal");
        assert_eq!(config.db_port, "3306");
        assert_eq!(config.db_name, "reservations");
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
    }
}
