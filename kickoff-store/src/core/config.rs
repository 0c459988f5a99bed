use std::path::PathBuf;

use crate::auth::JwtConfig;

/// Library configuration
///
/// # Environment variables
///
/// Every value can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | KICKOFF_DATA_DIR | ./data | Directory holding the store file |
/// | ENVIRONMENT | development | Runtime environment |
/// | JWT_SECRET | dev default (debug builds only) | Token signing secret |
/// | JWT_EXPIRATION_MINUTES | 1440 | Token lifetime |
/// | JWT_ISSUER | kickoff-league | Token issuer |
/// | JWT_AUDIENCE | kickoff-app | Token audience |
/// | KICKOFF_ADMIN_EMAIL | admin@kickoffleague.co.uk | Seeded admin account |
/// | KICKOFF_ADMIN_PASSWORD | dev default | Seeded admin password |
///
/// Construct the struct directly to inject configuration without
/// touching the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the store file and logs
    pub data_dir: String,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Token signing configuration
    pub jwt: JwtConfig,
    /// Email of the seeded admin account
    pub admin_email: String,
    /// Password of the seeded admin account
    pub admin_password: String,
}

impl Config {
    /// Load configuration from environment variables, with defaults
    pub fn from_env() -> Self {
        let admin_password = std::env::var("KICKOFF_ADMIN_PASSWORD").unwrap_or_else(|_| {
            tracing::warn!(
                "KICKOFF_ADMIN_PASSWORD not set! Using insecure default admin password."
            );
            "kickoff-admin-dev".to_string()
        });

        Self {
            data_dir: std::env::var("KICKOFF_DATA_DIR").unwrap_or_else(|_| "./data".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            jwt: JwtConfig::default(),
            admin_email: std::env::var("KICKOFF_ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@kickoffleague.co.uk".into()),
            admin_password,
        }
    }

    /// Path of the store file inside `data_dir`
    pub fn store_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("kickoff.redb")
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
