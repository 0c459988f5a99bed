//! Kick Off League Store - local storage and auth for the league app
//!
//! # Overview
//!
//! This crate is the data layer behind the Kick Off five-a-side league
//! site. Pages talk to two surfaces:
//!
//! - **Store** (`db`): an embedded redb database holding the `users`,
//!   `teams` and `players` collections plus the registration inboxes,
//!   accessed through typed repositories (no query strings anywhere).
//! - **Auth** (`auth`): JWT issuance/verification and the account flows
//!   (register, login, password reset) built on argon2 credentials.
//!
//! # Module structure
//!
//! ```text
//! kickoff-store/src/
//! ├── core/          # Configuration
//! ├── auth/          # JWT service, account flows
//! ├── db/            # Store, models, repositories, seeding
//! └── utils/         # Errors, logging, validation, date helpers
//! ```
//!
//! # Example
//!
//! ```no_run
//! use kickoff_store::{AuthService, Config, Store, db::seed};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env();
//! let store = Store::open(config.store_path())?;
//! seed::ensure_defaults(&store, &config.admin_email, &config.admin_password)?;
//!
//! let auth = AuthService::with_config(config.jwt.clone());
//! let token = auth.login(&store, &config.admin_email, &config.admin_password)?;
//! assert!(auth.is_admin(Some(&token)));
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use auth::{AuthService, Claims, CurrentUser, JwtConfig, JwtService};
pub use core::Config;
pub use db::{Store, StoreError};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
