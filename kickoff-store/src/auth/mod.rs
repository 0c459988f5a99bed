//! Authentication
//!
//! Token issuance and verification plus the account flows built on top
//! of them: registration, login, and password reset. Pages derive their
//! "is logged in" / "is admin" state from an optionally-held token via
//! [`AuthService::is_authenticated`] and [`AuthService::is_admin`].

pub mod jwt;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};

use crate::db::Store;
use crate::db::models::{User, UserCreate, UserPublic};
use crate::db::repository;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_PASSWORD_LEN, MAX_SHORT_TEXT_LEN, MIN_PASSWORD_LEN,
    validate_email, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult, time};

/// Minimum age at registration, in whole years
pub const MIN_PLAYER_AGE: i32 = 16;

/// Account and token service
#[derive(Debug, Clone)]
pub struct AuthService {
    jwt: JwtService,
}

impl AuthService {
    pub fn new(jwt: JwtService) -> Self {
        Self { jwt }
    }

    pub fn with_config(config: JwtConfig) -> Self {
        Self::new(JwtService::with_config(config))
    }

    pub fn jwt(&self) -> &JwtService {
        &self.jwt
    }

    /// Register a new player account and issue a token for it
    ///
    /// All checks (field shapes, password length, minimum age, duplicate
    /// email) run before anything is written.
    pub fn register(&self, store: &Store, data: UserCreate) -> AppResult<(UserPublic, String)> {
        validate_required_text(&data.full_name, "full_name", MAX_NAME_LEN)?;
        validate_email(&data.email)?;
        if data.password.len() < MIN_PASSWORD_LEN || data.password.len() > MAX_PASSWORD_LEN {
            return Err(AppError::validation(format!(
                "Password must be between {MIN_PASSWORD_LEN} and {MAX_PASSWORD_LEN} characters"
            )));
        }
        validate_required_text(
            &data.emergency_contact.name,
            "emergency contact name",
            MAX_NAME_LEN,
        )?;
        validate_required_text(
            &data.emergency_contact.relationship,
            "emergency contact relationship",
            MAX_SHORT_TEXT_LEN,
        )?;
        validate_required_text(
            &data.emergency_contact.phone,
            "emergency contact phone",
            MAX_SHORT_TEXT_LEN,
        )?;
        validate_optional_text(
            &data.emergency_contact.email,
            "emergency contact email",
            MAX_EMAIL_LEN,
        )?;

        if time::age_years(data.date_of_birth) < MIN_PLAYER_AGE {
            return Err(AppError::validation(format!(
                "Players must be at least {MIN_PLAYER_AGE} years old"
            )));
        }

        let password_hash = User::hash_password(&data.password)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        let user = User {
            id: repository::new_id(),
            email: data.email.trim().to_string(),
            password_hash,
            full_name: data.full_name,
            date_of_birth: data.date_of_birth,
            is_admin: false,
            is_player: true,
            team_id: None,
            is_captain: None,
            emergency_contact: data.emergency_contact,
        };

        let user = repository::user::create(store, user)?;

        let token = self
            .jwt
            .generate_token(&user.id, &user.email, user.is_admin, user.is_player)?;

        tracing::info!(user_id = %user.id, email = %user.email, "User registered");
        Ok((user.into(), token))
    }

    /// Authenticate by email and password, returning a fresh token
    ///
    /// Unknown email and wrong password produce the same error so the
    /// login form cannot be used to enumerate accounts.
    pub fn login(&self, store: &Store, email: &str, password: &str) -> AppResult<String> {
        let user = match repository::user::find_by_email(store, email)? {
            Some(user) => user,
            None => {
                tracing::warn!(email = %email, "Login failed - user not found");
                return Err(AppError::invalid_credentials());
            }
        };

        let password_valid = user
            .verify_password(password)
            .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;

        if !password_valid {
            tracing::warn!(email = %email, "Login failed - invalid credentials");
            return Err(AppError::invalid_credentials());
        }

        let token = self
            .jwt
            .generate_token(&user.id, &user.email, user.is_admin, user.is_player)?;

        tracing::info!(user_id = %user.id, email = %user.email, "User logged in");
        Ok(token)
    }

    /// Replace the password of an existing account
    pub fn reset_password(&self, store: &Store, user_id: &str, new_password: &str) -> AppResult<()> {
        if new_password.len() < MIN_PASSWORD_LEN || new_password.len() > MAX_PASSWORD_LEN {
            return Err(AppError::validation(format!(
                "Password must be between {MIN_PASSWORD_LEN} and {MAX_PASSWORD_LEN} characters"
            )));
        }

        let password_hash = User::hash_password(new_password)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        repository::user::set_password_hash(store, user_id, &password_hash)?;

        tracing::info!(user_id = %user_id, "Password reset");
        Ok(())
    }

    /// Validate a token and return its claims
    pub fn verify_token(&self, token: &str) -> AppResult<Claims> {
        Ok(self.jwt.validate_token(token)?)
    }

    /// Decoded identity behind an optionally-held token, if verifiable
    pub fn current_user(&self, token: Option<&str>) -> Option<CurrentUser> {
        let token = token?;
        self.jwt.validate_token(token).ok().map(CurrentUser::from)
    }

    /// A verifiable token exists
    pub fn is_authenticated(&self, token: Option<&str>) -> bool {
        self.current_user(token).is_some()
    }

    /// A verifiable token exists and carries the admin flag
    pub fn is_admin(&self, token: Option<&str>) -> bool {
        self.current_user(token).is_some_and(|user| user.is_admin)
    }
}
