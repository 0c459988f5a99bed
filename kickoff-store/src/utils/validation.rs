//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! redb values have no built-in length enforcement, so every write path
//! validates here first.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: team names, full names, contact names
pub const MAX_NAME_LEN: usize = 200;

/// Short identifiers: phone numbers, relationships, game days, positions
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Free text: experience, availability
pub const MAX_NOTE_LEN: usize = 500;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LEN: usize = 8;

/// Crest image URLs
pub const MAX_URL_LEN: usize = 2048;

/// Venue names
pub const MAX_LOCATION_LEN: usize = 200;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Minimal shape check for email addresses: one `@` with something on
/// both sides. Uniqueness is enforced by the users email index.
pub fn validate_email(value: &str) -> Result<(), AppError> {
    validate_required_text(value, "email", MAX_EMAIL_LEN)?;
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(AppError::validation(format!("Invalid email address: {value}")));
    }
    Ok(())
}
