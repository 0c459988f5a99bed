//! User Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Emergency contact embedded in every account record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    pub relationship: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// User account record as persisted in the `users` table
///
/// `password_hash` is an argon2 PHC string; it stays inside the store
/// layer. Anything handed out of the library uses [`UserPublic`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_player: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_captain: Option<bool>,
    pub emergency_contact: EmergencyContact,
}

/// Registration payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub emergency_contact: EmergencyContact,
}

/// Update payload; `None` fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<EmergencyContact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_captain: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_player: Option<bool>,
}

/// Account view without credentials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPublic {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub is_admin: bool,
    pub is_player: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_captain: Option<bool>,
}

impl From<User> for UserPublic {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            is_admin: user.is_admin,
            is_player: user.is_player,
            team_id: user.team_id,
            is_captain: user.is_captain,
        }
    }
}

impl User {
    /// Verify password using argon2
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.password_hash)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }

    pub fn apply_update(&mut self, update: UserUpdate) {
        if let Some(full_name) = update.full_name {
            self.full_name = full_name;
        }
        if let Some(contact) = update.emergency_contact {
            self.emergency_contact = contact;
        }
        if let Some(team_id) = update.team_id {
            self.team_id = Some(team_id);
        }
        if let Some(is_captain) = update.is_captain {
            self.is_captain = Some(is_captain);
        }
        if let Some(is_player) = update.is_player {
            self.is_player = is_player;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_roundtrip() {
        let hash = User::hash_password("kickoff2024").unwrap();
        assert!(hash.starts_with("$argon2"));

        let user = User {
            id: "u1".into(),
            email: "captain@example.com".into(),
            password_hash: hash,
            full_name: "Sam Carter".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1995, 3, 2).unwrap(),
            is_admin: false,
            is_player: true,
            team_id: None,
            is_captain: None,
            emergency_contact: EmergencyContact {
                name: "Alex Carter".into(),
                relationship: "sibling".into(),
                phone: "07700 900000".into(),
                email: None,
            },
        };

        assert!(user.verify_password("kickoff2024").unwrap());
        assert!(!user.verify_password("wrong-password").unwrap());
    }
}
