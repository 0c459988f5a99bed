//! Registration inbox models
//!
//! Submissions from the public registration form. Records are an inbox
//! for the admin, not linked into `teams`/`users` automatically.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Submission state, starts at `pending`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// Whole-team registration submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRegistration {
    pub id: String,
    pub team_name: String,
    pub captain_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub game_day: String,
    pub players: Vec<String>,
    pub status: RegistrationStatus,
    pub submitted_at: DateTime<Utc>,
}

/// Team registration payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRegistrationCreate {
    pub team_name: String,
    pub captain_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub game_day: String,
    #[serde(default)]
    pub players: Vec<String>,
}

impl TeamRegistrationCreate {
    pub fn into_registration(self, id: String) -> TeamRegistration {
        TeamRegistration {
            id,
            team_name: self.team_name,
            captain_name: self.captain_name,
            email: self.email,
            phone: self.phone,
            location: self.location,
            game_day: self.game_day,
            // Blank player rows from the form are dropped
            players: self
                .players
                .into_iter()
                .filter(|p| !p.trim().is_empty())
                .collect(),
            status: RegistrationStatus::Pending,
            submitted_at: Utc::now(),
        }
    }
}

/// Individual-player registration submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndividualRegistration {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub game_day: String,
    pub experience: String,
    pub preferred_position: String,
    pub availability: String,
    pub status: RegistrationStatus,
    pub submitted_at: DateTime<Utc>,
}

/// Individual registration payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndividualRegistrationCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub game_day: String,
    pub experience: String,
    pub preferred_position: String,
    pub availability: String,
}

impl IndividualRegistrationCreate {
    pub fn into_registration(self, id: String) -> IndividualRegistration {
        IndividualRegistration {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            location: self.location,
            game_day: self.game_day,
            experience: self.experience,
            preferred_position: self.preferred_position,
            availability: self.availability,
            status: RegistrationStatus::Pending,
            submitted_at: Utc::now(),
        }
    }
}
