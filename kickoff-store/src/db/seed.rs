//! First-run seeding
//!
//! A fresh store gets the league admin account and the two launch
//! division-1 teams. Seeding is an explicit call so opening a store
//! never writes behind the caller's back.

use chrono::NaiveDate;

use super::Store;
use super::models::{Division, EmergencyContact, TeamCreate, User};
use super::repository;
use crate::utils::{AppError, AppResult};

/// Seed the admin account and sample teams if the store is empty
///
/// Returns `true` when seeding ran. A store with any existing user or
/// team is left untouched.
pub fn ensure_defaults(store: &Store, admin_email: &str, admin_password: &str) -> AppResult<bool> {
    if !repository::user::find_all(store)?.is_empty()
        || !repository::team::find_all(store)?.is_empty()
    {
        return Ok(false);
    }

    let password_hash = User::hash_password(admin_password)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

    let admin = User {
        id: repository::new_id(),
        email: admin_email.trim().to_string(),
        password_hash,
        full_name: "League Admin".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap_or_default(),
        is_admin: true,
        is_player: false,
        team_id: None,
        is_captain: None,
        emergency_contact: EmergencyContact {
            name: "Kick Off Sports Centre".to_string(),
            relationship: "office".to_string(),
            phone: "01908 000000".to_string(),
            email: None,
        },
    };
    repository::user::create(store, admin)?;

    for team in sample_teams() {
        repository::team::create(store, team)?;
    }

    tracing::info!("Seeded admin account and sample teams");
    Ok(true)
}

fn sample_teams() -> Vec<TeamCreate> {
    vec![
        TeamCreate {
            name: "Red Dragons FC".to_string(),
            played: 5,
            won: 4,
            drawn: 1,
            lost: 0,
            goals_for: 15,
            goals_against: 5,
            division: Division::One,
            location: "Willen Lake, Kick Off Sports Centre".to_string(),
            game_day: "Monday".to_string(),
            crest: Some(
                "https://api.dicebear.com/7.x/shapes/svg?seed=dragon&backgroundColor=dc2626"
                    .to_string(),
            ),
            captain_id: None,
        },
        TeamCreate {
            name: "Blue Lightning".to_string(),
            played: 5,
            won: 3,
            drawn: 1,
            lost: 1,
            goals_for: 12,
            goals_against: 7,
            division: Division::One,
            location: "Willen Lake, Kick Off Sports Centre".to_string(),
            game_day: "Monday".to_string(),
            crest: Some(
                "https://api.dicebear.com/7.x/shapes/svg?seed=lightning&backgroundColor=2563eb"
                    .to_string(),
            ),
            captain_id: None,
        },
    ]
}
