//! Store Models

// Accounts
pub mod user;

// League
pub mod player;
pub mod team;

// Registration inboxes
pub mod registration;

// Re-exports
pub use player::{Player, PlayerCreate, PlayerStatsUpdate, TeamPlayer};
pub use registration::{
    IndividualRegistration, IndividualRegistrationCreate, RegistrationStatus, TeamRegistration,
    TeamRegistrationCreate,
};
pub use team::{Division, Team, TeamCreate, TeamUpdate};
pub use user::{EmergencyContact, User, UserCreate, UserPublic, UserUpdate};
