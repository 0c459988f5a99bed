//! Player Model

use serde::{Deserialize, Serialize};

/// Roster entry as persisted in the `players` table
///
/// Created with zeroed stats when a user is attached to a team roster.
/// `user_id` and `team_id` are plain references resolved best-effort at
/// read time; no cross-table integrity is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub user_id: String,
    pub team_id: String,
    pub goals: u32,
    pub assists: u32,
    pub games_played: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
}

/// Create roster entry payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerCreate {
    pub user_id: String,
    pub team_id: String,
}

impl PlayerCreate {
    pub fn into_player(self, id: String) -> Player {
        Player {
            id,
            user_id: self.user_id,
            team_id: self.team_id,
            goals: 0,
            assists: 0,
            games_played: 0,
            yellow_cards: 0,
            red_cards: 0,
        }
    }
}

/// Stat edit payload; `None` fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerStatsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assists: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub games_played: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yellow_cards: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub red_cards: Option<u32>,
}

impl Player {
    pub fn apply_stats_update(&mut self, update: PlayerStatsUpdate) {
        if let Some(goals) = update.goals {
            self.goals = goals;
        }
        if let Some(assists) = update.assists {
            self.assists = assists;
        }
        if let Some(games_played) = update.games_played {
            self.games_played = games_played;
        }
        if let Some(yellow_cards) = update.yellow_cards {
            self.yellow_cards = yellow_cards;
        }
        if let Some(red_cards) = update.red_cards {
            self.red_cards = red_cards;
        }
    }
}

/// Roster entry joined with the owning user's display name
///
/// `name` is `None` when the referenced user no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamPlayer {
    #[serde(flatten)]
    pub player: Player,
    pub name: Option<String>,
}
