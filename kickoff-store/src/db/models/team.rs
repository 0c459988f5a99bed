//! Team Model

use serde::{Deserialize, Serialize};

/// League division
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Division {
    One,
    Two,
}

impl TryFrom<u8> for Division {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Division::One),
            2 => Ok(Division::Two),
            other => Err(format!("Invalid division: {other}")),
        }
    }
}

impl From<Division> for u8 {
    fn from(division: Division) -> Self {
        match division {
            Division::One => 1,
            Division::Two => 2,
        }
    }
}

/// Team record as persisted in the `teams` table
///
/// `goal_difference` and `points` are derived; [`Team::recompute`] is the
/// only place they are written, and the repository runs it on every
/// create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
    pub points: u32,
    pub division: Division,
    pub location: String,
    pub game_day: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crest: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captain_id: Option<String>,
}

/// Create team payload (admin form)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamCreate {
    pub name: String,
    #[serde(default)]
    pub played: u32,
    #[serde(default)]
    pub won: u32,
    #[serde(default)]
    pub drawn: u32,
    #[serde(default)]
    pub lost: u32,
    #[serde(default)]
    pub goals_for: u32,
    #[serde(default)]
    pub goals_against: u32,
    pub division: Division,
    pub location: String,
    pub game_day: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crest: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captain_id: Option<String>,
}

/// Update team payload; `None` fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub played: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub won: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drawn: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lost: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals_for: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals_against: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub division: Option<Division>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_day: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captain_id: Option<String>,
}

impl Team {
    /// Re-derive `goal_difference` and `points` from the counters
    pub fn recompute(&mut self) {
        self.goal_difference = self.goals_for as i32 - self.goals_against as i32;
        self.points = 3 * self.won + self.drawn;
    }

    pub fn apply_update(&mut self, update: TeamUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(played) = update.played {
            self.played = played;
        }
        if let Some(won) = update.won {
            self.won = won;
        }
        if let Some(drawn) = update.drawn {
            self.drawn = drawn;
        }
        if let Some(lost) = update.lost {
            self.lost = lost;
        }
        if let Some(goals_for) = update.goals_for {
            self.goals_for = goals_for;
        }
        if let Some(goals_against) = update.goals_against {
            self.goals_against = goals_against;
        }
        if let Some(division) = update.division {
            self.division = division;
        }
        if let Some(location) = update.location {
            self.location = location;
        }
        if let Some(game_day) = update.game_day {
            self.game_day = game_day;
        }
        if let Some(crest) = update.crest {
            self.crest = Some(crest);
        }
        if let Some(captain_id) = update.captain_id {
            self.captain_id = Some(captain_id);
        }
        self.recompute();
    }
}

impl TeamCreate {
    /// Build the persisted record, deriving `goal_difference` and `points`
    pub fn into_team(self, id: String) -> Team {
        let mut team = Team {
            id,
            name: self.name,
            played: self.played,
            won: self.won,
            drawn: self.drawn,
            lost: self.lost,
            goals_for: self.goals_for,
            goals_against: self.goals_against,
            goal_difference: 0,
            points: 0,
            division: self.division,
            location: self.location,
            game_day: self.game_day,
            crest: self.crest,
            captain_id: self.captain_id,
        };
        team.recompute();
        team
    }
}
