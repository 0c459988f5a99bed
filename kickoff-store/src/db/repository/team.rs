//! Team Repository
//!
//! Derived fields (`goal_difference`, `points`) are recomputed on every
//! create and update; a stored record can never drift from its counters.

use redb::ReadableTable;

use super::{RepoError, RepoResult, decode, encode, new_id};
use crate::db::models::{Division, Team, TeamCreate, TeamUpdate};
use crate::db::{Store, TEAMS_TABLE};
use crate::utils::validation::{MAX_NAME_LEN, MAX_URL_LEN};

/// All teams in league-table order: points, then goal difference, then
/// goals scored, then name
pub fn find_all(store: &Store) -> RepoResult<Vec<Team>> {
    let read_txn = store.begin_read()?;
    let table = read_txn.open_table(TEAMS_TABLE)?;

    let mut teams = Vec::new();
    for result in table.iter()? {
        let (_key, value) = result?;
        teams.push(decode::<Team>(value.value())?);
    }
    sort_league_order(&mut teams);
    Ok(teams)
}

pub fn find_by_id(store: &Store, id: &str) -> RepoResult<Option<Team>> {
    let read_txn = store.begin_read()?;
    let table = read_txn.open_table(TEAMS_TABLE)?;
    match table.get(id)? {
        Some(value) => Ok(Some(decode(value.value())?)),
        None => Ok(None),
    }
}

pub fn find_by_division(store: &Store, division: Division) -> RepoResult<Vec<Team>> {
    let mut teams = find_all(store)?;
    teams.retain(|t| t.division == division);
    Ok(teams)
}

pub fn create(store: &Store, data: TeamCreate) -> RepoResult<Team> {
    validate_team_text(&data.name, &data.location, &data.game_day, &data.crest)?;

    let team = data.into_team(new_id());
    let write_txn = store.begin_write()?;
    {
        let mut table = write_txn.open_table(TEAMS_TABLE)?;
        let encoded = encode(&team)?;
        table.insert(team.id.as_str(), encoded.as_slice())?;
    }
    write_txn.commit()?;
    Ok(team)
}

pub fn update(store: &Store, id: &str, data: TeamUpdate) -> RepoResult<Team> {
    if let Some(name) = &data.name
        && (name.trim().is_empty() || name.len() > MAX_NAME_LEN)
    {
        return Err(RepoError::Validation("Invalid team name".into()));
    }

    let write_txn = store.begin_write()?;
    let team = {
        let mut table = write_txn.open_table(TEAMS_TABLE)?;
        let mut team: Team = match table.get(id)? {
            Some(value) => decode(value.value())?,
            None => return Err(RepoError::NotFound(format!("Team {id} not found"))),
        };
        team.apply_update(data);
        let encoded = encode(&team)?;
        table.insert(id, encoded.as_slice())?;
        team
    };
    write_txn.commit()?;
    Ok(team)
}

pub fn delete(store: &Store, id: &str) -> RepoResult<bool> {
    let write_txn = store.begin_write()?;
    let removed = {
        let mut table = write_txn.open_table(TEAMS_TABLE)?;
        table.remove(id)?.is_some()
    };
    write_txn.commit()?;
    Ok(removed)
}

fn sort_league_order(teams: &mut [Team]) {
    teams.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.goal_difference.cmp(&a.goal_difference))
            .then(b.goals_for.cmp(&a.goals_for))
            .then(a.name.cmp(&b.name))
    });
}

fn validate_team_text(
    name: &str,
    location: &str,
    game_day: &str,
    crest: &Option<String>,
) -> RepoResult<()> {
    if name.trim().is_empty() || name.len() > MAX_NAME_LEN {
        return Err(RepoError::Validation("Invalid team name".into()));
    }
    if location.trim().is_empty() {
        return Err(RepoError::Validation("location must not be empty".into()));
    }
    if game_day.trim().is_empty() {
        return Err(RepoError::Validation("game_day must not be empty".into()));
    }
    if let Some(crest) = crest
        && crest.len() > MAX_URL_LEN
    {
        return Err(RepoError::Validation("crest URL is too long".into()));
    }
    Ok(())
}
