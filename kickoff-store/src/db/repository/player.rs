//! Player Repository
//!
//! Roster entries are indexed by `(team_id, player_id)` so reading a
//! team's roster is a range scan, not a full-table pass.

use redb::ReadableTable;

use super::{RepoError, RepoResult, decode, encode, new_id};
use crate::db::models::{Player, PlayerCreate, PlayerStatsUpdate, TeamPlayer, User};
use crate::db::{PLAYERS_BY_TEAM_TABLE, PLAYERS_TABLE, Store, USERS_TABLE};

pub fn find_by_id(store: &Store, id: &str) -> RepoResult<Option<Player>> {
    let read_txn = store.begin_read()?;
    let table = read_txn.open_table(PLAYERS_TABLE)?;
    match table.get(id)? {
        Some(value) => Ok(Some(decode(value.value())?)),
        None => Ok(None),
    }
}

pub fn find_by_team(store: &Store, team_id: &str) -> RepoResult<Vec<Player>> {
    let read_txn = store.begin_read()?;
    let index = read_txn.open_table(PLAYERS_BY_TEAM_TABLE)?;
    let table = read_txn.open_table(PLAYERS_TABLE)?;

    let mut players = Vec::new();
    for result in index.range((team_id, "")..)? {
        let (key, _) = result?;
        let (indexed_team, player_id) = key.value();
        if indexed_team != team_id {
            break;
        }
        if let Some(value) = table.get(player_id)? {
            players.push(decode::<Player>(value.value())?);
        }
    }
    Ok(players)
}

pub fn find_by_user(store: &Store, user_id: &str) -> RepoResult<Vec<Player>> {
    let read_txn = store.begin_read()?;
    let table = read_txn.open_table(PLAYERS_TABLE)?;

    let mut players = Vec::new();
    for result in table.iter()? {
        let (_key, value) = result?;
        let player: Player = decode(value.value())?;
        if player.user_id == user_id {
            players.push(player);
        }
    }
    Ok(players)
}

/// Attach a user to a team roster with zeroed stats
pub fn create(store: &Store, data: PlayerCreate) -> RepoResult<Player> {
    if find_by_team(store, &data.team_id)?
        .iter()
        .any(|p| p.user_id == data.user_id)
    {
        return Err(RepoError::Duplicate(format!(
            "User {} is already on team {}",
            data.user_id, data.team_id
        )));
    }

    let player = data.into_player(new_id());
    let write_txn = store.begin_write()?;
    {
        let mut table = write_txn.open_table(PLAYERS_TABLE)?;
        let encoded = encode(&player)?;
        table.insert(player.id.as_str(), encoded.as_slice())?;

        let mut index = write_txn.open_table(PLAYERS_BY_TEAM_TABLE)?;
        index.insert((player.team_id.as_str(), player.id.as_str()), ())?;
    }
    write_txn.commit()?;
    Ok(player)
}

pub fn update_stats(store: &Store, id: &str, data: PlayerStatsUpdate) -> RepoResult<Player> {
    let write_txn = store.begin_write()?;
    let player = {
        let mut table = write_txn.open_table(PLAYERS_TABLE)?;
        let mut player: Player = match table.get(id)? {
            Some(value) => decode(value.value())?,
            None => return Err(RepoError::NotFound(format!("Player {id} not found"))),
        };
        player.apply_stats_update(data);
        let encoded = encode(&player)?;
        table.insert(id, encoded.as_slice())?;
        player
    };
    write_txn.commit()?;
    Ok(player)
}

pub fn delete(store: &Store, id: &str) -> RepoResult<bool> {
    let write_txn = store.begin_write()?;
    let removed = {
        let mut table = write_txn.open_table(PLAYERS_TABLE)?;
        let removed = match table.remove(id)? {
            Some(value) => Some(decode::<Player>(value.value())?),
            None => None,
        };
        if let Some(player) = &removed {
            let mut index = write_txn.open_table(PLAYERS_BY_TEAM_TABLE)?;
            index.remove((player.team_id.as_str(), player.id.as_str()))?;
        }
        removed.is_some()
    };
    write_txn.commit()?;
    Ok(removed)
}

/// Team roster joined with each owning user's full name
///
/// A dangling `user_id` yields `name: None` rather than an error.
pub fn find_by_team_with_names(store: &Store, team_id: &str) -> RepoResult<Vec<TeamPlayer>> {
    let read_txn = store.begin_read()?;
    let index = read_txn.open_table(PLAYERS_BY_TEAM_TABLE)?;
    let players = read_txn.open_table(PLAYERS_TABLE)?;
    let users = read_txn.open_table(USERS_TABLE)?;

    let mut roster = Vec::new();
    for result in index.range((team_id, "")..)? {
        let (key, _) = result?;
        let (indexed_team, player_id) = key.value();
        if indexed_team != team_id {
            break;
        }
        let Some(value) = players.get(player_id)? else {
            continue;
        };
        let player: Player = decode(value.value())?;
        let name = match users.get(player.user_id.as_str())? {
            Some(value) => Some(decode::<User>(value.value())?.full_name),
            None => None,
        };
        roster.push(TeamPlayer { player, name });
    }
    Ok(roster)
}
