//! User Repository
//!
//! The email index stores lowercased addresses; lookups normalize the
//! same way, so login is case-insensitive on the email.

use redb::ReadableTable;

use super::{RepoError, RepoResult, decode, encode};
use crate::db::models::{Team, User, UserUpdate};
use crate::db::{Store, TEAMS_TABLE, USERS_BY_EMAIL_TABLE, USERS_TABLE};

pub fn find_all(store: &Store) -> RepoResult<Vec<User>> {
    let read_txn = store.begin_read()?;
    let table = read_txn.open_table(USERS_TABLE)?;

    let mut users = Vec::new();
    for result in table.iter()? {
        let (_key, value) = result?;
        users.push(decode::<User>(value.value())?);
    }
    Ok(users)
}

pub fn find_by_id(store: &Store, id: &str) -> RepoResult<Option<User>> {
    let read_txn = store.begin_read()?;
    let table = read_txn.open_table(USERS_TABLE)?;
    match table.get(id)? {
        Some(value) => Ok(Some(decode(value.value())?)),
        None => Ok(None),
    }
}

pub fn find_by_email(store: &Store, email: &str) -> RepoResult<Option<User>> {
    let needle = email.trim().to_lowercase();
    let read_txn = store.begin_read()?;
    let index = read_txn.open_table(USERS_BY_EMAIL_TABLE)?;

    let Some(id_guard) = index.get(needle.as_str())? else {
        return Ok(None);
    };
    let table = read_txn.open_table(USERS_TABLE)?;
    match table.get(id_guard.value())? {
        Some(value) => Ok(Some(decode(value.value())?)),
        None => Ok(None),
    }
}

pub fn find_by_team(store: &Store, team_id: &str) -> RepoResult<Vec<User>> {
    let read_txn = store.begin_read()?;
    let table = read_txn.open_table(USERS_TABLE)?;

    let mut users = Vec::new();
    for result in table.iter()? {
        let (_key, value) = result?;
        let user: User = decode(value.value())?;
        if user.team_id.as_deref() == Some(team_id) {
            users.push(user);
        }
    }
    Ok(users)
}

/// Insert a fully-built account record (password already hashed)
pub fn create(store: &Store, user: User) -> RepoResult<User> {
    let email_key = user.email.trim().to_lowercase();
    let write_txn = store.begin_write()?;
    {
        let mut index = write_txn.open_table(USERS_BY_EMAIL_TABLE)?;
        if index.get(email_key.as_str())?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "User with email {} already exists",
                user.email
            )));
        }
        index.insert(email_key.as_str(), user.id.as_str())?;

        let mut table = write_txn.open_table(USERS_TABLE)?;
        let encoded = encode(&user)?;
        table.insert(user.id.as_str(), encoded.as_slice())?;
    }
    write_txn.commit()?;
    Ok(user)
}

pub fn update(store: &Store, id: &str, data: UserUpdate) -> RepoResult<User> {
    let write_txn = store.begin_write()?;
    let user = {
        let mut table = write_txn.open_table(USERS_TABLE)?;
        let mut user: User = match table.get(id)? {
            Some(value) => decode(value.value())?,
            None => return Err(RepoError::NotFound(format!("User {id} not found"))),
        };
        user.apply_update(data);
        let encoded = encode(&user)?;
        table.insert(id, encoded.as_slice())?;
        user
    };
    write_txn.commit()?;
    Ok(user)
}

/// Replace the stored credential (password reset flow)
pub fn set_password_hash(store: &Store, id: &str, password_hash: &str) -> RepoResult<()> {
    let write_txn = store.begin_write()?;
    {
        let mut table = write_txn.open_table(USERS_TABLE)?;
        let mut user: User = match table.get(id)? {
            Some(value) => decode(value.value())?,
            None => return Err(RepoError::NotFound(format!("User {id} not found"))),
        };
        user.password_hash = password_hash.to_string();
        let encoded = encode(&user)?;
        table.insert(id, encoded.as_slice())?;
    }
    write_txn.commit()?;
    Ok(())
}

pub fn delete(store: &Store, id: &str) -> RepoResult<bool> {
    let write_txn = store.begin_write()?;
    let removed = {
        let mut table = write_txn.open_table(USERS_TABLE)?;
        let removed = match table.remove(id)? {
            Some(value) => Some(decode::<User>(value.value())?),
            None => None,
        };
        if let Some(user) = &removed {
            let mut index = write_txn.open_table(USERS_BY_EMAIL_TABLE)?;
            index.remove(user.email.trim().to_lowercase().as_str())?;
        }
        removed.is_some()
    };
    write_txn.commit()?;
    Ok(removed)
}

/// Team the user belongs to, if any (best-effort reference resolution)
pub fn find_team_of_user(store: &Store, user_id: &str) -> RepoResult<Option<Team>> {
    let read_txn = store.begin_read()?;
    let users = read_txn.open_table(USERS_TABLE)?;

    let Some(value) = users.get(user_id)? else {
        return Ok(None);
    };
    let user: User = decode(value.value())?;
    let Some(team_id) = user.team_id else {
        return Ok(None);
    };

    let teams = read_txn.open_table(TEAMS_TABLE)?;
    match teams.get(team_id.as_str())? {
        Some(value) => Ok(Some(decode(value.value())?)),
        None => Ok(None),
    }
}
