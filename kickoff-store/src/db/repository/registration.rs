//! Registration Repository
//!
//! Insert-and-list inboxes for the two public registration forms.

use redb::ReadableTable;

use super::{RepoError, RepoResult, decode, encode, new_id};
use crate::db::models::{
    IndividualRegistration, IndividualRegistrationCreate, RegistrationStatus, TeamRegistration,
    TeamRegistrationCreate,
};
use crate::db::{INDIVIDUAL_REGISTRATIONS_TABLE, Store, TEAM_REGISTRATIONS_TABLE};
use crate::utils::validation::{MAX_NAME_LEN, MAX_SHORT_TEXT_LEN};

pub fn submit_team(store: &Store, data: TeamRegistrationCreate) -> RepoResult<TeamRegistration> {
    validate_contact(&data.captain_name, &data.email, &data.phone)?;
    if data.team_name.trim().is_empty() || data.team_name.len() > MAX_NAME_LEN {
        return Err(RepoError::Validation("Invalid team name".into()));
    }

    let registration = data.into_registration(new_id());
    let write_txn = store.begin_write()?;
    {
        let mut table = write_txn.open_table(TEAM_REGISTRATIONS_TABLE)?;
        let encoded = encode(&registration)?;
        table.insert(registration.id.as_str(), encoded.as_slice())?;
    }
    write_txn.commit()?;
    Ok(registration)
}

pub fn submit_individual(
    store: &Store,
    data: IndividualRegistrationCreate,
) -> RepoResult<IndividualRegistration> {
    validate_contact(&data.name, &data.email, &data.phone)?;

    let registration = data.into_registration(new_id());
    let write_txn = store.begin_write()?;
    {
        let mut table = write_txn.open_table(INDIVIDUAL_REGISTRATIONS_TABLE)?;
        let encoded = encode(&registration)?;
        table.insert(registration.id.as_str(), encoded.as_slice())?;
    }
    write_txn.commit()?;
    Ok(registration)
}

/// Team submissions, newest first
pub fn find_all_team(store: &Store) -> RepoResult<Vec<TeamRegistration>> {
    let read_txn = store.begin_read()?;
    let table = read_txn.open_table(TEAM_REGISTRATIONS_TABLE)?;

    let mut registrations = Vec::new();
    for result in table.iter()? {
        let (_key, value) = result?;
        registrations.push(decode::<TeamRegistration>(value.value())?);
    }
    registrations.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
    Ok(registrations)
}

/// Individual submissions, newest first
pub fn find_all_individual(store: &Store) -> RepoResult<Vec<IndividualRegistration>> {
    let read_txn = store.begin_read()?;
    let table = read_txn.open_table(INDIVIDUAL_REGISTRATIONS_TABLE)?;

    let mut registrations = Vec::new();
    for result in table.iter()? {
        let (_key, value) = result?;
        registrations.push(decode::<IndividualRegistration>(value.value())?);
    }
    registrations.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
    Ok(registrations)
}

pub fn set_team_status(
    store: &Store,
    id: &str,
    status: RegistrationStatus,
) -> RepoResult<TeamRegistration> {
    let write_txn = store.begin_write()?;
    let registration = {
        let mut table = write_txn.open_table(TEAM_REGISTRATIONS_TABLE)?;
        let mut registration: TeamRegistration = match table.get(id)? {
            Some(value) => decode(value.value())?,
            None => {
                return Err(RepoError::NotFound(format!("Registration {id} not found")));
            }
        };
        registration.status = status;
        let encoded = encode(&registration)?;
        table.insert(id, encoded.as_slice())?;
        registration
    };
    write_txn.commit()?;
    Ok(registration)
}

pub fn set_individual_status(
    store: &Store,
    id: &str,
    status: RegistrationStatus,
) -> RepoResult<IndividualRegistration> {
    let write_txn = store.begin_write()?;
    let registration = {
        let mut table = write_txn.open_table(INDIVIDUAL_REGISTRATIONS_TABLE)?;
        let mut registration: IndividualRegistration = match table.get(id)? {
            Some(value) => decode(value.value())?,
            None => {
                return Err(RepoError::NotFound(format!("Registration {id} not found")));
            }
        };
        registration.status = status;
        let encoded = encode(&registration)?;
        table.insert(id, encoded.as_slice())?;
        registration
    };
    write_txn.commit()?;
    Ok(registration)
}

pub fn delete_team(store: &Store, id: &str) -> RepoResult<bool> {
    let write_txn = store.begin_write()?;
    let removed = {
        let mut table = write_txn.open_table(TEAM_REGISTRATIONS_TABLE)?;
        table.remove(id)?.is_some()
    };
    write_txn.commit()?;
    Ok(removed)
}

pub fn delete_individual(store: &Store, id: &str) -> RepoResult<bool> {
    let write_txn = store.begin_write()?;
    let removed = {
        let mut table = write_txn.open_table(INDIVIDUAL_REGISTRATIONS_TABLE)?;
        table.remove(id)?.is_some()
    };
    write_txn.commit()?;
    Ok(removed)
}

fn validate_contact(name: &str, email: &str, phone: &str) -> RepoResult<()> {
    if name.trim().is_empty() || name.len() > MAX_NAME_LEN {
        return Err(RepoError::Validation("Invalid contact name".into()));
    }
    if email.trim().is_empty() || !email.contains('@') {
        return Err(RepoError::Validation(format!("Invalid email: {email}")));
    }
    if phone.trim().is_empty() || phone.len() > MAX_SHORT_TEXT_LEN {
        return Err(RepoError::Validation("Invalid phone number".into()));
    }
    Ok(())
}
