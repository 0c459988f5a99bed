//! redb-backed local store
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `users` | `user_id` | `User` | Account records |
//! | `users_by_email` | `email` | `user_id` | Unique email index |
//! | `teams` | `team_id` | `Team` | League table records |
//! | `players` | `player_id` | `Player` | Roster entries |
//! | `players_by_team` | `(team_id, player_id)` | `()` | Roster index |
//! | `team_registrations` | `registration_id` | `TeamRegistration` | Inbox |
//! | `individual_registrations` | `registration_id` | `IndividualRegistration` | Inbox |
//!
//! Values are JSON-serialized records. redb commits are durable as soon
//! as `commit()` returns (copy-on-write with atomic pointer swap), so a
//! crashed process never leaves the file in an inconsistent state.
//!
//! The store performs one commit per repository operation. There are no
//! multi-operation transactions; concurrent writers on one handle
//! serialize on redb's single write transaction.

pub mod models;
pub mod repository;
pub mod seed;

use redb::{Database, ReadTransaction, ReadableDatabase, TableDefinition, WriteTransaction};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Account records: key = user id, value = JSON-serialized `User`
pub(crate) const USERS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("users");

/// Unique email index: key = lowercased email, value = user id
pub(crate) const USERS_BY_EMAIL_TABLE: TableDefinition<&str, &str> =
    TableDefinition::new("users_by_email");

/// League table records: key = team id, value = JSON-serialized `Team`
pub(crate) const TEAMS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("teams");

/// Roster entries: key = player id, value = JSON-serialized `Player`
pub(crate) const PLAYERS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("players");

/// Roster index: key = (team id, player id), value = empty (existence check)
pub(crate) const PLAYERS_BY_TEAM_TABLE: TableDefinition<(&str, &str), ()> =
    TableDefinition::new("players_by_team");

/// Team registration inbox: key = registration id, value = JSON-serialized `TeamRegistration`
pub(crate) const TEAM_REGISTRATIONS_TABLE: TableDefinition<&str, &[u8]> =
    TableDefinition::new("team_registrations");

/// Individual registration inbox: key = registration id, value = JSON-serialized `IndividualRegistration`
pub(crate) const INDIVIDUAL_REGISTRATIONS_TABLE: TableDefinition<&str, &[u8]> =
    TableDefinition::new("individual_registrations");

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Local store backed by redb
///
/// The handle is cheap to clone and is passed explicitly into every
/// repository operation; opening and closing are owned by the caller.
#[derive(Clone)]
pub struct Store {
    db: Arc<Database>,
}

impl Store {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = Database::create(path)?;
        let store = Self { db: Arc::new(db) };
        store.init_tables()?;
        tracing::info!("Local store opened");
        Ok(store)
    }

    /// Open an in-memory database (tests and demos)
    pub fn open_in_memory() -> StoreResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        let store = Self { db: Arc::new(db) };
        store.init_tables()?;
        Ok(store)
    }

    /// Create all tables so first reads never hit a missing table
    fn init_tables(&self) -> StoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let _ = write_txn.open_table(USERS_TABLE)?;
            let _ = write_txn.open_table(USERS_BY_EMAIL_TABLE)?;
            let _ = write_txn.open_table(TEAMS_TABLE)?;
            let _ = write_txn.open_table(PLAYERS_TABLE)?;
            let _ = write_txn.open_table(PLAYERS_BY_TEAM_TABLE)?;
            let _ = write_txn.open_table(TEAM_REGISTRATIONS_TABLE)?;
            let _ = write_txn.open_table(INDIVIDUAL_REGISTRATIONS_TABLE)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Begin a read transaction
    pub(crate) fn begin_read(&self) -> StoreResult<ReadTransaction> {
        Ok(self.db.begin_read()?)
    }

    /// Begin a write transaction
    pub(crate) fn begin_write(&self) -> StoreResult<WriteTransaction> {
        Ok(self.db.begin_write()?)
    }

    /// Close the store explicitly
    ///
    /// Dropping the last clone has the same effect; this exists so the
    /// caller can make the `{open, read/write, close}` lifecycle visible.
    pub fn close(self) {
        drop(self);
    }
}
