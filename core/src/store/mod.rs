//! Durable icon cache backed by redb.
//!
//! One table maps icon names to versioned records; a metadata table holds
//! the icon-pack version marker used to invalidate the cache wholesale.
//! Reads and writes are batched: the resolver above never opens a
//! transaction per icon.

use crate::store::error::StoreError;
use crate::types::{Config, IconName, IconRecord, StoredIcon};
use redb::{ReadableDatabase, ReadableTable, TableDefinition};
use tracing::info;

pub mod read_queue;

pub mod error {
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum StoreError {
        #[error("Database error: {0}")]
        Redb(#[from] redb::DatabaseError),

        #[error("Table error: {0}")]
        TableError(#[from] redb::TableError),

        #[error("Storage error: {0}")]
        StorageError(#[from] redb::StorageError),

        #[error("Transaction error: {0}")]
        TransactionError(#[from] redb::TransactionError),

        #[error("Commit error: {0}")]
        CommitError(#[from] redb::CommitError),

        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),
    }
}

/// Icon table: IconName → StoredIcon
const ICON_TABLE: TableDefinition<IconName, StoredIcon> = TableDefinition::new("icons");

/// Metadata table: &str → &str
const META_TABLE: TableDefinition<&str, &str> = TableDefinition::new("meta");

/// Metadata key holding the icon-pack version marker.
const META_KEY_PACK_VERSION: &str = "pack_version";

/// The persistent icon store wrapping redb.
pub struct IconStore {
    db: redb::Database,
}

impl IconStore {
    /// Creates or opens the store and reconciles the pack-version marker.
    ///
    /// An absent marker is written as-is. A marker that differs from
    /// `version` clears every cached record before the new marker is
    /// written, so records from an older icon pack are never served.
    pub fn open(config: &Config, version: &str) -> Result<Self, StoreError> {
        std::fs::create_dir_all(&config.base_path)?;

        let db = redb::Database::create(config.db_path())?;

        let write_txn = db.begin_write()?;
        {
            let mut meta = write_txn.open_table(META_TABLE)?;
            let stored = meta
                .get(META_KEY_PACK_VERSION)?
                .map(|guard| guard.value().to_string());

            match stored.as_deref() {
                Some(existing) if existing == version => {
                    let _ = write_txn.open_table(ICON_TABLE)?;
                }
                Some(existing) => {
                    info!(
                        from = existing,
                        to = version,
                        "icon pack version changed, clearing store"
                    );
                    write_txn.delete_table(ICON_TABLE)?;
                    let _ = write_txn.open_table(ICON_TABLE)?;
                    meta.insert(META_KEY_PACK_VERSION, version)?;
                }
                None => {
                    let _ = write_txn.open_table(ICON_TABLE)?;
                    meta.insert(META_KEY_PACK_VERSION, version)?;
                }
            }
        }
        write_txn.commit()?;

        Ok(Self { db })
    }
}

/// Read operations.
impl IconStore {
    /// Looks up every name within one read transaction.
    ///
    /// The result vector is parallel to `names`.
    pub fn get_batch(&self, names: &[IconName]) -> Result<Vec<Option<IconRecord>>, StoreError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ICON_TABLE)?;

        let mut records = Vec::with_capacity(names.len());
        for name in names {
            records.push(table.get(name)?.map(|guard| guard.value().into_latest()));
        }
        Ok(records)
    }

    /// Returns the stored pack-version marker.
    pub fn pack_version(&self) -> Result<Option<String>, StoreError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(META_TABLE)?;

        Ok(table
            .get(META_KEY_PACK_VERSION)?
            .map(|guard| guard.value().to_string()))
    }

    /// Number of cached records.
    pub fn count(&self) -> Result<u64, StoreError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ICON_TABLE)?;

        let mut total = 0;
        for entry in table.iter()? {
            entry?;
            total += 1;
        }
        Ok(total)
    }
}

/// Write operations.
impl IconStore {
    /// Inserts every entry within one write transaction.
    pub fn put_batch(&self, entries: &[(IconName, IconRecord)]) -> Result<(), StoreError> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(ICON_TABLE)?;
            for (name, record) in entries {
                table.insert(name, &StoredIcon::V1(record.clone()))?;
            }
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Removes every cached record, keeping the version marker.
    pub fn clear(&self) -> Result<(), StoreError> {
        let write_txn = self.db.begin_write()?;
        write_txn.delete_table(ICON_TABLE)?;
        let _ = write_txn.open_table(ICON_TABLE)?;
        write_txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
