//! Durable storage for the reservation collection
//!
//! The contract mirrors the browser-storage original: ONE fixed key holding
//! the JSON-serialized array, read once at startup, rewritten wholesale on
//! every mutation. Last-write-wins under a single-writer assumption — there
//! is deliberately no transaction log and no merge.
//!
//! | Backend | Use |
//! |---------|-----|
//! | [`RedbStorage`] | production, embedded redb file |
//! | [`MemoryStorage`] | tests, in-memory fake |

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use shared::models::Reservation;
use std::path::Path;
use thiserror::Error;

/// Single-table layout: key = storage slot name, value = JSON array bytes
const RESERVATIONS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("reservations");

/// The one namespaced slot the whole collection lives under (kept from the
/// original front-end so existing exports stay readable)
pub const STORAGE_KEY: &str = "restaurant_reservations_v3";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
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

pub type StorageResult<T> = Result<T, StorageError>;

/// Durable slot the reservation store persists through.
///
/// Both operations are synchronous with respect to the caller: every save
/// rewrites the full collection before returning. Injectable so the store
/// can run against an in-memory fake in tests.
pub trait StoragePort: Send + Sync {
    /// Read the whole collection. `Ok(None)` means the slot was never written.
    fn load(&self) -> StorageResult<Option<Vec<Reservation>>>;

    /// Overwrite the whole collection.
    fn save(&self, reservations: &[Reservation]) -> StorageResult<()>;
}

/// Reservation slot backed by redb
pub struct RedbStorage {
    db: Database,
}

impl RedbStorage {
    /// Open or create the database at the given path
    ///
    /// redb commits are durable as soon as `commit()` returns (copy-on-write
    /// with atomic pointer swap), so a crash mid-save leaves the previous
    /// collection intact.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init_tables(db)
    }

    /// In-memory database (tests)
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init_tables(db)
    }

    fn init_tables(db: Database) -> StorageResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(RESERVATIONS_TABLE)?;
        }
        write_txn.commit()?;
        Ok(Self { db })
    }
}

impl StoragePort for RedbStorage {
    fn load(&self) -> StorageResult<Option<Vec<Reservation>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(RESERVATIONS_TABLE)?;
        match table.get(STORAGE_KEY)? {
            Some(bytes) => {
                let reservations = serde_json::from_slice(bytes.value())?;
                Ok(Some(reservations))
            }
            None => Ok(None),
        }
    }

    fn save(&self, reservations: &[Reservation]) -> StorageResult<()> {
        let bytes = serde_json::to_vec(reservations)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(RESERVATIONS_TABLE)?;
            table.insert(STORAGE_KEY, bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

/// In-memory fake of the durable slot.
///
/// Holds the raw JSON payload so tests exercise the same
/// serialize/deserialize path as the redb backend, including
/// corrupt-payload startup via [`MemoryStorage::with_raw`].
#[derive(Default)]
pub struct MemoryStorage {
    slot: parking_lot::Mutex<Option<Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the slot with an arbitrary raw payload
    pub fn with_raw(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            slot: parking_lot::Mutex::new(Some(payload.into())),
        }
    }
}

impl StoragePort for MemoryStorage {
    fn load(&self) -> StorageResult<Option<Vec<Reservation>>> {
        let guard = self.slot.lock();
        match guard.as_deref() {
            Some(bytes) => Ok(Some(serde_json::from_slice(bytes)?)),
            None => Ok(None),
        }
    }

    fn save(&self, reservations: &[Reservation]) -> StorageResult<()> {
        let bytes = serde_json::to_vec(reservations)?;
        *self.slot.lock() = Some(bytes);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Area, Occasion, ReservationStatus};

    fn sample(id: &str, time: &str) -> Reservation {
        Reservation {
            id: id.into(),
            name: "Giulia Bianchi".into(),
            phone: "3477654321".into(),
            date: "2031-06-01".into(),
            time: time.into(),
            guests: 4,
            occasion: Occasion::Birthday,
            area: Area::PanoramicTerrace,
            status: ReservationStatus::Pending,
            notes: None,
            deposit_amount: 40,
            reminder_preference: None,
        }
    }

    #[test]
    fn empty_database_loads_as_never_written() {
        let storage = RedbStorage::open_in_memory().unwrap();
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips_in_order() {
        let storage = RedbStorage::open_in_memory().unwrap();
        let reservations = vec![sample("b", "21:00"), sample("a", "20:00")];
        storage.save(&reservations).unwrap();

        let loaded = storage.load().unwrap().unwrap();
        assert_eq!(loaded, reservations);
    }

    #[test]
    fn save_overwrites_the_single_slot() {
        let storage = RedbStorage::open_in_memory().unwrap();
        storage.save(&[sample("a", "20:00")]).unwrap();
        storage.save(&[sample("b", "21:00")]).unwrap();

        let loaded = storage.load().unwrap().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "b");
    }

    #[test]
    fn collection_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reservations.redb");

        {
            let storage = RedbStorage::open(&path).unwrap();
            storage.save(&[sample("a", "20:00")]).unwrap();
        }

        let storage = RedbStorage::open(&path).unwrap();
        let loaded = storage.load().unwrap().unwrap();
        assert_eq!(loaded[0].id, "a");
    }

    #[test]
    fn corrupt_payload_surfaces_as_serialization_error() {
        let storage = RedbStorage::open_in_memory().unwrap();
        let write_txn = storage.db.begin_write().unwrap();
        {
            let mut table = write_txn.open_table(RESERVATIONS_TABLE).unwrap();
            table
                .insert(STORAGE_KEY, b"definitely not json".as_slice())
                .unwrap();
        }
        write_txn.commit().unwrap();

        assert!(matches!(
            storage.load(),
            Err(StorageError::Serialization(_))
        ));
    }

    #[test]
    fn memory_fake_behaves_like_the_real_slot() {
        let storage = MemoryStorage::new();
        assert!(storage.load().unwrap().is_none());

        storage.save(&[sample("a", "20:00")]).unwrap();
        assert_eq!(storage.load().unwrap().unwrap()[0].id, "a");

        let corrupt = MemoryStorage::with_raw(&b"{ nope"[..]);
        assert!(corrupt.load().is_err());
    }
}
