//! Reservation Store - 预订集合的唯一持有者
//!
//! # Persistence contract
//!
//! Every mutation synchronously rewrites the entire collection through the
//! injected [`StoragePort`]. No partial writes, no transaction log:
//! last-write-wins under a single-writer assumption. A failed write is
//! logged and the in-memory state stays authoritative for the session.
//!
//! Other components never hold an independent copy of the collection; they
//! read snapshots and call the mutators here.

pub mod persistence;
pub mod seed;

pub use persistence::{
    MemoryStorage, RedbStorage, STORAGE_KEY, StorageError, StoragePort, StorageResult,
};

use std::sync::Arc;

use parking_lot::RwLock;
use shared::models::{Reservation, ReservationDraft, ReservationStatus};
use shared::util::reservation_id;

/// Owns the reservation collection and its durable slot.
///
/// Cloning is shallow; all clones share the same collection.
#[derive(Clone)]
pub struct ReservationStore {
    reservations: Arc<RwLock<Vec<Reservation>>>,
    port: Arc<dyn StoragePort>,
}

impl ReservationStore {
    /// Load the collection from the durable slot.
    ///
    /// | Slot state | Result |
    /// |------------|--------|
    /// | never written | seeded with example data, persisted |
    /// | readable | loaded as-is |
    /// | unreadable | logged, empty collection (not re-seeded) |
    pub fn initialize(port: Arc<dyn StoragePort>) -> Self {
        let reservations = match port.load() {
            Ok(Some(list)) => list,
            Ok(None) => {
                let list = seed::seed_reservations();
                if let Err(e) = port.save(&list) {
                    tracing::warn!(error = %e, "Failed to persist seed reservations");
                }
                tracing::info!(count = list.len(), "Seeded example reservations");
                list
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Unreadable reservation data, starting with an empty collection"
                );
                Vec::new()
            }
        };

        Self {
            reservations: Arc::new(RwLock::new(reservations)),
            port,
        }
    }

    /// Number of reservations currently held
    pub fn len(&self) -> usize {
        self.reservations.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.read().is_empty()
    }

    /// Snapshot of the collection (insertion order, newest first)
    pub fn list(&self) -> Vec<Reservation> {
        self.reservations.read().clone()
    }

    pub fn get(&self, id: &str) -> Option<Reservation> {
        self.reservations.read().iter().find(|r| r.id == id).cloned()
    }

    /// Insert a new reservation as Pending and return its fresh id
    pub fn add(&self, draft: ReservationDraft) -> String {
        let id = reservation_id();
        let reservation = draft.into_reservation(id.clone(), ReservationStatus::Pending);

        let mut reservations = self.reservations.write();
        reservations.insert(0, reservation);
        self.persist(&reservations);
        id
    }

    /// Replace the entry with a matching id.
    ///
    /// Unknown ids are a no-op — update never creates.
    pub fn update(&self, updated: Reservation) -> bool {
        let mut reservations = self.reservations.write();
        match reservations.iter_mut().find(|r| r.id == updated.id) {
            Some(slot) => {
                *slot = updated;
                self.persist(&reservations);
                true
            }
            None => false,
        }
    }

    /// Remove by id. Removing an absent id is a no-op, so delete is
    /// idempotent.
    pub fn delete(&self, id: &str) -> bool {
        let mut reservations = self.reservations.write();
        let before = reservations.len();
        reservations.retain(|r| r.id != id);
        let removed = reservations.len() != before;
        if removed {
            self.persist(&reservations);
        }
        removed
    }

    /// Force a reservation to Cancelled without removing it (external
    /// cancellation signal).
    pub fn cancel_by_id(&self, id: &str) -> bool {
        let mut reservations = self.reservations.write();
        match reservations.iter_mut().find(|r| r.id == id) {
            Some(reservation) => {
                reservation.status = ReservationStatus::Cancelled;
                self.persist(&reservations);
                true
            }
            None => false,
        }
    }

    fn persist(&self, reservations: &[Reservation]) {
        if let Err(e) = self.port.save(reservations) {
            tracing::warn!(
                error = %e,
                "Failed to persist reservations, in-memory state kept for this session"
            );
        }
    }
}
