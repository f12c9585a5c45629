//! # Storage Layer
//!
//! Records live in ordered, in-memory collections. The [`RecordStore`] trait is the only
//! way the rest of the crate touches them.
//!
//! ## Whole-Collection Replacement
//!
//! A store exposes exactly two primitives:
//! 1. [`RecordStore::records`]: a read-only view of the current sequence.
//! 2. [`RecordStore::commit`]: replace the entire sequence at once.
//!
//! Add, update-by-id and remove are provided methods built on those two: take a snapshot,
//! modify it, commit it. A failed commit leaves the previous sequence untouched, so a
//! half-applied mutation can never be observed.
//!
//! ## Ordering
//!
//! Insertion order is preserved. New records are appended, updates keep their slot, and
//! removal closes the gap. Listing and filtering never reorder.
//!
//! ## Identity
//!
//! Ids are unique within a collection and immutable. [`RecordStore::next_id`] hands out
//! `max(existing ids, floor) + 1`, so a new id is always strictly greater than every id
//! currently present. Only current records count: removing the highest record frees its
//! id for the next insert.
//!
//! ## Implementations
//!
//! - [`memory::MemoryStore`]: the `Vec`-backed store used for every session.
//! - [`campus::Campus`]: the three collections a session works with, bundled.

use crate::error::{CounselError, Result};
use crate::model::{Record, RecordId};

pub mod campus;
pub mod memory;

/// Ordered storage for one record type.
pub trait RecordStore<R: Record> {
    /// Current records in insertion order.
    fn records(&self) -> &[R];

    /// Replace the whole collection.
    fn commit(&mut self, records: Vec<R>) -> Result<()>;

    fn get(&self, id: RecordId) -> Option<&R> {
        self.records().iter().find(|r| r.id() == id)
    }

    fn contains(&self, id: RecordId) -> bool {
        self.get(id).is_some()
    }

    fn len(&self) -> usize {
        self.records().len()
    }

    fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    fn next_id(&self, floor: RecordId) -> RecordId {
        self.records()
            .iter()
            .map(|r| r.id())
            .fold(floor, RecordId::max)
            + 1
    }

    fn append(&mut self, record: R) -> Result<()> {
        if self.contains(record.id()) {
            return Err(CounselError::Store(format!(
                "{} record {} already exists",
                R::COLLECTION,
                record.id()
            )));
        }
        let mut next = self.records().to_vec();
        next.push(record);
        self.commit(next)
    }

    /// Swap in `record` for the one with the same id, returning the previous version.
    fn replace(&mut self, record: R) -> Result<R> {
        let id = record.id();
        let mut next = self.records().to_vec();
        let slot = next
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(CounselError::NotFound {
                collection: R::COLLECTION,
                id,
            })?;
        let previous = std::mem::replace(slot, record);
        self.commit(next)?;
        Ok(previous)
    }

    fn remove(&mut self, id: RecordId) -> Result<R> {
        let removed = self.get(id).cloned().ok_or(CounselError::NotFound {
            collection: R::COLLECTION,
            id,
        })?;
        let next: Vec<R> = self
            .records()
            .iter()
            .filter(|r| r.id() != id)
            .cloned()
            .collect();
        self.commit(next)?;
        Ok(removed)
    }
}
