//! In-memory experiment store implementation using `DashMap`.
//!
//! This is the default backend - data is lost on process restart.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use super::{ExperimentStore, NewExperiment};
use crate::experiment::{Experiment, ExperimentPatch};
use crate::identity::UserId;
use crate::{Error, Result};

/// In-memory experiment store using a lock-free concurrent hashmap.
///
/// Thread-safe. Updates take the record's `DashMap` entry guard, so the
/// ownership check and the write are one atomic step; concurrent updates
/// to the same record serialize with last-writer-wins.
///
/// IDs are assigned from a monotonic counter (`exp-000001`, ...).
#[derive(Debug, Default)]
pub struct MemoryExperimentStore {
    records: DashMap<String, Experiment>,
    next_id: AtomicU64,
}

impl MemoryExperimentStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of records in the store, across all owners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Clear all records.
    pub fn clear(&self) {
        self.records.clear();
    }

    fn generate_id(&self) -> String {
        let seq = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        format!("exp-{seq:06}")
    }
}

impl ExperimentStore for MemoryExperimentStore {
    async fn insert(&self, new: NewExperiment) -> Result<Experiment> {
        let record = Experiment::new(
            self.generate_id(),
            new.owner,
            new.title,
            new.hypothesis,
            new.metric_name,
            new.target_value,
        );
        self.records.insert(record.id().to_string(), record.clone());
        Ok(record)
    }

    async fn find(&self, id: &str, owner: &UserId) -> Result<Experiment> {
        self.records
            .get(id)
            .filter(|entry| entry.owner() == owner)
            .map(|entry| entry.value().clone())
            .ok_or(Error::NotFound)
    }

    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Experiment>> {
        let mut records: Vec<Experiment> = self
            .records
            .iter()
            .filter(|entry| entry.owner() == owner)
            .map(|entry| entry.value().clone())
            .collect();

        // Newest-created first; sequential IDs break creation-instant ties
        records.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| b.id().cmp(a.id()))
        });

        Ok(records)
    }

    async fn update(&self, id: &str, owner: &UserId, patch: ExperimentPatch) -> Result<Experiment> {
        // Entry guard held for the whole check-and-write
        let mut entry = self.records.get_mut(id).ok_or(Error::NotFound)?;
        if entry.owner() != owner {
            return Err(Error::NotFound);
        }
        entry.apply(&patch);
        Ok(entry.value().clone())
    }

    async fn delete(&self, id: &str, owner: &UserId) -> Result<()> {
        self.records
            .remove_if(id, |_, record| record.owner() == owner);
        Ok(())
    }
}
