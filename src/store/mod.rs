//! Experiment Store Module
//!
//! Durable storage contract for experiment records, with:
//! - Owner-scoped access on every operation
//! - Atomic check-owner-and-write updates
//! - In-memory backend for tests and embedding
//!
//! Ownership scoping is part of the contract itself rather than an
//! external row-security policy: every lookup takes the caller's owner ID
//! and a mismatch is indistinguishable from absence, so the logic is
//! testable without a real backend and can never leak the existence of
//! another owner's rows.
//!
//! # Example
//!
//! ```rust,no_run
//! use veredicto::identity::UserId;
//! use veredicto::store::{ExperimentStore, MemoryExperimentStore, NewExperiment};
//!
//! # async fn example() -> veredicto::Result<()> {
//! let store = MemoryExperimentStore::new();
//! let owner = UserId::new("user-1");
//!
//! let record = store
//!     .insert(NewExperiment {
//!         owner: owner.clone(),
//!         title: "Landing page rewrite".into(),
//!         hypothesis: "A shorter page converts better".into(),
//!         metric_name: "Signups".into(),
//!         target_value: 100.0,
//!     })
//!     .await?;
//!
//! let found = store.find(record.id(), &owner).await?;
//! assert_eq!(found.id(), record.id());
//! # Ok(())
//! # }
//! ```

mod memory;

pub use memory::MemoryExperimentStore;

use crate::experiment::{Experiment, ExperimentPatch};
use crate::identity::UserId;
use crate::Result;
use std::future::Future;

/// Fields required to create an experiment record.
///
/// `id`, `status`, and the timestamps are assigned by the store; a caller
/// can never choose them.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExperiment {
    /// The creating user, recorded as the immutable owner.
    pub owner: UserId,
    /// Short name of the experiment.
    pub title: String,
    /// What the experiment is expected to show.
    pub hypothesis: String,
    /// The metric being measured.
    pub metric_name: String,
    /// The success threshold for that metric.
    pub target_value: f64,
}

/// Experiment repository trait.
///
/// Every operation is scoped to an owner. Absence and ownership mismatch
/// are both reported as `Error::NotFound`.
pub trait ExperimentStore: Send + Sync {
    /// Insert a new record, assigning its ID and timestamps.
    ///
    /// The stored record starts `Active` with no observed value.
    fn insert(&self, new: NewExperiment) -> impl Future<Output = Result<Experiment>> + Send;

    /// Fetch a record by ID, scoped to `owner`.
    ///
    /// Returns `Error::NotFound` when absent or owned by someone else.
    fn find(&self, id: &str, owner: &UserId) -> impl Future<Output = Result<Experiment>> + Send;

    /// All records for `owner`, newest-created first.
    fn list_by_owner(&self, owner: &UserId)
        -> impl Future<Output = Result<Vec<Experiment>>> + Send;

    /// Apply a result patch to a record, scoped to `owner`.
    ///
    /// The ownership check and the write are one atomic step; two
    /// concurrent updates serialize with last-writer-wins. Returns the
    /// updated record, or `Error::NotFound` when absent or not owned.
    fn update(
        &self,
        id: &str,
        owner: &UserId,
        patch: ExperimentPatch,
    ) -> impl Future<Output = Result<Experiment>> + Send;

    /// Delete a record, scoped to `owner`.
    ///
    /// Succeeds if the record is already absent; never removes another
    /// owner's row.
    fn delete(&self, id: &str, owner: &UserId) -> impl Future<Output = Result<()>> + Send;
}
