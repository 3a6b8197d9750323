//! Experiment Lifecycle Service
//!
//! Orchestrates create / submit-result / delete / list over the store,
//! enforcing ownership and invoking the decision rule on submission.
//!
//! Every call takes the authenticated caller explicitly; resolving a
//! request context to a `UserId` is the identity gate's job
//! (`crate::identity`) and happens before the service is invoked.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::experiment::{classify, Experiment, ExperimentMetrics, ExperimentPatch};
use crate::identity::UserId;
use crate::store::{ExperimentStore, NewExperiment};
use crate::{Error, Result};

/// Input for creating an experiment.
///
/// `id`, `owner`, `status`, and timestamps are never client-writable;
/// the store assigns them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateExperiment {
    /// Short name of the experiment.
    pub title: String,
    /// What the experiment is expected to show.
    pub hypothesis: String,
    /// The metric being measured.
    pub metric_name: String,
    /// The success threshold for that metric.
    pub target_value: f64,
}

/// Input for submitting an observed result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitResult {
    /// ID of the experiment to record against.
    pub experiment_id: String,
    /// The observed metric value.
    pub observed_value: f64,
}

/// An owner's experiments together with their aggregate metrics.
///
/// `metrics` is `None` only on the degraded (store failure) path; an
/// empty collection still carries a well-formed all-zero aggregate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperimentListing {
    /// The owner's experiments, newest-created first.
    pub experiments: Vec<Experiment>,
    /// Aggregate over `experiments`, absent when the store failed.
    pub metrics: Option<ExperimentMetrics>,
}

/// Experiment lifecycle service over a store backend.
///
/// # Example
///
/// ```rust
/// use veredicto::identity::UserId;
/// use veredicto::service::{CreateExperiment, ExperimentService};
/// use veredicto::store::MemoryExperimentStore;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> veredicto::Result<()> {
/// let service = ExperimentService::new(MemoryExperimentStore::new());
/// let owner = UserId::new("user-1");
///
/// let record = service
///     .create(
///         &owner,
///         CreateExperiment {
///             title: "Landing page rewrite".into(),
///             hypothesis: "A shorter page converts better".into(),
///             metric_name: "Signups".into(),
///             target_value: 100.0,
///         },
///     )
///     .await?;
///
/// let updated = service.submit_result(&owner, record.id(), 150.0).await?;
/// assert_eq!(updated.status().to_string(), "shipped");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ExperimentService<S> {
    store: S,
}

impl<S: ExperimentStore> ExperimentService<S> {
    /// Create a service over the given store.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Create a new experiment owned by `owner`.
    ///
    /// Validates that the text fields are non-empty after trimming and
    /// the target is finite, then inserts an `Active` record with no
    /// observed value.
    ///
    /// # Errors
    ///
    /// `Error::Validation` on malformed input, `Error::Storage` on
    /// backend failure.
    pub async fn create(&self, owner: &UserId, input: CreateExperiment) -> Result<Experiment> {
        validate_non_empty("title", &input.title)?;
        validate_non_empty("hypothesis", &input.hypothesis)?;
        validate_non_empty("metric_name", &input.metric_name)?;
        validate_finite("target_value", input.target_value)?;

        let record = self
            .store
            .insert(NewExperiment {
                owner: owner.clone(),
                title: input.title,
                hypothesis: input.hypothesis,
                metric_name: input.metric_name,
                target_value: input.target_value,
            })
            .await?;

        debug!(id = record.id(), owner = %owner, "experiment created");
        Ok(record)
    }

    /// Record an observed value and classify the experiment.
    ///
    /// Loads the experiment scoped to `owner`, classifies the observed
    /// value against the stored target, and persists the result as one
    /// atomic update. Resubmitting on an already-terminal experiment is
    /// allowed and simply reclassifies with the new observation.
    ///
    /// # Errors
    ///
    /// `Error::Validation` for a non-finite observation, `Error::NotFound`
    /// when the experiment is absent or not owned by `owner`,
    /// `Error::Storage` on backend failure.
    pub async fn submit_result(
        &self,
        owner: &UserId,
        experiment_id: &str,
        observed_value: f64,
    ) -> Result<Experiment> {
        validate_finite("observed_value", observed_value)?;

        let experiment = self.store.find(experiment_id, owner).await?;
        let status = classify(observed_value, experiment.target_value());

        let updated = self
            .store
            .update(
                experiment_id,
                owner,
                ExperimentPatch {
                    observed_value,
                    status,
                },
            )
            .await?;

        debug!(
            id = experiment_id,
            owner = %owner,
            observed = observed_value,
            target = experiment.target_value(),
            status = %status,
            "result recorded"
        );
        Ok(updated)
    }

    /// Delete an experiment owned by `owner`.
    ///
    /// Deletion is valid from any status. Succeeds if the record is
    /// already absent.
    ///
    /// # Errors
    ///
    /// `Error::Storage` on backend failure.
    pub async fn delete(&self, owner: &UserId, experiment_id: &str) -> Result<()> {
        self.store.delete(experiment_id, owner).await?;
        debug!(id = experiment_id, owner = %owner, "experiment deleted");
        Ok(())
    }

    /// List `owner`'s experiments with their aggregate metrics.
    ///
    /// Never fails: a store failure degrades to an empty list with no
    /// aggregate instead of propagating, leaving the caller a well-formed
    /// (if empty) listing to render.
    pub async fn list_with_metrics(&self, owner: &UserId) -> ExperimentListing {
        match self.store.list_by_owner(owner).await {
            Ok(experiments) => {
                let metrics = ExperimentMetrics::from_experiments(&experiments);
                ExperimentListing {
                    experiments,
                    metrics: Some(metrics),
                }
            }
            Err(error) => {
                warn!(owner = %owner, %error, "listing degraded to empty");
                ExperimentListing {
                    experiments: Vec::new(),
                    metrics: None,
                }
            }
        }
    }
}

fn validate_non_empty(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::validation(field, "must not be empty"));
    }
    Ok(())
}

fn validate_finite(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::validation(field, "must be a finite number"));
    }
    Ok(())
}
