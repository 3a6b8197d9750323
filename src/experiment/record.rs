//! Experiment Record - the sole entity of the lifecycle schema

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identity::UserId;

/// Status of an experiment.
///
/// `Shipped` and `Killed` are terminal: no operation transitions an
/// experiment back to `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperimentStatus {
    /// Created, no result submitted yet.
    Active,
    /// Observed value met or beat the target.
    Shipped,
    /// Observed value fell short of the target.
    Killed,
}

impl ExperimentStatus {
    /// Whether this status is terminal (`Shipped` or `Killed`).
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Shipped | Self::Killed)
    }
}

impl std::fmt::Display for ExperimentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Active => "active",
            Self::Shipped => "shipped",
            Self::Killed => "killed",
        };
        f.write_str(s)
    }
}

/// Result fields written back on submission.
///
/// The repository applies both fields and refreshes `updated_at` as one
/// atomic step; `status` must already be consistent with the decision
/// rule applied to (`observed_value`, the record's target).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperimentPatch {
    /// The observed metric value being recorded.
    pub observed_value: f64,
    /// The classification computed from the observed value.
    pub status: ExperimentStatus,
}

/// Experiment Record represents a tracked business experiment.
///
/// Each record belongs to exactly one owner; the owner is set at creation
/// and used for all access filtering. `target_value` is immutable after
/// creation; `observed_value` and `status` change only through result
/// submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Experiment {
    id: String,
    owner: UserId,
    title: String,
    hypothesis: String,
    metric_name: String,
    target_value: f64,
    observed_value: Option<f64>,
    status: ExperimentStatus,
    result_summary: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Experiment {
    /// Create a new active experiment record with the current timestamp.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique identifier, assigned by the store
    /// * `owner` - The creating user
    /// * `title` - Short name of the experiment
    /// * `hypothesis` - What the experiment is expected to show
    /// * `metric_name` - The metric being measured
    /// * `target_value` - The success threshold for that metric
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        owner: UserId,
        title: impl Into<String>,
        hypothesis: impl Into<String>,
        metric_name: impl Into<String>,
        target_value: f64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            owner,
            title: title.into(),
            hypothesis: hypothesis.into(),
            metric_name: metric_name.into(),
            target_value,
            observed_value: None,
            status: ExperimentStatus::Active,
            result_summary: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a builder for constructing a record with optional fields.
    #[must_use]
    pub fn builder(
        id: impl Into<String>,
        owner: UserId,
        title: impl Into<String>,
        hypothesis: impl Into<String>,
        metric_name: impl Into<String>,
        target_value: f64,
    ) -> ExperimentBuilder {
        ExperimentBuilder::new(id, owner, title, hypothesis, metric_name, target_value)
    }

    /// Get the experiment ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the owning user.
    #[must_use]
    pub const fn owner(&self) -> &UserId {
        &self.owner
    }

    /// Get the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the hypothesis.
    #[must_use]
    pub fn hypothesis(&self) -> &str {
        &self.hypothesis
    }

    /// Get the metric name.
    #[must_use]
    pub fn metric_name(&self) -> &str {
        &self.metric_name
    }

    /// Get the target value.
    #[must_use]
    pub const fn target_value(&self) -> f64 {
        self.target_value
    }

    /// Get the observed value, if a result has been submitted.
    #[must_use]
    pub const fn observed_value(&self) -> Option<f64> {
        self.observed_value
    }

    /// Get the current status.
    #[must_use]
    pub const fn status(&self) -> ExperimentStatus {
        self.status
    }

    /// Get the free-text result summary, if any.
    #[must_use]
    pub fn result_summary(&self) -> Option<&str> {
        self.result_summary.as_deref()
    }

    /// Get the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Get the last-mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Apply a result patch and refresh `updated_at`.
    pub(crate) fn apply(&mut self, patch: &ExperimentPatch) {
        self.observed_value = Some(patch.observed_value);
        self.status = patch.status;
        self.updated_at = Utc::now();
    }
}

/// Builder for `Experiment`.
#[derive(Debug)]
pub struct ExperimentBuilder {
    record: Experiment,
}

impl ExperimentBuilder {
    /// Create a new builder with required fields.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        owner: UserId,
        title: impl Into<String>,
        hypothesis: impl Into<String>,
        metric_name: impl Into<String>,
        target_value: f64,
    ) -> Self {
        Self {
            record: Experiment::new(id, owner, title, hypothesis, metric_name, target_value),
        }
    }

    /// Set a free-text result summary.
    #[must_use]
    pub fn result_summary(mut self, summary: impl Into<String>) -> Self {
        self.record.result_summary = Some(summary.into());
        self
    }

    /// Set an already-classified result (useful for deserialization/testing).
    #[must_use]
    pub const fn result(mut self, observed_value: f64, status: ExperimentStatus) -> Self {
        self.record.observed_value = Some(observed_value);
        self.record.status = status;
        self
    }

    /// Set a custom creation timestamp (useful for deserialization/testing).
    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.record.created_at = created_at;
        self.record.updated_at = created_at;
        self
    }

    /// Build the `Experiment`.
    #[must_use]
    pub fn build(self) -> Experiment {
        self.record
    }
}
