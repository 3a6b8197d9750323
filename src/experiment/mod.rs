//! Experiment Lifecycle Schema
//!
//! This module provides the entity, decision rule, and aggregate metrics
//! for experiment tracking.
//!
//! ## Schema Overview
//!
//! ```text
//! Experiment ── status: active | shipped | killed
//!      │
//!      ├── classify(observed, target)   [decision rule]
//!      └── ExperimentMetrics            [per-owner aggregate]
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use veredicto::experiment::{classify, Experiment, ExperimentStatus};
//! use veredicto::identity::UserId;
//!
//! // Create an experiment
//! let experiment = Experiment::new(
//!     "exp-000001",
//!     UserId::new("user-1"),
//!     "Landing page rewrite",
//!     "A shorter page converts better",
//!     "Signups",
//!     100.0,
//! );
//! assert_eq!(experiment.status(), ExperimentStatus::Active);
//!
//! // Classify an observed result
//! assert_eq!(classify(150.0, 100.0), ExperimentStatus::Shipped);
//! ```

mod decision;
mod metrics;
mod record;

pub use decision::classify;
pub use metrics::ExperimentMetrics;
pub use record::{Experiment, ExperimentBuilder, ExperimentPatch, ExperimentStatus};
