//! # Veredicto: Experiment Lifecycle Tracker
//!
//! Veredicto records business experiments (title, hypothesis, target
//! metric), accepts an observed value once results are in, and
//! deterministically classifies each experiment as **shipped** or
//! **killed** by comparing observed to target. Every operation is scoped
//! to an authenticated owner.
//!
//! ## Design Principles (Toyota Way Aligned)
//!
//! - **Jidoka**: the decision rule is a pure function, tested at its
//!   boundary (`classify(t, t) == Shipped`)
//! - **Poka-Yoke safety**: ownership checks are part of the store
//!   contract, so cross-owner access cannot be forgotten at a call site
//! - **Muda elimination**: listing never fails; it degrades to an empty,
//!   well-formed aggregate
//!
//! ## Example Usage
//!
//! ```rust
//! use veredicto::identity::UserId;
//! use veredicto::service::{CreateExperiment, ExperimentService};
//! use veredicto::store::MemoryExperimentStore;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> veredicto::Result<()> {
//! let service = ExperimentService::new(MemoryExperimentStore::new());
//! let owner = UserId::new("user-1");
//!
//! let experiment = service
//!     .create(
//!         &owner,
//!         CreateExperiment {
//!             title: "Landing page rewrite".into(),
//!             hypothesis: "A shorter page converts better".into(),
//!             metric_name: "Signups".into(),
//!             target_value: 100.0,
//!         },
//!     )
//!     .await?;
//!
//! let updated = service.submit_result(&owner, experiment.id(), 150.0).await?;
//! println!("{}: {}", updated.title(), updated.status());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod error;
pub mod experiment;
pub mod identity;
pub mod service;
pub mod store;

pub use error::{Error, Result};
