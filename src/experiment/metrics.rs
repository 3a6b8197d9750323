//! Metrics Aggregator - summary counts and percentages over an owner's experiments

use serde::{Deserialize, Serialize};

use super::{Experiment, ExperimentStatus};

/// Aggregate metrics over one owner's experiment collection.
///
/// Counts are exact tallies by status, so `shipped + killed + active ==
/// total` always holds. Percentages are rounded to the nearest integer,
/// half away from zero (`f64::round`); with an empty collection both
/// percentages are `0` rather than undefined, so the aggregate is always
/// well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentMetrics {
    /// Total number of experiments.
    pub total: usize,
    /// Number with `Shipped` status.
    pub shipped: usize,
    /// Number with `Killed` status.
    pub killed: usize,
    /// Number with `Active` status.
    pub active: usize,
    /// `round(100 * shipped / total)`, `0` when empty.
    pub shipped_percentage: u32,
    /// `round(100 * killed / total)`, `0` when empty.
    pub killed_percentage: u32,
}

impl ExperimentMetrics {
    /// Compute the aggregate over a list of experiments.
    ///
    /// # Example
    ///
    /// ```rust
    /// use veredicto::experiment::ExperimentMetrics;
    ///
    /// let metrics = ExperimentMetrics::from_experiments(&[]);
    /// assert_eq!(metrics.total, 0);
    /// assert_eq!(metrics.shipped_percentage, 0);
    /// ```
    #[must_use]
    pub fn from_experiments(experiments: &[Experiment]) -> Self {
        let total = experiments.len();
        let shipped = experiments
            .iter()
            .filter(|e| e.status() == ExperimentStatus::Shipped)
            .count();
        let killed = experiments
            .iter()
            .filter(|e| e.status() == ExperimentStatus::Killed)
            .count();
        let active = experiments
            .iter()
            .filter(|e| e.status() == ExperimentStatus::Active)
            .count();

        Self {
            total,
            shipped,
            killed,
            active,
            shipped_percentage: percentage(shipped, total),
            killed_percentage: percentage(killed, total),
        }
    }
}

/// Nearest-integer percentage, round half away from zero. Zero when the
/// denominator is zero.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        0
    } else {
        ((count as f64 / total as f64) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::UserId;

    fn experiment(id: &str, status: ExperimentStatus) -> Experiment {
        let builder = Experiment::builder(
            id,
            UserId::new("owner"),
            "title",
            "hypothesis",
            "metric",
            10.0,
        );
        match status {
            ExperimentStatus::Active => builder.build(),
            ExperimentStatus::Shipped => builder.result(10.0, status).build(),
            ExperimentStatus::Killed => builder.result(1.0, status).build(),
        }
    }

    #[test]
    fn test_empty_collection_is_all_zeros() {
        let metrics = ExperimentMetrics::from_experiments(&[]);

        assert_eq!(metrics.total, 0);
        assert_eq!(metrics.shipped_percentage, 0);
        assert_eq!(metrics.killed_percentage, 0);
    }

    #[test]
    fn test_counts_by_status() {
        let experiments = vec![
            experiment("exp-1", ExperimentStatus::Shipped),
            experiment("exp-2", ExperimentStatus::Shipped),
            experiment("exp-3", ExperimentStatus::Active),
        ];

        let metrics = ExperimentMetrics::from_experiments(&experiments);

        assert_eq!(metrics.total, 3);
        assert_eq!(metrics.shipped, 2);
        assert_eq!(metrics.killed, 0);
        assert_eq!(metrics.active, 1);
    }

    #[test]
    fn test_two_thirds_rounds_to_67() {
        let experiments = vec![
            experiment("exp-1", ExperimentStatus::Shipped),
            experiment("exp-2", ExperimentStatus::Shipped),
            experiment("exp-3", ExperimentStatus::Active),
        ];

        let metrics = ExperimentMetrics::from_experiments(&experiments);

        assert_eq!(metrics.shipped_percentage, 67);
        assert_eq!(metrics.killed_percentage, 0);
    }

    #[test]
    fn test_half_rounds_away_from_zero() {
        // 1 of 8 = 12.5% -> 13
        let mut experiments = vec![experiment("exp-1", ExperimentStatus::Shipped)];
        for i in 2..=8 {
            experiments.push(experiment(&format!("exp-{i}"), ExperimentStatus::Active));
        }

        let metrics = ExperimentMetrics::from_experiments(&experiments);

        assert_eq!(metrics.shipped_percentage, 13);
    }

    #[test]
    fn test_serializes_camel_case() {
        let metrics = ExperimentMetrics::from_experiments(&[]);
        let json = serde_json::to_value(&metrics).unwrap();

        assert!(json.get("shippedPercentage").is_some());
        assert!(json.get("killedPercentage").is_some());
    }
}
