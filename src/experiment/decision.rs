//! Decision Engine - the shipped/killed classification rule

use super::ExperimentStatus;

/// Classify an observed value against a target.
///
/// The rule: `observed >= target` ships, anything less kills. The
/// boundary is inclusive on the target, so a tie favors `Shipped`.
///
/// Pure and total over finite inputs. No rounding and no tolerance band;
/// callers validate that both values are finite before invoking this
/// (see `ExperimentService::submit_result`).
///
/// # Example
///
/// ```rust
/// use veredicto::experiment::{classify, ExperimentStatus};
///
/// assert_eq!(classify(150.0, 100.0), ExperimentStatus::Shipped);
/// assert_eq!(classify(100.0, 100.0), ExperimentStatus::Shipped);
/// assert_eq!(classify(40.0, 100.0), ExperimentStatus::Killed);
/// ```
#[must_use]
pub fn classify(observed: f64, target: f64) -> ExperimentStatus {
    if observed >= target {
        ExperimentStatus::Shipped
    } else {
        ExperimentStatus::Killed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_above_target_ships() {
        assert_eq!(classify(150.0, 100.0), ExperimentStatus::Shipped);
    }

    #[test]
    fn test_below_target_kills() {
        assert_eq!(classify(40.0, 100.0), ExperimentStatus::Killed);
    }

    #[test]
    fn test_tie_favors_shipped() {
        assert_eq!(classify(100.0, 100.0), ExperimentStatus::Shipped);
        assert_eq!(classify(0.0, 0.0), ExperimentStatus::Shipped);
        assert_eq!(classify(-3.5, -3.5), ExperimentStatus::Shipped);
    }

    #[test]
    fn test_negative_values_use_plain_comparison() {
        assert_eq!(classify(-1.0, -2.0), ExperimentStatus::Shipped);
        assert_eq!(classify(-2.0, -1.0), ExperimentStatus::Killed);
    }
}
