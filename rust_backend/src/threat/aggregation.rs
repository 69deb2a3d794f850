//! Importance-weighted aggregation of department threat scores.

use log::{debug, warn};

use crate::error::{KataError, KataResult};

/// Inclusive upper bound of an aggregated company score.
pub const MAX_AGGREGATED_SCORE: f64 = 90.0;

/// Combine per-department scores into one company-wide threat score.
///
/// Computes `Σ(sum(group) * weight) / Σ(len(group) * weight)`, clamps the
/// mean to `[0, 90]` and rounds half to even.
///
/// # Arguments
/// * `groups` - One score collection per department
/// * `weights` - Importance of each department, matched by position
///
/// # Errors
/// * [`KataError::LengthMismatch`] if `groups` and `weights` differ in length
/// * [`KataError::ZeroDenominator`] if every group is empty or every weight is zero
/// * [`KataError::NonFiniteScore`] if the scores contain NaN or infinities
///
/// # Example
/// ```
/// use kata_rust::threat::weighted_aggregate_score;
///
/// let groups = vec![vec![40.0, 42.0], vec![70.0]];
/// // (82 * 1 + 70 * 2) / (2 * 1 + 1 * 2) = 55.5, rounded half to even
/// assert_eq!(weighted_aggregate_score(&groups, &[1, 2]).unwrap(), 56);
/// ```
pub fn weighted_aggregate_score<G: AsRef<[f64]>>(groups: &[G], weights: &[u32]) -> KataResult<u32> {
    if groups.len() != weights.len() {
        return Err(KataError::LengthMismatch {
            groups: groups.len(),
            weights: weights.len(),
        });
    }

    let mut total_weighted_score = 0.0_f64;
    let mut total_weighted_count = 0_u64;

    for (scores, &importance) in groups.iter().zip(weights) {
        let scores = scores.as_ref();
        total_weighted_score += scores.iter().sum::<f64>() * f64::from(importance);
        total_weighted_count += scores.len() as u64 * u64::from(importance);
    }

    debug!(
        "Aggregating {} groups: weighted sum {}, weighted count {}",
        groups.len(),
        total_weighted_score,
        total_weighted_count
    );

    if total_weighted_count == 0 {
        return Err(KataError::ZeroDenominator);
    }

    let mean = total_weighted_score / total_weighted_count as f64;
    if !mean.is_finite() {
        return Err(KataError::NonFiniteScore);
    }

    let clamped = mean.clamp(0.0, MAX_AGGREGATED_SCORE);
    if clamped != mean {
        warn!(
            "Aggregated score {:.3} outside [0, {}], clamped to {}",
            mean, MAX_AGGREGATED_SCORE, clamped
        );
    }

    Ok(clamped.round_ties_even() as u32)
}
