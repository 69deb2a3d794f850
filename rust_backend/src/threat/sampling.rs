//! Bounded random threat-score generation.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{KataError, KataResult};

/// Exclusive upper bound of any generated threat score.
pub const SCORE_CEILING: i64 = 90;

/// Half-open integer range `[low, high)` that samples are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleRange {
    pub low: i64,
    pub high: i64,
}

impl SampleRange {
    /// Builds `[max(center - spread, 0), min(center + spread + 1, 90))`.
    ///
    /// Fails with [`KataError::EmptySampleRange`] when clamping leaves nothing to draw.
    ///
    /// # Example
    /// ```
    /// use kata_rust::threat::SampleRange;
    ///
    /// let range = SampleRange::around(85, 10).unwrap();
    /// assert_eq!((range.low, range.high), (75, 90));
    /// ```
    pub fn around(center: i64, spread: i64) -> KataResult<Self> {
        let low = center.saturating_sub(spread).max(0);
        let high = center
            .saturating_add(spread)
            .saturating_add(1)
            .min(SCORE_CEILING);

        if low >= high {
            return Err(KataError::EmptySampleRange { low, high });
        }

        Ok(Self { low, high })
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.low..self.high).contains(&value)
    }

    /// Number of distinct values the range can yield.
    pub fn width(&self) -> i64 {
        self.high - self.low
    }
}

/// Draw `count` scores uniformly from the clamped range around `center`.
///
/// Uses the thread-local generator; see [`generate_bounded_samples_with`]
/// for a caller-supplied (e.g. seeded) generator.
pub fn generate_bounded_samples(center: i64, spread: i64, count: usize) -> KataResult<Vec<u32>> {
    let mut rng = rand::thread_rng();
    generate_bounded_samples_with(&mut rng, center, spread, count)
}

/// Same as [`generate_bounded_samples`] but drawing from `rng`.
pub fn generate_bounded_samples_with<R: Rng + ?Sized>(
    rng: &mut R,
    center: i64,
    spread: i64,
    count: usize,
) -> KataResult<Vec<u32>> {
    let range = SampleRange::around(center, spread)?;

    // Both bounds sit inside [0, 90], so the narrowing is lossless
    let (low, high) = (range.low as u32, range.high as u32);
    let samples = (0..count).map(|_| rng.gen_range(low..high)).collect();

    Ok(samples)
}
