//! Department threat scores.
//!
//! # Modules
//!
//! - [`sampling`]: Bounded random score generation per department
//! - [`aggregation`]: Importance-weighted company score
//! - [`report`]: Config-driven simulation producing a [`ThreatReport`]
//!
//! # Example
//!
//! ```
//! use kata_rust::threat::{generate_bounded_samples, weighted_aggregate_score};
//!
//! # fn example() -> kata_rust::error::KataResult<()> {
//! let engineering: Vec<f64> = generate_bounded_samples(40, 5, 100)?
//!     .into_iter()
//!     .map(f64::from)
//!     .collect();
//! let finance: Vec<f64> = generate_bounded_samples(70, 5, 100)?
//!     .into_iter()
//!     .map(f64::from)
//!     .collect();
//!
//! let score = weighted_aggregate_score(&[engineering, finance], &[1, 5])?;
//! assert!(score <= 90);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod aggregation;
pub mod report;
pub mod sampling;

pub use aggregation::{weighted_aggregate_score, MAX_AGGREGATED_SCORE};
pub use report::{DepartmentSummary, ThreatReport, ThreatSimulator};
pub use sampling::{
    generate_bounded_samples, generate_bounded_samples_with, SampleRange, SCORE_CEILING,
};
