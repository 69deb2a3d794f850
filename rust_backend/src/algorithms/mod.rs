//! Sequence algorithms.
//!
//! # Components
//!
//! - [`runs`]: Longest contiguous strictly increasing run (LCIS length and span)
//!
//! # Example
//!
//! ```
//! use kata_rust::algorithms::{longest_increasing_run, longest_increasing_span};
//!
//! let values = [1, 3, 5, 4, 7];
//! assert_eq!(longest_increasing_run(&values), 3);
//! assert_eq!(longest_increasing_span(&values), Some(0..3));
//! ```

pub mod runs;

pub use runs::{longest_increasing_run, longest_increasing_span};
