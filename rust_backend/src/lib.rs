//! Kata Rust - three small numeric exercises behind one library.
//!
//! - [`algorithms`]: longest contiguous increasing run
//! - [`threat`]: bounded threat-score sampling and weighted company aggregation
//! - [`time`]: cyclic hour-of-day encoding and circular hour differences

#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod algorithms;
pub mod config;
pub mod error;
pub mod threat;
pub mod time;

#[cfg(feature = "python")]
pub mod python;

pub use error::{KataError, KataResult};

/// Kata Rust Python module
#[cfg(feature = "python")]
#[pymodule]
fn kata_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register_functions(m)
}
