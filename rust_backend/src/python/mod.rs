//! Python bindings for the kata exercises.
//!
//! This module exposes the Rust implementations to Python via PyO3. It is
//! compiled only with the `python` feature (`maturin build --features python`).
//!
//! # Modules
//!
//! - [`runs`]: Longest increasing run
//! - [`threat`]: Threat score sampling, aggregation and reports
//! - [`time_bindings`]: Cyclic hour encoding and circular hour differences
//!
//! # Errors
//!
//! [`KataError::ZeroDenominator`] surfaces as `ZeroDivisionError`; every other
//! variant surfaces as `ValueError`.

use pyo3::exceptions::{PyValueError, PyZeroDivisionError};
use pyo3::prelude::*;

use crate::error::KataError;

pub mod runs;
pub mod threat;
pub mod time_bindings;

pub use runs::*;
pub use threat::*;
pub use time_bindings::*;

impl From<KataError> for PyErr {
    fn from(err: KataError) -> PyErr {
        match err {
            KataError::ZeroDenominator => PyZeroDivisionError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

/// Register all kata functions with the Python module.
pub fn register_functions(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(runs::py_longest_increasing_run, m)?)?;

    m.add_function(wrap_pyfunction!(threat::py_generate_bounded_samples, m)?)?;
    m.add_function(wrap_pyfunction!(threat::py_weighted_aggregate_score, m)?)?;
    m.add_function(wrap_pyfunction!(threat::py_threat_report, m)?)?;

    m.add_function(wrap_pyfunction!(time_bindings::py_hour_to_cyclic_point, m)?)?;
    m.add_function(wrap_pyfunction!(time_bindings::py_circular_hour_difference, m)?)?;

    Ok(())
}
