use pyo3::prelude::*;

use crate::time::{circular_hour_difference, hour_to_cyclic_point};

/// Encode an hour of the day as a point on the unit circle (PyO3 binding)
///
/// Returns a tuple (sin, cos) of (hour / 24) * 2π.
///
/// Raises:
///     ValueError: If hour is outside [0, 24)
#[pyfunction]
#[pyo3(name = "hour_to_cyclic_point")]
pub fn py_hour_to_cyclic_point(hour: i64) -> PyResult<(f64, f64)> {
    Ok(hour_to_cyclic_point(hour)?)
}

/// Shortest distance in hours between two hours on a 24-hour clock (PyO3 binding)
///
/// Raises:
///     ValueError: If either hour is outside [0, 24)
#[pyfunction]
#[pyo3(name = "circular_hour_difference")]
pub fn py_circular_hour_difference(start_hour: i64, end_hour: i64) -> PyResult<u32> {
    Ok(circular_hour_difference(start_hour, end_hour)?)
}
