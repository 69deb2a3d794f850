use pyo3::prelude::*;

use crate::algorithms::longest_increasing_run;

/// Length of the longest strictly increasing run of adjacent values
///
/// Args:
///     values: Sequence of numbers
///
/// Returns:
///     int: 0 for an empty sequence, otherwise at least 1
///
/// Example:
///     >>> import kata_rust
///     >>> kata_rust.longest_increasing_run([1, 3, 5, 4, 7])
///     3
#[pyfunction]
#[pyo3(name = "longest_increasing_run")]
pub fn py_longest_increasing_run(values: Vec<f64>) -> usize {
    longest_increasing_run(&values)
}
