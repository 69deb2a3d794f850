use pyo3::prelude::*;

use crate::config::ThreatConfig;
use crate::threat::{generate_bounded_samples, weighted_aggregate_score, ThreatSimulator};

/// Generate random threat scores for a department
///
/// Args:
///     center: Expected score of the department
///     spread: Maximum distance from the center
///     count: Number of scores to draw
///
/// Returns:
///     list[int]: Scores in [max(center - spread, 0), min(center + spread + 1, 90))
///
/// Raises:
///     ValueError: If the clamped range is empty
#[pyfunction]
#[pyo3(name = "generate_bounded_samples")]
pub fn py_generate_bounded_samples(center: i64, spread: i64, count: usize) -> PyResult<Vec<u32>> {
    Ok(generate_bounded_samples(center, spread, count)?)
}

/// Calculate the aggregated threat score for the company
///
/// Args:
///     department_scores: One list of scores per department
///     importance_tags: Department importance (1-5), matched by position
///
/// Returns:
///     int: Weighted mean clamped to [0, 90] and rounded half to even
///
/// Raises:
///     ZeroDivisionError: If every department is empty
///     ValueError: If the two lists differ in length
///
/// Example:
///     >>> import kata_rust
///     >>> kata_rust.weighted_aggregate_score([[0, 0, 0], [0, 0]], [2, 3])
///     0
#[pyfunction]
#[pyo3(name = "weighted_aggregate_score")]
pub fn py_weighted_aggregate_score(
    department_scores: Vec<Vec<f64>>,
    importance_tags: Vec<u32>,
) -> PyResult<u32> {
    Ok(weighted_aggregate_score(&department_scores, &importance_tags)?)
}

/// Simulate a company threat report from a TOML configuration
///
/// Args:
///     config_path: Path to threat.toml; the default locations are searched when omitted
///
/// Returns:
///     str: The report serialized as JSON
#[pyfunction]
#[pyo3(name = "threat_report", signature = (config_path=None))]
pub fn py_threat_report(config_path: Option<String>) -> PyResult<String> {
    let config = match config_path {
        Some(path) => ThreatConfig::from_file(path)?,
        None => ThreatConfig::from_default_location()?,
    };

    let report = ThreatSimulator::from_config(&config).simulate(&config)?;

    serde_json::to_string(&report).map_err(|e| {
        pyo3::exceptions::PyRuntimeError::new_err(format!("Failed to serialize result: {}", e))
    })
}
