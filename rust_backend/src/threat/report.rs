//! Company-wide threat report built from configured departments.

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::aggregation::weighted_aggregate_score;
use super::sampling::generate_bounded_samples_with;
use crate::config::ThreatConfig;
use crate::error::KataResult;

/// Per-department outcome of a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentSummary {
    pub name: String,
    pub importance: u32,
    pub sample_count: usize,
    /// `None` when the department drew no samples.
    pub mean_score: Option<f64>,
}

/// Aggregated threat score for the whole company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatReport {
    pub departments: Vec<DepartmentSummary>,
    pub aggregated_score: u32,
}

/// Draws department scores and aggregates them into a [`ThreatReport`].
pub struct ThreatSimulator<R: Rng = StdRng> {
    rng: R,
}

impl ThreatSimulator<StdRng> {
    /// Seed from `sampling.seed`, or from OS entropy when no seed is set.
    pub fn from_config(config: &ThreatConfig) -> Self {
        let rng = match config.sampling.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl<R: Rng> ThreatSimulator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Run one simulation over every configured department.
    pub fn simulate(&mut self, config: &ThreatConfig) -> KataResult<ThreatReport> {
        let mut groups = Vec::with_capacity(config.departments.len());
        let mut departments = Vec::with_capacity(config.departments.len());

        for profile in &config.departments {
            let count = profile.sample_count(&config.sampling);
            let scores: Vec<f64> =
                generate_bounded_samples_with(&mut self.rng, profile.mean, profile.spread, count)?
                    .into_iter()
                    .map(f64::from)
                    .collect();

            let mean_score = if scores.is_empty() {
                None
            } else {
                Some(scores.iter().sum::<f64>() / scores.len() as f64)
            };

            departments.push(DepartmentSummary {
                name: profile.name.clone(),
                importance: profile.importance,
                sample_count: scores.len(),
                mean_score,
            });
            groups.push(scores);
        }

        let aggregated_score = weighted_aggregate_score(&groups, &config.weights())?;

        info!(
            "Threat report: {} departments, aggregated score {}",
            departments.len(),
            aggregated_score
        );

        Ok(ThreatReport {
            departments,
            aggregated_score,
        })
    }
}
