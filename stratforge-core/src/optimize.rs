//! Optimization configuration value objects.
//!
//! These types describe *what to search*, not how: the external GA/backtest
//! service consumes an `OptimizationConfig` verbatim. Everything here is an
//! immutable value object produced fresh per resolution call.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One tunable parameter's search space.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Range {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Invariant: `min <= max`, `step > 0`.
    pub fn is_valid(&self) -> bool {
        self.min <= self.max && self.step > 0.0
    }
}

/// Parameter name → search range. Absence of a key means "not tunable here".
///
/// `BTreeMap` keeps iteration and serialization order deterministic.
pub type ParameterSpace = BTreeMap<String, Range>;

/// Genetic-algorithm settings consumed by the external optimizer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GaSettings {
    pub population_size: u32,
    pub generations: u32,
    pub crossover_rate: f64,
    pub mutation_rate: f64,
    pub elite_percentage: f64,
}

impl GaSettings {
    /// Invariant: positive sizes, rates in [0, 1].
    pub fn is_valid(&self) -> bool {
        self.population_size > 0
            && self.generations > 0
            && (0.0..=1.0).contains(&self.crossover_rate)
            && (0.0..=1.0).contains(&self.mutation_rate)
            && (0.0..=1.0).contains(&self.elite_percentage)
    }
}

/// Metric name → signed weight. Negative weight means "minimize this metric".
/// Weights need not sum to 1.
pub type ObjectiveWeights = BTreeMap<String, f64>;

/// Constraint name → numeric threshold. The comparison direction (≥ or ≤) is
/// fixed per key name by the external service, not encoded in the value.
pub type Constraints = BTreeMap<String, f64>;

/// Fully resolved optimization configuration.
///
/// Produced fresh per resolution call and handed to the caller; never mutated
/// or cached by this core.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptimizationConfig {
    pub parameters: ParameterSpace,
    pub ga: GaSettings,
    pub objective_weights: ObjectiveWeights,
    pub constraints: Constraints,
}

/// One defaults-table record: the four config fields an exact-symbol or
/// category entry supplies in a single pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketDefaults {
    pub parameters: ParameterSpace,
    pub ga: GaSettings,
    pub objective_weights: ObjectiveWeights,
    pub constraints: Constraints,
}

impl MarketDefaults {
    /// Copy this record into a caller-owned config.
    pub fn to_config(&self) -> OptimizationConfig {
        OptimizationConfig {
            parameters: self.parameters.clone(),
            ga: self.ga,
            objective_weights: self.objective_weights.clone(),
            constraints: self.constraints.clone(),
        }
    }
}
