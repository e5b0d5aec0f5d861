//! Configuration for a planning run.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bounds and search settings for [`GreedyPlanner`](crate::algorithms::GreedyPlanner).
///
/// The defaults fill exactly the quarters handed in, with a single
/// deterministic attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Hard bound on the number of quarters in the finished plan.
    pub max_quarters: Option<usize>,
    /// Append empty quarters, continuing the season rotation, once the
    /// supplied quarters run out. Only takes effect with `max_quarters` set.
    pub extend_quarters: bool,
    /// Bound on eligibility evaluations per attempt.
    pub max_iterations: usize,
    /// Additional attempts with shuffled tie-breaking after an infeasible one.
    pub restarts: usize,
    /// Seed for the tie-breaking shuffle.
    pub seed: u64,
}

impl PlannerConfig {
    pub fn with_max_quarters(mut self, max_quarters: usize) -> Self {
        self.max_quarters = Some(max_quarters);
        self
    }

    /// Enables quarter extension up to `max_quarters`.
    pub fn extending_to(mut self, max_quarters: usize) -> Self {
        self.max_quarters = Some(max_quarters);
        self.extend_quarters = true;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_restarts(mut self, restarts: usize, seed: u64) -> Self {
        self.restarts = restarts;
        self.seed = seed;
        self
    }

    /// Number of quarters the planner may place into, given `supplied`
    /// quarters in the input plan.
    pub fn quarter_limit(&self, supplied: usize) -> usize {
        match (self.max_quarters, self.extend_quarters) {
            (Some(max), true) => max,
            (Some(max), false) => max.min(supplied),
            (None, _) => supplied,
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_quarters: None,
            extend_quarters: false,
            max_iterations: 10_000,
            restarts: 0,
            seed: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_supplied_quarters() {
        let cfg = PlannerConfig::default();
        assert_eq!(cfg.quarter_limit(6), 6);
        assert!(cfg.max_iterations > 0);
        assert_eq!(cfg.restarts, 0);
    }

    #[test]
    fn bound_without_extension_truncates() {
        let cfg = PlannerConfig::default().with_max_quarters(4);
        assert_eq!(cfg.quarter_limit(6), 4);
        assert_eq!(cfg.quarter_limit(2), 2);
    }

    #[test]
    fn extension_grows_to_bound() {
        let cfg = PlannerConfig::default().extending_to(12);
        assert_eq!(cfg.quarter_limit(3), 12);
        assert_eq!(cfg.quarter_limit(15), 12);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_fills_defaults() {
        let cfg: PlannerConfig = serde_json::from_str(r#"{ "restarts": 3 }"#).unwrap();
        assert_eq!(cfg.restarts, 3);
        assert_eq!(cfg.max_iterations, PlannerConfig::default().max_iterations);
    }
}
