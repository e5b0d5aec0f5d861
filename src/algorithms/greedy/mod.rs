//! Greedy quarter-filling planner.
//!
//! The planner turns an unordered requirement set into a term-by-term plan:
//!
//! 1. **Graph**: every requirement becomes a node; each direct prerequisite or
//!    corequisite leaf inside the set becomes an edge from the dependency to
//!    the course needing it. Malformed input (overfull thresholds, duplicate
//!    requirements, cycles) is rejected before anything is placed.
//!
//! 2. **Ordering**: courses are stably sorted ascending by their number of
//!    direct leaf dependencies. Nested sub-constraints are not counted.
//!
//! 3. **Placement** (one pass per quarter):
//!    - Courses with no unplaced dependency in the set sit on a stack
//!    - Pop a course and run the [eligibility check](crate::eligibility::evaluate)
//!    - On success, place it (and its concurrent course) and stack every
//!      dependent whose last unplaced dependency it was
//!    - On failure, defer it to the next quarter; nothing is ever dropped
//!    - A concurrent course that is itself a requirement is never stacked
//!      alone: it is checked and placed together with the course naming it
//!
//! 4. **Termination**: success once every requirement is placed. The run
//!    fails with `SchedulingInfeasible` when quarters run out, when a quarter
//!    places nothing and no later quarter could change that, or when the
//!    evaluation bound is reached.
//!
//! When [`PlannerConfig::restarts`] is set, an infeasible attempt is retried
//! with ties in the ordering shuffled. Each attempt works on its own copy of
//! the plan.
//!
//! # Module Structure
//!
//! - [`graph`] - Requirement graph and validation
//! - [`ordering`] - Dependency-count ordering and tie shuffling
//! - `engine` - Placement loop for one attempt

mod engine;
pub mod graph;
pub mod ordering;

pub use graph::{RequirementGraph, RequirementKind};

use crate::algorithms::{PlanningAlgorithm, PlanningError};
use crate::config::PlannerConfig;
use crate::course::Course;
use crate::plan::CoursePlan;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

/// Greedy dependency-aware planner.
#[derive(Debug, Clone, Default)]
pub struct GreedyPlanner {
    config: PlannerConfig,
}

impl GreedyPlanner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }
}

impl PlanningAlgorithm for GreedyPlanner {
    fn plan(&self, requirements: &[Course], plan: &CoursePlan) -> Result<CoursePlan, PlanningError> {
        let mut graph = RequirementGraph::build(requirements)?;
        debug!(
            courses = graph.len(),
            dependencies = graph.dependency_count(),
            roots = graph.roots().len(),
            "built requirement graph"
        );

        let first_error = match engine::run(&graph, plan.clone(), &self.config) {
            Ok(finished) => {
                info!(quarters = finished.num_quarters(), courses = finished.course_count(), "plan complete");
                return Ok(finished);
            }
            Err(e @ PlanningError::SchedulingInfeasible { .. }) => e,
            Err(e) => return Err(e),
        };

        let mut rng = StdRng::seed_from_u64(self.config.seed);
        for attempt in 1..=self.config.restarts {
            graph.shuffle_ties(&mut rng);
            match engine::run(&graph, plan.clone(), &self.config) {
                Ok(finished) => {
                    info!(attempt, quarters = finished.num_quarters(), "plan complete after restart");
                    return Ok(finished);
                }
                Err(e) => debug!(attempt, error = %e, "restart failed"),
            }
        }

        info!(error = %first_error, "no feasible plan found");
        Err(first_error)
    }
}
