pub mod error;
pub mod greedy;

pub use error::{BlockingReason, GraphError, InfeasibleCause, PlanningError, UnplacedCourse};
pub use greedy::GreedyPlanner;

use crate::course::Course;
use crate::plan::CoursePlan;

/// Algorithm for assigning a requirement set to the quarters of a plan.
pub trait PlanningAlgorithm {
    /// Places every course of `requirements` into `plan`.
    ///
    /// # Arguments
    ///
    /// * `requirements` - Courses that must all end up in the plan
    /// * `plan` - Quarters to fill, the completed set, and the unit cap.
    ///   Courses already present in its quarters count as placed.
    ///
    /// # Returns
    ///
    /// A copy of `plan` with every requirement placed; `plan` itself is untouched.
    fn plan(&self, requirements: &[Course], plan: &CoursePlan)
        -> Result<CoursePlan, PlanningError>;
}
