//! courseplan - dependency-aware academic quarter planning.
//!
//! Assigns a set of required courses to a sequence of quarters so that every
//! prerequisite, corequisite, concurrent-enrollment, term-offering and
//! per-quarter unit-load constraint holds.
//!
//! # Example
//!
//! ```
//! use courseplan::algorithms::{GreedyPlanner, PlanningAlgorithm};
//! use courseplan::constraints::ThresholdConstraint;
//! use courseplan::course::{Course, CourseKey, Season, SeasonSet};
//! use courseplan::plan::CoursePlan;
//!
//! let cmpe16 = Course::new("CMPE", "16")
//!     .with_units(5)
//!     .with_seasons(SeasonSet::academic_year());
//! let cmpe17 = Course::new("CMPE", "17")
//!     .with_units(5)
//!     .with_seasons(SeasonSet::academic_year())
//!     .with_pre_reqs(ThresholdConstraint::all_of([cmpe16.key().clone()]));
//!
//! let empty = CoursePlan::from_seasons(Season::ACADEMIC_YEAR, Vec::<CourseKey>::new(), 19);
//! let plan = GreedyPlanner::default().plan(&[cmpe17, cmpe16], &empty).unwrap();
//!
//! assert_eq!(plan.quarter_of(&CourseKey::new("CMPE", "16")), Some(0));
//! assert_eq!(plan.quarter_of(&CourseKey::new("CMPE", "17")), Some(1));
//! ```

pub mod algorithms;
pub mod config;
pub mod constraints;
pub mod course;
pub mod eligibility;
pub mod plan;

pub use algorithms::{GreedyPlanner, PlanningAlgorithm, PlanningError};
pub use config::PlannerConfig;
pub use course::{Course, CourseKey, Season};
pub use plan::{CoursePlan, Quarter};

#[cfg(test)]
pub(crate) mod test_utils;
