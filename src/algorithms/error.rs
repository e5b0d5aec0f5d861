use super::greedy::RequirementKind;
use crate::course::CourseKey;
use crate::eligibility::Ineligibility;
use crate::plan::PlanError;
use std::fmt;
use thiserror::Error;

/// Malformed requirement input, detected before any scheduling starts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Requirement {0} is listed more than once")]
    DuplicateRequirement(CourseKey),

    #[error(
        "{kind} constraint of {course} requires {required} candidate(s) but lists only {candidates}"
    )]
    ThresholdExceedsCandidates {
        course: CourseKey,
        kind: RequirementKind,
        required: usize,
        candidates: usize,
    },

    #[error("Requirements depend on each other in a cycle: {}", join_keys(.0))]
    Cycle(Vec<CourseKey>),
}

/// Errors surfaced by a planning run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanningError {
    #[error("Invalid requirement graph: {0}")]
    InvalidRequirementGraph(#[from] GraphError),

    #[error("Scheduling infeasible ({cause}): {} course(s) could not be placed", .unplaced.len())]
    SchedulingInfeasible {
        cause: InfeasibleCause,
        unplaced: Vec<UnplacedCourse>,
    },

    #[error("Plan rejected a placement: {0}")]
    Placement(#[from] PlanError),
}

impl PlanningError {
    /// Courses left unplaced, empty unless this is `SchedulingInfeasible`.
    pub fn unplaced(&self) -> &[UnplacedCourse] {
        match self {
            PlanningError::SchedulingInfeasible { unplaced, .. } => unplaced.as_slice(),
            _ => &[],
        }
    }
}

/// Why a planning run gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfeasibleCause {
    /// No quarter left to place into.
    QuartersExhausted { quarters: usize },
    /// A quarter placed nothing and no later quarter can change that.
    Stuck { quarter: usize },
    /// The per-attempt evaluation bound was hit.
    IterationLimit { iterations: usize },
}

impl fmt::Display for InfeasibleCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InfeasibleCause::QuartersExhausted { quarters } => {
                write!(f, "all {} quarter(s) used", quarters)
            }
            InfeasibleCause::Stuck { quarter } => {
                write!(f, "no progress possible from quarter {}", quarter + 1)
            }
            InfeasibleCause::IterationLimit { iterations } => {
                write!(f, "gave up after {} evaluations", iterations)
            }
        }
    }
}

/// A course the planner could not place, and what blocked it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnplacedCourse {
    pub course: CourseKey,
    pub reason: BlockingReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockingReason {
    /// Last eligibility failure seen for the course.
    Ineligible(Ineligibility),
    /// Never became ready: these requirements were still unplaced.
    AwaitingDependencies(Vec<CourseKey>),
    /// Ready, but no quarter was left to try it in.
    NoRemainingQuarter,
}

impl fmt::Display for UnplacedCourse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            BlockingReason::Ineligible(reason) => write!(f, "{}: {}", self.course, reason),
            BlockingReason::AwaitingDependencies(deps) => {
                write!(f, "{}: waiting on {}", self.course, join_keys(deps))
            }
            BlockingReason::NoRemainingQuarter => {
                write!(f, "{}: no quarter left to place it in", self.course)
            }
        }
    }
}

fn join_keys(keys: &[CourseKey]) -> String {
    keys.iter()
        .map(|k| k.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_display_lists_members() {
        let e = GraphError::Cycle(vec![CourseKey::new("A", "1"), CourseKey::new("B", "1")]);
        assert_eq!(
            e.to_string(),
            "Requirements depend on each other in a cycle: A 1, B 1"
        );
    }

    #[test]
    fn threshold_display_names_kind() {
        let e = GraphError::ThresholdExceedsCandidates {
            course: CourseKey::new("X", "1"),
            kind: RequirementKind::Corequisite,
            required: 2,
            candidates: 1,
        };
        assert!(e.to_string().starts_with("corequisite constraint of X 1"));
    }

    #[test]
    fn infeasible_display_counts_unplaced() {
        let e = PlanningError::SchedulingInfeasible {
            cause: InfeasibleCause::Stuck { quarter: 1 },
            unplaced: vec![UnplacedCourse {
                course: CourseKey::new("A", "1"),
                reason: BlockingReason::NoRemainingQuarter,
            }],
        };
        assert_eq!(
            e.to_string(),
            "Scheduling infeasible (no progress possible from quarter 2): 1 course(s) could not be placed"
        );
        assert_eq!(e.unplaced().len(), 1);
    }

    #[test]
    fn graph_error_converts() {
        let e: PlanningError = GraphError::DuplicateRequirement(CourseKey::new("A", "1")).into();
        assert!(matches!(e, PlanningError::InvalidRequirementGraph(_)));
        assert!(e.unplaced().is_empty());
    }

    #[test]
    fn unplaced_display() {
        let u = UnplacedCourse {
            course: CourseKey::new("B", "1"),
            reason: BlockingReason::AwaitingDependencies(vec![CourseKey::new("A", "1")]),
        };
        assert_eq!(u.to_string(), "B 1: waiting on A 1");
    }
}
