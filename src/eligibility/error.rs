use crate::course::{CourseKey, Season};
use thiserror::Error;

/// Why a course cannot be placed into a quarter right now.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Ineligibility {
    #[error("{0} is already placed in the plan")]
    DuplicatePlacement(CourseKey),

    #[error("{course} is not offered in {season}")]
    OfferingMismatch { course: CourseKey, season: Season },

    #[error("Prerequisites of {0} are not met")]
    PrerequisiteUnmet(CourseKey),

    #[error("Corequisites of {0} are not met")]
    CorequisiteUnmet(CourseKey),

    #[error("{concurrent} must share a quarter with {course} but is already in quarter {placed_in}")]
    ConcurrentConflict {
        course: CourseKey,
        concurrent: CourseKey,
        placed_in: usize,
    },

    #[error("{concurrent} cannot be taken alongside {course}: {reason}")]
    ConcurrentIneligible {
        course: CourseKey,
        concurrent: CourseKey,
        reason: Box<Ineligibility>,
    },

    #[error("Placing {course} would load the quarter with {load} units (cap {max_units})")]
    UnitCapExceeded {
        course: CourseKey,
        load: u32,
        max_units: u32,
    },

    #[error("Quarter {index} does not exist in a plan of {len} quarter(s)")]
    NoSuchQuarter { index: usize, len: usize },
}
