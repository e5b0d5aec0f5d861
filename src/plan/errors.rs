use crate::course::CourseKey;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// Course is already placed in some quarter
    #[error("Course {0} is already placed in the plan")]
    DuplicateCourse(CourseKey),

    /// Quarter index beyond the end of the plan
    #[error("Quarter index {index} is out of range for a plan of {len} quarter(s)")]
    QuarterOutOfRange { index: usize, len: usize },
}
