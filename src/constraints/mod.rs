pub mod error;
pub mod evaluate;
mod threshold;
pub mod tree;

pub use error::ConstraintError;
pub use evaluate::{
    course_in_plan, satisfied, satisfied_at, COREQUISITE_LOOK_BACK, PREREQUISITE_LOOK_BACK,
};
pub use threshold::ThresholdConstraint;
