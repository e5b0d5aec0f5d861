//! Evaluation of threshold constraints against a partial plan.
//!
//! A dependency is visible when it is in the plan's completed set, or placed
//! in one of the quarters the look-back window leaves in view:
//!
//! ```text
//!   quarters:   [ q0 | q1 | q2 | q3 ]      evaluating for q2
//!   look_back 1 (prerequisite):  q0 q1     "done by the end of last quarter"
//!   look_back 0 (corequisite):   q0 q1 q2  "done by the end of this quarter"
//! ```
//!
//! The corequisite case only works if the planner places a corequisite
//! before it evaluates the course that needs it in the same quarter.

use super::ThresholdConstraint;
use crate::course::CourseKey;
use crate::plan::CoursePlan;

/// Look-back used for prerequisites: satisfied by the end of the previous quarter.
pub const PREREQUISITE_LOOK_BACK: usize = 1;

/// Look-back used for corequisites: satisfied by the end of the current quarter.
pub const COREQUISITE_LOOK_BACK: usize = 0;

/// Returns true if `course` is placed in quarters `[0, len - look_back)`.
///
/// With `look_back = 0` the final quarter is searched; with `look_back = 1` it
/// is not. Completed courses are not consulted here.
pub fn course_in_plan(course: &CourseKey, plan: &CoursePlan, look_back: usize) -> bool {
    plan.contains_before(course, plan.num_quarters().saturating_sub(look_back))
}

/// Returns true if `constraint` holds at the end of the plan.
///
/// Quarters `[0, len - look_back)` are searched, plus the completed set.
pub fn satisfied(plan: &CoursePlan, constraint: &ThresholdConstraint, look_back: usize) -> bool {
    satisfied_within(
        plan,
        constraint,
        plan.num_quarters().saturating_sub(look_back),
    )
}

/// Returns true if `constraint` holds when evaluated for `quarter_index`.
///
/// Quarters `[0, quarter_index + 1 - look_back)` are searched, so quarters
/// after `quarter_index` are never consulted. For the last quarter of the plan
/// this is identical to [`satisfied`].
pub fn satisfied_at(
    plan: &CoursePlan,
    constraint: &ThresholdConstraint,
    quarter_index: usize,
    look_back: usize,
) -> bool {
    let end = (quarter_index + 1).min(plan.num_quarters());
    satisfied_within(plan, constraint, end.saturating_sub(look_back))
}

/// Counts leaves first, then nested constraints, stopping as soon as the
/// threshold is met.
fn satisfied_within(plan: &CoursePlan, constraint: &ThresholdConstraint, end: usize) -> bool {
    let required = constraint.num_required();
    if required == 0 {
        return true;
    }

    let mut count = 0;
    for course in constraint.courses() {
        if plan.is_completed(course) || plan.contains_before(course, end) {
            count += 1;
            if count >= required {
                return true;
            }
        }
    }

    for nested in constraint.nested() {
        if satisfied_within(plan, nested, end) {
            count += 1;
            if count >= required {
                return true;
            }
        }
    }

    false
}
