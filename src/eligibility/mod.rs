//! Per-course eligibility check against a partial plan.
//!
//! [`evaluate`] decides whether one course may go into one quarter. Checks
//! run in a fixed order and stop at the first failure:
//!
//! 1. not already placed anywhere in the plan
//! 2. offered in the quarter's season
//! 3. prerequisites satisfied by the end of the previous quarter
//! 4. corequisites satisfied by the end of this quarter
//! 5. concurrent course, if already placed, sits in this same quarter
//! 6. quarter load, concurrent course included, within the unit cap
//!
//! Every failure is local: the planner retries the course in a later quarter.

mod error;

pub use error::Ineligibility;

use crate::constraints::{satisfied_at, COREQUISITE_LOOK_BACK, PREREQUISITE_LOOK_BACK};
use crate::course::{Course, CourseKey};
use crate::plan::CoursePlan;
use tracing::trace;

/// Successful eligibility check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Eligible {
    /// Course that must also be placed into the same quarter. The checker only
    /// flags it; inserting it is the caller's job.
    pub implied_concurrent: Option<CourseKey>,
}

pub type EligibilityResult = Result<Eligible, Ineligibility>;

/// Evaluates whether `course` may be placed into quarter `quarter_index`.
///
/// Pure with respect to `plan`: the same inputs always give the same answer.
pub fn evaluate(course: &Course, plan: &CoursePlan, quarter_index: usize) -> EligibilityResult {
    let key = course.key();
    let result = check(course, plan, quarter_index);
    match &result {
        Ok(eligible) => trace!(
            course = %key,
            quarter = quarter_index,
            concurrent = ?eligible.implied_concurrent,
            "eligible"
        ),
        Err(reason) => trace!(course = %key, quarter = quarter_index, %reason, "ineligible"),
    }
    result
}

fn check(course: &Course, plan: &CoursePlan, quarter_index: usize) -> EligibilityResult {
    let key = course.key();
    let quarter = plan
        .quarter(quarter_index)
        .ok_or(Ineligibility::NoSuchQuarter {
            index: quarter_index,
            len: plan.num_quarters(),
        })?;

    if plan.contains(key) {
        return Err(Ineligibility::DuplicatePlacement(key.clone()));
    }

    if !course.is_offered(quarter.season()) {
        return Err(Ineligibility::OfferingMismatch {
            course: key.clone(),
            season: quarter.season(),
        });
    }

    if !satisfied_at(plan, course.pre_reqs(), quarter_index, PREREQUISITE_LOOK_BACK) {
        return Err(Ineligibility::PrerequisiteUnmet(key.clone()));
    }

    if !satisfied_at(plan, course.co_reqs(), quarter_index, COREQUISITE_LOOK_BACK) {
        return Err(Ineligibility::CorequisiteUnmet(key.clone()));
    }

    let mut load = quarter.total_units().saturating_add(course.units());
    let mut implied_concurrent = None;
    if let Some(concurrent) = course.concurrent() {
        match plan.quarter_of(concurrent.key()) {
            Some(placed_in) if placed_in != quarter_index => {
                return Err(Ineligibility::ConcurrentConflict {
                    course: key.clone(),
                    concurrent: concurrent.key().clone(),
                    placed_in,
                });
            }
            // Already in this quarter: its units are part of the quarter total.
            Some(_) => {}
            None => {
                load = load.saturating_add(concurrent.units());
                implied_concurrent = Some(concurrent.key().clone());
            }
        }
    }

    if load > plan.max_units() {
        return Err(Ineligibility::UnitCapExceeded {
            course: key.clone(),
            load,
            max_units: plan.max_units(),
        });
    }

    Ok(Eligible { implied_concurrent })
}
