use crate::course::{Course, CourseKey, Season};
use std::collections::BTreeSet;
use std::fmt;

pub mod errors;
mod quarter;

pub use errors::PlanError;
pub use quarter::Quarter;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// A chronological sequence of quarters, the courses completed before the
/// first of them, and a per-quarter unit cap.
///
/// # Invariants
///
/// - Quarter order is the only notion of time: "before", "current" and
///   "after" are indices into [`quarters`](Self::quarters)
/// - A course key appears at most once across all quarters;
///   [`place`](Self::place) enforces this
///
/// # Examples
///
/// ```
/// use courseplan::course::{Course, CourseKey, Season};
/// use courseplan::plan::CoursePlan;
///
/// let mut plan = CoursePlan::from_seasons(
///     [Season::Fall, Season::Winter],
///     [CourseKey::new("MATH", "21")],
///     19,
/// );
///
/// plan.place(0, Course::new("CMPE", "16").with_units(5)).unwrap();
/// assert!(plan.place(1, Course::new("CMPE", "16")).is_err());
///
/// assert_eq!(plan.quarter_of(&CourseKey::new("CMPE", "16")), Some(0));
/// assert!(plan.is_completed(&CourseKey::new("MATH", "21")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoursePlan {
    quarters: Vec<Quarter>,
    completed: BTreeSet<CourseKey>,
    max_units: u32,
}

impl CoursePlan {
    pub fn new(
        quarters: Vec<Quarter>,
        completed: impl IntoIterator<Item = CourseKey>,
        max_units: u32,
    ) -> Self {
        Self {
            quarters,
            completed: completed.into_iter().collect(),
            max_units,
        }
    }

    /// Creates a plan of empty quarters, one per season given.
    pub fn from_seasons(
        seasons: impl IntoIterator<Item = Season>,
        completed: impl IntoIterator<Item = CourseKey>,
        max_units: u32,
    ) -> Self {
        Self::new(
            seasons.into_iter().map(Quarter::new).collect(),
            completed,
            max_units,
        )
    }

    pub fn quarters(&self) -> &[Quarter] {
        &self.quarters
    }

    pub fn quarter(&self, index: usize) -> Option<&Quarter> {
        self.quarters.get(index)
    }

    pub fn num_quarters(&self) -> usize {
        self.quarters.len()
    }

    pub fn max_units(&self) -> u32 {
        self.max_units
    }

    pub fn completed(&self) -> impl Iterator<Item = &CourseKey> {
        self.completed.iter()
    }

    pub fn is_completed(&self, key: &CourseKey) -> bool {
        self.completed.contains(key)
    }

    /// Returns true if `key` is placed in any quarter.
    pub fn contains(&self, key: &CourseKey) -> bool {
        self.quarter_of(key).is_some()
    }

    /// Returns true if `key` is placed in one of the quarters `[0, end)`.
    pub fn contains_before(&self, key: &CourseKey, end: usize) -> bool {
        self.quarters.iter().take(end).any(|q| q.contains(key))
    }

    /// Index of the quarter holding `key`, if placed.
    pub fn quarter_of(&self, key: &CourseKey) -> Option<usize> {
        self.quarters.iter().position(|q| q.contains(key))
    }

    /// Number of courses placed across all quarters.
    pub fn course_count(&self) -> usize {
        self.quarters.iter().map(Quarter::len).sum()
    }

    pub fn total_units(&self) -> u32 {
        self.quarters
            .iter()
            .fold(0u32, |total, q| total.saturating_add(q.total_units()))
    }

    /// Places `course` into quarter `index`.
    ///
    /// Does not check offerings, requirements or the unit cap; that is the
    /// eligibility checker's job.
    ///
    /// # Errors
    ///
    /// - `QuarterOutOfRange` if there is no quarter `index`
    /// - `DuplicateCourse` if the course is already placed anywhere
    pub fn place(&mut self, index: usize, course: Course) -> Result<(), PlanError> {
        let len = self.quarters.len();
        if index >= len {
            return Err(PlanError::QuarterOutOfRange { index, len });
        }
        if self.contains(course.key()) {
            return Err(PlanError::DuplicateCourse(course.key().clone()));
        }
        self.quarters[index].push(course);
        Ok(())
    }

    /// Appends an empty quarter and returns its index.
    pub fn push_quarter(&mut self, season: Season) -> usize {
        self.quarters.push(Quarter::new(season));
        self.quarters.len() - 1
    }
}

impl fmt::Display for CoursePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Plan:")?;
        for (i, quarter) in self.quarters.iter().enumerate() {
            writeln!(
                f,
                " Qtr {} ({}), {} unit(s)",
                i + 1,
                quarter.season(),
                quarter.total_units()
            )?;
            for course in quarter.courses() {
                writeln!(f, " -{}", course.key())?;
            }
        }
        Ok(())
    }
}
