//! Boolean-threshold requirement trees.
use crate::course::CourseKey;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// "At least `num_required` of the following are satisfied."
///
/// The candidate set is the union of leaf courses and nested sub-constraints.
/// A leaf counts when the course is completed or already placed early enough
/// in the plan; a nested constraint counts when it is itself satisfied.
///
/// # Invariants
///
/// - `num_required == 0` is the canonical "no requirement" node and is always
///   satisfied, whatever its candidates
/// - `num_required` should not exceed [`candidate_count`](Self::candidate_count);
///   construction does not enforce this, [`validate`](Self::validate) reports it
/// - Every instance owns its containers; no two constraints share storage
///
/// # Example
///
/// ```
/// use courseplan::constraints::ThresholdConstraint;
///
/// // Two of: PHYS 5A or 5B, and one of the labs.
/// let lectures = ThresholdConstraint::any_of([("PHYS", "5A"), ("PHYS", "5B")]);
/// let labs = ThresholdConstraint::any_of([("PHYS", "5L"), ("PHYS", "5M")]);
/// let tree = ThresholdConstraint::new(2).with_nested(lectures).with_nested(labs);
///
/// assert_eq!(tree.candidate_count(), 2);
/// assert!(tree.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ThresholdConstraint {
    num_required: usize,
    courses: Vec<CourseKey>,
    nested: Vec<ThresholdConstraint>,
}

impl ThresholdConstraint {
    /// Creates an empty constraint requiring `num_required` candidates.
    pub fn new(num_required: usize) -> Self {
        Self {
            num_required,
            courses: Vec::new(),
            nested: Vec::new(),
        }
    }

    /// The absent requirement (`num_required == 0`).
    pub fn none() -> Self {
        Self::new(0)
    }

    /// Every listed course is required.
    pub fn all_of<K: Into<CourseKey>>(courses: impl IntoIterator<Item = K>) -> Self {
        let courses: Vec<CourseKey> = courses.into_iter().map(Into::into).collect();
        Self {
            num_required: courses.len(),
            courses,
            nested: Vec::new(),
        }
    }

    /// Any one listed course suffices. An empty list yields [`none`](Self::none).
    pub fn any_of<K: Into<CourseKey>>(courses: impl IntoIterator<Item = K>) -> Self {
        let courses: Vec<CourseKey> = courses.into_iter().map(Into::into).collect();
        Self {
            num_required: usize::from(!courses.is_empty()),
            courses,
            nested: Vec::new(),
        }
    }

    /// Appends leaf courses to the candidate set.
    pub fn with_courses<K: Into<CourseKey>>(mut self, courses: impl IntoIterator<Item = K>) -> Self {
        self.courses.extend(courses.into_iter().map(Into::into));
        self
    }

    pub fn with_course(mut self, course: impl Into<CourseKey>) -> Self {
        self.courses.push(course.into());
        self
    }

    /// Appends a nested sub-constraint to the candidate set.
    pub fn with_nested(mut self, nested: ThresholdConstraint) -> Self {
        self.nested.push(nested);
        self
    }

    pub fn num_required(&self) -> usize {
        self.num_required
    }

    pub fn courses(&self) -> &[CourseKey] {
        &self.courses
    }

    pub fn nested(&self) -> &[ThresholdConstraint] {
        &self.nested
    }

    /// Returns whether this is the absent requirement.
    pub fn is_none(&self) -> bool {
        self.num_required == 0
    }

    /// Number of direct candidates: leaf courses plus nested constraints.
    pub fn candidate_count(&self) -> usize {
        self.courses.len() + self.nested.len()
    }
}
