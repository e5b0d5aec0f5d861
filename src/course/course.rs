use super::key::CourseKey;
use super::season::{Season, SeasonSet};
use crate::constraints::ThresholdConstraint;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A course that can be placed into a quarter.
///
/// # Invariants
///
/// - Identity is [`CourseKey`]; title, units and requirements never take part
///   in equality checks made by the planner
/// - `pre_reqs` and `co_reqs` default to the empty constraint (always satisfied)
/// - Only the first entry of `concurrent_reqs` is meaningful: it is the course
///   that must be taken in the same quarter, at its own unit cost
/// - Dependency-graph bookkeeping is not stored here; see
///   [`RequirementGraph`](crate::algorithms::greedy::RequirementGraph)
///
/// # Example
///
/// ```
/// use courseplan::constraints::ThresholdConstraint;
/// use courseplan::course::{Course, Season};
///
/// let lab = Course::new("PHYS", "5N").with_units(1);
/// let phys5c = Course::new("PHYS", "5C")
///     .with_title("Electricity and Magnetism")
///     .with_units(5)
///     .with_pre_reqs(ThresholdConstraint::all_of([("PHYS", "5B")]))
///     .with_concurrent(lab)
///     .offered_in([Season::Winter, Season::Spring]);
///
/// assert!(phys5c.has_requirements());
/// assert_eq!(phys5c.concurrent().map(|c| c.units()), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Course {
    key: CourseKey,
    title: String,
    units: u32,
    pre_reqs: ThresholdConstraint,
    co_reqs: ThresholdConstraint,
    concurrent_reqs: Vec<Course>,
    seasons_offered: SeasonSet,
}

impl Course {
    /// Creates a course with no title, zero units, no requirements, offered never.
    pub fn new(subject: impl Into<String>, number: impl Into<String>) -> Self {
        Self::from_key(CourseKey::new(subject, number))
    }

    pub fn from_key(key: CourseKey) -> Self {
        Self {
            key,
            title: String::new(),
            units: 0,
            pre_reqs: ThresholdConstraint::none(),
            co_reqs: ThresholdConstraint::none(),
            concurrent_reqs: Vec::new(),
            seasons_offered: SeasonSet::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_units(mut self, units: u32) -> Self {
        self.units = units;
        self
    }

    pub fn with_pre_reqs(mut self, pre_reqs: ThresholdConstraint) -> Self {
        self.pre_reqs = pre_reqs;
        self
    }

    pub fn with_co_reqs(mut self, co_reqs: ThresholdConstraint) -> Self {
        self.co_reqs = co_reqs;
        self
    }

    /// Appends a course that must be taken in the same quarter.
    pub fn with_concurrent(mut self, course: Course) -> Self {
        self.concurrent_reqs.push(course);
        self
    }

    pub fn offered_in(mut self, seasons: impl IntoIterator<Item = Season>) -> Self {
        for season in seasons {
            self.seasons_offered.insert(season);
        }
        self
    }

    pub fn with_seasons(mut self, seasons: SeasonSet) -> Self {
        self.seasons_offered = seasons;
        self
    }

    pub fn key(&self) -> &CourseKey {
        &self.key
    }

    pub fn subject(&self) -> &str {
        self.key.subject()
    }

    pub fn number(&self) -> &str {
        self.key.number()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn units(&self) -> u32 {
        self.units
    }

    pub fn pre_reqs(&self) -> &ThresholdConstraint {
        &self.pre_reqs
    }

    pub fn co_reqs(&self) -> &ThresholdConstraint {
        &self.co_reqs
    }

    pub fn concurrent_reqs(&self) -> &[Course] {
        &self.concurrent_reqs
    }

    /// The course that must share this course's quarter, if any.
    pub fn concurrent(&self) -> Option<&Course> {
        self.concurrent_reqs.first()
    }

    pub fn seasons_offered(&self) -> &SeasonSet {
        &self.seasons_offered
    }

    pub fn is_offered(&self, season: Season) -> bool {
        self.seasons_offered.is_offered(season)
    }

    /// Units this course occupies in a quarter, concurrent course included.
    pub fn load(&self) -> u32 {
        self.units
            .saturating_add(self.concurrent().map_or(0, Course::units))
    }

    /// Returns whether either requirement tree has anything to satisfy.
    pub fn has_requirements(&self) -> bool {
        !self.pre_reqs.is_none() || !self.co_reqs.is_none()
    }

    /// Direct leaf dependencies: prerequisite leaves, then corequisite leaves.
    ///
    /// Nested sub-constraints are not descended into.
    pub fn direct_dependencies(&self) -> impl Iterator<Item = &CourseKey> {
        self.pre_reqs.courses().iter().chain(self.co_reqs.courses())
    }
}

impl From<&Course> for CourseKey {
    fn from(course: &Course) -> Self {
        course.key.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_course_has_independent_empty_defaults() {
        let mut a = Course::new("CMPE", "16");
        let b = Course::new("CMPE", "17");

        a = a.offered_in([Season::Fall]).with_concurrent(Course::new("CMPE", "16L"));

        assert!(a.is_offered(Season::Fall));
        assert!(!b.is_offered(Season::Fall));
        assert!(b.concurrent_reqs().is_empty());
        assert!(!b.has_requirements());
    }

    #[test]
    fn load_includes_concurrent_units() {
        let course = Course::new("PHYS", "5C")
            .with_units(5)
            .with_concurrent(Course::new("PHYS", "5N").with_units(1));
        assert_eq!(course.load(), 6);
    }

    #[test]
    fn direct_dependencies_skip_nested_trees() {
        let course = Course::new("CMPE", "20")
            .with_pre_reqs(
                ThresholdConstraint::new(2)
                    .with_courses([("CMPE", "16")])
                    .with_nested(ThresholdConstraint::all_of([("MATH", "19")])),
            )
            .with_co_reqs(ThresholdConstraint::all_of([("CMPE", "20L")]));

        let deps: Vec<_> = course.direct_dependencies().cloned().collect();
        assert_eq!(
            deps,
            vec![CourseKey::new("CMPE", "16"), CourseKey::new("CMPE", "20L")]
        );
    }
}
