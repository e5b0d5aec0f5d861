use crate::course::{Course, CourseKey, Season};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One scheduling term: a season tag and the courses assigned to it, in
/// placement order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quarter {
    season: Season,
    courses: Vec<Course>,
}

impl Quarter {
    /// Creates an empty quarter.
    pub fn new(season: Season) -> Self {
        Self {
            season,
            courses: Vec::new(),
        }
    }

    pub fn with_courses(season: Season, courses: Vec<Course>) -> Self {
        Self { season, courses }
    }

    pub fn season(&self) -> Season {
        self.season
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Sum of the units of every course in this quarter.
    pub fn total_units(&self) -> u32 {
        self.courses
            .iter()
            .fold(0u32, |total, c| total.saturating_add(c.units()))
    }

    pub fn contains(&self, key: &CourseKey) -> bool {
        self.courses.iter().any(|c| c.key() == key)
    }

    pub(crate) fn push(&mut self, course: Course) {
        self.courses.push(course);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_units_sums_members() {
        let q = Quarter::with_courses(
            Season::Fall,
            vec![
                Course::new("AMS", "10").with_units(5),
                Course::new("PHYS", "5A").with_units(5),
                Course::new("PHYS", "5L").with_units(1),
            ],
        );
        assert_eq!(q.total_units(), 11);
        assert_eq!(q.len(), 3);
    }

    #[test]
    fn empty_quarter() {
        let q = Quarter::new(Season::Spring);
        assert!(q.is_empty());
        assert_eq!(q.total_units(), 0);
        assert_eq!(q.season(), Season::Spring);
    }

    #[test]
    fn total_units_saturates() {
        let q = Quarter::with_courses(
            Season::Fall,
            vec![
                Course::new("X", "1").with_units(u32::MAX),
                Course::new("X", "2").with_units(5),
            ],
        );
        assert_eq!(q.total_units(), u32::MAX);
    }

    #[test]
    fn contains_matches_by_key() {
        let q = Quarter::with_courses(
            Season::Winter,
            vec![Course::new("CMPE", "16").with_title("Discrete Math")],
        );
        assert!(q.contains(&CourseKey::new("CMPE", "16")));
        assert!(!q.contains(&CourseKey::new("CMPE", "1")));
    }
}
