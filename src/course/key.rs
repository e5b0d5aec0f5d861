use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Composite identity of a course: `(subject, number)`.
///
/// Two courses are the same course iff their keys are equal. Subject and
/// number are kept as separate fields so that `("A", "B1")` and `("AB", "1")`
/// never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CourseKey {
    subject: String,
    number: String,
}

impl CourseKey {
    pub fn new(subject: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            number: number.into(),
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn number(&self) -> &str {
        &self.number
    }
}

impl fmt::Display for CourseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.subject, self.number)
    }
}

impl<S: Into<String>, N: Into<String>> From<(S, N)> for CourseKey {
    fn from((subject, number): (S, N)) -> Self {
        Self::new(subject, number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn split_fields_do_not_collide() {
        let a = CourseKey::new("A", "B1");
        let b = CourseKey::new("AB", "1");
        assert_ne!(a, b);

        let set: HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn display_separates_subject_and_number() {
        assert_eq!(CourseKey::new("PHYS", "5A").to_string(), "PHYS 5A");
    }

    #[test]
    fn ordering_is_subject_then_number() {
        let mut keys = vec![
            CourseKey::new("MATH", "24"),
            CourseKey::new("CMPE", "17"),
            CourseKey::new("CMPE", "16"),
        ];
        keys.sort();
        assert_eq!(keys[0], CourseKey::new("CMPE", "16"));
        assert_eq!(keys[2], CourseKey::new("MATH", "24"));
    }
}
