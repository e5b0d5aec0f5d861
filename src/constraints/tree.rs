//! Tree analysis operations: depth, node counts, traversal, and validation.

use super::error::ConstraintError;
use super::ThresholdConstraint;
use crate::course::CourseKey;

impl ThresholdConstraint {
    /// Returns the depth of this constraint tree.
    ///
    /// - A node without nested constraints has depth 1
    /// - Otherwise depth = 1 + max(nested depths)
    pub fn depth(&self) -> usize {
        1 + self.nested().iter().map(|c| c.depth()).max().unwrap_or(0)
    }

    /// Returns the total number of constraint nodes in this tree.
    pub fn node_count(&self) -> usize {
        1 + self.nested().iter().map(|c| c.node_count()).sum::<usize>()
    }

    /// Returns the number of leaf courses anywhere in this tree.
    pub fn leaf_count(&self) -> usize {
        self.courses().len() + self.nested().iter().map(|c| c.leaf_count()).sum::<usize>()
    }

    /// Visits all constraint nodes in pre-order (depth-first).
    pub fn visit_preorder<F>(&self, visitor: &mut F)
    where
        F: FnMut(&ThresholdConstraint),
    {
        visitor(self);
        for nested in self.nested() {
            nested.visit_preorder(visitor);
        }
    }

    /// Visits every leaf course in the tree, own leaves before nested ones.
    pub fn visit_leaves<F>(&self, visitor: &mut F)
    where
        F: FnMut(&CourseKey),
    {
        for course in self.courses() {
            visitor(course);
        }
        for nested in self.nested() {
            nested.visit_leaves(visitor);
        }
    }

    /// Checks `num_required <= candidate_count` on every node.
    ///
    /// The absent requirement is valid regardless of its candidates.
    pub fn validate(&self) -> Result<(), ConstraintError> {
        if self.is_none() {
            return Ok(());
        }
        if self.num_required() > self.candidate_count() {
            return Err(ConstraintError::ThresholdExceedsCandidates {
                required: self.num_required(),
                candidates: self.candidate_count(),
            });
        }
        self.nested().iter().try_for_each(|c| c.validate())
    }

    /// Human-readable form, e.g. `2 of [CMPE 16, CMPE 17, 1 of [MATH 19A]]`.
    pub fn stringify(&self) -> String {
        if self.is_none() {
            return "none".to_string();
        }
        let candidates = self
            .courses()
            .iter()
            .map(|k| k.to_string())
            .chain(self.nested().iter().map(|c| c.stringify()))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} of [{}]", self.num_required(), candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn physics_tree() -> ThresholdConstraint {
        ThresholdConstraint::new(2)
            .with_nested(ThresholdConstraint::all_of([("PHYS", "5A"), ("PHYS", "5B")]))
            .with_nested(ThresholdConstraint::any_of([("PHYS", "5L"), ("PHYS", "5M")]))
    }

    #[test]
    fn test_flat_node() {
        let c = ThresholdConstraint::all_of([("CMPE", "16")]);
        assert_eq!(c.depth(), 1);
        assert_eq!(c.node_count(), 1);
        assert_eq!(c.leaf_count(), 1);
    }

    #[test]
    fn test_nested_counts() {
        let tree = physics_tree();
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.node_count(), 3);
        assert_eq!(tree.leaf_count(), 4);
    }

    #[test]
    fn test_visit_leaves_order() {
        let tree = physics_tree().with_course(("AMS", "10"));
        let mut seen = Vec::new();
        tree.visit_leaves(&mut |k| seen.push(k.to_string()));
        assert_eq!(seen, ["AMS 10", "PHYS 5A", "PHYS 5B", "PHYS 5L", "PHYS 5M"]);
    }

    #[test]
    fn test_visit_preorder() {
        let mut required = Vec::new();
        physics_tree().visit_preorder(&mut |c| required.push(c.num_required()));
        assert_eq!(required, [2, 2, 1]);
    }

    #[test]
    fn test_validate_reports_nested_overflow() {
        let bad = ThresholdConstraint::new(1)
            .with_nested(ThresholdConstraint::new(3).with_courses([("A", "1"), ("B", "1")]));
        assert_eq!(
            bad.validate(),
            Err(ConstraintError::ThresholdExceedsCandidates {
                required: 3,
                candidates: 2
            })
        );
        assert!(physics_tree().validate().is_ok());
    }

    #[test]
    fn test_none_validates_even_with_candidates() {
        let c = ThresholdConstraint::new(0).with_course(("A", "1"));
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_stringify() {
        assert_eq!(ThresholdConstraint::none().stringify(), "none");
        assert_eq!(
            physics_tree().stringify(),
            "2 of [2 of [PHYS 5A, PHYS 5B], 1 of [PHYS 5L, PHYS 5M]]"
        );
    }
}
