//! Test suite for the CoursePlan module.

use super::*;

fn course(subject: &str, number: &str, units: u32) -> Course {
    Course::new(subject, number).with_units(units)
}

fn key(subject: &str, number: &str) -> CourseKey {
    CourseKey::new(subject, number)
}

fn three_quarters() -> CoursePlan {
    CoursePlan::from_seasons(Season::ACADEMIC_YEAR, [key("MATH", "21")], 19)
}

#[cfg(test)]
mod basic_operations {
    use super::*;

    #[test]
    fn test_new_plan_is_empty() {
        let plan = three_quarters();
        assert_eq!(plan.num_quarters(), 3);
        assert_eq!(plan.course_count(), 0);
        assert_eq!(plan.total_units(), 0);
        assert_eq!(plan.max_units(), 19);
    }

    #[test]
    fn test_seasons_follow_input_order() {
        let plan = three_quarters();
        let seasons: Vec<_> = plan.quarters().iter().map(Quarter::season).collect();
        assert_eq!(seasons, Season::ACADEMIC_YEAR);
    }

    #[test]
    fn test_completed_is_not_placed() {
        let plan = three_quarters();
        assert!(plan.is_completed(&key("MATH", "21")));
        assert!(!plan.contains(&key("MATH", "21")));
    }

    #[test]
    fn test_push_quarter() {
        let mut plan = three_quarters();
        let index = plan.push_quarter(Season::Summer);
        assert_eq!(index, 3);
        assert_eq!(plan.quarter(3).map(Quarter::season), Some(Season::Summer));
    }
}

#[cfg(test)]
mod placement {
    use super::*;

    #[test]
    fn test_place_and_locate() {
        let mut plan = three_quarters();
        plan.place(1, course("CMPE", "16", 5)).unwrap();
        plan.place(1, course("AMS", "10", 5)).unwrap();

        assert_eq!(plan.quarter_of(&key("CMPE", "16")), Some(1));
        assert_eq!(plan.quarter(1).unwrap().total_units(), 10);
        assert_eq!(plan.course_count(), 2);
    }

    #[test]
    fn test_place_duplicate_fails() {
        let mut plan = three_quarters();
        plan.place(0, course("CMPE", "16", 5)).unwrap();
        let result = plan.place(2, course("CMPE", "16", 5));
        assert_eq!(result, Err(PlanError::DuplicateCourse(key("CMPE", "16"))));
        assert_eq!(plan.course_count(), 1);
    }

    #[test]
    fn test_place_out_of_range_fails() {
        let mut plan = three_quarters();
        let result = plan.place(3, course("CMPE", "16", 5));
        assert_eq!(result, Err(PlanError::QuarterOutOfRange { index: 3, len: 3 }));
    }

    #[test]
    fn test_contains_before_is_exclusive() {
        let mut plan = three_quarters();
        plan.place(1, course("CMPE", "16", 5)).unwrap();

        assert!(!plan.contains_before(&key("CMPE", "16"), 1));
        assert!(plan.contains_before(&key("CMPE", "16"), 2));
        assert!(plan.contains_before(&key("CMPE", "16"), 10));
    }

    #[test]
    fn test_identity_is_by_key_not_value() {
        let mut plan = three_quarters();
        plan.place(0, course("CMPE", "16", 5).with_title("one")).unwrap();
        let other = course("CMPE", "16", 3).with_title("two");
        assert!(plan.contains(other.key()));
    }
}

#[cfg(test)]
mod rendering {
    use super::*;

    #[test]
    fn test_display_lists_quarters_and_courses() {
        let mut plan = CoursePlan::from_seasons([Season::Fall, Season::Winter], Vec::new(), 19);
        plan.place(0, course("AMS", "10", 5)).unwrap();
        plan.place(0, course("PHYS", "5L", 1)).unwrap();

        let rendered = plan.to_string();
        assert_eq!(
            rendered,
            "Plan:\n Qtr 1 (fall), 6 unit(s)\n -AMS 10\n -PHYS 5L\n Qtr 2 (winter), 0 unit(s)\n"
        );
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_support {
    use super::*;

    #[test]
    fn test_plan_roundtrip() {
        let mut plan = three_quarters();
        plan.place(0, course("CMPE", "16", 5).offered_in([Season::Fall]))
            .unwrap();

        let json = serde_json::to_string(&plan).unwrap();
        let back: CoursePlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
    }
}
