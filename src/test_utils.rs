//! Shared fixtures for unit tests.

use crate::constraints::ThresholdConstraint;
use crate::course::{Course, SeasonSet};
use tracing_subscriber::EnvFilter;

/// Routes planner logs to the test harness; `RUST_LOG` picks the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Five-unit course offered every academic-year season, requiring all of `pre`.
pub fn course_with_pre(subject: &str, number: &str, pre: &[(&str, &str)]) -> Course {
    Course::new(subject, number)
        .with_units(5)
        .with_seasons(SeasonSet::academic_year())
        .with_pre_reqs(ThresholdConstraint::all_of(pre.iter().copied()))
}

/// Linear chain `names[0] → names[1] → …`, each course numbered "1" and
/// requiring the previous one.
pub fn chain(names: &[&str], units: u32) -> Vec<Course> {
    let mut courses: Vec<Course> = Vec::with_capacity(names.len());
    for (i, name) in names.iter().enumerate() {
        let pre = if i == 0 {
            ThresholdConstraint::none()
        } else {
            ThresholdConstraint::all_of([(names[i - 1], "1")])
        };
        courses.push(
            Course::new(*name, "1")
                .with_units(units)
                .with_seasons(SeasonSet::academic_year())
                .with_pre_reqs(pre),
        );
    }
    courses
}
