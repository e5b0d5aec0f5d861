//! Demonstration of the eligibility checker and the greedy quarter planner.
//!
//! Run with `RUST_LOG=courseplan=debug` to see the planner's decisions.

use courseplan::algorithms::{GreedyPlanner, PlanningAlgorithm};
use courseplan::config::PlannerConfig;
use courseplan::constraints::ThresholdConstraint;
use courseplan::course::{Course, CourseKey, Season, SeasonSet};
use courseplan::eligibility;
use courseplan::plan::{CoursePlan, Quarter};
use tracing_subscriber::EnvFilter;

fn lecture(subject: &str, number: &str, title: &str, units: u32) -> Course {
    Course::new(subject, number)
        .with_title(title)
        .with_units(units)
        .with_seasons(SeasonSet::academic_year())
}

fn first_year_plan() -> CoursePlan {
    let fall = Quarter::with_courses(
        Season::Fall,
        vec![
            lecture("AMS", "10", "Engineering Mathematical Methods I", 5),
            lecture("PHYS", "5A", "Introduction to Physics I", 5),
            lecture("PHYS", "5L", "Introduction to Physics I Laboratory", 1),
        ],
    );
    let winter = Quarter::with_courses(
        Season::Winter,
        vec![
            lecture("AMS", "20", "Engineering Mathematical Methods II", 5),
            lecture("PHYS", "5B", "Introduction to Physics II", 5),
            lecture("PHYS", "5M", "Introduction to Physics II Laboratory", 2),
        ],
    );
    let spring = Quarter::with_courses(Season::Spring, vec![Course::new("CMPE", "16")]);

    CoursePlan::new(vec![fall, winter, spring], [CourseKey::new("MATH", "21")], 19)
}

fn check_physics_5c() {
    let plan = first_year_plan();

    let pre_reqs = ThresholdConstraint::new(2)
        .with_nested(ThresholdConstraint::new(2).with_courses([("PHYS", "5A"), ("PHYS", "5B")]))
        .with_nested(ThresholdConstraint::new(1).with_courses([("PHYS", "5L"), ("PHYS", "5M")]));
    let co_reqs = ThresholdConstraint::all_of([("CMPE", "16"), ("AMS", "10")]);

    let phys5c = Course::new("PHYS", "5C")
        .with_title("Introduction to Physics III")
        .with_units(5)
        .with_pre_reqs(pre_reqs)
        .with_co_reqs(co_reqs)
        .with_concurrent(Course::new("PHYS", "5N"))
        .offered_in([Season::Winter, Season::Spring]);

    println!("{plan}");
    println!("PHYS 5C prerequisites: {}", phys5c.pre_reqs().stringify());
    println!("PHYS 5C corequisites:  {}", phys5c.co_reqs().stringify());
    for quarter in 0..plan.num_quarters() {
        match eligibility::evaluate(&phys5c, &plan, quarter) {
            Ok(eligible) => match eligible.implied_concurrent {
                Some(concurrent) => println!("  quarter {quarter}: eligible, with {concurrent}"),
                None => println!("  quarter {quarter}: eligible"),
            },
            Err(reason) => println!("  quarter {quarter}: {reason}"),
        }
    }
    println!();
}

fn plan_computer_engineering() {
    let any_of = |deps: &[(&str, &str)]| ThresholdConstraint::any_of(deps.iter().copied());

    let requirements = vec![
        lecture("CMPE", "16", "Applied Discrete Mathematics", 5),
        lecture("CMPE", "17", "Discrete Structures", 5).with_pre_reqs(any_of(&[("CMPE", "16")])),
        lecture("CMPE", "18", "Data Structures", 5).with_pre_reqs(any_of(&[("CMPE", "17")])),
        lecture("CMPE", "19", "Applied Probability", 5)
            .with_pre_reqs(any_of(&[("CMPE", "16"), ("CMPE", "18")])),
        lecture("CMPE", "20", "Computer Systems", 5).with_pre_reqs(any_of(&[
            ("CMPE", "16"),
            ("CMPE", "17"),
            ("CMPE", "18"),
            ("CMPE", "19"),
        ])),
        lecture("MATH", "24", "Ordinary Differential Equations", 5),
    ];

    let empty = CoursePlan::from_seasons([Season::Fall], [CourseKey::new("MATH", "21")], 19);
    let planner = GreedyPlanner::new(PlannerConfig::default().extending_to(12));

    match planner.plan(&requirements, &empty) {
        Ok(plan) => {
            println!("{plan}");
            println!(
                "Scheduled {} courses, {} units over {} quarters",
                plan.course_count(),
                plan.total_units(),
                plan.num_quarters()
            );
        }
        Err(e) => {
            println!("Planning failed: {e}");
            for unplaced in e.unplaced() {
                println!("  {unplaced}");
            }
        }
    }

    // "1 of nothing" can never be met and is rejected up front.
    let broken = vec![Course::new("CMPE", "16").with_pre_reqs(ThresholdConstraint::new(1))];
    if let Err(e) = planner.plan(&broken, &empty) {
        println!("Rejected malformed catalog: {e}");
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("Eligibility check");
    println!("=================");
    check_physics_5c();

    println!("Greedy quarter planning");
    println!("=======================");
    plan_computer_engineering();
}
