mod course;
pub mod key;
pub mod season;

pub use course::Course;
pub use key::CourseKey;
pub use season::{Season, SeasonSet};
