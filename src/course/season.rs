//! Academic terms and the set of terms a course is offered in.

use std::collections::BTreeSet;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Term name carried by every quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Season {
    Fall,
    Winter,
    Spring,
    Summer,
}

impl Season {
    /// The regular academic-year seasons, in order.
    pub const ACADEMIC_YEAR: [Season; 3] = [Season::Fall, Season::Winter, Season::Spring];

    /// Season of the quarter that follows this one.
    ///
    /// Rotation is `Fall → Winter → Spring → Fall`. Summer terms are never
    /// produced by rotation; a summer quarter is followed by fall.
    pub fn next(self) -> Season {
        match self {
            Season::Fall => Season::Winter,
            Season::Winter => Season::Spring,
            Season::Spring | Season::Summer => Season::Fall,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Fall => write!(f, "fall"),
            Season::Winter => write!(f, "winter"),
            Season::Spring => write!(f, "spring"),
            Season::Summer => write!(f, "summer"),
        }
    }
}

/// Seasons in which a course is offered. Empty by default (offered never).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SeasonSet(BTreeSet<Season>);

impl SeasonSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offered in fall, winter and spring.
    pub fn academic_year() -> Self {
        Season::ACADEMIC_YEAR.into_iter().collect()
    }

    /// Offered in every season, summer included.
    pub fn all() -> Self {
        [Season::Fall, Season::Winter, Season::Spring, Season::Summer]
            .into_iter()
            .collect()
    }

    pub fn insert(&mut self, season: Season) -> bool {
        self.0.insert(season)
    }

    pub fn remove(&mut self, season: Season) -> bool {
        self.0.remove(&season)
    }

    pub fn is_offered(&self, season: Season) -> bool {
        self.0.contains(&season)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Season> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Season> for SeasonSet {
    fn from_iter<I: IntoIterator<Item = Season>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
