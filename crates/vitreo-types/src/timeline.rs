//! Timeline events
//!
//! Events carry no id. Several events may share a year; their declaration
//! order is meaningful and must survive every sort applied to them.

use crate::category::Category;
use crate::error::ParseError;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// How important a milestone is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Significance {
    Landmark,
    Major,
    Notable,
}

impl Significance {
    pub const ALL: [Significance; 3] = [
        Significance::Landmark,
        Significance::Major,
        Significance::Notable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Significance::Landmark => "landmark",
            Significance::Major => "major",
            Significance::Notable => "notable",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Significance::Landmark => "Landmark",
            Significance::Major => "Major",
            Significance::Notable => "Notable",
        }
    }
}

impl fmt::Display for Significance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Significance {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Significance::ALL
            .into_iter()
            .find(|sig| sig.as_str() == s)
            .ok_or_else(|| ParseError::UnknownSignificance(s.to_string()))
    }
}

/// Category of a timeline event: an innovation category or a general milestone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimelineCategory {
    Milestone,
    Field(Category),
}

impl TimelineCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimelineCategory::Milestone => "milestone",
            TimelineCategory::Field(category) => category.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimelineCategory::Milestone => "Milestone",
            TimelineCategory::Field(category) => category.label(),
        }
    }
}

impl From<Category> for TimelineCategory {
    fn from(category: Category) -> Self {
        TimelineCategory::Field(category)
    }
}

impl fmt::Display for TimelineCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimelineCategory {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "milestone" {
            return Ok(TimelineCategory::Milestone);
        }
        s.parse().map(TimelineCategory::Field)
    }
}

impl Serialize for TimelineCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A dated historical milestone
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEvent {
    pub year: i32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: TimelineCategory,
    pub significance: Significance,
}

impl TimelineEvent {
    /// First year of the decade containing this event (1970 for 1970-1979)
    pub fn decade(&self) -> i32 {
        self.year.div_euclid(10) * 10
    }
}
