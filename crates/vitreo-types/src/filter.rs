//! Tab selection for list views
//!
//! A filter is either the `all` sentinel (pass-through) or a single enum
//! value compared by exact equality.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Wire value of the pass-through tab
pub const ALL_TAB: &str = "all";

/// Active tab of a list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter<T> {
    /// Every record passes
    #[default]
    All,
    /// Only records whose field equals the value pass
    Only(T),
}

impl<T: PartialEq> Filter<T> {
    /// Does a record with the given field value pass this filter?
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(selected) => selected == value,
        }
    }
}

impl<T> Filter<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Filter::All)
    }

    pub fn selected(&self) -> Option<&T> {
        match self {
            Filter::All => None,
            Filter::Only(value) => Some(value),
        }
    }
}

impl<T> From<Option<T>> for Filter<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Filter::All, Filter::Only)
    }
}

impl<T: FromStr> FromStr for Filter<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == ALL_TAB {
            return Ok(Filter::All);
        }
        s.parse().map(Filter::Only)
    }
}

impl<T: fmt::Display> fmt::Display for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str(ALL_TAB),
            Filter::Only(value) => value.fmt(f),
        }
    }
}

impl<T: fmt::Display> Serialize for Filter<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
