//! Surgical technique records

use crate::category::TechniqueCategory;
use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Technical difficulty of a procedure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Basic,
    Intermediate,
    Advanced,
}

impl Complexity {
    pub const ALL: [Complexity; 3] = [
        Complexity::Basic,
        Complexity::Intermediate,
        Complexity::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Basic => "basic",
            Complexity::Intermediate => "intermediate",
            Complexity::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Complexity {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Complexity::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseError::UnknownComplexity(s.to_string()))
    }
}

/// A surgical procedure record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Technique {
    /// Stable identifier, unique across techniques
    pub id: &'static str,

    pub name: &'static str,

    pub category: TechniqueCategory,

    pub complexity: Complexity,

    pub description: &'static str,

    pub indications: &'static [&'static str],

    /// Ordered procedure steps, rendered as a numbered list
    pub steps: &'static [&'static str],

    /// Foreign keys into `Innovation::id`. Not checked: ids that do not
    /// resolve are dropped when the relation is read.
    pub related_innovation_ids: &'static [&'static str],

    /// Free text such as "90-95%" or a short remark
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_rate: Option<&'static str>,
}

impl Technique {
    /// Does this technique reference the given innovation id?
    pub fn references(&self, innovation_id: &str) -> bool {
        self.related_innovation_ids.contains(&innovation_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_references() {
        let technique = Technique {
            id: "t",
            name: "T",
            category: TechniqueCategory::Other,
            complexity: Complexity::Basic,
            description: "",
            indications: &[],
            steps: &[],
            related_innovation_ids: &["ioct", "3d-hud"],
            success_rate: None,
        };
        assert!(technique.references("ioct"));
        assert!(!technique.references("preceyes"));
    }

    #[test]
    fn test_complexity_parse() {
        assert_eq!("advanced".parse::<Complexity>().unwrap(), Complexity::Advanced);
        assert!("expert".parse::<Complexity>().is_err());
    }
}
