//! Innovation and technique categories with their display labels

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of an innovation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Instruments,
    Imaging,
    Robotics,
    Pharmaceuticals,
    Visualization,
    Ai,
}

impl Category {
    /// Every category, in label-table order
    pub const ALL: [Category; 6] = [
        Category::Instruments,
        Category::Imaging,
        Category::Robotics,
        Category::Pharmaceuticals,
        Category::Visualization,
        Category::Ai,
    ];

    /// Order of the innovations list tabs
    pub const TAB_ORDER: [Category; 6] = [
        Category::Instruments,
        Category::Imaging,
        Category::Visualization,
        Category::Robotics,
        Category::Pharmaceuticals,
        Category::Ai,
    ];

    /// Wire identifier (`"instruments"`, `"ai"`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Instruments => "instruments",
            Category::Imaging => "imaging",
            Category::Robotics => "robotics",
            Category::Pharmaceuticals => "pharmaceuticals",
            Category::Visualization => "visualization",
            Category::Ai => "ai",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Instruments => "Instruments",
            Category::Imaging => "Imaging",
            Category::Robotics => "Robotics & AI",
            Category::Pharmaceuticals => "Pharmaceuticals",
            Category::Visualization => "Visualization",
            Category::Ai => "AI Diagnostics",
        }
    }

    /// Short label used on the innovations list tabs
    pub fn tab_label(&self) -> &'static str {
        match self {
            Category::Pharmaceuticals => "Pharma",
            Category::Ai => "AI",
            Category::Robotics => "Robotics",
            other => other.label(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseError::UnknownCategory(s.to_string()))
    }
}

/// Category of a surgical technique
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TechniqueCategory {
    Vitrectomy,
    RetinalDetachment,
    Macular,
    Diabetic,
    Other,
}

impl TechniqueCategory {
    /// Every technique category, in label-table order
    pub const ALL: [TechniqueCategory; 5] = [
        TechniqueCategory::Vitrectomy,
        TechniqueCategory::RetinalDetachment,
        TechniqueCategory::Macular,
        TechniqueCategory::Diabetic,
        TechniqueCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TechniqueCategory::Vitrectomy => "vitrectomy",
            TechniqueCategory::RetinalDetachment => "retinal-detachment",
            TechniqueCategory::Macular => "macular",
            TechniqueCategory::Diabetic => "diabetic",
            TechniqueCategory::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TechniqueCategory::Vitrectomy => "Vitrectomy",
            TechniqueCategory::RetinalDetachment => "Retinal Detachment",
            TechniqueCategory::Macular => "Macular Surgery",
            TechniqueCategory::Diabetic => "Diabetic Surgery",
            TechniqueCategory::Other => "Other Procedures",
        }
    }

    pub fn tab_label(&self) -> &'static str {
        match self {
            TechniqueCategory::Macular => "Macular",
            TechniqueCategory::Diabetic => "Diabetic",
            TechniqueCategory::Other => "Other",
            other => other.label(),
        }
    }
}

impl fmt::Display for TechniqueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TechniqueCategory {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TechniqueCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseError::UnknownTechniqueCategory(s.to_string()))
    }
}

/// Category → label table
pub const CATEGORY_LABELS: [(Category, &str); 6] = [
    (Category::Instruments, "Instruments"),
    (Category::Imaging, "Imaging"),
    (Category::Robotics, "Robotics & AI"),
    (Category::Pharmaceuticals, "Pharmaceuticals"),
    (Category::Visualization, "Visualization"),
    (Category::Ai, "AI Diagnostics"),
];

/// TechniqueCategory → label table
pub const TECHNIQUE_CATEGORY_LABELS: [(TechniqueCategory, &str); 5] = [
    (TechniqueCategory::Vitrectomy, "Vitrectomy"),
    (TechniqueCategory::RetinalDetachment, "Retinal Detachment"),
    (TechniqueCategory::Macular, "Macular Surgery"),
    (TechniqueCategory::Diabetic, "Diabetic Surgery"),
    (TechniqueCategory::Other, "Other Procedures"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels_are_total() {
        for category in Category::ALL {
            let entry = CATEGORY_LABELS.iter().find(|(c, _)| *c == category);
            assert_eq!(entry.map(|(_, l)| *l), Some(category.label()));
        }
        assert_eq!(CATEGORY_LABELS.len(), Category::ALL.len());
    }

    #[test]
    fn test_technique_category_labels_are_total() {
        for category in TechniqueCategory::ALL {
            let entry = TECHNIQUE_CATEGORY_LABELS
                .iter()
                .find(|(c, _)| *c == category);
            assert_eq!(entry.map(|(_, l)| *l), Some(category.label()));
        }
        assert_eq!(TECHNIQUE_CATEGORY_LABELS.len(), TechniqueCategory::ALL.len());
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("ai".parse::<Category>().unwrap(), Category::Ai);
        assert_eq!(
            "retinal-detachment".parse::<TechniqueCategory>().unwrap(),
            TechniqueCategory::RetinalDetachment
        );
        assert!(matches!(
            "Imaging".parse::<Category>(),
            Err(ParseError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_serde_names_match_wire_ids() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
        for category in TechniqueCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }

    #[test]
    fn test_tab_labels() {
        assert_eq!(Category::Pharmaceuticals.tab_label(), "Pharma");
        assert_eq!(Category::Instruments.tab_label(), "Instruments");
        assert_eq!(TechniqueCategory::RetinalDetachment.tab_label(), "Retinal Detachment");
        assert_eq!(TechniqueCategory::Other.tab_label(), "Other");
    }

    #[test]
    fn test_tab_order_covers_every_category() {
        for category in Category::ALL {
            assert!(Category::TAB_ORDER.contains(&category));
        }
        assert_eq!(Category::TAB_ORDER[2], Category::Visualization);
    }
}
