//! Innovation records
//!
//! An innovation is a technology or therapy that changed how vitreoretinal
//! surgery is performed. Records are defined statically and never mutated.

use crate::category::Category;
use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowest allowed impact rating
pub const MIN_IMPACT: u8 = 1;

/// Highest allowed impact rating
pub const MAX_IMPACT: u8 = 10;

/// Adoption status of an innovation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InnovationStatus {
    Established,
    Emerging,
    Experimental,
}

impl InnovationStatus {
    pub const ALL: [InnovationStatus; 3] = [
        InnovationStatus::Established,
        InnovationStatus::Emerging,
        InnovationStatus::Experimental,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InnovationStatus::Established => "established",
            InnovationStatus::Emerging => "emerging",
            InnovationStatus::Experimental => "experimental",
        }
    }
}

impl fmt::Display for InnovationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InnovationStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InnovationStatus::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| ParseError::UnknownStatus(s.to_string()))
    }
}

/// A technology or therapy record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Innovation {
    /// Stable identifier, unique across innovations
    pub id: &'static str,

    pub title: &'static str,

    pub category: Category,

    /// Year of introduction or clinical maturity
    pub year: i32,

    pub status: InnovationStatus,

    /// Impact rating in `MIN_IMPACT..=MAX_IMPACT`
    pub impact: u8,

    /// One-sentence summary shown on cards
    pub summary: &'static str,

    /// Long-form description shown on the detail page
    pub description: &'static str,

    /// Display order is significant
    pub key_benefits: &'static [&'static str],

    /// Absent and empty both mean "nothing to display"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturers: Option<&'static [&'static str]>,

    /// Accessibility text for the illustration
    pub image_alt: &'static str,
}

impl Innovation {
    /// Is the impact rating inside the allowed range?
    pub fn impact_in_range(&self) -> bool {
        (MIN_IMPACT..=MAX_IMPACT).contains(&self.impact)
    }

    /// Manufacturers to display, empty when none are recorded
    pub fn manufacturers(&self) -> &'static [&'static str] {
        self.manufacturers.unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(impact: u8, manufacturers: Option<&'static [&'static str]>) -> Innovation {
        Innovation {
            id: "sample",
            title: "Sample",
            category: Category::Imaging,
            year: 2020,
            status: InnovationStatus::Emerging,
            impact,
            summary: "",
            description: "",
            key_benefits: &[],
            manufacturers,
            image_alt: "",
        }
    }

    #[test]
    fn test_impact_range() {
        assert!(sample(1, None).impact_in_range());
        assert!(sample(10, None).impact_in_range());
        assert!(!sample(0, None).impact_in_range());
        assert!(!sample(11, None).impact_in_range());
    }

    #[test]
    fn test_absent_and_empty_manufacturers_are_equivalent() {
        assert!(sample(5, None).manufacturers().is_empty());
        assert!(sample(5, Some(&[])).manufacturers().is_empty());
        assert_eq!(sample(5, Some(&["Zeiss"])).manufacturers(), &["Zeiss"]);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(sample(5, None)).unwrap();
        assert!(json.get("keyBenefits").is_some());
        assert!(json.get("imageAlt").is_some());
        assert!(json.get("manufacturers").is_none());
        assert_eq!(json["status"], "emerging");
    }
}
