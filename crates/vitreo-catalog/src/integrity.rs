//! Catalog integrity report
//!
//! Computed once at startup. Dangling relations are expected during
//! editorial work and reported at `warn`; they never block startup.

use crate::catalog::ReferenceCatalog;
use serde::Serialize;
use std::collections::HashSet;

/// A related-innovation id that does not resolve
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DanglingRelation {
    pub technique_id: String,
    pub innovation_id: String,
}

/// Findings from scanning the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogIntegrity {
    pub duplicate_innovation_ids: Vec<String>,
    pub duplicate_technique_ids: Vec<String>,
    /// Innovation ids whose impact is outside 1..=10
    pub impact_out_of_range: Vec<String>,
    pub dangling_relations: Vec<DanglingRelation>,
}

impl CatalogIntegrity {
    pub fn check(catalog: &dyn ReferenceCatalog) -> Self {
        let duplicate_innovation_ids =
            duplicates(catalog.innovations().iter().map(|i| i.id));
        let duplicate_technique_ids = duplicates(catalog.techniques().iter().map(|t| t.id));

        let impact_out_of_range = catalog
            .innovations()
            .iter()
            .filter(|i| !i.impact_in_range())
            .map(|i| i.id.to_string())
            .collect();

        let dangling_relations = catalog
            .techniques()
            .iter()
            .flat_map(|t| {
                t.related_innovation_ids
                    .iter()
                    .filter(|id| catalog.innovation_by_id(id).is_none())
                    .map(move |id| DanglingRelation {
                        technique_id: t.id.to_string(),
                        innovation_id: id.to_string(),
                    })
            })
            .collect();

        Self {
            duplicate_innovation_ids,
            duplicate_technique_ids,
            impact_out_of_range,
            dangling_relations,
        }
    }

    /// Uniqueness and range violations. Dangling relations do not count.
    pub fn has_violations(&self) -> bool {
        !self.duplicate_innovation_ids.is_empty()
            || !self.duplicate_technique_ids.is_empty()
            || !self.impact_out_of_range.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_violations() && self.dangling_relations.is_empty()
    }

    /// Emit one event per finding
    pub fn log(&self) {
        for id in &self.duplicate_innovation_ids {
            tracing::error!(innovation_id = %id, "Duplicate innovation id");
        }
        for id in &self.duplicate_technique_ids {
            tracing::error!(technique_id = %id, "Duplicate technique id");
        }
        for id in &self.impact_out_of_range {
            tracing::error!(innovation_id = %id, "Impact rating out of range");
        }
        for relation in &self.dangling_relations {
            tracing::warn!(
                technique_id = %relation.technique_id,
                innovation_id = %relation.innovation_id,
                "Related innovation not found, it will be skipped"
            );
        }
        if self.is_clean() {
            tracing::debug!("Catalog integrity check passed");
        }
    }
}

fn duplicates<'a>(ids: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut result = Vec::new();
    for id in ids {
        if !seen.insert(id) && reported.insert(id) {
            result.push(id.to_string());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryCatalog;
    use vitreo_types::{
        Category, Complexity, Innovation, InnovationStatus, Technique, TechniqueCategory,
    };

    fn innovation(id: &'static str, impact: u8) -> Innovation {
        Innovation {
            id,
            title: id,
            category: Category::Robotics,
            year: 2021,
            status: InnovationStatus::Experimental,
            impact,
            summary: "",
            description: "",
            key_benefits: &[],
            manufacturers: None,
            image_alt: "",
        }
    }

    fn technique(id: &'static str, related: &'static [&'static str]) -> Technique {
        Technique {
            id,
            name: id,
            category: TechniqueCategory::Macular,
            complexity: Complexity::Advanced,
            description: "",
            indications: &[],
            steps: &[],
            related_innovation_ids: related,
            success_rate: None,
        }
    }

    #[test]
    fn test_builtin_catalog_is_clean() {
        let report = CatalogIntegrity::check(&InMemoryCatalog::builtin());
        assert!(report.is_clean(), "{:?}", report);
    }

    #[test]
    fn test_reports_findings() {
        let catalog = InMemoryCatalog::new(
            vec![innovation("a", 5), innovation("a", 11), innovation("b", 0)],
            vec![technique("t", &["a", "ghost"]), technique("t", &[])],
            Vec::new(),
        );
        let report = CatalogIntegrity::check(&catalog);

        assert_eq!(report.duplicate_innovation_ids, vec!["a"]);
        assert_eq!(report.duplicate_technique_ids, vec!["t"]);
        assert_eq!(report.impact_out_of_range, vec!["a", "b"]);
        assert_eq!(
            report.dangling_relations,
            vec![DanglingRelation {
                technique_id: "t".into(),
                innovation_id: "ghost".into(),
            }]
        );
        assert!(report.has_violations());
    }

    #[test]
    fn test_dangling_relations_alone_are_not_violations() {
        let catalog = InMemoryCatalog::new(
            vec![innovation("a", 5)],
            vec![technique("t", &["missing"])],
            Vec::new(),
        );
        let report = CatalogIntegrity::check(&catalog);
        assert!(!report.has_violations());
        assert!(!report.is_clean());
    }
}
