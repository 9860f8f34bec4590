//! Catalog trait and query layer
//!
//! Implementors only expose the three record sets. Every lookup, filter and
//! relationship resolution is a provided method so all backends share the
//! same ordering and tolerance rules.

use vitreo_types::{Category, Innovation, Technique, TechniqueCategory, TimelineEvent};

/// Read-only reference catalog
pub trait ReferenceCatalog: Send + Sync {
    /// Innovations in declaration order
    fn innovations(&self) -> &[Innovation];

    /// Techniques in declaration order
    fn techniques(&self) -> &[Technique];

    /// Timeline events in authored order
    fn timeline_events(&self) -> &[TimelineEvent];

    /// Look up an innovation by id. First match wins.
    fn innovation_by_id(&self, id: &str) -> Option<&Innovation> {
        self.innovations().iter().find(|i| i.id == id)
    }

    /// Look up a technique by id. First match wins.
    fn technique_by_id(&self, id: &str) -> Option<&Technique> {
        self.techniques().iter().find(|t| t.id == id)
    }

    /// Innovations in a category, in declaration order
    fn innovations_by_category(&self, category: Category) -> Vec<&Innovation> {
        self.innovations()
            .iter()
            .filter(|i| i.category == category)
            .collect()
    }

    /// Techniques in a category, in declaration order
    fn techniques_by_category(&self, category: TechniqueCategory) -> Vec<&Technique> {
        self.techniques()
            .iter()
            .filter(|t| t.category == category)
            .collect()
    }

    /// Resolve a technique's related innovations.
    ///
    /// Follows the order of `related_innovation_ids`. Ids without a matching
    /// innovation are skipped; a repeated id resolves once per occurrence.
    fn related_innovations(&self, technique: &Technique) -> Vec<&Innovation> {
        technique
            .related_innovation_ids
            .iter()
            .filter_map(|id| self.innovation_by_id(id))
            .collect()
    }

    /// Techniques that reference an innovation, in declaration order
    fn techniques_using(&self, innovation_id: &str) -> Vec<&Technique> {
        self.techniques()
            .iter()
            .filter(|t| t.references(innovation_id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryCatalog;
    use vitreo_types::Complexity;

    fn technique_with(related: &'static [&'static str]) -> Technique {
        Technique {
            id: "test-technique",
            name: "Test Technique",
            category: TechniqueCategory::Other,
            complexity: Complexity::Basic,
            description: "",
            indications: &[],
            steps: &[],
            related_innovation_ids: related,
            success_rate: None,
        }
    }

    #[test]
    fn test_lookup_returns_every_record() {
        let catalog = InMemoryCatalog::builtin();
        for innovation in catalog.innovations() {
            assert_eq!(catalog.innovation_by_id(innovation.id), Some(innovation));
        }
        for technique in catalog.techniques() {
            assert_eq!(catalog.technique_by_id(technique.id), Some(technique));
        }
    }

    #[test]
    fn test_lookup_missing_id_is_none() {
        let catalog = InMemoryCatalog::builtin();
        assert!(catalog.innovation_by_id("does-not-exist").is_none());
        assert!(catalog.technique_by_id("does-not-exist").is_none());
    }

    #[test]
    fn test_category_filter_keeps_declaration_order() {
        let catalog = InMemoryCatalog::builtin();
        let ids: Vec<_> = catalog
            .innovations_by_category(Category::Instruments)
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec!["27g-vitrectomy", "eva-nexus", "chandelier"]);

        let ids: Vec<_> = catalog
            .techniques_by_category(TechniqueCategory::RetinalDetachment)
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec!["scleral-buckle", "pneumatic-retinopexy"]);
    }

    #[test]
    fn test_related_innovations_drop_dangling_ids() {
        let catalog = InMemoryCatalog::builtin();
        let technique = technique_with(&["27g-vitrectomy", "bogus-id"]);

        let related = catalog.related_innovations(&technique);
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].id, "27g-vitrectomy");
    }

    #[test]
    fn test_related_innovations_follow_input_order() {
        let catalog = InMemoryCatalog::builtin();
        let technique = technique_with(&["wide-angle", "missing", "ioct", "27g-vitrectomy"]);

        let ids: Vec<_> = catalog
            .related_innovations(&technique)
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec!["wide-angle", "ioct", "27g-vitrectomy"]);
    }

    #[test]
    fn test_related_innovations_keep_duplicates() {
        let catalog = InMemoryCatalog::builtin();
        let technique = technique_with(&["ioct", "ioct"]);
        assert_eq!(catalog.related_innovations(&technique).len(), 2);
    }

    #[test]
    fn test_related_innovations_for_builtin_ppv() {
        let catalog = InMemoryCatalog::builtin();
        let ppv = catalog.technique_by_id("ppv").unwrap();
        let ids: Vec<_> = catalog
            .related_innovations(ppv)
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec!["27g-vitrectomy", "ioct", "3d-hud", "wide-angle"]);
    }

    #[test]
    fn test_techniques_using() {
        let catalog = InMemoryCatalog::builtin();
        let ids: Vec<_> = catalog
            .techniques_using("chandelier")
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec!["scleral-buckle", "diabetic-trd"]);
        assert!(catalog.techniques_using("ai-diagnostics").is_empty());
    }

    #[test]
    fn test_first_match_wins_on_duplicate_ids() {
        let first = catalog_innovation("dup", "First");
        let second = catalog_innovation("dup", "Second");
        let catalog = InMemoryCatalog::new(vec![first, second], Vec::new(), Vec::new());
        assert_eq!(catalog.innovation_by_id("dup").unwrap().title, "First");
    }

    fn catalog_innovation(id: &'static str, title: &'static str) -> Innovation {
        Innovation {
            id,
            title,
            category: Category::Imaging,
            year: 2020,
            status: vitreo_types::InnovationStatus::Emerging,
            impact: 5,
            summary: "",
            description: "",
            key_benefits: &[],
            manufacturers: None,
            image_alt: "",
        }
    }
}
