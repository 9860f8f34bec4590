//! List filtering: category tab AND free-text search
//!
//! Search is a case-insensitive substring match on two text fields. There is
//! no tokenization or ranking; results keep declaration order.

use serde::Serialize;
use vitreo_types::{Category, Filter, Innovation, Technique, TechniqueCategory};

/// A record with two searchable text fields
pub trait Searchable {
    /// Title or name
    fn heading(&self) -> &str;

    /// Summary or description
    fn body(&self) -> &str;

    /// Does the record match an already lower-cased needle?
    fn matches_lowercase(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.heading().to_lowercase().contains(needle)
            || self.body().to_lowercase().contains(needle)
    }

    /// Does the record match a search string?
    fn matches_search(&self, query: &str) -> bool {
        self.matches_lowercase(&query.to_lowercase())
    }
}

/// A searchable record that also carries a category tab value
pub trait Listed: Searchable {
    type Category: PartialEq + Copy;

    fn list_category(&self) -> Self::Category;
}

impl Searchable for Innovation {
    fn heading(&self) -> &str {
        self.title
    }

    fn body(&self) -> &str {
        self.summary
    }
}

impl Listed for Innovation {
    type Category = Category;

    fn list_category(&self) -> Category {
        self.category
    }
}

impl Searchable for Technique {
    fn heading(&self) -> &str {
        self.name
    }

    fn body(&self) -> &str {
        self.description
    }
}

impl Listed for Technique {
    type Category = TechniqueCategory;

    fn list_category(&self) -> TechniqueCategory {
        self.category
    }
}

/// Inputs of a list view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(bound(serialize = "C: std::fmt::Display"))]
pub struct ListQuery<C> {
    pub category: Filter<C>,
    pub search: String,
}

impl<C> Default for ListQuery<C> {
    fn default() -> Self {
        Self {
            category: Filter::All,
            search: String::new(),
        }
    }
}

/// Inputs of the innovations list
pub type InnovationQuery = ListQuery<Category>;

/// Inputs of the techniques list
pub type TechniqueQuery = ListQuery<TechniqueCategory>;

impl<C: PartialEq + Copy> ListQuery<C> {
    pub fn new(category: Filter<C>, search: impl Into<String>) -> Self {
        Self {
            category,
            search: search.into(),
        }
    }

    /// Records passing both the category tab and the search, in input order
    pub fn apply<'a, T>(&self, records: &'a [T]) -> Vec<&'a T>
    where
        T: Listed<Category = C>,
    {
        let needle = self.search.to_lowercase();
        records
            .iter()
            .filter(|r| self.category.matches(&r.list_category()))
            .filter(|r| r.matches_lowercase(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ReferenceCatalog;
    use crate::memory::InMemoryCatalog;
    use proptest::prelude::*;

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let catalog = InMemoryCatalog::builtin();
        let result = InnovationQuery::default().apply(catalog.innovations());
        let expected: Vec<_> = catalog.innovations().iter().collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = InMemoryCatalog::builtin();
        let result = TechniqueQuery::new(Filter::All, "VITRECTOMY").apply(catalog.techniques());
        assert!(result.iter().any(|t| t.name == "Pars Plana Vitrectomy (PPV)"));
    }

    #[test]
    fn test_search_matches_body_text() {
        let catalog = InMemoryCatalog::builtin();
        // "bevacizumab" only appears in the description, not the summary
        let result = InnovationQuery::new(Filter::All, "bevacizumab").apply(catalog.innovations());
        assert!(result.is_empty());

        let result = InnovationQuery::new(Filter::All, "wet amd").apply(catalog.innovations());
        let ids: Vec<_> = result.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["anti-vegf"]);
    }

    #[test]
    fn test_category_and_search_combine() {
        let catalog = InMemoryCatalog::builtin();
        let query = InnovationQuery::new(Filter::Only(Category::Instruments), "vitrectomy");
        let ids: Vec<_> = query.apply(catalog.innovations()).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["27g-vitrectomy", "eva-nexus", "chandelier"]);

        let query = InnovationQuery::new(Filter::Only(Category::Imaging), "robot");
        assert!(query.apply(catalog.innovations()).is_empty());
    }

    #[test]
    fn test_query_serializes_with_wire_names() {
        let query = InnovationQuery::new(Filter::Only(Category::Ai), "robot");
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json, serde_json::json!({"category": "ai", "search": "robot"}));

        let json = serde_json::to_value(TechniqueQuery::default()).unwrap();
        assert_eq!(json["category"], "all");
    }

    #[test]
    fn test_no_matches() {
        let catalog = InMemoryCatalog::builtin();
        let query = TechniqueQuery::new(Filter::All, "zzz-no-such-text");
        assert!(query.apply(catalog.techniques()).is_empty());
    }

    proptest! {
        #[test]
        fn prop_results_are_ordered_subsequence(search in "[a-zA-Z ]{0,6}", tab in 0usize..7) {
            let catalog = InMemoryCatalog::builtin();
            let category = if tab == 0 { Filter::All } else { Filter::Only(Category::ALL[tab - 1]) };
            let result = InnovationQuery::new(category, search.clone()).apply(catalog.innovations());

            let mut positions = result.iter().map(|r| {
                catalog.innovations().iter().position(|i| i.id == r.id).unwrap()
            });
            let mut last = None;
            for pos in &mut positions {
                prop_assert!(last.map_or(true, |l| pos > l));
                last = Some(pos);
            }
            for record in &result {
                prop_assert!(category.matches(&record.category));
                prop_assert!(record.matches_search(&search));
            }
        }

        #[test]
        fn prop_search_ignores_case(search in "[a-z]{1,5}") {
            let catalog = InMemoryCatalog::builtin();
            let lower = TechniqueQuery::new(Filter::All, search.clone()).apply(catalog.techniques());
            let upper = TechniqueQuery::new(Filter::All, search.to_uppercase()).apply(catalog.techniques());
            prop_assert_eq!(lower, upper);
        }
    }
}
