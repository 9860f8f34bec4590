//! Query-string parameters shared by pages and the JSON API

use serde::Deserialize;
use std::str::FromStr;
use vitreo_catalog::ListQuery;
use vitreo_types::{Filter, ParseError, Significance};

/// `?category=&q=` on list views
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub q: String,
}

impl ListParams {
    /// Parse into a typed query. An unknown category is an error, not "all".
    pub fn list_query<C>(&self) -> Result<ListQuery<C>, ParseError>
    where
        C: FromStr<Err = ParseError> + PartialEq + Copy,
    {
        let category: Filter<C> = self.category.parse()?;
        Ok(ListQuery::new(category, self.q.clone()))
    }
}

/// `?significance=` on the timeline
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimelineParams {
    #[serde(default)]
    pub significance: String,
}

impl TimelineParams {
    pub fn filter(&self) -> Result<Filter<Significance>, ParseError> {
        self.significance.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitreo_types::{Category, TechniqueCategory};

    #[test]
    fn test_list_params() {
        let params = ListParams {
            category: "retinal-detachment".into(),
            q: "Buckle".into(),
        };
        let query = params.list_query::<TechniqueCategory>().unwrap();
        assert_eq!(query.category, Filter::Only(TechniqueCategory::RetinalDetachment));
        assert_eq!(query.search, "Buckle");

        let query = ListParams::default().list_query::<Category>().unwrap();
        assert!(query.category.is_all());

        let params = ListParams {
            category: "all".into(),
            q: String::new(),
        };
        assert!(params.list_query::<Category>().unwrap().category.is_all());
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let params = ListParams {
            category: "lasers".into(),
            q: String::new(),
        };
        assert_eq!(
            params.list_query::<Category>(),
            Err(ParseError::UnknownCategory("lasers".into()))
        );
    }

    #[test]
    fn test_timeline_params() {
        assert!(TimelineParams::default().filter().unwrap().is_all());
        let params = TimelineParams {
            significance: "landmark".into(),
        };
        assert_eq!(params.filter().unwrap(), Filter::Only(Significance::Landmark));
        let params = TimelineParams {
            significance: "minor".into(),
        };
        assert!(params.filter().is_err());
    }
}
