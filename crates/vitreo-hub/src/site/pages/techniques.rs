//! Surgical techniques list and technique detail pages

use crate::site::html::{badge, empty_state, escape, href, search_form, tab_bar, Tab};
use crate::site::layout::page;
use vitreo_catalog::TechniqueQuery;
use vitreo_types::{Filter, Innovation, Technique, TechniqueCategory, TECHNIQUE_CATEGORY_LABELS};

const PATH: &str = "/techniques";

/// Indications shown on a card before collapsing into "+N more"
pub const CARD_INDICATIONS: usize = 3;

pub fn tabs(query: &TechniqueQuery) -> Vec<Tab> {
    let all = Tab {
        label: "All".to_string(),
        href: href(PATH, &[("q", query.search.as_str())]),
        active: query.category.is_all(),
    };

    std::iter::once(all)
        .chain(TechniqueCategory::ALL.into_iter().map(|category| Tab {
            label: category.tab_label().to_string(),
            href: href(
                PATH,
                &[("category", category.as_str()), ("q", query.search.as_str())],
            ),
            active: query.category == Filter::Only(category),
        }))
        .collect()
}

/// First indications plus the count of hidden ones
pub fn indication_preview(technique: &Technique) -> (&[&'static str], usize) {
    let shown = technique.indications.len().min(CARD_INDICATIONS);
    (
        &technique.indications[..shown],
        technique.indications.len() - shown,
    )
}

fn card(technique: &Technique) -> String {
    let mut out = format!(
        "<a class=\"card\" href=\"{}/{}\">{}<h3>{}</h3><p class=\"muted\"><small>{}",
        PATH,
        escape(technique.id),
        badge(technique.complexity.as_str(), technique.complexity.as_str()),
        escape(technique.name),
        escape(technique.category.label()),
    );
    if let Some(rate) = technique.success_rate {
        out.push_str(&format!(" &middot; {}", escape(rate)));
    }
    out.push_str(&format!(
        "</small></p><p class=\"muted\">{}</p><p>",
        escape(technique.description)
    ));

    let (shown, hidden) = indication_preview(technique);
    for indication in shown {
        out.push_str(&badge("", indication));
        out.push(' ');
    }
    if hidden > 0 {
        out.push_str(&badge("", &format!("+{} more", hidden)));
    }
    out.push_str("</p></a>");
    out
}

pub fn render_list(
    site_title: &str,
    total: usize,
    query: &TechniqueQuery,
    results: &[&Technique],
) -> String {
    let mut content = String::from("<div class=\"container\">");
    content.push_str(&format!(
        "<h1>Surgical Techniques</h1><p class=\"muted\">{} techniques across {} categories</p>",
        total,
        TECHNIQUE_CATEGORY_LABELS.len()
    ));

    content.push_str(&tab_bar(&tabs(query)));
    let category = query.category.to_string();
    content.push_str(&search_form(
        PATH,
        "Search techniques...",
        if query.category.is_all() { "" } else { &category },
        &query.search,
    ));

    if results.is_empty() {
        content.push_str(&empty_state(
            "No techniques found",
            "Try adjusting your filters or search terms",
            PATH,
            "Clear filters",
        ));
    } else {
        content.push_str("<div class=\"grid\">");
        for technique in results {
            content.push_str(&card(technique));
        }
        content.push_str("</div>");
    }

    content.push_str("</div>");
    page(site_title, "Techniques", PATH, &content)
}

pub fn render_detail(site_title: &str, technique: &Technique, related: &[&Innovation]) -> String {
    let mut content = String::from("<div class=\"container narrow\">");
    content.push_str(&format!(
        "<a class=\"button\" href=\"{}\">&larr; Back to Techniques</a>",
        PATH
    ));
    content.push_str(&format!(
        "<h1>{}</h1><p>{} <span class=\"muted\">{}",
        escape(technique.name),
        badge(technique.complexity.as_str(), technique.complexity.as_str()),
        escape(technique.category.label()),
    ));
    if let Some(rate) = technique.success_rate {
        content.push_str(&format!(" &middot; {}", escape(rate)));
    }
    content.push_str("</span></p>");

    content.push_str(&format!(
        "<section><h2>Overview</h2><p class=\"muted\">{}</p></section>",
        escape(technique.description)
    ));

    content.push_str("<section class=\"card\"><h2>Indications</h2><ul>");
    for indication in technique.indications {
        content.push_str(&format!("<li>{}</li>", escape(indication)));
    }
    content.push_str("</ul></section>");

    content.push_str("<section class=\"card\"><h2>Surgical Steps</h2><ol class=\"steps\">");
    for step in technique.steps {
        content.push_str(&format!("<li>{}</li>", escape(step)));
    }
    content.push_str("</ol></section>");

    if !related.is_empty() {
        content.push_str(
            "<section><h2>Related Innovations</h2>\
             <p class=\"muted\">Technologies that enhance or enable this technique</p>\
             <div class=\"grid\">",
        );
        for innovation in related {
            content.push_str(&format!(
                "<a class=\"card\" href=\"/innovations/{}\"><h3>{}</h3><p>{} \
                 <small class=\"muted\">{}</small></p></a>",
                escape(innovation.id),
                escape(innovation.title),
                badge("", innovation.category.label()),
                innovation.year,
            ));
        }
        content.push_str("</div></section>");
    }

    content.push_str("</div>");
    page(site_title, technique.name, PATH, &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitreo_catalog::{InMemoryCatalog, ReferenceCatalog};

    #[test]
    fn test_tabs() {
        let query = TechniqueQuery::default();
        let tabs = tabs(&query);
        let labels: Vec<_> = tabs.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["All", "Vitrectomy", "Retinal Detachment", "Macular", "Diabetic", "Other"]
        );
        assert!(tabs[0].active);
        assert_eq!(tabs[2].href, "/techniques?category=retinal-detachment");
    }

    #[test]
    fn test_indication_preview() {
        let catalog = InMemoryCatalog::builtin();
        for technique in catalog.techniques() {
            let (shown, hidden) = indication_preview(technique);
            assert!(shown.len() <= CARD_INDICATIONS);
            assert_eq!(shown.len() + hidden, technique.indications.len());
        }
    }

    #[test]
    fn test_list_cards_collapse_indications() {
        let catalog = InMemoryCatalog::builtin();
        let query = TechniqueQuery::default();
        let results = query.apply(catalog.techniques());
        let html = render_list("Vitreo Hub", catalog.techniques().len(), &query, &results);

        assert!(html.contains("8 techniques across 5 categories"));
        let collapsed = catalog
            .techniques()
            .iter()
            .filter(|t| t.indications.len() > CARD_INDICATIONS)
            .count();
        assert_eq!(html.matches(" more</span>").count(), collapsed);
    }

    #[test]
    fn test_list_empty_state() {
        let query = TechniqueQuery::new(Filter::Only(TechniqueCategory::Other), "zzz");
        let html = render_list("Vitreo Hub", 8, &query, &[]);
        assert!(html.contains("No techniques found"));
        assert!(html.contains("name=\"category\" value=\"other\""));
    }

    #[test]
    fn test_detail_numbers_steps_and_links_innovations() {
        let catalog = InMemoryCatalog::builtin();
        let technique = catalog.technique_by_id("ppv").unwrap();
        let related = catalog.related_innovations(technique);
        let html = render_detail("Vitreo Hub", technique, &related);

        assert!(html.contains("<ol class=\"steps\">"));
        assert_eq!(html.matches("<li>").count(), technique.indications.len() + technique.steps.len());
        for innovation in &related {
            assert!(html.contains(&format!("href=\"/innovations/{}\"", innovation.id)));
        }
    }

    #[test]
    fn test_detail_without_relations_omits_section() {
        let catalog = InMemoryCatalog::builtin();
        let technique = catalog.technique_by_id("pneumatic-retinopexy").unwrap();
        let related = catalog.related_innovations(technique);
        assert!(related.is_empty());

        let html = render_detail("Vitreo Hub", technique, &related);
        assert!(!html.contains("Related Innovations"));
    }
}
