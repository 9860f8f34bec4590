//! Innovations directory and innovation detail pages

use crate::site::html::{badge, empty_state, escape, href, impact_bar, search_form, tab_bar, Tab};
use crate::site::layout::page;
use vitreo_catalog::InnovationQuery;
use vitreo_types::{Category, Filter, Innovation, Technique, CATEGORY_LABELS};

const PATH: &str = "/innovations";

/// Tabs of the directory: All, then every category in tab order.
/// Each tab keeps the current search text.
pub fn tabs(query: &InnovationQuery) -> Vec<Tab> {
    let all = Tab {
        label: "All".to_string(),
        href: href(PATH, &[("q", query.search.as_str())]),
        active: query.category.is_all(),
    };

    std::iter::once(all)
        .chain(Category::TAB_ORDER.into_iter().map(|category| Tab {
            label: category.tab_label().to_string(),
            href: href(
                PATH,
                &[("category", category.as_str()), ("q", query.search.as_str())],
            ),
            active: query.category == Filter::Only(category),
        }))
        .collect()
}

/// Card used on the directory and the dashboard
pub fn card(innovation: &Innovation, with_impact: bool) -> String {
    let mut out = format!(
        "<a class=\"card\" href=\"{}/{}\">{}<h3>{}</h3>\
         <p class=\"muted\"><small>{} &middot; {}</small></p><p class=\"muted\">{}</p>",
        PATH,
        escape(innovation.id),
        badge(innovation.status.as_str(), innovation.status.as_str()),
        escape(innovation.title),
        escape(innovation.category.label()),
        innovation.year,
        escape(innovation.summary),
    );
    if with_impact {
        out.push_str(&impact_bar(innovation.impact, false));
    }
    out.push_str("</a>");
    out
}

pub fn render_list(
    site_title: &str,
    total: usize,
    query: &InnovationQuery,
    results: &[&Innovation],
) -> String {
    let mut content = String::from("<div class=\"container\">");
    content.push_str(&format!(
        "<h1>Innovations Directory</h1><p class=\"muted\">{} innovations across {} categories</p>",
        total,
        CATEGORY_LABELS.len()
    ));

    content.push_str(&tab_bar(&tabs(query)));
    let category = query.category.to_string();
    content.push_str(&search_form(
        PATH,
        "Search innovations...",
        if query.category.is_all() { "" } else { &category },
        &query.search,
    ));

    if results.is_empty() {
        content.push_str(&empty_state(
            "No innovations found",
            "Try adjusting your filters or search terms",
            PATH,
            "Clear filters",
        ));
    } else {
        content.push_str("<div class=\"grid\">");
        for innovation in results {
            content.push_str(&card(innovation, true));
        }
        content.push_str("</div>");
    }

    content.push_str("</div>");
    page(site_title, "Innovations", PATH, &content)
}

pub fn render_detail(
    site_title: &str,
    innovation: &Innovation,
    techniques: &[&Technique],
) -> String {
    let mut content = String::from("<div class=\"container narrow\">");
    content.push_str(&format!(
        "<a class=\"button\" href=\"{}\">&larr; Back to Innovations</a>",
        PATH
    ));
    content.push_str(&format!(
        "<h1>{}</h1><p>{} <span class=\"muted\">{} &middot; {}</span></p>",
        escape(innovation.title),
        badge(innovation.status.as_str(), innovation.status.as_str()),
        escape(innovation.category.label()),
        innovation.year,
    ));

    content.push_str(&impact_bar(innovation.impact, true));

    content.push_str(&format!(
        "<section><h2>Overview</h2><p class=\"muted\">{}</p></section>",
        escape(innovation.description)
    ));

    content.push_str("<section class=\"card\"><h2>Key Benefits</h2><ul>");
    for benefit in innovation.key_benefits {
        content.push_str(&format!("<li>{}</li>", escape(benefit)));
    }
    content.push_str("</ul></section>");

    let manufacturers = innovation.manufacturers();
    if !manufacturers.is_empty() {
        content.push_str("<section class=\"card\"><h2>Manufacturers &amp; Developers</h2><p>");
        for manufacturer in manufacturers {
            content.push_str(&badge("", manufacturer));
            content.push(' ');
        }
        content.push_str("</p></section>");
    }

    if !techniques.is_empty() {
        content.push_str(
            "<section><h2>Related Surgical Techniques</h2>\
             <p class=\"muted\">Techniques that use or benefit from this innovation</p>\
             <div class=\"grid\">",
        );
        for technique in techniques {
            content.push_str(&format!(
                "<a class=\"card\" href=\"/techniques/{}\"><h3>{}</h3><p>{}",
                escape(technique.id),
                escape(technique.name),
                badge(technique.complexity.as_str(), technique.complexity.as_str()),
            ));
            if let Some(rate) = technique.success_rate {
                content.push_str(&format!(" <small class=\"muted\">{}</small>", escape(rate)));
            }
            content.push_str("</p></a>");
        }
        content.push_str("</div></section>");
    }

    content.push_str("</div>");
    page(site_title, innovation.title, PATH, &content)
}
