//! Research hub page

use crate::site::html::{badge, escape};
use crate::site::layout::page;
use vitreo_catalog::data::{RESEARCH_DISCLAIMER, RESEARCH_LINKS, UPCOMING_FEATURES};

const PATH: &str = "/research";

pub fn render(site_title: &str) -> String {
    let mut content = String::from("<div class=\"container narrow\">");
    content.push_str(
        "<h1>Research Hub</h1>\
         <p class=\"muted\">Curated resources for vitreoretinal surgery research</p>",
    );

    content.push_str(
        "<section><h2>Key Resources</h2>\
         <p class=\"muted\">Trusted databases and organizations for retinal research</p>\
         <div class=\"grid\">",
    );
    for link in RESEARCH_LINKS {
        content.push_str(&format!(
            "<a class=\"card\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">\
             {}<h3>{}</h3><p class=\"muted\"><small>{}</small></p></a>",
            escape(link.url),
            badge("", link.badge),
            escape(link.title),
            escape(link.description),
        ));
    }
    content.push_str("</div></section>");

    content.push_str(
        "<section><h2>Coming Soon</h2>\
         <p class=\"muted\">Features in development for the Research Hub</p>\
         <div class=\"grid\">",
    );
    for feature in UPCOMING_FEATURES {
        content.push_str(&format!(
            "<div class=\"card\"><h3>{}</h3><p class=\"muted\"><small>{}</small></p></div>",
            escape(feature.title),
            escape(feature.description),
        ));
    }
    content.push_str("</div></section>");

    content.push_str(&format!(
        "<p class=\"disclaimer muted\">{}</p>",
        escape(RESEARCH_DISCLAIMER)
    ));

    content.push_str("</div>");
    page(site_title, "Research", PATH, &content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_research_page() {
        let html = render("Vitreo Hub");
        assert_eq!(html.matches("target=\"_blank\"").count(), RESEARCH_LINKS.len());
        assert!(html.contains("href=\"https://clinicaltrials.gov/search?cond=retinal&amp;intr=surgery\""));
        for feature in UPCOMING_FEATURES {
            assert!(html.contains(feature.title));
        }
        assert!(html.contains("Coming Soon"));
        assert!(html.contains("<a href=\"/research\" class=\"active\""));
    }
}
