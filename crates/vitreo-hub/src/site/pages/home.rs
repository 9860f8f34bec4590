//! Dashboard page

use super::innovations;
use crate::site::html::{badge, escape};
use crate::site::layout::page;
use vitreo_catalog::Dashboard;
use vitreo_types::Significance;

pub fn render(site_title: &str, dashboard: &Dashboard<'_>) -> String {
    let mut content = String::new();

    content.push_str(
        "<section class=\"hero\">\
         <p>Vitreoretinal Surgery Innovation Platform</p>\
         <h1>The Future of <span>Retinal Surgery</span></h1>\
         <p class=\"muted\">Explore cutting-edge innovations, surgical techniques, and \
         breakthroughs transforming vitreoretinal surgery, from robotic precision to \
         AI-powered diagnostics.</p>\
         <a class=\"button primary\" href=\"/innovations\">Explore Innovations</a>\
         <a class=\"button\" href=\"/techniques\">Browse Techniques</a>\
         </section>",
    );

    let stats = &dashboard.stats;
    content.push_str("<section class=\"stats\">");
    for (value, label) in [
        (stats.innovations.to_string(), "Innovations Tracked"),
        (stats.techniques.to_string(), "Surgical Techniques"),
        (stats.timeline_events.to_string(), "Timeline Milestones"),
        (stats.years_of_progress_label(), "Years of Progress"),
    ] {
        content.push_str(&format!(
            "<div><strong>{}</strong><span class=\"muted\">{}</span></div>",
            value, label
        ));
    }
    content.push_str("</section>");

    content.push_str(
        "<section class=\"container\"><h2>Featured Innovations</h2>\
         <p class=\"muted\">Breakthrough technologies reshaping vitreoretinal surgery \
         &middot; <a href=\"/innovations\">View all</a></p><div class=\"grid\">",
    );
    for innovation in &dashboard.featured {
        content.push_str(&innovations::card(innovation, false));
    }
    content.push_str("</div></section>");

    content.push_str(
        "<section class=\"container\"><h2>Recent Milestones</h2>\
         <p class=\"muted\">Key developments from the past decade \
         &middot; <a href=\"/timeline\">Full timeline</a></p>",
    );
    for event in &dashboard.recent_milestones {
        content.push_str(&format!(
            "<div class=\"card\"><span class=\"year\">{}</span> <strong>{}</strong>",
            event.year,
            escape(event.title),
        ));
        if event.significance == Significance::Landmark {
            content.push(' ');
            content.push_str(&badge("landmark", Significance::Landmark.label()));
        }
        content.push_str(&format!(
            "<p class=\"muted\">{}</p></div>",
            escape(event.description)
        ));
    }
    content.push_str("</section>");

    page(site_title, "", "/", &content)
}
