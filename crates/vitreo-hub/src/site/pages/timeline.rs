//! Innovation timeline page

use crate::site::html::{badge, empty_state, escape, href, tab_bar, Tab};
use crate::site::layout::page;
use vitreo_catalog::{SignificanceCount, TimelineView};
use vitreo_types::{Filter, Significance, TimelineEvent};

const PATH: &str = "/timeline";

/// All, then one tab per significance carrying its event count
pub fn tabs(filter: Filter<Significance>, counts: &[SignificanceCount]) -> Vec<Tab> {
    let all = Tab {
        label: "All".to_string(),
        href: PATH.to_string(),
        active: filter.is_all(),
    };

    std::iter::once(all)
        .chain(counts.iter().map(|c| Tab {
            label: format!("{} ({})", c.significance.label(), c.count),
            href: href(PATH, &[("significance", c.significance.as_str())]),
            active: filter == Filter::Only(c.significance),
        }))
        .collect()
}

fn event(event: &TimelineEvent) -> String {
    let landmark = event.significance == Significance::Landmark;
    format!(
        "<div class=\"event{}\"><span class=\"year\">{}</span> {} {}<h3>{}</h3>\
         <p class=\"muted\">{}</p></div>",
        if landmark { " landmark" } else { "" },
        event.year,
        badge(event.significance.as_str(), event.significance.as_str()),
        badge("", event.category.label()),
        escape(event.title),
        escape(event.description),
    )
}

pub fn render(site_title: &str, view: &TimelineView<'_>, founding_year: i32) -> String {
    let mut content = String::from("<div class=\"container narrow timeline\">");
    content.push_str(&format!(
        "<h1>Innovation Timeline</h1><p class=\"muted\">{} milestones from {} to today</p>",
        view.total_events, founding_year
    ));
    content.push_str(&tab_bar(&tabs(view.filter, &view.counts)));

    for group in &view.decades {
        content.push_str(&format!(
            "<section class=\"decade\"><h2>{}</h2>",
            escape(&group.label)
        ));
        for e in &group.events {
            content.push_str(&event(e));
        }
        content.push_str("</section>");
    }

    if view.is_empty() {
        content.push_str(&empty_state(
            "No milestones match this filter",
            "",
            PATH,
            "Show all milestones",
        ));
    }

    content.push_str("</div>");
    page(site_title, "Timeline", PATH, &content)
}
