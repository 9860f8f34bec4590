//! Timeline derivations
//!
//! Events are sorted by year descending with a stable sort, so same-year
//! events keep their authored order. Decade buckets are listed newest first.

use serde::Serialize;
use vitreo_types::{Filter, Significance, TimelineEvent};

/// Events sorted by year, newest first. Ties keep input order.
pub fn sorted_newest_first<'a, I>(events: I) -> Vec<&'a TimelineEvent>
where
    I: IntoIterator<Item = &'a TimelineEvent>,
{
    let mut sorted: Vec<_> = events.into_iter().collect();
    // `sort_by` is stable
    sorted.sort_by(|a, b| b.year.cmp(&a.year));
    sorted
}

/// Label of a decade bucket, e.g. `"2010s"`
pub fn decade_label(decade: i32) -> String {
    format!("{}s", decade)
}

/// Events that fall in one decade
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecadeGroup<'a> {
    /// First year of the decade
    pub decade: i32,
    pub label: String,
    pub events: Vec<&'a TimelineEvent>,
}

/// Bucket events into decades.
///
/// Decades come out in descending order. Inside a bucket the input order is
/// kept, so feed this an already sorted list.
pub fn group_by_decade<'a>(events: &[&'a TimelineEvent]) -> Vec<DecadeGroup<'a>> {
    let mut groups: Vec<DecadeGroup<'a>> = Vec::new();

    for &event in events {
        let decade = event.decade();
        match groups.iter_mut().find(|g| g.decade == decade) {
            Some(group) => group.events.push(event),
            None => groups.push(DecadeGroup {
                decade,
                label: decade_label(decade),
                events: vec![event],
            }),
        }
    }

    groups.sort_by(|a, b| b.decade.cmp(&a.decade));
    groups
}

/// Events at or after `since_year`, newest first, at most `limit` of them
pub fn recent_milestones(
    events: &[TimelineEvent],
    since_year: i32,
    limit: usize,
) -> Vec<&TimelineEvent> {
    let mut recent = sorted_newest_first(events.iter().filter(|e| e.year >= since_year));
    recent.truncate(limit);
    recent
}

/// Number of events carrying one significance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignificanceCount {
    pub significance: Significance,
    pub count: usize,
}

/// Per-significance counts over the full event list, in tab order
pub fn significance_counts(events: &[TimelineEvent]) -> Vec<SignificanceCount> {
    Significance::ALL
        .into_iter()
        .map(|significance| SignificanceCount {
            significance,
            count: events
                .iter()
                .filter(|e| e.significance == significance)
                .count(),
        })
        .collect()
}

/// Timeline page model: filter, then sort, then group
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineView<'a> {
    pub filter: Filter<Significance>,
    pub total_events: usize,
    pub matching_events: usize,
    pub counts: Vec<SignificanceCount>,
    pub decades: Vec<DecadeGroup<'a>>,
}

impl<'a> TimelineView<'a> {
    pub fn build(events: &'a [TimelineEvent], filter: Filter<Significance>) -> Self {
        let sorted = sorted_newest_first(events.iter().filter(|e| filter.matches(&e.significance)));
        let decades = group_by_decade(&sorted);

        Self {
            filter,
            total_events: events.len(),
            matching_events: sorted.len(),
            counts: significance_counts(events),
            decades,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.matching_events == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ReferenceCatalog;
    use crate::memory::InMemoryCatalog;
    use proptest::prelude::*;
    use vitreo_types::TimelineCategory;

    fn event(year: i32, title: &'static str) -> TimelineEvent {
        TimelineEvent {
            year,
            title,
            description: "",
            category: TimelineCategory::Milestone,
            significance: Significance::Notable,
        }
    }

    #[test]
    fn test_sort_keeps_same_year_events_in_authored_order() {
        let catalog = InMemoryCatalog::builtin();
        let sorted = sorted_newest_first(catalog.timeline_events());

        let pos = |prefix: &str| {
            sorted
                .iter()
                .position(|e| e.title.starts_with(prefix))
                .unwrap()
        };

        let faricimab = pos("Faricimab");
        let eva = pos("EVA Nexus");
        assert_eq!(eva, faricimab + 1);

        let gene = pos("First Gene Therapy");
        let hud = pos("3D Heads-Up");
        assert_eq!(hud, gene + 1);

        assert_eq!(sorted.first().unwrap().year, 2024);
        assert_eq!(sorted.last().unwrap().year, 1970);
    }

    #[test]
    fn test_decade_labels() {
        let events = [event(2019, "a"), event(1970, "b")];
        let refs: Vec<_> = events.iter().collect();
        let groups = group_by_decade(&refs);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "2010s");
        assert_eq!(groups[0].events[0].title, "a");
        assert_eq!(groups[1].label, "1970s");
    }

    #[test]
    fn test_groups_are_newest_first() {
        let catalog = InMemoryCatalog::builtin();
        let view = TimelineView::build(catalog.timeline_events(), Filter::All);
        let labels: Vec<_> = view.decades.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["2020s", "2010s", "2000s", "1990s", "1980s", "1970s"]);
        assert_eq!(view.matching_events, 21);
    }

    #[test]
    fn test_significance_filter_applies_before_grouping() {
        let catalog = InMemoryCatalog::builtin();
        let view = TimelineView::build(
            catalog.timeline_events(),
            Filter::Only(Significance::Notable),
        );
        let titles: Vec<_> = view
            .decades
            .iter()
            .flat_map(|g| g.events.iter().map(|e| e.title))
            .collect();
        assert_eq!(
            titles,
            vec![
                "AI Surgical Planning Integration",
                "OQrimo Surgical Robot Approved in Japan",
                "23-Gauge Vitrectomy Introduced",
            ]
        );
        assert_eq!(view.decades.len(), 2);
    }

    #[test]
    fn test_significance_counts() {
        let catalog = InMemoryCatalog::builtin();
        let counts = significance_counts(catalog.timeline_events());
        let total: usize = counts.iter().map(|c| c.count).sum();
        assert_eq!(total, catalog.timeline_events().len());
        assert_eq!(counts[2].significance, Significance::Notable);
        assert_eq!(counts[2].count, 3);
    }

    #[test]
    fn test_recent_milestones_cutoff() {
        let catalog = InMemoryCatalog::builtin();
        let all_recent = recent_milestones(catalog.timeline_events(), 2017, usize::MAX);
        assert!(all_recent.iter().all(|e| e.year >= 2017));
        assert!(!all_recent.iter().any(|e| e.title == "First Pars Plana Vitrectomy"));
        assert!(all_recent.iter().any(|e| e.title == "AI Surgical Planning Integration"));

        let recent = recent_milestones(catalog.timeline_events(), 2017, 5);
        let titles: Vec<_> = recent.iter().map(|e| e.title).collect();
        assert_eq!(
            titles,
            vec![
                "AI Surgical Planning Integration",
                "OQrimo Surgical Robot Approved in Japan",
                "Faricimab Bispecific Antibody Approved",
                "EVA Nexus Platform Launch",
                "First Robotic Subretinal Injection",
            ]
        );
    }

    #[test]
    fn test_view_serializes_camel_case_keys() {
        let catalog = InMemoryCatalog::builtin();
        let view = TimelineView::build(catalog.timeline_events(), Filter::Only(Significance::Notable));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["totalEvents"], 21);
        assert_eq!(json["matchingEvents"], 3);
        assert_eq!(json["counts"][2]["significance"], "notable");
        assert_eq!(json["decades"][0]["label"], "2020s");
        assert!(json.get("matching_events").is_none());
    }

    #[test]
    fn test_empty_view() {
        let view = TimelineView::build(&[], Filter::All);
        assert!(view.is_empty());
        assert!(view.decades.is_empty());
    }

    proptest! {
        #[test]
        fn prop_grouping_preserves_every_event(years in prop::collection::vec(1900i32..2100, 0..40)) {
            let events: Vec<_> = years.iter().map(|&y| event(y, "e")).collect();
            let sorted = sorted_newest_first(&events);
            let groups = group_by_decade(&sorted);

            let flattened: Vec<_> = groups.iter().flat_map(|g| g.events.iter().copied()).collect();
            prop_assert_eq!(flattened, sorted);

            for group in &groups {
                prop_assert!(group.events.iter().all(|e| e.decade() == group.decade));
            }
            for pair in groups.windows(2) {
                prop_assert!(pair[0].decade > pair[1].decade);
            }
        }
    }
}
