//! Dashboard model: featured innovations, recent milestones, headline counts

use crate::catalog::ReferenceCatalog;
use crate::timeline::recent_milestones;
use serde::Serialize;
use vitreo_types::{Innovation, TimelineEvent};

/// Innovations highlighted on the dashboard, in display order
pub const FEATURED_INNOVATION_IDS: [&str; 4] =
    ["preceyes", "ioct", "ai-diagnostics", "gene-therapy"];

/// Year of the first pars plana vitrectomy
pub const FOUNDING_YEAR: i32 = 1970;

/// Default cutoff year for recent milestones
pub const RECENT_SINCE_YEAR: i32 = 2017;

/// Default number of recent milestones shown
pub const RECENT_LIMIT: usize = 5;

/// Inputs of the dashboard that are not part of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardParams {
    /// Base year of the "years of progress" counter
    pub founding_year: i32,
    pub current_year: i32,
    /// Earliest year listed under recent milestones
    pub recent_since_year: i32,
    pub recent_limit: usize,
}

impl DashboardParams {
    /// Default settings for the given current year
    pub fn for_year(current_year: i32) -> Self {
        Self {
            founding_year: FOUNDING_YEAR,
            current_year,
            recent_since_year: RECENT_SINCE_YEAR,
            recent_limit: RECENT_LIMIT,
        }
    }
}

/// Headline counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub innovations: usize,
    pub techniques: usize,
    pub timeline_events: usize,
    pub years_of_progress: i32,
}

impl DashboardStats {
    pub fn collect(catalog: &dyn ReferenceCatalog, founding_year: i32, current_year: i32) -> Self {
        Self {
            innovations: catalog.innovations().len(),
            techniques: catalog.techniques().len(),
            timeline_events: catalog.timeline_events().len(),
            years_of_progress: (current_year - founding_year).max(0),
        }
    }

    /// Rendered as `"{n}+"`
    pub fn years_of_progress_label(&self) -> String {
        format!("{}+", self.years_of_progress)
    }
}

/// Everything the dashboard renders
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard<'a> {
    pub stats: DashboardStats,
    pub featured: Vec<&'a Innovation>,
    pub recent_milestones: Vec<&'a TimelineEvent>,
}

impl<'a> Dashboard<'a> {
    pub fn build(catalog: &'a dyn ReferenceCatalog, params: DashboardParams) -> Self {
        Self {
            stats: DashboardStats::collect(catalog, params.founding_year, params.current_year),
            featured: featured_innovations(catalog, &FEATURED_INNOVATION_IDS),
            recent_milestones: recent_milestones(
                catalog.timeline_events(),
                params.recent_since_year,
                params.recent_limit,
            ),
        }
    }
}

/// Resolve a fixed id list, skipping ids that do not resolve
pub fn featured_innovations<'a>(
    catalog: &'a dyn ReferenceCatalog,
    ids: &[&str],
) -> Vec<&'a Innovation> {
    ids.iter()
        .filter_map(|id| catalog.innovation_by_id(id))
        .collect()
}
