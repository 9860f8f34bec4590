//! In-memory catalog
//!
//! Built once at startup from the compiled-in tables and shared read-only
//! for the life of the process.

use crate::catalog::ReferenceCatalog;
use crate::data::{INNOVATIONS, TECHNIQUES, TIMELINE_EVENTS};
use vitreo_types::{Innovation, Technique, TimelineEvent};

/// Immutable snapshot of the three record sets
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    innovations: Vec<Innovation>,
    techniques: Vec<Technique>,
    timeline_events: Vec<TimelineEvent>,
}

impl InMemoryCatalog {
    /// Create a catalog from explicit record sets
    pub fn new(
        innovations: Vec<Innovation>,
        techniques: Vec<Technique>,
        timeline_events: Vec<TimelineEvent>,
    ) -> Self {
        Self {
            innovations,
            techniques,
            timeline_events,
        }
    }

    /// Catalog holding the compiled-in reference dataset
    pub fn builtin() -> Self {
        let catalog = Self::new(
            INNOVATIONS.to_vec(),
            TECHNIQUES.to_vec(),
            TIMELINE_EVENTS.to_vec(),
        );

        tracing::debug!(
            innovations = catalog.innovations.len(),
            techniques = catalog.techniques.len(),
            timeline_events = catalog.timeline_events.len(),
            "Loaded builtin catalog"
        );

        catalog
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ReferenceCatalog for InMemoryCatalog {
    fn innovations(&self) -> &[Innovation] {
        &self.innovations
    }

    fn techniques(&self) -> &[Technique] {
        &self.techniques
    }

    fn timeline_events(&self) -> &[TimelineEvent] {
        &self.timeline_events
    }
}
