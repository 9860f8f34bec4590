//! Compiled-in reference dataset
//!
//! Declaration order in these tables is the iteration order of every
//! unsorted query.

mod innovations;
mod research;
mod techniques;
mod timeline;

pub use innovations::INNOVATIONS;
pub use research::{ResearchLink, UpcomingFeature, RESEARCH_DISCLAIMER, RESEARCH_LINKS, UPCOMING_FEATURES};
pub use techniques::TECHNIQUES;
pub use timeline::TIMELINE_EVENTS;
