//! Vitreo Catalog - Reference catalog and query layer
//!
//! This crate owns the compiled-in dataset and everything derived from it:
//!
//! - **ReferenceCatalog**: read access plus id lookups, category filters and
//!   relationship resolution
//! - **ListQuery**: category tab + free-text search over a record set
//! - **TimelineView**: stable year-descending sort grouped into decades
//! - **Dashboard**: featured innovations, recent milestones and counts
//! - **CatalogIntegrity**: a report of duplicate ids, bad impact ratings and
//!   dangling relationship ids
//!
//! All operations are pure. Dangling ids in a technique's related-innovation
//! list are dropped on read and never surface as errors.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod catalog;
pub mod dashboard;
pub mod data;
pub mod integrity;
pub mod memory;
pub mod search;
pub mod timeline;

// Re-exports
pub use catalog::ReferenceCatalog;
pub use dashboard::{
    Dashboard, DashboardParams, DashboardStats, FEATURED_INNOVATION_IDS, FOUNDING_YEAR, RECENT_LIMIT,
    RECENT_SINCE_YEAR,
};
pub use integrity::{CatalogIntegrity, DanglingRelation};
pub use memory::InMemoryCatalog;
pub use search::{InnovationQuery, ListQuery, Listed, Searchable, TechniqueQuery};
pub use timeline::{DecadeGroup, SignificanceCount, TimelineView};
