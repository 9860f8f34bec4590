//! Vitreo Types - Record types for the vitreoretinal reference catalog
//!
//! The catalog holds three record sets, all compiled into the binary:
//!
//! - **Innovation**: a technology or therapy (instruments, imaging, robotics, ...)
//! - **Technique**: a surgical procedure, optionally linked to innovations
//! - **TimelineEvent**: a dated historical milestone
//!
//! Every enum in this crate is closed. Label lookups are total, so rendering
//! code never has to handle a missing label.
//!
//! ## Filters
//!
//! [`Filter`] models a tab selection: either the `all` sentinel or one
//! concrete enum value. Parsing an unknown tab value yields a [`ParseError`].

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod category;
pub mod error;
pub mod filter;
pub mod innovation;
pub mod technique;
pub mod timeline;

// Re-export main types
pub use category::{Category, TechniqueCategory, CATEGORY_LABELS, TECHNIQUE_CATEGORY_LABELS};
pub use error::ParseError;
pub use filter::Filter;
pub use innovation::{Innovation, InnovationStatus, MAX_IMPACT, MIN_IMPACT};
pub use technique::{Complexity, Technique};
pub use timeline::{Significance, TimelineCategory, TimelineEvent};
