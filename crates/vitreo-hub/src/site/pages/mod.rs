//! Page renderers
//!
//! Each renderer is a pure function from catalog data to a full HTML document.

pub mod home;
pub mod innovations;
pub mod research;
pub mod status;
pub mod techniques;
pub mod timeline;
