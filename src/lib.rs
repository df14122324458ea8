//! Album color table and page-load context for a music-release site.

pub mod config;
pub mod page;
pub mod palette;
