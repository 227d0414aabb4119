//! Versioned guides and API reference content for the Denali documentation
//! site.
//!
//! The crate compiles the documentation content in ([`content`]), holds it in
//! an immutable in-process catalog ([`catalog`]), and serves it to the
//! documentation-site generator over a read-only JSON API ([`api`]) or as an
//! exported payload file.

pub mod api;
pub mod catalog;
pub mod content;
pub mod models;
pub mod outline;
