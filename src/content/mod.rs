//! The compiled-in documentation content.
//!
//! Everything the documentation site shows is authored here: the guide tree
//! (markdown bodies embedded at compile time) and the reflected API metadata
//! for `@denali-js/core`. Content is inert data; nothing in this module can
//! fail at runtime.

mod api;
mod guides;

use chrono::{DateTime, TimeZone, Utc};

use crate::models::VersionSnapshot;

pub use api::CORE_PACKAGE;

/// Version id of the authored snapshot.
pub const BASE_VERSION_ID: &str = "@denali-js:core@v0.1";

/// Version id of the derived floating snapshot.
pub const LATEST_VERSION_ID: &str = "@denali-js:core@latest";

/// When this content revision was captured. Both snapshots share it.
pub fn created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2017, 10, 23, 18, 24, 30)
        .single()
        .expect("content timestamp is a valid UTC datetime")
}

/// Build the snapshot array the documentation site consumes: the base
/// snapshot, followed by a copy of it retagged as `@latest`.
pub fn snapshots() -> Vec<VersionSnapshot> {
    let base = VersionSnapshot {
        version_id: BASE_VERSION_ID.to_string(),
        created_at: created_at(),
        pages: guides::pages(),
        api: api::index(),
    };
    let latest = base.with_version_id(LATEST_VERSION_ID);
    vec![base, latest]
}
