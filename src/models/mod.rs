//! Domain models for the documentation content service.
//!
//! # Core Concepts
//!
//! ## Guides
//!
//! - [`DocPage`]: a node in the guide navigation tree. Grouping nodes carry
//!   `children`; content leaves carry a markdown `body`. Well-formed nodes
//!   carry exactly one of the two, which is verified by traversal in
//!   [`crate::catalog::lint`] rather than by construction.
//!
//! ## API reference
//!
//! - [`ApiEntity`]: reflected metadata for one class or interface exported
//!   by the documented framework, as captured by the documentation
//!   extraction tool.
//! - [`ApiMember`]: one reflected property or method. Properties carry a
//!   `type`, methods carry `signatures`. Package-level functions are
//!   member-shaped and reuse this record.
//! - [`Signature`]: one call shape (parameter list plus return type) of an
//!   overloaded method or function.
//! - [`PackageApi`] / [`ApiIndex`]: per-package entity maps and the
//!   package map itself.
//!
//! ## Snapshots
//!
//! - [`VersionSnapshot`]: one versioned documentation snapshot: the guide
//!   tree plus the API index, tagged with a registry-style version id and a
//!   creation timestamp. Snapshots are immutable content: nothing in them
//!   is created, mutated, or destroyed at runtime.
//! - [`VersionSummary`]: the list-endpoint view of a snapshot.

mod entity;
mod member;
mod page;
mod signature;
mod snapshot;

pub use entity::*;
pub use member::*;
pub use page::*;
pub use signature::*;
pub use snapshot::*;
