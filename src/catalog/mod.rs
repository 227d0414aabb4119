pub mod lint;

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::content;
use crate::models::{ApiEntity, ApiMember, DocPage, PackageApi, VersionSnapshot, VersionSummary};

pub use lint::ContentIssue;

/// The in-process snapshot store the API and CLI read from.
///
/// The catalog is immutable: snapshots are built once, at load, and only
/// ever read afterwards. Cloning shares the underlying content.
pub struct DocCatalog {
    snapshots: Arc<Vec<VersionSnapshot>>,
}

impl DocCatalog {
    /// Load the compiled-in content. Infallible: the content is inert data
    /// with no failure paths.
    pub fn load() -> Self {
        Self::from_snapshots(content::snapshots())
    }

    /// Build a catalog from explicit snapshots. Used by tests to exercise
    /// the catalog against synthetic content.
    pub fn from_snapshots(snapshots: Vec<VersionSnapshot>) -> Self {
        Self {
            snapshots: Arc::new(snapshots),
        }
    }

    // ============================================================
    // Lookups
    // ============================================================

    pub fn snapshots(&self) -> &[VersionSnapshot] {
        &self.snapshots
    }

    pub fn summaries(&self) -> Vec<VersionSummary> {
        self.snapshots.iter().map(VersionSummary::from).collect()
    }

    /// Snapshot with an exactly matching version id.
    pub fn get_version(&self, version_id: &str) -> Option<&VersionSnapshot> {
        self.snapshots.iter().find(|s| s.version_id == version_id)
    }

    /// Resolve a `/`-separated slug path under a version's guide root.
    pub fn find_page(&self, version_id: &str, slug_path: &str) -> Option<&DocPage> {
        self.get_version(version_id)?.pages.find(slug_path)
    }

    pub fn get_package(&self, version_id: &str, package: &str) -> Option<&PackageApi> {
        self.get_version(version_id)?.api.get_package(package)
    }

    /// Find a class by name, searching every package of the version.
    pub fn find_class(&self, version_id: &str, name: &str) -> Option<&ApiEntity> {
        self.get_version(version_id)?.api.find_class(name)
    }

    /// Find an interface by name, searching every package of the version.
    pub fn find_interface(&self, version_id: &str, name: &str) -> Option<&ApiEntity> {
        self.get_version(version_id)?.api.find_interface(name)
    }

    /// Find a package-level function by name, searching every package of
    /// the version.
    pub fn find_function(&self, version_id: &str, name: &str) -> Option<&ApiMember> {
        self.get_version(version_id)?.api.find_function(name)
    }

    // ============================================================
    // Lint & export
    // ============================================================

    /// Structural verification of the held content. Advisory: loading never
    /// fails on content issues, but `denali-docs check` exits non-zero on
    /// any.
    pub fn lint(&self) -> Vec<ContentIssue> {
        lint::lint(&self.snapshots)
    }

    /// The full snapshot array as a JSON string, the exact payload the
    /// documentation-site generator consumes.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self.snapshots())
        } else {
            serde_json::to_string(self.snapshots())
        };
        json.context("Failed to serialize snapshots")
    }

    /// Write the snapshot array as JSON to the given writer.
    pub fn write_json<W: Write>(&self, mut writer: W, pretty: bool) -> Result<()> {
        let json = self.to_json(pretty)?;
        writer
            .write_all(json.as_bytes())
            .context("Failed to write snapshot payload")?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

impl Clone for DocCatalog {
    fn clone(&self) -> Self {
        Self {
            snapshots: self.snapshots.clone(),
        }
    }
}
