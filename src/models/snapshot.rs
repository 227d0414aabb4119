use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{ApiIndex, DocPage};

/// One versioned documentation snapshot: the guide tree plus the reflected
/// API index, tagged with a registry-style version id.
///
/// Snapshots are immutable content. The only transformation defined on them
/// is [`with_version_id`](Self::with_version_id), which the content module
/// uses to derive the floating `@latest` entry from the base one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionSnapshot {
    pub version_id: String,
    pub created_at: DateTime<Utc>,
    pub pages: DocPage,
    pub api: ApiIndex,
}

impl VersionSnapshot {
    /// Clone the snapshot, overriding only the version identifier.
    pub fn with_version_id(&self, version_id: impl Into<String>) -> Self {
        Self {
            version_id: version_id.into(),
            ..self.clone()
        }
    }

    /// Number of content leaves in the guide tree.
    pub fn page_count(&self) -> usize {
        self.pages.leaf_count()
    }

    /// Number of reflected classes across all packages.
    pub fn class_count(&self) -> usize {
        self.api.class_count()
    }
}

/// The list-endpoint view of a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionSummary {
    pub version_id: String,
    pub created_at: DateTime<Utc>,
    pub page_count: usize,
    pub class_count: usize,
}

impl From<&VersionSnapshot> for VersionSummary {
    fn from(snapshot: &VersionSnapshot) -> Self {
        Self {
            version_id: snapshot.version_id.clone(),
            created_at: snapshot.created_at,
            page_count: snapshot.page_count(),
            class_count: snapshot.class_count(),
        }
    }
}
