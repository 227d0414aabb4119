//! Structural lint for documentation content.
//!
//! The wire format is loose by design (a page node carries two independent
//! optional fields), so well-formedness is verified by traversal here
//! instead of by construction.

use std::collections::HashSet;

use crate::models::{ApiEntity, DocPage, VersionSnapshot};

/// One structural problem found in the content.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentIssue {
    #[error("page '{path}' has both a body and children")]
    BodyAndChildren { path: String },

    #[error("page '{path}' has neither a body nor children")]
    EmptyPage { path: String },

    #[error("duplicate slug '{slug}' among children of '{path}'")]
    DuplicateSlug { path: String, slug: String },

    #[error("malformed slug '{slug}' at '{path}'")]
    MalformedSlug { path: String, slug: String },

    #[error("method '{entity}.{name}' has no signatures")]
    MethodWithoutSignatures { entity: String, name: String },

    #[error("duplicate version id '{id}'")]
    DuplicateVersionId { id: String },
}

/// Check every snapshot. An empty result means the content is well-formed.
pub fn lint(snapshots: &[VersionSnapshot]) -> Vec<ContentIssue> {
    let mut issues = Vec::new();

    let mut seen_versions = HashSet::new();
    for snapshot in snapshots {
        if !seen_versions.insert(snapshot.version_id.as_str()) {
            issues.push(ContentIssue::DuplicateVersionId {
                id: snapshot.version_id.clone(),
            });
        }
    }

    // Both snapshots of a pair hold identical content; checking each keeps
    // the lint honest about what is actually shipped.
    for snapshot in snapshots {
        lint_page(&snapshot.pages, &snapshot.version_id, &mut issues);
        for package in snapshot.api.packages.values() {
            for entity in package.classes.values().chain(package.interfaces.values()) {
                lint_entity(entity, &mut issues);
            }
        }
    }

    issues
}

fn lint_page(page: &DocPage, path: &str, issues: &mut Vec<ContentIssue>) {
    let path = format!("{}/{}", path, page.slug);

    if !is_valid_slug(&page.slug) {
        issues.push(ContentIssue::MalformedSlug {
            path: path.clone(),
            slug: page.slug.clone(),
        });
    }

    match (&page.body, &page.children) {
        (Some(_), Some(_)) => issues.push(ContentIssue::BodyAndChildren { path: path.clone() }),
        (None, None) => issues.push(ContentIssue::EmptyPage { path: path.clone() }),
        _ => {}
    }

    let mut seen = HashSet::new();
    for child in page.child_pages() {
        if !seen.insert(child.slug.as_str()) {
            issues.push(ContentIssue::DuplicateSlug {
                path: path.clone(),
                slug: child.slug.clone(),
            });
        }
    }

    for child in page.child_pages() {
        lint_page(child, &path, issues);
    }
}

fn lint_entity(entity: &ApiEntity, issues: &mut Vec<ContentIssue>) {
    for member in entity.static_methods.iter().chain(&entity.methods) {
        let has_signatures = member
            .signatures
            .as_ref()
            .is_some_and(|sigs| !sigs.is_empty());
        if !has_signatures {
            issues.push(ContentIssue::MethodWithoutSignatures {
                entity: entity.name.clone(),
                name: member.name.clone(),
            });
        }
    }
}

/// Slugs are non-empty lowercase `a-z0-9-`, with no leading, trailing, or
/// doubled hyphen.
fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_slugs() {
        assert!(is_valid_slug("guides"));
        assert!(is_valid_slug("orm-adapters"));
        assert!(is_valid_slug("v2"));
    }

    #[test]
    fn rejects_malformed_slugs() {
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("Overview"));
        assert!(!is_valid_slug("app_structure"));
        assert!(!is_valid_slug("-leading"));
        assert!(!is_valid_slug("trailing-"));
        assert!(!is_valid_slug("double--hyphen"));
    }
}
