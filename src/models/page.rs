use serde::{Deserialize, Serialize};

/// A node in the guide navigation tree.
///
/// Pages form the `pages` half of a documentation snapshot. A node is either
/// a content leaf (markdown `body`) or a grouping node (`children`). The wire
/// format keeps both as independent optional fields, so well-formedness
/// (exactly one of the two present) is checked by traversal in
/// [`crate::catalog::lint`] rather than by the type. Leaves omit `children`
/// entirely and groups omit `body`, which the documentation-site generator
/// relies on to tell the two apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocPage {
    pub title: String,
    /// URL segment for this node, unique among its siblings.
    pub slug: String,
    /// Markdown content for a leaf page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Child pages for a grouping node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<DocPage>>,
}

impl DocPage {
    /// Create a content leaf.
    pub fn leaf(title: impl Into<String>, slug: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
            body: Some(body.into()),
            children: None,
        }
    }

    /// Create a grouping node.
    pub fn group(title: impl Into<String>, slug: impl Into<String>, children: Vec<DocPage>) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
            body: None,
            children: Some(children),
        }
    }

    /// Whether this node is a content leaf.
    pub fn is_leaf(&self) -> bool {
        self.body.is_some()
    }

    /// The node's children, or an empty slice for leaves.
    pub fn child_pages(&self) -> &[DocPage] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Resolve a `/`-separated slug path relative to this node.
    ///
    /// Each segment selects a child by slug; an empty path resolves to this
    /// node itself. Returns `None` when any segment does not match.
    pub fn find(&self, path: &str) -> Option<&DocPage> {
        let mut node = self;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            node = node.child_pages().iter().find(|c| c.slug == segment)?;
        }
        Some(node)
    }

    /// Visit every node in the tree, passing its slash-joined slug path
    /// (starting with this node's own slug).
    pub fn walk<F>(&self, mut visit: F)
    where
        F: FnMut(&str, &DocPage),
    {
        fn go<F: FnMut(&str, &DocPage)>(node: &DocPage, path: &mut String, visit: &mut F) {
            let rollback = path.len();
            if !path.is_empty() {
                path.push('/');
            }
            path.push_str(&node.slug);
            visit(path, node);
            for child in node.child_pages() {
                go(child, path, visit);
            }
            path.truncate(rollback);
        }

        let mut path = String::new();
        go(self, &mut path, &mut visit);
    }

    /// Number of content leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        let own = usize::from(self.body.is_some());
        own + self
            .child_pages()
            .iter()
            .map(DocPage::leaf_count)
            .sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> DocPage {
        DocPage::group(
            "Guides",
            "guides",
            vec![
                DocPage::group(
                    "Overview",
                    "overview",
                    vec![
                        DocPage::leaf("Introduction", "introduction", "# Intro"),
                        DocPage::leaf("Quickstart", "quickstart", "# Quickstart"),
                    ],
                ),
                DocPage::leaf("FAQ", "faq", "# FAQ"),
            ],
        )
    }

    #[test]
    fn find_resolves_nested_paths() {
        let tree = sample_tree();
        let page = tree.find("overview/introduction").unwrap();
        assert_eq!(page.title, "Introduction");
        assert!(page.is_leaf());
    }

    #[test]
    fn find_returns_none_for_unknown_segments() {
        let tree = sample_tree();
        assert!(tree.find("overview/missing").is_none());
        assert!(tree.find("missing").is_none());
    }

    #[test]
    fn find_with_empty_path_is_the_node_itself() {
        let tree = sample_tree();
        assert_eq!(tree.find("").unwrap().slug, "guides");
    }

    #[test]
    fn walk_visits_every_node_with_full_paths() {
        let tree = sample_tree();
        let mut paths = Vec::new();
        tree.walk(|path, _| paths.push(path.to_string()));
        assert_eq!(
            paths,
            vec![
                "guides",
                "guides/overview",
                "guides/overview/introduction",
                "guides/overview/quickstart",
                "guides/faq",
            ]
        );
    }

    #[test]
    fn leaf_count_counts_bodies_only() {
        assert_eq!(sample_tree().leaf_count(), 3);
    }
}
