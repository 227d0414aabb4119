//! ASCII outline rendering for the guide tree.

use crate::models::DocPage;

const GROUP: char = '▸';
const LEAF: char = '·';

fn node_symbol(page: &DocPage) -> char {
    if page.is_leaf() {
        LEAF
    } else {
        GROUP
    }
}

/// Render the guide tree as an ASCII outline.
///
/// Example output:
/// ```text
/// Guides
/// ├── ▸ Overview
/// │   ├── · Introduction
/// │   └── · Quickstart
/// └── · FAQ
/// ```
pub fn render_outline(root: &DocPage) -> String {
    let mut output = String::new();
    render_node(&mut output, root, "", true, true);
    output
}

/// Recursively render a node and its children.
fn render_node(output: &mut String, page: &DocPage, prefix: &str, is_last: bool, is_root: bool) {
    if is_root {
        // Root node: just the title (no branch characters)
        output.push_str(&page.title);
        output.push('\n');
    } else {
        let branch = if is_last { "└── " } else { "├── " };
        output.push_str(prefix);
        output.push_str(branch);
        output.push(node_symbol(page));
        output.push(' ');
        output.push_str(&page.title);
        output.push('\n');
    }

    let child_prefix = if is_root {
        String::new()
    } else {
        let continuation = if is_last { "    " } else { "│   " };
        format!("{}{}", prefix, continuation)
    };

    let children = page.child_pages();
    for (i, child) in children.iter().enumerate() {
        let child_is_last = i == children.len() - 1;
        render_node(output, child, &child_prefix, child_is_last, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_a_bare_root() {
        let root = DocPage::group("Guides", "guides", vec![]);
        assert_eq!(render_outline(&root), "Guides\n");
    }

    #[test]
    fn renders_leaves_and_groups_with_distinct_symbols() {
        let root = DocPage::group(
            "Guides",
            "guides",
            vec![
                DocPage::group(
                    "Overview",
                    "overview",
                    vec![DocPage::leaf("Introduction", "introduction", "# Intro")],
                ),
                DocPage::leaf("FAQ", "faq", "# FAQ"),
            ],
        );
        let output = render_outline(&root);
        assert_eq!(
            output,
            "Guides\n├── ▸ Overview\n│   └── · Introduction\n└── · FAQ\n"
        );
    }

    #[test]
    fn continues_branch_lines_past_nested_groups() {
        let root = DocPage::group(
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
                DocPage::group(
                    "Data",
                    "data",
                    vec![DocPage::leaf("Models", "models", "# Models")],
                ),
            ],
        );
        let output = render_outline(&root);
        let expected = "Guides\n├── ▸ Overview\n│   ├── · Introduction\n│   └── · Quickstart\n└── ▸ Data\n    └── · Models\n";
        assert_eq!(output, expected);
    }
}
