//! The guide navigation tree.
//!
//! Section structure lives here; the markdown bodies live in `guides/` and
//! are embedded at compile time.

use crate::models::DocPage;

/// The root of the guide tree. Children of the root are the top-level
/// sections the site generator renders as navigation groups.
pub fn pages() -> DocPage {
    DocPage::group(
        "Guides",
        "guides",
        vec![
            DocPage::group(
                "Overview",
                "overview",
                vec![
                    DocPage::leaf(
                        "Introduction",
                        "introduction",
                        include_str!("guides/introduction.md"),
                    ),
                    DocPage::leaf(
                        "Quickstart",
                        "quickstart",
                        include_str!("guides/quickstart.md"),
                    ),
                    DocPage::leaf(
                        "Application Structure",
                        "app-structure",
                        include_str!("guides/app-structure.md"),
                    ),
                ],
            ),
            DocPage::group(
                "Application",
                "application",
                vec![
                    DocPage::leaf("Actions", "actions", include_str!("guides/actions.md")),
                    DocPage::leaf("Routing", "routing", include_str!("guides/routing.md")),
                    DocPage::leaf(
                        "Container & Dependency Injection",
                        "container",
                        include_str!("guides/container.md"),
                    ),
                    DocPage::leaf("Services", "services", include_str!("guides/services.md")),
                    DocPage::leaf("Error Handling", "errors", include_str!("guides/errors.md")),
                ],
            ),
            DocPage::group(
                "Data",
                "data",
                vec![
                    DocPage::leaf("Models", "models", include_str!("guides/models.md")),
                    DocPage::leaf(
                        "ORM Adapters",
                        "orm-adapters",
                        include_str!("guides/orm-adapters.md"),
                    ),
                    DocPage::leaf(
                        "Serializers",
                        "serializers",
                        include_str!("guides/serializers.md"),
                    ),
                ],
            ),
            DocPage::group(
                "Configuration",
                "configuration",
                vec![
                    DocPage::leaf(
                        "Environment",
                        "environment",
                        include_str!("guides/environment.md"),
                    ),
                    DocPage::leaf(
                        "Middleware",
                        "middleware",
                        include_str!("guides/middleware.md"),
                    ),
                    DocPage::leaf(
                        "Initializers",
                        "initializers",
                        include_str!("guides/initializers.md"),
                    ),
                ],
            ),
            DocPage::group(
                "Testing",
                "testing",
                vec![
                    DocPage::leaf(
                        "Unit Testing",
                        "unit-testing",
                        include_str!("guides/unit-testing.md"),
                    ),
                    DocPage::leaf(
                        "Acceptance Testing",
                        "acceptance-testing",
                        include_str!("guides/acceptance-testing.md"),
                    ),
                ],
            ),
            DocPage::group(
                "Utilities",
                "utilities",
                vec![
                    DocPage::leaf("Addons", "addons", include_str!("guides/addons.md")),
                    DocPage::leaf("Mixins", "mixins", include_str!("guides/mixins.md")),
                    DocPage::leaf(
                        "Instrumentation",
                        "instrumentation",
                        include_str!("guides/instrumentation.md"),
                    ),
                ],
            ),
        ],
    )
}
