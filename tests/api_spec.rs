use axum_test::TestServer;
use denali_docs::api::create_router;
use denali_docs::catalog::DocCatalog;
use denali_docs::content;
use denali_docs::models::*;

fn setup() -> TestServer {
    let catalog = DocCatalog::load();
    let app = create_router(catalog);
    TestServer::new(app).expect("Failed to create test server")
}

mod versions {
    use super::*;

    #[tokio::test]
    async fn lists_both_snapshots() {
        let server = setup();

        let response = server.get("/api/v1/versions").await;

        response.assert_status_ok();
        let summaries: Vec<VersionSummary> = response.json();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].version_id, content::BASE_VERSION_ID);
        assert_eq!(summaries[1].version_id, content::LATEST_VERSION_ID);
    }

    #[tokio::test]
    async fn returns_a_snapshot_by_id() {
        let server = setup();

        let response = server
            .get(&format!("/api/v1/versions/{}", content::LATEST_VERSION_ID))
            .await;

        response.assert_status_ok();
        let snapshot: VersionSnapshot = response.json();
        assert_eq!(snapshot.version_id, content::LATEST_VERSION_ID);
        assert_eq!(snapshot.pages.slug, "guides");
    }

    #[tokio::test]
    async fn serializes_the_wire_shape() {
        let server = setup();

        let response = server
            .get(&format!("/api/v1/versions/{}", content::BASE_VERSION_ID))
            .await;

        response.assert_status_ok();
        let value: serde_json::Value = response.json();
        assert!(value["versionId"].is_string());
        assert!(value["createdAt"].is_string());
        assert!(value["pages"].is_object());
        assert!(value["api"]["packages"].is_object());
    }

    #[tokio::test]
    async fn returns_404_for_unknown_version() {
        let server = setup();

        let response = server.get("/api/v1/versions/@denali-js:core@v9.9").await;

        response.assert_status_not_found();
        assert!(response.text().contains("Version not found"));
    }
}

mod pages {
    use super::*;

    #[tokio::test]
    async fn returns_the_guide_tree_root() {
        let server = setup();

        let response = server
            .get(&format!(
                "/api/v1/versions/{}/pages",
                content::LATEST_VERSION_ID
            ))
            .await;

        response.assert_status_ok();
        let root: DocPage = response.json();
        assert_eq!(root.slug, "guides");
        assert!(!root.child_pages().is_empty());
    }

    #[tokio::test]
    async fn resolves_a_nested_slug_path() {
        let server = setup();

        let response = server
            .get(&format!(
                "/api/v1/versions/{}/pages/overview/introduction",
                content::LATEST_VERSION_ID
            ))
            .await;

        response.assert_status_ok();
        let page: DocPage = response.json();
        assert_eq!(page.title, "Introduction");
        assert!(page.body.is_some());
        assert!(page.children.is_none());
    }

    #[tokio::test]
    async fn returns_404_for_unknown_path() {
        let server = setup();

        let response = server
            .get(&format!(
                "/api/v1/versions/{}/pages/overview/missing",
                content::LATEST_VERSION_ID
            ))
            .await;

        response.assert_status_not_found();
        assert!(response.text().contains("No page at path"));
    }

    #[tokio::test]
    async fn returns_404_for_unknown_version() {
        let server = setup();

        let response = server
            .get("/api/v1/versions/@denali-js:core@v9.9/pages/overview/introduction")
            .await;

        response.assert_status_not_found();
        assert!(response.text().contains("Version not found"));
    }
}

mod api_reference {
    use super::*;

    #[tokio::test]
    async fn returns_the_api_index() {
        let server = setup();

        let response = server
            .get(&format!(
                "/api/v1/versions/{}/api",
                content::LATEST_VERSION_ID
            ))
            .await;

        response.assert_status_ok();
        let index: ApiIndex = response.json();
        assert!(index.get_package(content::CORE_PACKAGE).is_some());
    }

    #[tokio::test]
    async fn returns_a_package_through_the_wildcard_path() {
        let server = setup();

        // Package names contain '/', hence the wildcard route.
        let response = server
            .get(&format!(
                "/api/v1/versions/{}/api/{}",
                content::LATEST_VERSION_ID,
                content::CORE_PACKAGE
            ))
            .await;

        response.assert_status_ok();
        let package: PackageApi = response.json();
        assert!(package.classes.contains_key("Action"));
        assert!(package.interfaces.contains_key("ParsedRequest"));
        assert!(package.functions.contains_key("mixin"));
    }

    #[tokio::test]
    async fn returns_404_for_unknown_package() {
        let server = setup();

        let response = server
            .get(&format!(
                "/api/v1/versions/{}/api/@denali-js/unknown",
                content::LATEST_VERSION_ID
            ))
            .await;

        response.assert_status_not_found();
        assert!(response.text().contains("No package named"));
    }
}

mod health {
    use super::*;

    #[tokio::test]
    async fn reports_ok() {
        let server = setup();

        let response = server.get("/api/v1/health").await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "ok");
    }
}
