use denali_docs::content;
use denali_docs::models::{Access, DocPage};
use speculate2::speculate;

/// Assert slug uniqueness among every sibling list in the tree.
fn assert_unique_sibling_slugs(page: &DocPage) {
    let mut seen = std::collections::HashSet::new();
    for child in page.child_pages() {
        assert!(
            seen.insert(child.slug.as_str()),
            "duplicate slug '{}' under '{}'",
            child.slug,
            page.slug
        );
    }
    for child in page.child_pages() {
        assert_unique_sibling_slugs(child);
    }
}

speculate! {
    before {
        let snapshots = content::snapshots();
    }

    describe "snapshot derivation" {
        it "produces exactly two snapshots" {
            assert_eq!(snapshots.len(), 2);
        }

        it "tags the base snapshot with the versioned id" {
            assert_eq!(snapshots[0].version_id, content::BASE_VERSION_ID);
        }

        it "derives the latest snapshot by overriding only the version id" {
            assert_eq!(snapshots[1].version_id, content::LATEST_VERSION_ID);
            assert_eq!(snapshots[1].version_id, "@denali-js:core@latest");

            let rebadged = snapshots[1].with_version_id(snapshots[0].version_id.clone());
            assert_eq!(rebadged, snapshots[0]);
        }

        it "shares the creation timestamp across both snapshots" {
            assert_eq!(snapshots[0].created_at, snapshots[1].created_at);
            assert_eq!(snapshots[0].created_at, content::created_at());
        }
    }

    describe "guide tree" {
        it "makes every node a leaf or a group, never both or neither" {
            let mut malformed = Vec::new();
            snapshots[0].pages.walk(|path, page| {
                if page.body.is_some() == page.children.is_some() {
                    malformed.push(path.to_string());
                }
            });
            assert!(malformed.is_empty(), "malformed pages: {:?}", malformed);
        }

        it "roots at the guides group" {
            let root = &snapshots[0].pages;
            assert_eq!(root.slug, "guides");
            assert!(!root.is_leaf());
            assert!(!root.child_pages().is_empty());
        }

        it "keeps sibling slugs unique" {
            assert_unique_sibling_slugs(&snapshots[0].pages);
        }

        it "resolves the documented section paths" {
            let root = &snapshots[0].pages;
            for path in [
                "overview/introduction",
                "overview/quickstart",
                "application/actions",
                "application/container",
                "data/models",
                "data/orm-adapters",
                "data/serializers",
                "configuration/initializers",
                "testing/acceptance-testing",
                "utilities/mixins",
            ] {
                let page = root.find(path);
                assert!(page.is_some(), "missing guide page at '{}'", path);
                assert!(page.unwrap().is_leaf(), "'{}' is not a leaf", path);
            }
        }
    }

    describe "api metadata" {
        it "contains the core package" {
            let package = snapshots[0].api.get_package(content::CORE_PACKAGE)
                .expect("core package missing");
            assert!(package.classes.contains_key("Action"));
            assert!(package.classes.contains_key("Model"));
            assert!(package.interfaces.contains_key("ContainerOptions"));
            assert!(package.functions.contains_key("attr"));
        }

        it "uses both access levels" {
            let package = snapshots[0].api.get_package(content::CORE_PACKAGE).unwrap();
            let mut public = false;
            let mut protected = false;
            for entity in package.classes.values() {
                for member in entity.all_members() {
                    match member.access {
                        Access::Public => public = true,
                        Access::Protected => protected = true,
                    }
                }
            }
            assert!(public && protected);
        }

        it "marks members inherited from the base object" {
            let application = snapshots[0].api.find_class("Application").unwrap();
            let container = application.properties.iter()
                .find(|p| p.name == "container")
                .expect("Application should list the container property");
            assert!(container.inherited);
            assert_eq!(container.file, "lib/metal/object.ts");
        }

        it "gives properties types and methods signatures" {
            let package = snapshots[0].api.get_package(content::CORE_PACKAGE).unwrap();
            for entity in package.classes.values().chain(package.interfaces.values()) {
                for member in entity.properties.iter().chain(&entity.static_properties) {
                    assert!(
                        member.ty.is_some(),
                        "{}.{} has no type",
                        entity.name, member.name
                    );
                }
                for member in entity.methods.iter().chain(&entity.static_methods) {
                    let sigs = member.signatures.as_deref().unwrap_or_default();
                    assert!(
                        !sigs.is_empty(),
                        "{}.{} has no signatures",
                        entity.name, member.name
                    );
                }
            }
        }

        it "records overloads as multiple signatures" {
            let mixin = snapshots[0].api.find_function("mixin").unwrap();
            assert_eq!(mixin.signatures.as_deref().unwrap().len(), 2);

            let action = snapshots[0].api.find_class("Action").unwrap();
            let render = action.methods.iter().find(|m| m.name == "render").unwrap();
            assert_eq!(render.signatures.as_deref().unwrap().len(), 2);
        }
    }

    describe "wire format" {
        it "serializes the consumer payload shape" {
            let value = serde_json::to_value(&snapshots[0]).unwrap();

            assert_eq!(value["versionId"], content::BASE_VERSION_ID);
            let created_at = value["createdAt"].as_str().expect("createdAt should be a string");
            let parsed = chrono::DateTime::parse_from_rfc3339(created_at)
                .expect("createdAt should be ISO-8601");
            assert_eq!(parsed, content::created_at());

            assert_eq!(value["pages"]["slug"], "guides");
            assert!(value["api"]["packages"][content::CORE_PACKAGE].is_object());
        }

        it "spells member collections in camel case" {
            let value = serde_json::to_value(&snapshots[0]).unwrap();
            let model = &value["api"]["packages"][content::CORE_PACKAGE]["classes"]["Model"];

            assert!(model["staticProperties"].is_array());
            assert!(model["staticMethods"].is_array());
            assert!(model["properties"].is_array());
            assert!(model["methods"].is_array());
        }

        it "renames reserved member fields" {
            let value = serde_json::to_value(&snapshots[0]).unwrap();
            let request = &value["api"]["packages"][content::CORE_PACKAGE]["classes"]["Request"];

            let method_prop = &request["properties"][0];
            assert_eq!(method_prop["name"], "method");
            assert_eq!(method_prop["type"], "string");
            assert_eq!(method_prop["access"], "public");

            let get_header = &request["methods"][0];
            let signature = &get_header["signatures"][0];
            assert_eq!(signature["parameters"][0]["type"], "string");
            assert_eq!(signature["return"]["type"], "string | undefined");
        }
    }
}
