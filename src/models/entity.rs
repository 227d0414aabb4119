use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::ApiMember;

/// Reflected metadata for one class or interface exported by the documented
/// framework. Member lists preserve source (line) order, the order the
/// extraction tool emits them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEntity {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub static_properties: Vec<ApiMember>,
    pub static_methods: Vec<ApiMember>,
    pub properties: Vec<ApiMember>,
    pub methods: Vec<ApiMember>,
}

impl ApiEntity {
    /// An entity with no members yet, ready for the content builders to fill.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
            static_properties: Vec::new(),
            static_methods: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// All members across the four lists, in list order.
    pub fn all_members(&self) -> impl Iterator<Item = &ApiMember> {
        self.static_properties
            .iter()
            .chain(&self.static_methods)
            .chain(&self.properties)
            .chain(&self.methods)
    }
}

/// Reflected metadata for one package: its exported classes, interfaces, and
/// free functions, keyed by name for deterministic serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageApi {
    pub classes: BTreeMap<String, ApiEntity>,
    pub interfaces: BTreeMap<String, ApiEntity>,
    pub functions: BTreeMap<String, ApiMember>,
}

/// The API half of a documentation snapshot: reflected metadata per package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiIndex {
    pub packages: BTreeMap<String, PackageApi>,
}

impl ApiIndex {
    pub fn get_package(&self, name: &str) -> Option<&PackageApi> {
        self.packages.get(name)
    }

    /// Find a class by name, searching every package.
    pub fn find_class(&self, name: &str) -> Option<&ApiEntity> {
        self.packages.values().find_map(|p| p.classes.get(name))
    }

    /// Find an interface by name, searching every package.
    pub fn find_interface(&self, name: &str) -> Option<&ApiEntity> {
        self.packages.values().find_map(|p| p.interfaces.get(name))
    }

    /// Find a free function by name, searching every package.
    pub fn find_function(&self, name: &str) -> Option<&ApiMember> {
        self.packages.values().find_map(|p| p.functions.get(name))
    }

    pub fn class_count(&self) -> usize {
        self.packages.values().map(|p| p.classes.len()).sum()
    }
}
