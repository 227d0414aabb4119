//! Reflected API metadata for the `@denali-js/core` package.
//!
//! The records here mirror the output of the documentation extraction tool
//! that walks the framework's source: entity per exported class/interface,
//! member per property/method, signature per call shape. Construction
//! helpers live in this module; the per-area entity builders live in the
//! submodules.

use std::collections::BTreeMap;

use crate::models::{
    Access, ApiEntity, ApiIndex, ApiMember, PackageApi, Parameter, ReturnType, Signature, Tag,
};

mod data;
mod functions;
mod interfaces;
mod parse;
mod render;
mod runtime;

pub const CORE_PACKAGE: &str = "@denali-js/core";

/// The full API index: one package, `@denali-js/core`.
pub fn index() -> ApiIndex {
    let classes = runtime::classes()
        .into_iter()
        .chain(data::classes())
        .chain(render::classes())
        .chain(parse::classes());

    let core = PackageApi {
        classes: entity_map(classes),
        interfaces: entity_map(interfaces::interfaces()),
        functions: functions::functions()
            .into_iter()
            .map(|f| (f.name.clone(), f))
            .collect(),
    };

    ApiIndex {
        packages: BTreeMap::from([(CORE_PACKAGE.to_string(), core)]),
    }
}

fn entity_map(entities: impl IntoIterator<Item = ApiEntity>) -> BTreeMap<String, ApiEntity> {
    entities.into_iter().map(|e| (e.name.clone(), e)).collect()
}

// ============================================================
// Record construction helpers
// ============================================================

fn prop(name: &str, access: Access, file: &str, line: u32, ty: &str) -> ApiMember {
    ApiMember {
        name: name.to_string(),
        access,
        deprecated: false,
        inherited: false,
        file: file.to_string(),
        line,
        tags: Vec::new(),
        ty: Some(ty.to_string()),
        signatures: None,
    }
}

fn method(name: &str, access: Access, file: &str, line: u32, signatures: Vec<Signature>) -> ApiMember {
    ApiMember {
        name: name.to_string(),
        access,
        deprecated: false,
        inherited: false,
        file: file.to_string(),
        line,
        tags: Vec::new(),
        ty: None,
        signatures: Some(signatures),
    }
}

fn sig(parameters: Vec<Parameter>, ret: &str) -> Signature {
    Signature {
        parameters,
        ret: ReturnType {
            ty: ret.to_string(),
            description: None,
        },
    }
}

fn sig_described(parameters: Vec<Parameter>, ret: &str, description: &str) -> Signature {
    Signature {
        parameters,
        ret: ReturnType {
            ty: ret.to_string(),
            description: Some(description.to_string()),
        },
    }
}

fn param(ty: &str, name: &str) -> Parameter {
    Parameter {
        ty: ty.to_string(),
        name: name.to_string(),
    }
}

fn tag(name: &str, value: Option<&str>) -> Tag {
    Tag {
        name: name.to_string(),
        value: value.map(str::to_string),
    }
}

/// The `container` property every `DenaliObject` descendant inherits.
fn inherited_container(line: u32) -> ApiMember {
    ApiMember {
        inherited: true,
        ..prop("container", Access::Public, "lib/metal/object.ts", line, "Container")
    }
}
