//! Package-level functions. Functions are member-shaped reflections with
//! `inherited` always false.

use crate::models::{Access, ApiMember};

use super::{method, param, sig, sig_described, tag};

pub fn functions() -> Vec<ApiMember> {
    vec![attr(), has_many(), has_one(), inject(), mixin(), instrument()]
}

fn attr() -> ApiMember {
    ApiMember {
        tags: vec![tag("since", Some("0.1.0"))],
        ..method(
            "attr",
            Access::Public,
            "lib/data/descriptors.ts",
            71,
            vec![sig(
                vec![param("string", "type"), param("any", "options")],
                "AttributeDescriptor",
            )],
        )
    }
}

fn has_many() -> ApiMember {
    ApiMember {
        tags: vec![tag("since", Some("0.1.0"))],
        ..method(
            "hasMany",
            Access::Public,
            "lib/data/descriptors.ts",
            84,
            vec![sig(
                vec![param("string", "type"), param("any", "options")],
                "RelationshipDescriptor",
            )],
        )
    }
}

fn has_one() -> ApiMember {
    ApiMember {
        tags: vec![tag("since", Some("0.1.0"))],
        ..method(
            "hasOne",
            Access::Public,
            "lib/data/descriptors.ts",
            97,
            vec![sig(
                vec![param("string", "type"), param("any", "options")],
                "RelationshipDescriptor",
            )],
        )
    }
}

fn inject() -> ApiMember {
    method(
        "inject",
        Access::Public,
        "lib/metal/inject.ts",
        15,
        vec![sig_described(
            vec![param("string", "specifier")],
            "T",
            "A lazily resolved container lookup",
        )],
    )
}

// Overloaded: single applicator, or a spread of them.
fn mixin() -> ApiMember {
    method(
        "mixin",
        Access::Public,
        "lib/metal/mixin.ts",
        38,
        vec![
            sig(
                vec![
                    param("Function", "base"),
                    param("MixinApplicator", "mixin"),
                ],
                "Function",
            ),
            sig(
                vec![
                    param("Function", "base"),
                    param("MixinApplicator[]", "mixins"),
                ],
                "Function",
            ),
        ],
    )
}

fn instrument() -> ApiMember {
    method(
        "instrument",
        Access::Public,
        "lib/metal/instrumentation.ts",
        44,
        vec![sig_described(
            vec![
                param("string", "eventName"),
                param("any", "data"),
                param("() => any", "work"),
            ],
            "Promise<any>",
            "Resolves to the wrapped function's return value",
        )],
    )
}
