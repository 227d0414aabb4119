//! Render layer classes: the serializer hierarchy.

use crate::models::{Access, ApiEntity};

use super::{method, param, prop, sig};

pub fn classes() -> Vec<ApiEntity> {
    vec![serializer(), json_serializer(), jsonapi_serializer()]
}

fn serializer() -> ApiEntity {
    let file = "lib/render/serializer.ts";
    ApiEntity {
        properties: vec![
            prop("attributes", Access::Public, file, 26, "string[]"),
            prop(
                "relationships",
                Access::Public,
                file,
                34,
                "{ [name: string]: RelationshipConfig }",
            ),
        ],
        methods: vec![method(
            "serialize",
            Access::Public,
            file,
            52,
            vec![sig(
                vec![
                    param("any", "body"),
                    param("Action", "action"),
                    param("RenderOptions", "options"),
                ],
                "Promise<any>",
            )],
        )],
        ..ApiEntity::new(
            "Serializer",
            "The base class for response rendering. Serializers are \
             whitelist-based: attributes and relationships not listed are \
             never rendered.",
        )
    }
}

fn json_serializer() -> ApiEntity {
    let file = "lib/render/json.ts";
    ApiEntity {
        methods: vec![
            method(
                "serialize",
                Access::Public,
                file,
                19,
                vec![sig(
                    vec![
                        param("any", "body"),
                        param("Action", "action"),
                        param("RenderOptions", "options"),
                    ],
                    "Promise<any>",
                )],
            ),
            method(
                "renderItem",
                Access::Protected,
                file,
                41,
                vec![sig(
                    vec![param("any", "item"), param("RenderOptions", "options")],
                    "Promise<any>",
                )],
            ),
        ],
        ..ApiEntity::new(
            "JSONSerializer",
            "Renders plain JSON documents: whitelisted attributes at the top \
             level, embedded relationships nested.",
        )
    }
}

fn jsonapi_serializer() -> ApiEntity {
    let file = "lib/render/json-api.ts";
    ApiEntity {
        methods: vec![
            method(
                "serialize",
                Access::Public,
                file,
                31,
                vec![sig(
                    vec![
                        param("any", "body"),
                        param("Action", "action"),
                        param("RenderOptions", "options"),
                    ],
                    "Promise<JsonApiDocument>",
                )],
            ),
            method(
                "renderPrimary",
                Access::Protected,
                file,
                58,
                vec![sig(
                    vec![param("any", "payload"), param("Context", "context")],
                    "Promise<void>",
                )],
            ),
            method(
                "renderIncluded",
                Access::Protected,
                file,
                84,
                vec![sig(
                    vec![param("Model", "model"), param("Context", "context")],
                    "Promise<void>",
                )],
            ),
        ],
        ..ApiEntity::new(
            "JSONAPISerializer",
            "Renders JSON-API 1.0 documents: resource objects, relationship \
             identifiers, sideloaded includes, and links via the router.",
        )
    }
}
