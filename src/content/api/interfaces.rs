//! Exported interfaces. Interfaces carry properties only.

use crate::models::{Access, ApiEntity};

use super::prop;

pub fn interfaces() -> Vec<ApiEntity> {
    vec![
        container_options(),
        responder_params(),
        relationship_descriptor(),
        render_options(),
        parsed_request(),
    ]
}

fn container_options() -> ApiEntity {
    let file = "lib/metal/container.ts";
    ApiEntity {
        properties: vec![
            prop("singleton", Access::Public, file, 21, "boolean"),
            prop("instantiate", Access::Public, file, 28, "boolean"),
        ],
        ..ApiEntity::new(
            "ContainerOptions",
            "Options accepted by Container.register() and Container.lookup().",
        )
    }
}

fn responder_params() -> ApiEntity {
    let file = "lib/runtime/action.ts";
    ApiEntity {
        properties: vec![
            prop("params", Access::Public, file, 24, "any"),
            prop("query", Access::Public, file, 29, "any"),
            prop("headers", Access::Public, file, 34, "any"),
            prop("body", Access::Public, file, 39, "any"),
        ],
        ..ApiEntity::new(
            "ResponderParams",
            "The parsed request handed to Action.respond(), as produced by \
             the action's parser.",
        )
    }
}

fn relationship_descriptor() -> ApiEntity {
    let file = "lib/data/descriptors.ts";
    ApiEntity {
        properties: vec![
            prop("mode", Access::Public, file, 47, "'hasMany' | 'hasOne'"),
            prop("type", Access::Public, file, 52, "string"),
            prop("options", Access::Public, file, 57, "any"),
        ],
        ..ApiEntity::new(
            "RelationshipDescriptor",
            "The descriptor produced by hasMany() and hasOne().",
        )
    }
}

fn render_options() -> ApiEntity {
    let file = "lib/render/serializer.ts";
    ApiEntity {
        properties: vec![
            prop("view", Access::Public, file, 12, "string"),
            prop("serializer", Access::Public, file, 17, "string"),
            prop("attributes", Access::Public, file, 22, "string[]"),
        ],
        ..ApiEntity::new(
            "RenderOptions",
            "Per-render overrides accepted by Action.render().",
        )
    }
}

fn parsed_request() -> ApiEntity {
    let file = "lib/parse/parser.ts";
    ApiEntity {
        properties: vec![
            prop("body", Access::Public, file, 8, "any"),
            prop("query", Access::Public, file, 12, "any"),
            prop("headers", Access::Public, file, 16, "any"),
            prop("params", Access::Public, file, 20, "any"),
        ],
        ..ApiEntity::new(
            "ParsedRequest",
            "The normalized output of a Parser, before it becomes \
             ResponderParams.",
        )
    }
}
