//! Parse layer classes: turning raw requests into responder params.

use crate::models::{Access, ApiEntity};

use super::{method, param, sig};

pub fn classes() -> Vec<ApiEntity> {
    vec![parser(), json_parser(), jsonapi_parser()]
}

fn parser() -> ApiEntity {
    ApiEntity {
        methods: vec![method(
            "parse",
            Access::Public,
            "lib/parse/parser.ts",
            21,
            vec![sig(
                vec![param("Request", "request")],
                "Promise<ParsedRequest>",
            )],
        )],
        ..ApiEntity::new(
            "Parser",
            "The base class for request parsing. A parser turns the raw \
             request into the params object handed to the action's \
             responder.",
        )
    }
}

fn json_parser() -> ApiEntity {
    ApiEntity {
        methods: vec![method(
            "parse",
            Access::Public,
            "lib/parse/json.ts",
            17,
            vec![sig(
                vec![param("Request", "request")],
                "Promise<ParsedRequest>",
            )],
        )],
        ..ApiEntity::new(
            "JSONParser",
            "Parses plain JSON request bodies.",
        )
    }
}

fn jsonapi_parser() -> ApiEntity {
    ApiEntity {
        methods: vec![method(
            "parse",
            Access::Public,
            "lib/parse/json-api.ts",
            24,
            vec![sig(
                vec![param("Request", "request")],
                "Promise<ParsedRequest>",
            )],
        )],
        ..ApiEntity::new(
            "JSONAPIParser",
            "Parses JSON-API 1.0 documents, flattening resource objects into \
             plain attribute hashes for responders.",
        )
    }
}
