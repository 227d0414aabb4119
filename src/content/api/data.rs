//! Data layer classes: descriptors, the model proxy, and ORM adapters.

use crate::models::{Access, ApiEntity, ApiMember};

use super::{method, param, prop, sig, sig_described, tag};

pub fn classes() -> Vec<ApiEntity> {
    vec![descriptor(), model(), orm_adapter(), memory_adapter()]
}

fn descriptor() -> ApiEntity {
    let file = "lib/data/descriptors.ts";
    ApiEntity {
        properties: vec![
            prop("type", Access::Public, file, 18, "string"),
            prop("options", Access::Public, file, 25, "any"),
        ],
        ..ApiEntity::new(
            "Descriptor",
            "The base class for schema descriptors produced by attr(), \
             hasOne(), and hasMany(). Pure declaration; adapters interpret \
             the type strings.",
        )
    }
}

fn model() -> ApiEntity {
    let file = "lib/data/model.ts";
    ApiEntity {
        static_properties: vec![
            prop("abstract", Access::Public, file, 33, "boolean"),
            prop("schema", Access::Public, file, 41, "{ [field: string]: Descriptor }"),
        ],
        static_methods: vec![
            method(
                "find",
                Access::Public,
                file,
                62,
                vec![sig_described(
                    vec![param("any", "id")],
                    "Promise<Model | null>",
                    "Null when no record matches the id",
                )],
            ),
            method(
                "query",
                Access::Public,
                file,
                76,
                vec![sig(vec![param("any", "query")], "Promise<Model[]>")],
            ),
            method(
                "all",
                Access::Public,
                file,
                88,
                vec![sig(vec![], "Promise<Model[]>")],
            ),
            method(
                "create",
                Access::Public,
                file,
                99,
                vec![sig(vec![param("any", "data")], "Promise<Model>")],
            ),
        ],
        properties: vec![
            prop("record", Access::Public, file, 118, "any"),
            prop("id", Access::Public, file, 126, "any"),
        ],
        methods: vec![
            method(
                "save",
                Access::Public,
                file,
                141,
                vec![sig(vec![], "Promise<Model>")],
            ),
            method(
                "delete",
                Access::Public,
                file,
                152,
                vec![sig(vec![], "Promise<void>")],
            ),
            method(
                "getRelated",
                Access::Public,
                file,
                164,
                vec![sig(
                    vec![param("string", "relationshipName")],
                    "Promise<Model | Model[]>",
                )],
            ),
            method(
                "setRelated",
                Access::Public,
                file,
                178,
                vec![sig(
                    vec![
                        param("string", "relationshipName"),
                        param("Model | Model[]", "related"),
                    ],
                    "Promise<void>",
                )],
            ),
            method(
                "adapterFor",
                Access::Protected,
                file,
                195,
                vec![sig(vec![], "ORMAdapter")],
            ),
        ],
        ..ApiEntity::new(
            "Model",
            "A thin proxy over an ORM adapter's native record. Attribute \
             access routes through the adapter, which keeps applications \
             portable across persistence libraries.",
        )
    }
}

fn orm_adapter() -> ApiEntity {
    let file = "lib/data/orm-adapter.ts";
    ApiEntity {
        methods: vec![
            method(
                "find",
                Access::Public,
                file,
                29,
                vec![sig(
                    vec![param("string", "type"), param("any", "id")],
                    "Promise<any>",
                )],
            ),
            method(
                "queryRecords",
                Access::Public,
                file,
                41,
                vec![sig(
                    vec![param("string", "type"), param("any", "query")],
                    "Promise<any[]>",
                )],
            ),
            method(
                "all",
                Access::Public,
                file,
                52,
                vec![sig(vec![param("string", "type")], "Promise<any[]>")],
            ),
            method(
                "buildRecord",
                Access::Public,
                file,
                64,
                vec![sig(
                    vec![param("string", "type"), param("any", "data")],
                    "any",
                )],
            ),
            method(
                "getAttribute",
                Access::Public,
                file,
                76,
                vec![sig(
                    vec![param("Model", "model"), param("string", "attribute")],
                    "any",
                )],
            ),
            method(
                "setAttribute",
                Access::Public,
                file,
                88,
                vec![sig(
                    vec![
                        param("Model", "model"),
                        param("string", "attribute"),
                        param("any", "value"),
                    ],
                    "boolean",
                )],
            ),
            method(
                "saveRecord",
                Access::Public,
                file,
                101,
                vec![sig(vec![param("Model", "model")], "Promise<void>")],
            ),
            method(
                "deleteRecord",
                Access::Public,
                file,
                112,
                vec![sig(vec![param("Model", "model")], "Promise<void>")],
            ),
        ],
        ..ApiEntity::new(
            "ORMAdapter",
            "The contract between Denali's model layer and a persistence \
             library. Subclass it to connect a database.",
        )
    }
}

fn memory_adapter() -> ApiEntity {
    let file = "lib/data/memory.ts";
    ApiEntity {
        properties: vec![ApiMember {
            tags: vec![tag("since", Some("0.1.0"))],
            ..prop(
                "_records",
                Access::Protected,
                file,
                22,
                "{ [type: string]: { [id: string]: any } }",
            )
        }],
        methods: vec![
            method(
                "find",
                Access::Public,
                file,
                34,
                vec![sig(
                    vec![param("string", "type"), param("any", "id")],
                    "Promise<any>",
                )],
            ),
            method(
                "buildRecord",
                Access::Public,
                file,
                47,
                vec![sig(
                    vec![param("string", "type"), param("any", "data")],
                    "any",
                )],
            ),
            method(
                "saveRecord",
                Access::Public,
                file,
                58,
                vec![sig(vec![param("Model", "model")], "Promise<void>")],
            ),
            method(
                "deleteRecord",
                Access::Public,
                file,
                71,
                vec![sig(vec![param("Model", "model")], "Promise<void>")],
            ),
        ],
        ..ApiEntity::new(
            "MemoryAdapter",
            "An in-memory ORM adapter for prototyping and tests. The \
             reference implementation of the adapter contract.",
        )
    }
}
