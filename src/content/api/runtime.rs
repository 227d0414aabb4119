//! Runtime classes: the request path and application lifecycle.

use crate::models::{Access, ApiEntity, ApiMember};

use super::{inherited_container, method, param, prop, sig, sig_described, tag};

pub fn classes() -> Vec<ApiEntity> {
    vec![
        denali_object(),
        action(),
        addon(),
        application(),
        container(),
        logger(),
        request(),
        router(),
        service(),
    ]
}

fn denali_object() -> ApiEntity {
    let file = "lib/metal/object.ts";
    ApiEntity {
        properties: vec![prop("container", Access::Public, file, 14, "Container")],
        methods: vec![method(
            "teardown",
            Access::Public,
            file,
            27,
            vec![sig(vec![], "void")],
        )],
        ..ApiEntity::new(
            "DenaliObject",
            "The base class for nearly every class in Denali. Adds the \
             container reference and the teardown lifecycle hook.",
        )
    }
}

fn action() -> ApiEntity {
    let file = "lib/runtime/action.ts";
    ApiEntity {
        static_properties: vec![
            prop("before", Access::Public, file, 52, "string[]"),
            prop("after", Access::Public, file, 61, "string[]"),
        ],
        properties: vec![
            inherited_container(14),
            prop("request", Access::Public, file, 87, "Request"),
            prop("logger", Access::Public, file, 93, "Logger"),
            prop("config", Access::Public, file, 99, "any"),
            prop("parser", Access::Public, file, 106, "Parser"),
            prop("serializer", Access::Public, file, 113, "Serializer | false"),
            ApiMember {
                deprecated: true,
                tags: vec![tag("deprecated", Some("look up `app:session` instead"))],
                ..prop("session", Access::Public, file, 121, "any")
            },
        ],
        methods: vec![
            method(
                "respond",
                Access::Public,
                file,
                143,
                vec![sig(
                    vec![param("ResponderParams", "params")],
                    "any",
                )],
            ),
            // Overloaded: body only, or status + body + options.
            method(
                "render",
                Access::Public,
                file,
                158,
                vec![
                    sig(vec![param("any", "body")], "Promise<void>"),
                    sig(
                        vec![
                            param("number", "status"),
                            param("any", "body"),
                            param("RenderOptions", "options"),
                        ],
                        "Promise<void>",
                    ),
                ],
            ),
            method(
                "run",
                Access::Protected,
                file,
                186,
                vec![sig(vec![param("Request", "request")], "Promise<void>")],
            ),
            method(
                "_buildFilterChains",
                Access::Protected,
                file,
                214,
                vec![sig(vec![], "{ before: string[], after: string[] }")],
            ),
        ],
        ..ApiEntity::new(
            "Action",
            "Actions form the core of a Denali application: one class per \
             endpoint, responsible for responding to one route.",
        )
    }
}

fn addon() -> ApiEntity {
    let file = "lib/runtime/addon.ts";
    ApiEntity {
        properties: vec![
            inherited_container(14),
            prop("name", Access::Public, file, 31, "string"),
            prop("dir", Access::Public, file, 38, "string"),
        ],
        methods: vec![method(
            "shutdown",
            Access::Public,
            file,
            55,
            vec![sig(vec![param("Application", "application")], "Promise<void>")],
        )],
        ..ApiEntity::new(
            "Addon",
            "The base class for Denali addons. Addons mirror the application \
             layout and merge their container registrations beneath the \
             host app's.",
        )
    }
}

fn application() -> ApiEntity {
    let file = "lib/runtime/application.ts";
    ApiEntity {
        properties: vec![
            inherited_container(14),
            prop("router", Access::Public, file, 42, "Router"),
            prop("addons", Access::Public, file, 49, "Addon[]"),
            prop("drainers", Access::Protected, file, 57, "Array<() => Promise<void>>"),
        ],
        methods: vec![
            method(
                "start",
                Access::Public,
                file,
                78,
                vec![sig_described(
                    vec![],
                    "Promise<void>",
                    "Resolves once the server is listening",
                )],
            ),
            method(
                "runInitializers",
                Access::Protected,
                file,
                112,
                vec![sig(vec![], "Promise<void>")],
            ),
            method(
                "shutdown",
                Access::Public,
                file,
                139,
                vec![sig(vec![], "Promise<void>")],
            ),
        ],
        ..ApiEntity::new(
            "Application",
            "The top-level object of a Denali app: owns the container, the \
             router, and the addon graph, and drives boot and shutdown.",
        )
    }
}

fn container() -> ApiEntity {
    let file = "lib/metal/container.ts";
    ApiEntity {
        methods: vec![
            method(
                "register",
                Access::Public,
                file,
                66,
                vec![sig(
                    vec![
                        param("string", "specifier"),
                        param("any", "entry"),
                        param("ContainerOptions", "options"),
                    ],
                    "void",
                )],
            ),
            // Overloaded: bare lookup, or lookup with resolution options.
            method(
                "lookup",
                Access::Public,
                file,
                84,
                vec![
                    sig(vec![param("string", "specifier")], "any"),
                    sig(
                        vec![
                            param("string", "specifier"),
                            param("ContainerOptions", "options"),
                        ],
                        "any",
                    ),
                ],
            ),
            method(
                "lookupAll",
                Access::Public,
                file,
                109,
                vec![sig(
                    vec![param("string", "type")],
                    "{ [name: string]: any }",
                )],
            ),
            method(
                "clearCache",
                Access::Protected,
                file,
                131,
                vec![sig(vec![], "void")],
            ),
        ],
        ..ApiEntity::new(
            "Container",
            "The dependency injection registry. Everything under app/ is \
             registered here at boot and resolved by type:name specifier.",
        )
    }
}

fn logger() -> ApiEntity {
    let file = "lib/runtime/logger.ts";
    ApiEntity {
        properties: vec![
            prop("loglevel", Access::Public, file, 24, "LogLevel"),
            prop("colorize", Access::Public, file, 31, "boolean"),
        ],
        methods: vec![
            method("info", Access::Public, file, 48, vec![sig(vec![param("any", "msg")], "void")]),
            method("warn", Access::Public, file, 55, vec![sig(vec![param("any", "msg")], "void")]),
            method("error", Access::Public, file, 62, vec![sig(vec![param("any", "msg")], "void")]),
            method(
                "log",
                Access::Protected,
                file,
                70,
                vec![sig(
                    vec![param("LogLevel", "level"), param("string", "msg")],
                    "void",
                )],
            ),
        ],
        ..ApiEntity::new(
            "Logger",
            "A simple level-aware logger with colorized TTY output.",
        )
    }
}

fn request() -> ApiEntity {
    let file = "lib/runtime/request.ts";
    ApiEntity {
        properties: vec![
            prop("method", Access::Public, file, 29, "string"),
            prop("path", Access::Public, file, 36, "string"),
            prop("params", Access::Public, file, 43, "any"),
            prop("query", Access::Public, file, 50, "{ [key: string]: string }"),
            prop("headers", Access::Public, file, 57, "{ [key: string]: string }"),
            prop("body", Access::Public, file, 65, "any"),
        ],
        methods: vec![method(
            "getHeader",
            Access::Public,
            file,
            82,
            vec![sig(
                vec![param("string", "name")],
                "string | undefined",
            )],
        )],
        ..ApiEntity::new(
            "Request",
            "A wrapper over the raw incoming HTTP request, normalized before \
             the parser runs.",
        )
    }
}

fn router() -> ApiEntity {
    let file = "lib/runtime/router.ts";
    ApiEntity {
        properties: vec![
            inherited_container(14),
            prop("routes", Access::Public, file, 46, "{ [method: string]: Route[] }"),
        ],
        methods: vec![
            method(
                "map",
                Access::Public,
                file,
                73,
                vec![sig(
                    vec![param("(router: Router) => void", "fn")],
                    "void",
                )],
            ),
            method(
                "route",
                Access::Public,
                file,
                91,
                vec![sig(
                    vec![
                        param("string", "method"),
                        param("string", "pattern"),
                        param("string", "actionPath"),
                    ],
                    "void",
                )],
            ),
            method(
                "resource",
                Access::Public,
                file,
                118,
                vec![sig(
                    vec![param("string", "resourceName"), param("ResourceOptions", "options")],
                    "void",
                )],
            ),
            method(
                "urlFor",
                Access::Public,
                file,
                152,
                vec![sig_described(
                    vec![param("string", "actionPath"), param("any", "data")],
                    "string | false",
                    "False when no route is drawn for the action",
                )],
            ),
            method(
                "handle",
                Access::Protected,
                file,
                178,
                vec![sig(
                    vec![param("IncomingMessage", "req"), param("ServerResponse", "res")],
                    "Promise<void>",
                )],
            ),
        ],
        ..ApiEntity::new(
            "Router",
            "Maps incoming requests to actions and generates URLs back out \
             of action paths.",
        )
    }
}

fn service() -> ApiEntity {
    ApiEntity {
        properties: vec![inherited_container(14)],
        methods: vec![ApiMember {
            inherited: true,
            ..method(
                "teardown",
                Access::Public,
                "lib/metal/object.ts",
                27,
                vec![sig(vec![], "void")],
            )
        }],
        ..ApiEntity::new(
            "Service",
            "Long-lived singletons for cross-cutting application logic. \
             Instantiated once by the container on first lookup.",
        )
    }
}
