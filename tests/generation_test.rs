use openapi_from_routes::{
    error::Error,
    generator::{create_generator, DocumentKind, Generation, GeneratorOptions},
    host::{Host, MapConfig},
    route::{Route, RouteRequest},
    schema::DeclaredSchema,
    serializer::{serialize_json, serialize_yaml},
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

/// Helper building a host with a representative route spread: admin routes,
/// two APIs, and both plugin declaration shapes.
fn fixture_host() -> Host {
    let article_request = RouteRequest {
        params: vec![(
            "id".to_string(),
            DeclaredSchema::new(json!({ "type": "number" })),
        )],
        query: vec![(
            "populate".to_string(),
            DeclaredSchema::new(json!({ "type": "string" })).optional(),
        )],
        ..RouteRequest::default()
    };
    let create_request = RouteRequest {
        body: vec![(
            "application/json".to_string(),
            DeclaredSchema::new(json!({
                "type": "object",
                "properties": { "title": { "type": "string" } }
            }))
            .as_component("ArticleInput"),
        )],
        ..RouteRequest::default()
    };

    Host::builder()
        .config(MapConfig::new(json!({
            "info": { "name": "demo-app", "version": "2.3.1", "engine": "5.0.0" },
            "server": { "url": "https://api.demo.example" }
        })))
        .admin_router(
            "users",
            vec![Route::new("/admin/users", "GET", "admin::users.find").kind("admin")],
        )
        .api_router(
            "blog",
            "article",
            vec![
                Route::new("/articles", "GET", "api::blog.article.find")
                    .kind("content-api")
                    .api_name("blog"),
                Route::new("/articles/:id", "GET", "api::blog.article.findOne")
                    .kind("content-api")
                    .api_name("blog")
                    .request(article_request),
                Route::new("/articles", "POST", "api::blog.article.create")
                    .kind("content-api")
                    .api_name("blog")
                    .request(create_request),
            ],
        )
        .plugin_routes(
            "upload",
            vec![Route::new("/upload/files", "GET", "plugin::upload.files")
                .kind("content-api")
                .plugin_name("upload")],
        )
        .plugin_routers(
            "email",
            vec![(
                "settings".to_string(),
                vec![Route::new("/email/settings", "GET", "plugin::email.settings")
                    .kind("content-api")
                    .plugin_name("email")],
            )],
        )
        .build()
}

fn generate() -> Generation {
    create_generator(fixture_host(), GeneratorOptions::default())
        .generate()
        .expect("generation should succeed")
}

#[test]
fn test_document_top_level_shape() {
    let generation = generate();
    let document = &generation.document;

    assert_eq!(document.openapi, "3.1.0");
    assert_eq!(document.info.title, "demo-app");
    assert_eq!(document.info.version, "2.3.1");
    assert_eq!(document.servers.len(), 1);
    assert_eq!(document.servers[0].url, "https://api.demo.example");
    assert_eq!(document.extensions["x-engine-version"], json!("5.0.0"));

    // Default global security
    let security = document.security.as_ref().unwrap();
    assert_eq!(security.len(), 1);
    assert!(security[0].contains_key("bearerAuth"));
}

#[test]
fn test_only_content_api_routes_enter_the_document() {
    let generation = generate();
    let paths: Vec<_> = generation.document.paths.keys().cloned().collect();

    assert_eq!(
        paths,
        vec![
            "/articles",
            "/articles/{id}",
            "/email/settings",
            "/upload/files",
        ]
    );
}

#[test]
fn test_admin_kind_selects_admin_routes() {
    let generation = create_generator(
        fixture_host(),
        GeneratorOptions {
            kind: DocumentKind::Admin,
        },
    )
    .generate()
    .unwrap();

    let paths: Vec<_> = generation.document.paths.keys().cloned().collect();
    assert_eq!(paths, vec!["/admin/users"]);
}

#[test]
fn test_path_parameter_formatting_and_operation_id() {
    let generation = generate();
    let item = &generation.document.paths["/articles/{id}"];
    let operation = item.get.as_ref().unwrap();

    assert_eq!(operation.operation_id.as_deref(), Some("blog/get_articles_by_id"));
    assert_eq!(operation.tags, vec!["blog"]);

    // Path parameter: required, in path, schema passed through
    let id = operation.parameters.iter().find(|p| p.name == "id").unwrap();
    assert_eq!(id.location, "path");
    assert!(id.required);
    assert_eq!(id.schema, json!({ "type": "number" }));

    // Query parameter: optional, flagged for query-string serialization
    let populate = operation
        .parameters
        .iter()
        .find(|p| p.name == "populate")
        .unwrap();
    assert_eq!(populate.location, "query");
    assert!(!populate.required);
    assert_eq!(populate.extensions["x-query-serialized"], json!(true));
}

#[test]
fn test_operation_id_for_plain_collection_route() {
    let generation = generate();
    let operation = generation.document.paths["/articles"].get.as_ref().unwrap();
    assert_eq!(operation.operation_id.as_deref(), Some("blog/get_articles"));
    assert_eq!(operation.tags, vec!["blog"]);
}

#[test]
fn test_plugin_routes_tagged_by_plugin_name() {
    let generation = generate();
    let operation = generation.document.paths["/upload/files"].get.as_ref().unwrap();
    assert_eq!(operation.operation_id.as_deref(), Some("upload/get_upload_files"));
    assert_eq!(operation.tags, vec!["upload"]);

    // The routers-shaped plugin flattens the same way
    let operation = generation.document.paths["/email/settings"].get.as_ref().unwrap();
    assert_eq!(operation.operation_id.as_deref(), Some("email/get_email_settings"));
}

#[test]
fn test_default_responses_on_every_operation() {
    let generation = generate();
    for (path, item) in &generation.document.paths {
        let operation = item
            .get
            .as_ref()
            .or(item.post.as_ref())
            .unwrap_or_else(|| panic!("no operation under {}", path));
        let codes: Vec<_> = operation.responses.keys().cloned().collect();
        assert_eq!(
            codes,
            vec!["200", "201", "204", "400", "401", "403", "404", "500"],
            "unexpected response set under {}",
            path
        );
        assert_eq!(operation.responses["204"].description, "No Content");
    }
}

#[test]
fn test_request_body_only_where_declared() {
    let generation = generate();
    let item = &generation.document.paths["/articles"];

    let post = item.post.as_ref().unwrap();
    let body = post.request_body.as_ref().unwrap();
    assert_eq!(
        body.content["application/json"].schema,
        json!({ "$ref": "#/components/schemas/ArticleInput" })
    );

    // The GET route declared no body: the key must be absent, not null
    let get_json = serde_json::to_value(item.get.as_ref().unwrap()).unwrap();
    assert!(get_json.as_object().unwrap().get("requestBody").is_none());
}

#[test]
fn test_component_schemas_flushed_next_to_security_schemes() {
    let generation = generate();
    let components = generation.document.components.as_ref().unwrap();

    // Written by the security assembler
    let bearer = &components.security_schemes["bearerAuth"];
    assert_eq!(bearer.scheme_type, "http");
    assert_eq!(bearer.bearer_format.as_deref(), Some("JWT"));

    // Written by the post-processor, merged as a sibling
    assert_eq!(
        components.schemas["ArticleInput"]["properties"]["title"],
        json!({ "type": "string" })
    );
}

#[test]
fn test_generation_is_byte_for_byte_deterministic() {
    let first = generate();
    let second = generate();

    assert_eq!(
        serialize_json(&first.document).unwrap(),
        serialize_json(&second.document).unwrap()
    );
    assert_eq!(
        serialize_yaml(&first.document).unwrap(),
        serialize_yaml(&second.document).unwrap()
    );
}

#[test]
fn test_empty_host_produces_empty_paths() {
    let generation = create_generator(Host::builder().build(), GeneratorOptions::default())
        .generate()
        .unwrap();

    assert!(generation.document.paths.is_empty());

    let value: Value = serde_json::from_str(&serialize_json(&generation.document).unwrap()).unwrap();
    assert_eq!(value["paths"], json!({}));
    // Soft config fallbacks
    assert_eq!(value["info"]["title"], json!(""));
    assert_eq!(value["servers"][0]["url"], json!("http://localhost:8080"));
}

#[test]
fn test_unrecognized_method_aborts_generation() {
    let host = Host::builder()
        .api_router(
            "blog",
            "article",
            vec![Route::new("/articles", "PURGE", "h").kind("content-api")],
        )
        .build();

    let err = create_generator(host, GeneratorOptions::default())
        .generate()
        .unwrap_err();
    assert!(matches!(err, Error::UnrecognizedMethod { .. }));
    assert!(err.to_string().contains("PURGE"));
}

#[test]
fn test_duration_is_reported() {
    let generation = generate();
    // A fast run may legitimately take zero milliseconds
    let _ = generation.duration_ms;

    let yaml = serialize_yaml(&generation.document).unwrap();
    assert!(yaml.contains("openapi: 3.1.0"));
}
