use serde_json::{Value, json};

use yapup_core::enrich;
use yapup_core::error::EnrichError;

const ECHO: &str = include_str!("fixtures/echo-swagger.json");

fn enriched_echo() -> (Value, String) {
    let mut document: Value = serde_json::from_str(ECHO).expect("fixture should parse");
    let tag = enrich::enrich(&mut document).expect("fixture should enrich");
    (document, tag)
}

#[test]
fn global_tag_comes_from_first_tag_description() {
    let (document, tag) = enriched_echo();
    assert_eq!(tag, "Echo service");

    // The tag entry's name is overwritten with its description.
    let first = &document["tags"][0];
    assert_eq!(first["name"], "Echo service");
    assert_eq!(first["name"], first["description"]);
}

#[test]
fn every_operation_gets_the_global_tag() {
    let (document, tag) = enriched_echo();
    assert_eq!(document["paths"]["/v1/echo"]["post"]["tags"], json!([tag]));
    assert_eq!(
        document["paths"]["/v1/echo/{id}"]["get"]["tags"],
        json!([tag])
    );
}

#[test]
fn document_header_extension_is_rewritten_to_descriptors() {
    let (document, _) = enriched_echo();

    let headers = document["x-header"].as_array().expect("x-header array");
    assert_eq!(headers.len(), 2);
    assert_eq!(
        headers[0],
        json!({
            "name": "X-Token",
            "description": "project auth token",
            "type": "string",
            "in": "header",
            "required": true
        })
    );
    assert_eq!(headers[1]["name"], "X-Request-Id");
    assert_eq!(headers[1]["required"], false);
}

#[test]
fn parameter_counts_add_document_and_operation_headers() {
    let (document, _) = enriched_echo();

    // 1 original + 2 document-level + 1 operation-level.
    let post_params = document["paths"]["/v1/echo"]["post"]["parameters"]
        .as_array()
        .unwrap();
    let names: Vec<&str> = post_params
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["body", "X-Token", "X-Request-Id", "X-Debug"]);

    // 1 original + 2 document-level, no operation extension.
    let get_params = document["paths"]["/v1/echo/{id}"]["get"]["parameters"]
        .as_array()
        .unwrap();
    assert_eq!(get_params.len(), 3);
    assert_eq!(get_params[0]["name"], "id");
}

#[test]
fn property_titles_fold_into_descriptions() {
    let (document, _) = enriched_echo();
    let definitions = &document["definitions"];

    // Title only: description becomes the title.
    assert_eq!(
        definitions["v1EchoRequest"]["properties"]["message"]["description"],
        "message to echo"
    );

    // Existing description plus title: plain concatenation, no separator.
    assert_eq!(
        definitions["v1Detail"]["properties"]["level"]["description"],
        "severity 1-5"
    );
}

#[test]
fn object_schemas_are_backfilled_from_referencing_properties() {
    let (document, _) = enriched_echo();
    let definitions = &document["definitions"];

    // v1Detail is referenced by the `detail` property, whose enriched
    // description carries over.
    assert_eq!(definitions["v1Detail"]["description"], "request detail");

    // Object schemas nobody references lose even their title-derived
    // description to the back-fill pass.
    assert_eq!(definitions["v1EchoRequest"]["description"], "");
    assert_eq!(definitions["v1EchoResponse"]["description"], "");
}

#[test]
fn schema_title_survives_when_type_is_not_object() {
    let mut document = json!({
        "definitions": {
            "Alias": { "title": "Foo" }
        }
    });

    enrich::enrich(&mut document).unwrap();
    assert_eq!(document["definitions"]["Alias"]["description"], "Foo");
}

#[test]
fn reference_from_one_schema_satisfies_another() {
    let mut document = json!({
        "definitions": {
            "A": {
                "properties": {
                    "b": { "title": "Bar", "$ref": "#/definitions/B" }
                }
            },
            "B": { "type": "object" }
        }
    });

    enrich::enrich(&mut document).unwrap();
    assert_eq!(document["definitions"]["B"]["description"], "Bar");
}

#[test]
fn document_header_applied_to_bare_operation() {
    let mut document = json!({
        "x-header": { "auth": { "description": "token", "required": true } },
        "paths": {
            "/v1/ping": { "get": { "operationId": "Ping" } }
        }
    });

    enrich::enrich(&mut document).unwrap();
    assert_eq!(
        document["paths"]["/v1/ping"]["get"]["parameters"],
        json!([{
            "name": "auth",
            "description": "token",
            "type": "string",
            "in": "header",
            "required": true
        }])
    );
}

#[test]
fn duplicate_header_names_are_not_deduplicated() {
    let mut document = json!({
        "x-header": { "X-Token": { "description": "document scoped" } },
        "paths": {
            "/v1/ping": {
                "get": {
                    "x-header": { "X-Token": { "description": "operation scoped" } }
                }
            }
        }
    });

    enrich::enrich(&mut document).unwrap();

    let parameters = document["paths"]["/v1/ping"]["get"]["parameters"]
        .as_array()
        .unwrap();
    assert_eq!(parameters.len(), 2);
    assert_eq!(parameters[0]["name"], "X-Token");
    assert_eq!(parameters[1]["name"], "X-Token");
    assert_eq!(parameters[0]["description"], "document scoped");
    assert_eq!(parameters[1]["description"], "operation scoped");
}

#[test]
fn operation_headers_do_not_leak_into_later_operations() {
    let mut document = json!({
        "x-header": { "X-Doc": { "description": "document scoped" } },
        "paths": {
            "/v1/first": {
                "post": {
                    "x-header": { "X-First-Only": { "description": "scoped to /v1/first" } }
                }
            },
            "/v1/second": {
                "get": {}
            }
        }
    });

    enrich::enrich(&mut document).unwrap();

    let second = document["paths"]["/v1/second"]["get"]["parameters"]
        .as_array()
        .unwrap();
    let names: Vec<&str> = second.iter().map(|p| p["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["X-Doc"], "first operation's headers must not leak");
}

#[test]
fn missing_tags_means_empty_tag_name() {
    let mut document = json!({
        "paths": { "/v1/ping": { "get": {} } }
    });

    let tag = enrich::enrich(&mut document).unwrap();
    assert_eq!(tag, "");
    assert_eq!(document["paths"]["/v1/ping"]["get"]["tags"], json!([""]));
}

#[test]
fn tag_without_description_is_a_shape_error() {
    let mut document = json!({
        "tags": [{ "name": "EchoService" }]
    });

    let err = enrich::enrich(&mut document).unwrap_err();
    assert!(matches!(err, EnrichError::Shape { .. }));
    assert!(err.to_string().contains("tags[0].description"));
}

#[test]
fn malformed_reference_aborts_the_run() {
    let mut document = json!({
        "definitions": {
            "A": {
                "properties": {
                    "b": { "$ref": "#/definitions" }
                }
            }
        }
    });

    let err = enrich::enrich(&mut document).unwrap_err();
    assert!(matches!(err, EnrichError::InvalidRef(_)));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = enrich::enrich_bytes(b"{ not json").unwrap_err();
    assert!(matches!(err, EnrichError::Json(_)));
}

// Re-running the pipeline on its own output drifts: titles fold into the
// already-merged descriptions again. Documents the current behavior.
#[test]
fn enrichment_is_not_idempotent() {
    let mut document = json!({
        "definitions": {
            "Req": {
                "properties": {
                    "level": { "description": "severity ", "title": "1-5" }
                }
            }
        }
    });

    enrich::enrich(&mut document).unwrap();
    assert_eq!(
        document["definitions"]["Req"]["properties"]["level"]["description"],
        "severity 1-5"
    );

    enrich::enrich(&mut document).unwrap();
    assert_eq!(
        document["definitions"]["Req"]["properties"]["level"]["description"],
        "severity 1-51-5"
    );
}

#[test]
fn enrich_bytes_round_trips_untouched_keys() {
    let pretty = enrich::enrich_bytes(ECHO.as_bytes()).unwrap();
    let document: Value = serde_json::from_str(&pretty).unwrap();

    assert_eq!(document["swagger"], "2.0");
    assert_eq!(document["info"]["title"], "echo.proto");
    assert_eq!(document["consumes"], json!(["application/json"]));
}
