//! Integration tests for shareable request paths.

use rest_share::codec::{self, url_safe, DecodeField, EncodedRequestPath};
use rest_share::config::load_config;
use rest_share::models::{Header, HttpMethod, RequestSpec, Variable};
use rest_share::variables::{JsonFileVariableStore, VariableStore};
use serde_json::{json, Value};
use tempfile::TempDir;

#[test]
fn test_share_link_scenario() {
    let spec = RequestSpec::new(HttpMethod::POST, "https://api.x.com/u/{{id}}")
        .with_body(r#"{"n":1}"#)
        .with_header("X", "y");
    let vars = vec![Variable::new("1", "id", "42")];

    let path = codec::encode(&spec, Some(vars.as_slice()));
    assert!(path.starts_with("/POST/"));
    assert!(path.ends_with("?X=y"));

    let decoded = codec::decode_path(&path, "").unwrap();
    assert_eq!(decoded.method, HttpMethod::POST);
    assert_eq!(decoded.url, "https://api.x.com/u/42");
    assert_eq!(decoded.body, Value::String(r#"{"n":1}"#.to_string()));
    assert_eq!(decoded.headers, vec![Header::new("X", "y")]);
    assert_eq!(decoded.variables, vars);
}

#[test]
fn test_route_prefix_from_config() {
    let config = load_config(Some(json!({ "rest-client": { "routePrefix": "/rest" } }))).unwrap();

    let spec = RequestSpec::new(HttpMethod::DELETE, "https://a.com/items/7");
    let parts = codec::encode_parts(&spec, None);
    let shared = parts.to_path_with_prefix(&config.route_prefix);
    assert!(shared.starts_with("/rest/DELETE/"));

    let decoded = codec::decode_path(&shared, &config.route_prefix).unwrap();
    assert_eq!(decoded.into_spec(), spec);
}

#[test]
fn test_headers_with_reserved_characters() {
    let spec = RequestSpec::new(HttpMethod::GET, "https://a.com")
        .with_header("Authorization", "Bearer abc+def/ghi=")
        .with_header("X-Query", "a=1&b=2 c");

    let decoded = codec::decode_path(&codec::encode(&spec, None), "").unwrap();
    assert_eq!(decoded.headers, spec.headers);
}

#[test]
fn test_decoded_variables_persist_per_user() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileVariableStore::new(temp_dir.path().join("variables.json"));

    let vars = vec![
        Variable::new("a", "host", "api.example.com"),
        Variable::new("b", "token", "secret"),
    ];
    let spec = RequestSpec::new(HttpMethod::GET, "https://{{host}}/me")
        .with_header("Authorization", "Bearer {{token}}");

    let decoded = codec::decode_path(&codec::encode(&spec, Some(vars.as_slice())), "").unwrap();
    store.save(&decoded.variables, "recipient").unwrap();

    assert_eq!(store.load("recipient").unwrap(), vars);
    assert!(store.load("someone-else").unwrap().is_empty());
}

#[test]
fn test_hand_built_link_with_raw_json_body() {
    let parts = EncodedRequestPath {
        method: Some("PATCH".to_string()),
        encoded_url: Some(url_safe::encode("https://a.com/1")),
        encoded_body: Some(url_safe::encode(r#"{"done": true}"#)),
        encoded_variables: None,
        query: None,
    };

    let decoded = codec::decode_path(&parts.to_string(), "").unwrap();
    assert_eq!(decoded.body, json!({"done": true}));
    assert_eq!(decoded.body_text(), r#"{"done":true}"#);
}

#[test]
fn test_broken_variables_segment() {
    let good = codec::encode_parts(&RequestSpec::new(HttpMethod::GET, "https://a.com"), None);
    let parts = EncodedRequestPath {
        encoded_body: Some(url_safe::encode("\"\"")),
        encoded_variables: Some("not-base64!".to_string()),
        ..good
    };

    let err = codec::decode(&parts).unwrap_err();
    assert_eq!(err.field, DecodeField::Variables);
    assert!(err.to_string().starts_with("Failed to decode request variables:"));

    let lenient = codec::decode_lenient(&parts).unwrap();
    assert_eq!(lenient.url, "https://a.com");
    assert!(lenient.variables.is_empty());
}
