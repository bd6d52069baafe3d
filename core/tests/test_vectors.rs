//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results or error messages. Comparing parsed JSON (not
//! raw strings) avoids false negatives from field-ordering differences.

use catalog_core::{CatalogClient, HttpMethod, HttpRequest, HttpResponse, Item};
use serde_json::Value;

const BASE_URL: &str = "http://localhost:3000";

fn client() -> CatalogClient {
    CatalogClient::new(BASE_URL)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn load(raw: &str) -> Vec<Value> {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

fn simulated_response(case: &Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

/// Method and path always; headers and body only when the vector lists them.
fn assert_request(name: &str, req: &HttpRequest, expected: &Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.path, format!("{BASE_URL}{}", expected["path"].as_str().unwrap()), "{name}: path");

    match expected.get("headers") {
        Some(headers) => {
            let expected_headers: Vec<(String, String)> = headers
                .as_array()
                .unwrap()
                .iter()
                .map(|h| {
                    let arr = h.as_array().unwrap();
                    (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
                })
                .collect();
            assert_eq!(req.headers, expected_headers, "{name}: headers");
        }
        None => assert!(req.headers.is_empty(), "{name}: headers should be empty"),
    }

    match expected.get("body") {
        Some(body) => {
            let req_body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&req_body, body, "{name}: body");
        }
        None => assert!(req.body.is_none(), "{name}: body should be None"),
    }
}

fn assert_error<T: std::fmt::Debug>(name: &str, result: Result<T, catalog_core::TransportError>, case: &Value) -> Option<T> {
    match case.get("expected_error") {
        Some(expected) => {
            let err = result.unwrap_err();
            assert_eq!(err.message(), expected.as_str().unwrap(), "{name}: error message");
            None
        }
        None => Some(result.unwrap()),
    }
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[test]
fn list_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/list.json")) {
        let name = case["name"].as_str().unwrap();
        assert_request(name, &c.build_list_items(), &case["expected_request"]);

        let result = c.parse_list_items(simulated_response(&case));
        if let Some(items) = assert_error(name, result, &case) {
            let expected: Vec<Item> = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(items, expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

#[test]
fn get_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/get.json")) {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_u64().unwrap();
        assert_request(name, &c.build_get_item(id), &case["expected_request"]);

        let result = c.parse_get_item(simulated_response(&case));
        if let Some(item) = assert_error(name, result, &case) {
            let expected: Item = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(item, expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[test]
fn create_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/create.json")) {
        let name = case["name"].as_str().unwrap();
        let input: Item = serde_json::from_value(case["input"].clone()).unwrap();
        let req = c.build_create_item(&input).unwrap();
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_create_item(simulated_response(&case));
        if let Some(item) = assert_error(name, result, &case) {
            let expected: Item = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(item, expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[test]
fn update_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/update.json")) {
        let name = case["name"].as_str().unwrap();
        let input: Item = serde_json::from_value(case["input"].clone()).unwrap();
        let req = c.build_update_item(&input).unwrap();
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_update_item(simulated_response(&case));
        if let Some(item) = assert_error(name, result, &case) {
            let expected: Item = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(item, expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/delete.json")) {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_u64().unwrap();
        assert_request(name, &c.build_delete_item(id), &case["expected_request"]);

        let result = c.parse_delete_item(simulated_response(&case));
        assert_error(name, result, &case);
    }
}
