//! Verify client operations against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, the expected request, a simulated
//! response, and the expected result. Request bodies are compared as parsed
//! JSON (not raw strings) to avoid false negatives from field-ordering
//! differences; a `null` expected result means the operation reports the
//! record as absent.

use std::cell::RefCell;
use std::rc::Rc;

use placeholder_core::{
    HttpMethod, HttpRequest, HttpResponse, PlaceholderClient, Transport, TransportError, User,
};

const BASE_URL: &str = "http://localhost:3000";

/// Replays one canned response and shares the request it saw with the test.
struct VectorTransport {
    response: HttpResponse,
    seen: Rc<RefCell<Option<HttpRequest>>>,
}

impl Transport for VectorTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        *self.seen.borrow_mut() = Some(request.clone());
        Ok(self.response.clone())
    }
}

fn client_for(
    case: &serde_json::Value,
) -> (PlaceholderClient<VectorTransport>, Rc<RefCell<Option<HttpRequest>>>) {
    let sim = &case["simulated_response"];
    let seen = Rc::new(RefCell::new(None));
    let transport = VectorTransport {
        response: HttpResponse {
            status: sim["status"].as_u64().unwrap() as u16,
            body: sim["body"].as_str().unwrap().to_string(),
        },
        seen: Rc::clone(&seen),
    };
    (PlaceholderClient::with_transport(BASE_URL, transport), seen)
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

fn assert_request(name: &str, case: &serde_json::Value, seen: &Option<HttpRequest>) {
    let expected = &case["expected_request"];
    let request = seen.as_ref().unwrap_or_else(|| panic!("{name}: no request executed"));

    assert_eq!(
        request.method,
        parse_method(expected["method"].as_str().unwrap()),
        "{name}: method"
    );
    assert_eq!(
        request.url,
        format!("{BASE_URL}{}", expected["path"].as_str().unwrap()),
        "{name}: url"
    );

    if let Some(expected_body) = expected.get("body") {
        let body: serde_json::Value =
            serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(&body, expected_body, "{name}: body");
    } else {
        assert!(request.body.is_none(), "{name}: body should be None");
    }
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[test]
fn list_test_vectors() {
    let raw = include_str!("../../test-vectors/list.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let (client, seen) = client_for(case);

        let users = client.list_users().unwrap();

        assert_request(name, case, &seen.borrow());
        let expected: Vec<User> = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(users, expected, "{name}: result");
    }
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

#[test]
fn get_test_vectors() {
    let raw = include_str!("../../test-vectors/get.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_i64().unwrap();
        let (client, seen) = client_for(case);

        let user = client.get_user(id).unwrap();

        assert_request(name, case, &seen.borrow());
        let expected: Option<User> =
            serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(user, expected, "{name}: result");
    }
}

// ---------------------------------------------------------------------------
// Find by username
// ---------------------------------------------------------------------------

#[test]
fn find_test_vectors() {
    let raw = include_str!("../../test-vectors/find.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let username = case["input_username"].as_str().unwrap();
        let (client, seen) = client_for(case);

        let users = client.find_users_by_username(username).unwrap();

        assert_request(name, case, &seen.borrow());
        let expected: Vec<User> = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(users, expected, "{name}: result");
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[test]
fn create_test_vectors() {
    let raw = include_str!("../../test-vectors/create.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input: User = serde_json::from_value(case["input"].clone()).unwrap();
        let (client, seen) = client_for(case);

        let created = client.create_user(&input).unwrap();

        assert_request(name, case, &seen.borrow());
        let expected: Option<User> =
            serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(created, expected, "{name}: result");
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[test]
fn update_test_vectors() {
    let raw = include_str!("../../test-vectors/update.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input: User = serde_json::from_value(case["input"].clone()).unwrap();
        let (client, seen) = client_for(case);

        let updated = client.update_user(&input).unwrap();

        assert_request(name, case, &seen.borrow());
        let expected: Option<User> =
            serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(updated, expected, "{name}: result");
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_test_vectors() {
    let raw = include_str!("../../test-vectors/delete.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_i64().unwrap();
        let (client, seen) = client_for(case);

        let deleted = client.delete_user(id).unwrap();

        assert_request(name, case, &seen.borrow());
        assert_eq!(
            deleted,
            case["expected_result"].as_bool().unwrap(),
            "{name}: result"
        );
    }
}
