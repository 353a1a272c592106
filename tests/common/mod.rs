#![allow(dead_code)]

use std::collections::HashMap;

use kcrest::KeycloakClient;
use wiremock::{MockServer, Request};

pub mod keycloak;
pub mod live;

pub const REALM: &str = "demo";
pub const TOKEN: &str = "admin-access-token";

pub async fn setup() -> (MockServer, KeycloakClient) {
    let _ = env_logger::builder().is_test(true).try_init();

    let server = MockServer::start().await;
    let client = KeycloakClient::new(&server.uri()).unwrap();

    (server, client)
}

/// `application/x-www-form-urlencoded` body of the request, repeated keys
/// collected in order.
pub fn form_body(request: &Request) -> HashMap<String, Vec<String>> {
    let mut form: HashMap<String, Vec<String>> = HashMap::new();

    for (key, value) in form_urlencoded::parse(&request.body) {
        form.entry(key.into_owned()).or_default().push(value.into_owned());
    }

    form
}

pub fn form_value<'a>(form: &'a HashMap<String, Vec<String>>, key: &str) -> Option<&'a str> {
    form.get(key)
        .and_then(|values| values.first())
        .map(String::as_str)
}

pub async fn single_request(server: &MockServer) -> Request {
    let mut requests = server.received_requests().await.unwrap();

    assert_eq!(requests.len(), 1);
    requests.remove(0)
}

pub fn assert_token_like(s: &str) {
    let token_parts: Vec<&str> = s.split('.').collect();

    assert_eq!(token_parts.len(), 3);
}
