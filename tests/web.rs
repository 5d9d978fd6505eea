//! Browser-only checks for the `localStorage` credential repository.
//! Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use gradesync_login::models::StoredCredential;
use gradesync_login::services::{CredentialRepository, LocalStorageRepository};

wasm_bindgen_test_configure!(run_in_browser);

fn fresh(key: &str) -> LocalStorageRepository {
    let repo = LocalStorageRepository::new(key);
    repo.clear().expect("localStorage is available");
    repo
}

#[wasm_bindgen_test]
fn credential_round_trips_through_local_storage() {
    let repo = fresh("test_user_roundtrip");
    assert!(!repo.has_credential());

    let credential = StoredCredential::from_response_body(r#"{"access":"a","refresh":"r"}"#);
    repo.set(&credential).expect("write");

    let raw = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item("test_user_roundtrip").ok().flatten());
    assert_eq!(raw.as_deref(), Some(r#"{"access":"a","refresh":"r"}"#));
    assert_eq!(repo.get().expect("read"), Some(credential));

    repo.clear().expect("remove");
    assert_eq!(repo.get().expect("read"), None);
}

#[wasm_bindgen_test]
fn empty_stored_string_does_not_count() {
    let repo = fresh("test_user_empty");
    repo.set(&StoredCredential::from_stored(String::new())).expect("write");
    assert!(!repo.has_credential());
    repo.clear().expect("remove");
}

#[wasm_bindgen_test]
fn token_request_is_a_json_post() {
    use gloo_net::http::Method;
    use gradesync_login::models::{CredentialInput, LoginRequest};
    use gradesync_login::services::auth_service::token_request;

    let login = LoginRequest::try_from_input(&CredentialInput::new("alice", "pw")).expect("valid input");
    let request = token_request("http://127.0.0.1:8050/api/token/", &login).expect("request builds");

    assert_eq!(request.method(), Method::POST);
    assert_eq!(request.url(), "http://127.0.0.1:8050/api/token/");
    let headers = request.headers();
    assert_eq!(headers.get("Accept").as_deref(), Some("application/json"));
    assert_eq!(headers.get("Content-Type").as_deref(), Some("application/json"));
}
