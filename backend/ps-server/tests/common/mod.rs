#![allow(dead_code)]

//! Test infrastructure for ps-server API tests

use ps_auth::{BearerGate, PublicKey};
use ps_db::PersonRepository;
use ps_server::AppState;

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde_json::{Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

pub const SIGNING_KEY_PEM: &str =
    include_str!("../../../crates/ps-auth/tests/fixtures/signing_key.pem");
pub const SIGNING_KEY_MODULUS: &str =
    include_str!("../../../crates/ps-auth/tests/fixtures/signing_key.modulus");
pub const UNRELATED_KEY_PEM: &str =
    include_str!("../../../crates/ps-auth/tests/fixtures/unrelated_key.pem");
pub const EXPONENT: &str = "AQAB";

/// Create a migrated in-memory pool; a single connection keeps one database
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    ps_db::migrate(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// AppState with the gate disabled
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;
    AppState::new(PersonRepository::new(pool), BearerGate::disabled())
}

/// AppState whose gate trusts the fixture signing key
pub async fn create_gated_app_state() -> AppState {
    let pool = create_test_pool().await;
    let public_key = PublicKey::from_components(SIGNING_KEY_MODULUS.trim(), EXPONENT)
        .expect("Fixture key must decode");

    AppState::new(
        PersonRepository::new(pool),
        BearerGate::new(Some(Arc::new(public_key))),
    )
}

pub fn create_token(algorithm: Algorithm, pem: &str) -> String {
    encode(
        &Header::new(algorithm),
        &json!({ "sub": "user-123" }),
        &EncodingKey::from_rsa_pem(pem.as_bytes()).expect("Fixture PEM must parse"),
    )
    .expect("Failed to sign token")
}

/// RS256 token signed by the key the gated state trusts
pub fn create_valid_token() -> String {
    create_token(Algorithm::RS256, SIGNING_KEY_PEM)
}

pub fn person_json(first_name: &str, last_name: &str, age: i32) -> Value {
    json!({ "firstName": first_name, "lastName": last_name, "age": age })
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Send one request and decode the JSON body (Null for empty or non-JSON bodies)
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}

pub async fn send_text(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, String::from_utf8(body.to_vec()).unwrap())
}
