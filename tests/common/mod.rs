// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use ecofinds_api::config::Config;
use ecofinds_api::db::{FirestoreDb, MemoryDb, Store};
use ecofinds_api::routes::create_router;
use ecofinds_api::services::PasswordService;
use ecofinds_api::AppState;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

fn app_with_store(db: Store) -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let passwords = PasswordService::new(config.password).expect("valid test params");

    let state = Arc::new(AppState {
        config,
        db,
        passwords,
    });

    (create_router(state.clone()), state)
}

/// Create a test app backed by the in-memory store.
/// Returns the router and the store for direct inspection.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, MemoryDb) {
    let memory = MemoryDb::new();
    let (app, _) = app_with_store(Store::Memory(memory.clone()));
    (app, memory)
}

/// Create a test app whose database is disconnected.
#[allow(dead_code)]
pub fn create_offline_app() -> axum::Router {
    app_with_store(Store::Firestore(FirestoreDb::new_mock())).0
}

/// Send a request and decode the JSON response body.
#[allow(dead_code)]
pub async fn send(
    app: &axum::Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

/// Sign up and log in, returning the user ID.
#[allow(dead_code)]
pub async fn signup_and_login(app: &axum::Router, email: &str, password: &str) -> String {
    let (status, _) = send(
        app,
        Method::POST,
        "/api/signup",
        Some(serde_json::json!({ "name": "Test", "email": email, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        app,
        Method::POST,
        "/api/login",
        Some(serde_json::json!({ "email": email, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    body["userId"].as_str().unwrap().to_string()
}
