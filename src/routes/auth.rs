// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Account signup and login routes.

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::User;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/signup", post(signup))
        .route("/api/login", post(login))
}

#[derive(Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Generic `{success, message}` envelope.
#[derive(Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    /// The caller presents this ID on later requests; there is no session token.
    pub user_id: String,
}

/// Create a user and their empty cart.
async fn signup(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<MessageResponse>> {
    let password_hash = state.passwords.hash(req.password).await?;
    let user = User::new(req.name, req.email, password_hash);

    state.db.create_account(&user).await?;

    tracing::info!(user_id = %user.id, "User registered");

    Ok(Json(MessageResponse {
        success: true,
        message: "User registered successfully!".to_string(),
    }))
}

/// Check credentials and hand back the user ID.
async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let user = state
        .db
        .find_user_by_email(&req.email)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if !state.passwords.verify(req.password, user.password).await? {
        tracing::info!(user_id = %user.id, "Login rejected, wrong password");
        return Err(AppError::InvalidCredentials);
    }

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful!".to_string(),
        user_id: user.id,
    }))
}
