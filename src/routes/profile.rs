// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User profile routes.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use super::SuccessResponse;
use crate::error::Result;
use crate::models::{ProfileUpdate, User};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/user/{user_id}", get(get_user).put(update_user))
}

/// Full user record, or JSON `null` for an unknown ID.
async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Option<User>>> {
    Ok(Json(state.db.get_user(&user_id).await?))
}

/// Overwrite name, email and bio. Unknown IDs are a silent no-op.
async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<SuccessResponse>> {
    if state.db.update_profile(&user_id, update).await? {
        tracing::info!(user_id = %user_id, "Profile updated");
    } else {
        tracing::debug!(user_id = %user_id, "Profile update for unknown user ignored");
    }

    Ok(Json(SuccessResponse::ok()))
}
