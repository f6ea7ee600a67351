// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Purchase routes.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use super::SuccessResponse;
use crate::error::Result;
use crate::models::{CartItem, Purchase};
use crate::time_utils::now_iso8601;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/purchase", post(purchase))
        .route("/api/purchases/{user_id}", get(list_purchases))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    pub user_id: String,
    pub product: CartItem,
}

/// Move an item from the cart into purchase history.
///
/// The two writes are independent: if the second fails, the item is gone
/// from the cart but not recorded as purchased.
async fn purchase(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PurchaseRequest>,
) -> Result<Json<SuccessResponse>> {
    let date = now_iso8601();

    let removed = state
        .db
        .pull_cart_items(&req.user_id, &req.product.name)
        .await?;

    let record = Purchase::from_item(req.user_id, req.product, date);
    state.db.insert_purchase(&record).await?;

    tracing::info!(
        user_id = %record.user_id,
        item = %record.name,
        removed_from_cart = removed,
        "Purchase recorded"
    );

    Ok(Json(SuccessResponse::ok()))
}

/// Purchase history, newest first.
async fn list_purchases(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Purchase>>> {
    Ok(Json(state.db.list_purchases(&user_id).await?))
}
