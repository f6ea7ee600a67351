// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shopping cart routes.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use super::SuccessResponse;
use crate::error::Result;
use crate::models::CartItem;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/cart/{user_id}", get(get_cart))
        .route("/api/cart/add", post(add_to_cart))
        .route("/api/cart/remove", post(remove_from_cart))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub user_id: String,
    pub product: CartItem,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFromCartRequest {
    pub user_id: String,
    pub product_name: String,
}

/// Items in the user's cart; empty if the user has no cart.
async fn get_cart(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<CartItem>>> {
    let items = state
        .db
        .get_cart(&user_id)
        .await?
        .map(|cart| cart.items)
        .unwrap_or_default();

    Ok(Json(items))
}

async fn add_to_cart(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddToCartRequest>,
) -> Result<Json<SuccessResponse>> {
    tracing::debug!(user_id = %req.user_id, item = %req.product.name, "Adding item to cart");

    state.db.push_cart_item(&req.user_id, req.product).await?;

    Ok(Json(SuccessResponse::ok()))
}

async fn remove_from_cart(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RemoveFromCartRequest>,
) -> Result<Json<SuccessResponse>> {
    let removed = state
        .db
        .pull_cart_items(&req.user_id, &req.product_name)
        .await?;

    tracing::debug!(
        user_id = %req.user_id,
        item = %req.product_name,
        removed,
        "Removed items from cart"
    );

    Ok(Json(SuccessResponse::ok()))
}
