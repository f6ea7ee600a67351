// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Purchase history model.

use serde::{Deserialize, Serialize};

use super::CartItem;
use crate::time_utils::next_sequence;

/// Immutable purchase record stored in the `purchases` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    /// Generated purchase ID (also used as document ID)
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub img: String,
    /// Purchase time (ISO 8601, millisecond precision, UTC)
    pub date: String,
    /// Orders purchases that share a `date` (strictly increasing per process)
    #[serde(default)]
    pub seq: i64,
}

impl Purchase {
    /// Snapshot a cart item as a purchase made at `date`.
    pub fn from_item(user_id: impl Into<String>, item: CartItem, date: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            name: item.name,
            price: item.price,
            img: item.img,
            date,
            seq: next_sequence(),
        }
    }
}

/// Sort purchases newest first.
///
/// Dates share one fixed-width format, so lexical order is chronological.
/// Purchases within the same millisecond fall back to `seq`.
pub fn sort_newest_first(purchases: &mut [Purchase]) {
    purchases.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.seq.cmp(&a.seq)));
}
