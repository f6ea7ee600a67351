// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shopping cart model.

use serde::{Deserialize, Serialize};

/// A product line in a cart or a purchase snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub name: String,
    pub price: f64,
    /// Image reference (URL or asset path)
    #[serde(default)]
    pub img: String,
}

/// Per-user cart stored in the `carts` collection, keyed by owner ID.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub user_id: String,
    #[serde(default)]
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart for a user.
    pub fn empty(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            items: Vec::new(),
        }
    }

    /// Append an item. Duplicates are allowed.
    pub fn push(&mut self, item: CartItem) {
        self.items.push(item);
    }

    /// Remove every item with the given name, returning how many were removed.
    pub fn remove_named(&mut self, name: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.name != name);
        before - self.items.len()
    }
}
