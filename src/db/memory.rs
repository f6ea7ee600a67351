// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory document store for local development and tests.
//!
//! Mirrors the Firestore backend's semantics. Data lives only as long as the
//! process.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

use crate::error::AppError;
use crate::models::purchase::sort_newest_first;
use crate::models::{Cart, CartItem, ProfileUpdate, Purchase, User};

#[derive(Default)]
struct Collections {
    users: DashMap<String, User>,
    /// email -> user ID, written once at signup
    user_emails: DashMap<String, String>,
    carts: DashMap<String, Cart>,
    /// user ID -> purchases in insertion order
    purchases: DashMap<String, Vec<Purchase>>,
}

/// Process-local store. Clones share the same data.
#[derive(Clone, Default)]
pub struct MemoryDb {
    inner: Arc<Collections>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user: claim the email, store the user, create an empty cart.
    pub async fn create_account(&self, user: &User) -> Result<(), AppError> {
        match self.inner.user_emails.entry(user.email.clone()) {
            Entry::Occupied(_) => Err(AppError::Conflict(user.email.clone())),
            Entry::Vacant(slot) => {
                slot.insert(user.id.clone());
                self.inner.users.insert(user.id.clone(), user.clone());
                self.inner
                    .carts
                    .insert(user.id.clone(), Cart::empty(user.id.clone()));
                Ok(())
            }
        }
    }

    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>, AppError> {
        Ok(self.inner.users.get(user_id).map(|u| u.value().clone()))
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .inner
            .users
            .iter()
            .find(|u| u.email == email)
            .map(|u| u.value().clone()))
    }

    pub async fn update_profile(
        &self,
        user_id: &str,
        update: ProfileUpdate,
    ) -> Result<bool, AppError> {
        match self.inner.users.get_mut(user_id) {
            Some(mut user) => {
                update.apply_to(&mut user);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub async fn get_cart(&self, user_id: &str) -> Result<Option<Cart>, AppError> {
        Ok(self.inner.carts.get(user_id).map(|c| c.value().clone()))
    }

    pub async fn push_cart_item(&self, user_id: &str, item: CartItem) -> Result<(), AppError> {
        self.inner
            .carts
            .entry(user_id.to_string())
            .or_insert_with(|| Cart::empty(user_id))
            .push(item);
        Ok(())
    }

    pub async fn pull_cart_items(&self, user_id: &str, name: &str) -> Result<usize, AppError> {
        Ok(self
            .inner
            .carts
            .get_mut(user_id)
            .map(|mut cart| cart.remove_named(name))
            .unwrap_or(0))
    }

    pub async fn insert_purchase(&self, purchase: &Purchase) -> Result<(), AppError> {
        self.inner
            .purchases
            .entry(purchase.user_id.clone())
            .or_default()
            .push(purchase.clone());
        Ok(())
    }

    pub async fn list_purchases(&self, user_id: &str) -> Result<Vec<Purchase>, AppError> {
        let mut purchases = self
            .inner
            .purchases
            .get(user_id)
            .map(|p| p.value().clone())
            .unwrap_or_default();
        // Stored oldest insert first; reverse so the stable sort keeps ties newest first
        purchases.reverse();
        sort_newest_first(&mut purchases);
        Ok(purchases)
    }

    /// Number of stored users.
    pub fn user_count(&self) -> usize {
        self.inner.users.len()
    }

    /// Number of stored carts.
    pub fn cart_count(&self) -> usize {
        self.inner.carts.len()
    }
}
