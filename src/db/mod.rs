// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Database layer.
//!
//! [`Store`] is the handle injected into every handler. It dispatches to
//! Firestore in production or to an in-memory map for development and tests.

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryDb;

use crate::config::{Config, StoreBackend};
use crate::error::AppError;
use crate::models::{Cart, CartItem, ProfileUpdate, Purchase, User};

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    /// Email uniqueness claims (keyed by URL-encoded email)
    pub const USER_EMAILS: &str = "user_emails";
    /// Carts (keyed by owner user ID)
    pub const CARTS: &str = "carts";
    pub const PURCHASES: &str = "purchases";
}

/// Document store handle, cheap to clone.
#[derive(Clone)]
pub enum Store {
    Firestore(FirestoreDb),
    Memory(MemoryDb),
}

macro_rules! dispatch {
    ($self:ident, $db:ident => $call:expr) => {
        match $self {
            Store::Firestore($db) => $call,
            Store::Memory($db) => $call,
        }
    };
}

impl Store {
    /// Connect to the backend selected in config.
    pub async fn connect(config: &Config) -> Result<Self, AppError> {
        match config.store_backend {
            StoreBackend::Firestore => Ok(Self::Firestore(
                FirestoreDb::new(&config.gcp_project_id).await?,
            )),
            StoreBackend::Memory => {
                tracing::warn!("Using in-memory store, data will not persist");
                Ok(Self::Memory(MemoryDb::new()))
            }
        }
    }

    /// Register a user and create their empty cart.
    ///
    /// Fails with [`AppError::Conflict`] if the email is taken.
    pub async fn create_account(&self, user: &User) -> Result<(), AppError> {
        dispatch!(self, db => db.create_account(user).await)
    }

    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>, AppError> {
        dispatch!(self, db => db.get_user(user_id).await)
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        dispatch!(self, db => db.find_user_by_email(email).await)
    }

    /// Returns `false` if the user does not exist (nothing is written).
    pub async fn update_profile(
        &self,
        user_id: &str,
        update: ProfileUpdate,
    ) -> Result<bool, AppError> {
        dispatch!(self, db => db.update_profile(user_id, update).await)
    }

    pub async fn get_cart(&self, user_id: &str) -> Result<Option<Cart>, AppError> {
        dispatch!(self, db => db.get_cart(user_id).await)
    }

    /// Find-or-create the cart, then append.
    pub async fn push_cart_item(&self, user_id: &str, item: CartItem) -> Result<(), AppError> {
        dispatch!(self, db => db.push_cart_item(user_id, item).await)
    }

    /// Filter out every item named `name`; returns how many were removed.
    pub async fn pull_cart_items(&self, user_id: &str, name: &str) -> Result<usize, AppError> {
        dispatch!(self, db => db.pull_cart_items(user_id, name).await)
    }

    pub async fn insert_purchase(&self, purchase: &Purchase) -> Result<(), AppError> {
        dispatch!(self, db => db.insert_purchase(purchase).await)
    }

    /// Newest first.
    pub async fn list_purchases(&self, user_id: &str) -> Result<Vec<Purchase>, AppError> {
        dispatch!(self, db => db.list_purchases(user_id).await)
    }
}
