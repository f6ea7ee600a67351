// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Users (accounts and profiles)
//! - Email claims (signup uniqueness)
//! - Carts (one document per user)
//! - Purchases (append-only history)

use crate::db::collections;
use crate::error::AppError;
use crate::models::{Cart, CartItem, EmailClaim, ProfileUpdate, Purchase, User};

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // The emulator accepts any bearer token, so skip credential discovery.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a disconnected client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    // ─── Account Operations ──────────────────────────────────────

    /// Register a user: claim the email, store the user, create an empty cart.
    ///
    /// Returns `AppError::Conflict` if the email is already claimed. If the
    /// user write fails the claim is released again.
    pub async fn create_account(&self, user: &User) -> Result<(), AppError> {
        self.claim_email(&user.email, &user.id).await?;

        if let Err(e) = self.put_user(user).await {
            tracing::warn!(user_id = %user.id, "User write failed, releasing email claim");
            if let Err(release_err) = self.release_email(&user.email).await {
                tracing::error!(error = %release_err, "Failed to release email claim");
            }
            return Err(e);
        }

        self.put_cart(&Cart::empty(user.id.clone())).await
    }

    /// Create the email claim document. Fails if it already exists.
    async fn claim_email(&self, email: &str, user_id: &str) -> Result<(), AppError> {
        let claim = EmailClaim {
            email: email.to_string(),
            user_id: user_id.to_string(),
        };

        let result: Result<EmailClaim, firestore::errors::FirestoreError> = self
            .get_client()?
            .fluent()
            .insert()
            .into(collections::USER_EMAILS)
            .document_id(email_doc_id(email))
            .object(&claim)
            .execute()
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(firestore::errors::FirestoreError::DataConflictError(_)) => {
                Err(AppError::Conflict(email.to_string()))
            }
            Err(e) => Err(AppError::Database(e.to_string())),
        }
    }

    async fn release_email(&self, email: &str) -> Result<(), AppError> {
        self.get_client()?
            .fluent()
            .delete()
            .from(collections::USER_EMAILS)
            .document_id(email_doc_id(email))
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Get a user by ID.
    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::USERS)
            .obj()
            .one(user_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find the user currently holding an email address.
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users: Vec<User> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::USERS)
            .filter(|q| q.for_all([q.field("email").eq(email)]))
            .limit(1)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(users.into_iter().next())
    }

    /// Overwrite name, email and bio. Returns `false` if the user does not exist.
    ///
    /// Fetch-modify-write so the password hash is carried over untouched.
    pub async fn update_profile(
        &self,
        user_id: &str,
        update: ProfileUpdate,
    ) -> Result<bool, AppError> {
        let Some(mut user) = self.get_user(user_id).await? else {
            return Ok(false);
        };

        update.apply_to(&mut user);
        self.put_user(&user).await?;
        Ok(true)
    }

    /// Create or replace a user document.
    async fn put_user(&self, user: &User) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::USERS)
            .document_id(&user.id)
            .object(user)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    // ─── Cart Operations ─────────────────────────────────────────

    /// Get a user's cart.
    pub async fn get_cart(&self, user_id: &str) -> Result<Option<Cart>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::CARTS)
            .obj()
            .one(user_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Append an item, creating the cart if it does not exist.
    pub async fn push_cart_item(&self, user_id: &str, item: CartItem) -> Result<(), AppError> {
        let mut cart = self
            .get_cart(user_id)
            .await?
            .unwrap_or_else(|| Cart::empty(user_id));

        cart.push(item);
        self.put_cart(&cart).await
    }

    /// Remove every item named `name`. Missing carts are left missing.
    ///
    /// Returns the number of items removed.
    pub async fn pull_cart_items(&self, user_id: &str, name: &str) -> Result<usize, AppError> {
        let Some(mut cart) = self.get_cart(user_id).await? else {
            return Ok(0);
        };

        let removed = cart.remove_named(name);
        if removed > 0 {
            self.put_cart(&cart).await?;
        }
        Ok(removed)
    }

    /// Create or replace a cart document (keyed by owner).
    async fn put_cart(&self, cart: &Cart) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::CARTS)
            .document_id(&cart.user_id)
            .object(cart)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    // ─── Purchase Operations ─────────────────────────────────────

    /// Store a purchase record.
    pub async fn insert_purchase(&self, purchase: &Purchase) -> Result<(), AppError> {
        let _: Purchase = self
            .get_client()?
            .fluent()
            .insert()
            .into(collections::PURCHASES)
            .document_id(&purchase.id)
            .object(purchase)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// All purchases for a user, newest first.
    ///
    /// Needs the `purchases` composite index from `firestore.indexes.json`.
    pub async fn list_purchases(&self, user_id: &str) -> Result<Vec<Purchase>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::PURCHASES)
            .filter(|q| q.for_all([q.field("userId").eq(user_id)]))
            .order_by([
                ("date", firestore::FirestoreQueryDirection::Descending),
                ("seq", firestore::FirestoreQueryDirection::Descending),
            ])
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}

/// Document ID for an email claim.
///
/// Firestore IDs cannot contain `/`, so the address is URL-encoded.
fn email_doc_id(email: &str) -> String {
    urlencoding::encode(email).into_owned()
}
