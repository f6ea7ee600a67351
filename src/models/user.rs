// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User model for storage and API.

use serde::{Deserialize, Serialize};

/// User account stored in the `users` collection.
///
/// Serialized as-is by `GET /api/user/:userId`, so the password hash is part
/// of the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Generated user ID (also used as document ID)
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Unique at signup time only; profile updates are not re-checked
    pub email: String,
    /// Argon2id PHC string
    pub password: String,
    #[serde(default)]
    pub bio: Option<String>,
}

impl User {
    /// Create a new user with a freshly generated ID.
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            email,
            password: password_hash,
            bio: None,
        }
    }
}

/// Fields overwritten by a profile update.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub bio: Option<String>,
}

impl ProfileUpdate {
    /// Apply the update, leaving ID and password hash untouched.
    pub fn apply_to(self, user: &mut User) {
        user.name = self.name;
        user.email = self.email;
        user.bio = self.bio;
    }
}

/// Email claim document in the `user_emails` collection.
///
/// Its existence reserves `email` for `user_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailClaim {
    pub email: String,
    pub user_id: String,
}
