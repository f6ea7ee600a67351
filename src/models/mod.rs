// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod cart;
pub mod purchase;
pub mod user;

pub use cart::{Cart, CartItem};
pub use purchase::Purchase;
pub use user::{EmailClaim, ProfileUpdate, User};
