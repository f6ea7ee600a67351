// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! EcoFinds: storefront backend
//!
//! This crate provides the REST API for user accounts, shopping carts and
//! purchase history, backed by a document store.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::Store;
use services::PasswordService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: Store,
    pub passwords: PasswordService,
}
