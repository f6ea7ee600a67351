// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Service layer.

pub mod password;

pub use password::PasswordService;
