// Copyright (c) 2025 Cohort Platform Authors. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Database layer for the Cohort registration backend.
//!
//! This crate owns the SQLite pool, the schema, and the account repository.
//! One table, one key: accounts are stored per normalized email, full-record
//! reads and writes only. Callers merge fields onto a previously-read copy
//! before updating; the store never merges.

pub mod account;
pub mod error;
pub mod pool;
pub mod testing;

pub use account::{AccountRepository, AccountStore};
pub use error::DbError;
pub use pool::{create_pool, run_migrations};
