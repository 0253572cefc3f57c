// Copyright (c) 2025 Cohort Platform Authors. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTTP server for the Cohort registration backend.
//!
//! Exposes three entry points over the registration workflow:
//!
//! - `POST /api/accounts` — create a provisional account from an OAuth
//!   callback code
//! - `POST /api/accounts/{email}/enrollment` — finalize an account with the
//!   enrollment form
//! - `GET /api/accounts/{email}` — fetch an account
//!
//! Every response is an envelope: `{"payload": ...}` on success,
//! `{"error": "..."}` on failure, with the HTTP status reflecting the error
//! kind (400 for validation/client errors, 404 for unknown emails, 500 for
//! provider and storage failures).

pub mod api;
pub mod api_response;
pub mod error;
pub mod routes;

pub use api::{create_app_state, create_router, AppState};
pub use error::ServerError;
