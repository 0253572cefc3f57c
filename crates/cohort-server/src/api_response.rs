// Copyright (c) 2025 Cohort Platform Authors. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! API response envelopes.
//!
//! Success responses wrap the account in a `payload` field; error responses
//! carry a single caller-safe `error` message. These two shapes are the whole
//! wire contract of the service.

use axum::{http::StatusCode, Json};
use cohort_server_accounts::Account;
use serde::{Deserialize, Serialize};

/// Success envelope: `{"payload": <account>}`.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AccountEnvelope {
	pub payload: Account,
}

/// Error envelope: `{"error": "<message>"}`.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorEnvelope {
	pub error: String,
}

/// Wrap an account in a 200 OK success envelope.
pub fn ok(account: Account) -> (StatusCode, Json<AccountEnvelope>) {
	(StatusCode::OK, Json(AccountEnvelope { payload: account }))
}

/// Wrap an account in a 201 Created success envelope.
pub fn created(account: Account) -> (StatusCode, Json<AccountEnvelope>) {
	(
		StatusCode::CREATED,
		Json(AccountEnvelope { payload: account }),
	)
}
