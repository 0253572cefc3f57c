// Copyright (c) 2025 Cohort Platform Authors. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Account HTTP handlers.
//!
//! Implements the three registration endpoints:
//! - Create a provisional account from an OAuth callback code
//! - Enroll an account with the submitted form
//! - Fetch an account by email

use axum::{
	extract::{Path, State},
	response::IntoResponse,
	Json,
};
use serde::Deserialize;

use cohort_server_accounts::EnrollmentForm;

use crate::{
	api::AppState,
	api_response::{created, ok},
	error::ServerError,
};

/// Request body for account creation: the OAuth callback artifacts.
///
/// Missing fields default to empty strings and are rejected by the workflow
/// before any network call is made.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct CreateAccountRequest {
	/// Authorization code from the OAuth callback.
	pub code: String,
	/// The redirect URI the code was issued for.
	pub redirect_uri: String,
}

/// Create a provisional account from an OAuth callback.
///
/// # Request
///
/// Body ([`CreateAccountRequest`]): the `code` and `redirect_uri` from the
/// provider callback.
///
/// # Response
///
/// `201 Created` with `{"payload": <account>}`.
///
/// # Errors
///
/// - `400 Bad Request`: empty code/redirect URI, profile failed the
///   provisioning requirements, or the email is already registered
/// - `404 Not Found`: the provider has no profile for this member
/// - `500 Internal Server Error`: provider or storage failure
#[utoipa::path(
    post,
    path = "/api/accounts",
    request_body = CreateAccountRequest,
    responses(
        (status = 201, description = "Provisional account created", body = crate::api_response::AccountEnvelope),
        (status = 400, description = "Invalid request or profile", body = crate::api_response::ErrorEnvelope),
        (status = 404, description = "No profile found", body = crate::api_response::ErrorEnvelope),
        (status = 500, description = "Provider or storage failure", body = crate::api_response::ErrorEnvelope)
    ),
    tag = "accounts"
)]
#[tracing::instrument(skip_all)]
pub async fn create_account(
	State(state): State<AppState>,
	Json(body): Json<CreateAccountRequest>,
) -> Result<impl IntoResponse, ServerError> {
	let account = state
		.enrollment
		.register(&body.code, &body.redirect_uri)
		.await?;
	Ok(created(account))
}

/// Enroll an account with the submitted form.
///
/// # Request
///
/// Path parameters:
/// - `email`: account email (case-insensitive)
///
/// Body: the [`EnrollmentForm`].
///
/// # Response
///
/// `200 OK` with `{"payload": <account>}`; the payload has `enrolled: true`.
///
/// # Errors
///
/// - `400 Bad Request`: missing/invalid field, or the account is already enrolled
/// - `404 Not Found`: unknown email
/// - `500 Internal Server Error`: storage failure
#[utoipa::path(
    post,
    path = "/api/accounts/{email}/enrollment",
    params(
        ("email" = String, Path, description = "Account email")
    ),
    request_body = EnrollmentForm,
    responses(
        (status = 200, description = "Account enrolled", body = crate::api_response::AccountEnvelope),
        (status = 400, description = "Validation failure", body = crate::api_response::ErrorEnvelope),
        (status = 404, description = "Unknown email", body = crate::api_response::ErrorEnvelope)
    ),
    tag = "accounts"
)]
#[tracing::instrument(skip(state, form), fields(email = %email))]
pub async fn enroll_account(
	State(state): State<AppState>,
	Path(email): Path<String>,
	Json(form): Json<EnrollmentForm>,
) -> Result<impl IntoResponse, ServerError> {
	let account = state.enrollment.enroll(&email, &form).await?;
	Ok(ok(account))
}

/// Fetch an account by email.
///
/// # Request
///
/// Path parameters:
/// - `email`: account email (case-insensitive)
///
/// # Response
///
/// `200 OK` with `{"payload": <account>}`.
///
/// # Errors
///
/// - `404 Not Found`: unknown email
/// - `500 Internal Server Error`: storage failure
#[utoipa::path(
    get,
    path = "/api/accounts/{email}",
    params(
        ("email" = String, Path, description = "Account email")
    ),
    responses(
        (status = 200, description = "Account found", body = crate::api_response::AccountEnvelope),
        (status = 404, description = "Unknown email", body = crate::api_response::ErrorEnvelope)
    ),
    tag = "accounts"
)]
#[tracing::instrument(skip(state), fields(email = %email))]
pub async fn get_account(
	State(state): State<AppState>,
	Path(email): Path<String>,
) -> Result<impl IntoResponse, ServerError> {
	let account = state.enrollment.lookup(&email).await?;
	Ok(ok(account))
}
