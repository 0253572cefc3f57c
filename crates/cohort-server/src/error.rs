// Copyright (c) 2025 Cohort Platform Authors. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Workflow-error to HTTP-response mapping.

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use cohort_server_auth_linkedin::OAuthError;
use cohort_server_db::DbError;
use cohort_server_enrollment::EnrollmentError;

use crate::api_response::ErrorEnvelope;

/// Generic message for failures whose detail must not leak to the caller.
pub const INTERNAL_ERROR_MESSAGE: &str = "Something Bad Happened!";

/// Wrapper that turns an [`EnrollmentError`] into an HTTP error envelope.
///
/// Client-caused failures keep their message verbatim; upstream and storage
/// failures are logged at error level here and answered with
/// [`INTERNAL_ERROR_MESSAGE`].
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ServerError(#[from] EnrollmentError);

impl ServerError {
	fn classify(&self) -> (StatusCode, String) {
		match &self.0 {
			EnrollmentError::Validation(message) => (StatusCode::BAD_REQUEST, message.clone()),
			EnrollmentError::AlreadyEnrolled => {
				(StatusCode::BAD_REQUEST, self.0.to_string())
			}
			EnrollmentError::Db(DbError::Conflict(message)) => {
				(StatusCode::BAD_REQUEST, message.clone())
			}
			EnrollmentError::Db(DbError::NotFound(message)) => {
				(StatusCode::NOT_FOUND, message.clone())
			}
			EnrollmentError::OAuth(OAuthError::InvalidRequest(message)) => {
				(StatusCode::BAD_REQUEST, message.clone())
			}
			EnrollmentError::OAuth(OAuthError::NoProfile) => {
				(StatusCode::NOT_FOUND, self.0.to_string())
			}
			EnrollmentError::OAuth(e) => {
				tracing::error!(error = %e, "identity provider failure");
				(
					StatusCode::INTERNAL_SERVER_ERROR,
					INTERNAL_ERROR_MESSAGE.to_string(),
				)
			}
			EnrollmentError::Db(e) => {
				tracing::error!(error = %e, "storage failure");
				(
					StatusCode::INTERNAL_SERVER_ERROR,
					INTERNAL_ERROR_MESSAGE.to_string(),
				)
			}
		}
	}
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let (status, error) = self.classify();
		(status, Json(ErrorEnvelope { error })).into_response()
	}
}
