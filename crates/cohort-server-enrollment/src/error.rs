// Copyright (c) 2025 Cohort Platform Authors. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error taxonomy for the registration workflow.

use cohort_server_auth_linkedin::OAuthError;
use cohort_server_db::DbError;

/// Errors surfaced by the enrollment workflow.
///
/// Messages on the client-caused variants (`Validation`, `AlreadyEnrolled`,
/// the conflict/not-found kinds inside [`DbError`], and
/// [`OAuthError::InvalidRequest`]) are safe to return verbatim to the caller.
/// Everything else is internal; the transport layer logs the detail and
/// answers with a generic message.
#[derive(Debug, thiserror::Error)]
pub enum EnrollmentError {
	/// A profile or enrollment-form rule was violated.
	#[error("{0}")]
	Validation(String),

	/// The account has already completed its one-time enrollment.
	#[error("User Already Enrolled")]
	AlreadyEnrolled,

	/// The identity provider interaction failed.
	#[error(transparent)]
	OAuth(#[from] OAuthError),

	/// The account store failed.
	#[error(transparent)]
	Db(#[from] DbError),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn validation_message_passes_through() {
		let err = EnrollmentError::Validation("Missing Fields! Gender is required".to_string());
		assert_eq!(err.to_string(), "Missing Fields! Gender is required");
	}

	#[test]
	fn already_enrolled_has_fixed_message() {
		assert_eq!(
			EnrollmentError::AlreadyEnrolled.to_string(),
			"User Already Enrolled"
		);
	}
}
