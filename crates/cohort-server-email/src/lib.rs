// Copyright (c) 2025 Cohort Platform Authors. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Notification email service for the Cohort registration backend.
//!
//! Renders and dispatches the welcome email sent after a successful
//! enrollment. Dispatch is best-effort from the caller's perspective: the
//! enrollment workflow logs a failure here and still reports success, because
//! the enrollment itself has already been durably written.

mod templates;

use std::sync::Arc;

use cohort_server_accounts::Account;
use cohort_server_smtp::{SmtpClient, SmtpError};

/// Errors that can occur when dispatching notification email.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
	/// The underlying SMTP operation failed.
	#[error(transparent)]
	Smtp(#[from] SmtpError),
}

/// Email service consolidating notification dispatch.
#[derive(Clone)]
pub struct EmailService {
	smtp: Arc<SmtpClient>,
}

impl EmailService {
	/// Create a new email service over an SMTP client.
	pub fn new(smtp: Arc<SmtpClient>) -> Self {
		Self { smtp }
	}

	/// Send the enrollment welcome email to an account.
	///
	/// # Errors
	///
	/// Returns [`EmailError::Smtp`] if the message cannot be built or sent.
	#[tracing::instrument(skip(self, account), fields(email = %account.email))]
	pub async fn send_welcome(&self, account: &Account) -> Result<(), EmailError> {
		tracing::info!("sending welcome email");

		let greeting_name = if account.first_name.is_empty() {
			&account.name
		} else {
			&account.first_name
		};

		self
			.smtp
			.send_email(
				&account.email,
				templates::WELCOME_SUBJECT,
				&templates::welcome_html(greeting_name),
				&templates::welcome_text(greeting_name),
			)
			.await?;

		Ok(())
	}
}
