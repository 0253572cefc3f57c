// Copyright (c) 2025 Cohort Platform Authors. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The registration workflow.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use cohort_server_accounts::{normalize_email, Account, EnrollmentForm};
use cohort_server_auth_linkedin::{fetch_profile, IdentityProvider};
use cohort_server_db::AccountStore;
use cohort_server_email::{EmailError, EmailService};

use crate::error::EnrollmentError;
use crate::profile::{split_display_name, ProfileRequirements};
use crate::validator::validate;

/// Notification boundary for the workflow: fire-and-forget welcome mail.
#[async_trait]
pub trait WelcomeNotifier: Send + Sync {
	async fn welcome(&self, account: &Account) -> Result<(), EmailError>;
}

#[async_trait]
impl WelcomeNotifier for EmailService {
	async fn welcome(&self, account: &Account) -> Result<(), EmailError> {
		self.send_welcome(account).await
	}
}

/// Orchestrates the account state machine.
///
/// States per account: unregistered → provisional (created,
/// `enrolled = false`) → enrolled (terminal). Collaborators are injected,
/// never reached through globals; every handler holds one shared service.
///
/// Note: `enroll` is a get-validate-update sequence with no cross-request
/// lock. Two concurrent enrolls of the same email can both read
/// `enrolled = false` and both write; the last write wins.
pub struct EnrollmentService {
	provider: Arc<dyn IdentityProvider>,
	store: Arc<dyn AccountStore>,
	notifier: Option<Arc<dyn WelcomeNotifier>>,
	requirements: ProfileRequirements,
}

impl EnrollmentService {
	/// Create a workflow over its collaborators.
	///
	/// `notifier` is optional: deployments without SMTP configured simply
	/// skip the welcome mail.
	pub fn new(
		provider: Arc<dyn IdentityProvider>,
		store: Arc<dyn AccountStore>,
		notifier: Option<Arc<dyn WelcomeNotifier>>,
		requirements: ProfileRequirements,
	) -> Self {
		Self {
			provider,
			store,
			notifier,
			requirements,
		}
	}

	/// Register a new applicant from an OAuth callback.
	///
	/// Fetches and gates the provider profile, then stores a provisional
	/// account keyed by the normalized email. Any step's failure aborts the
	/// whole operation; no partial account is ever stored.
	///
	/// # Errors
	///
	/// - [`EnrollmentError::OAuth`] from the provider interaction.
	/// - [`EnrollmentError::Validation`] if the profile fails the
	///   provisioning requirements.
	/// - [`EnrollmentError::Db`] with a conflict kind if the email is
	///   already registered.
	#[tracing::instrument(skip_all)]
	pub async fn register(
		&self,
		auth_code: &str,
		redirect_uri: &str,
	) -> Result<Account, EnrollmentError> {
		let profile = fetch_profile(self.provider.as_ref(), auth_code, redirect_uri).await?;
		self.requirements.check(&profile)?;

		let (first_name, last_name) = split_display_name(&profile.name);
		let account = Account {
			email: normalize_email(&profile.email),
			name: profile.name,
			first_name,
			last_name,
			linkedin_url: profile.profile_url,
			location: profile.location,
			phone: profile.phone,
			photo: profile.photo,
			enrolled: false,
			created_at: Utc::now(),
			..Account::default()
		};

		let created = self.store.create_account(&account).await?;
		tracing::info!(email = %created.email, "provisional account created");
		Ok(created)
	}

	/// Finalize an account with an enrollment submission.
	///
	/// Reads the account, validates the submission against it, persists the
	/// merged record (`enrolled = true`) in a single write, then fires the
	/// welcome notification. Notification failure is logged and swallowed:
	/// the enrollment has already durably succeeded.
	///
	/// # Errors
	///
	/// - [`EnrollmentError::Db`] with a not-found kind for unknown emails.
	/// - [`EnrollmentError::AlreadyEnrolled`] on a repeat enrollment.
	/// - [`EnrollmentError::Validation`] for the first violated field rule.
	#[tracing::instrument(skip(self, form), fields(email = %email))]
	pub async fn enroll(
		&self,
		email: &str,
		form: &EnrollmentForm,
	) -> Result<Account, EnrollmentError> {
		let current = self.store.get_account(&normalize_email(email)).await?;
		let update = validate(&current, form)?;
		let enrolled = self.store.update_account(&update).await?;
		tracing::info!(email = %enrolled.email, "account enrolled");

		if let Some(notifier) = &self.notifier {
			if let Err(e) = notifier.welcome(&enrolled).await {
				tracing::error!(
					error = %e,
					email = %enrolled.email,
					"failed to send welcome email"
				);
			}
		}

		Ok(enrolled)
	}

	/// Fetch an account by email.
	///
	/// # Errors
	///
	/// [`EnrollmentError::Db`] with a not-found kind for unknown emails.
	#[tracing::instrument(skip(self))]
	pub async fn lookup(&self, email: &str) -> Result<Account, EnrollmentError> {
		let account = self.store.get_account(&normalize_email(email)).await?;
		Ok(account)
	}
}
