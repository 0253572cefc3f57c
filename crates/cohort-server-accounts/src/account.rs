// Copyright (c) 2025 Cohort Platform Authors. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The applicant account entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An applicant account.
///
/// Accounts are keyed by lowercase email. The profile-derived fields are
/// populated at creation from the identity provider; the enrollment fields
/// stay empty until the applicant submits the enrollment form. `enrolled`
/// transitions `false -> true` exactly once and never reverts.
///
/// # PII Handling
///
/// Every string field here is applicant-provided PII. Log the email only
/// where an operation needs a correlation key; never log the full record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Account {
	/// Lowercase email, unique key, immutable after creation.
	pub email: String,

	/// Display name from the identity provider.
	pub name: String,

	/// First whitespace token of the display name.
	pub first_name: String,

	/// Last whitespace token of the display name; empty for single-token names.
	pub last_name: String,

	/// Public profile URL. Seeded from the provider, overwritten at enrollment.
	pub linkedin_url: String,

	/// Free-form location string from the provider.
	pub location: String,

	/// IANA timezone name, set at enrollment if provided.
	pub timezone: String,

	/// Contact phone. Seeded from the provider, overwritten at enrollment.
	pub phone: String,

	/// Profile photo URL. Seeded from the provider, overwritten at enrollment.
	pub photo: String,

	// Enrollment fields, all unset until the enrollment form is accepted.
	pub representation: String,
	pub gender: String,
	pub age_group: String,
	pub employment_status: String,
	pub highest_school: String,
	#[serde(rename = "optional_major")]
	pub field_of_study: String,
	pub can_work_in_usa: String,
	pub learning_track: String,
	pub tech_experience: String,
	pub hours_per_week: String,
	pub referral: String,
	pub referral_other: String,
	pub city: String,
	pub state: String,
	pub professional_experience: String,
	pub industries: String,
	pub will_change_job: String,
	pub will_change_job_role: String,
	pub open_to_meet: String,
	pub racial_demographic: String,
	pub prior_knowledge: String,

	/// Whether the one-time enrollment transition has happened.
	pub enrolled: bool,

	/// Creation time, set once when the provisional account is stored.
	pub created_at: DateTime<Utc>,
}

/// Canonical form of an account email: trimmed and lowercased.
///
/// Lookups are case-insensitive at the service boundary; the store itself
/// only ever sees normalized keys.
pub fn normalize_email(email: &str) -> String {
	email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn normalize_lowercases_and_trims() {
		assert_eq!(normalize_email(" Jane.Doe@Example.COM "), "jane.doe@example.com");
	}

	#[test]
	fn normalize_is_idempotent() {
		let once = normalize_email("Jane@Example.com");
		assert_eq!(normalize_email(&once), once);
	}

	#[test]
	fn new_account_is_provisional() {
		let account = Account::default();
		assert!(!account.enrolled);
	}

	#[test]
	fn field_of_study_serializes_as_optional_major() {
		let account = Account {
			field_of_study: "Physics".to_string(),
			..Account::default()
		};
		let json = serde_json::to_value(&account).unwrap();
		assert_eq!(json["optional_major"], "Physics");
	}
}
