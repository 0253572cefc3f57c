// Copyright (c) 2025 Cohort Platform Authors. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Profile gating for account provisioning.

use cohort_server_auth_linkedin::Profile;

use crate::error::EnrollmentError;

/// Which profile attributes must be present before an account may be
/// provisioned.
///
/// Name and photo are always required. Location and work experience have been
/// toggled between releases, so they are configuration rather than hard-coded
/// rules; both default to off.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileRequirements {
	/// Require a non-empty location string on the profile.
	pub require_location: bool,
	/// Require at least one work-experience entry on the profile.
	pub require_experience: bool,
}

impl ProfileRequirements {
	/// Check a fetched profile against the current requirements.
	///
	/// # Errors
	///
	/// Returns [`EnrollmentError::Validation`] naming the first missing
	/// attribute.
	pub fn check(&self, profile: &Profile) -> Result<(), EnrollmentError> {
		if profile.name.is_empty() {
			return Err(EnrollmentError::Validation(
				"Invalid Profile. Found No Name".to_string(),
			));
		}
		if profile.photo.is_empty() {
			return Err(EnrollmentError::Validation(
				"Invalid Profile. Please Set Your Profile Picture on LinkedIn".to_string(),
			));
		}
		if self.require_location && profile.location.is_empty() {
			return Err(EnrollmentError::Validation(
				"Invalid Profile. Please Set Your City and State of Residence on LinkedIn"
					.to_string(),
			));
		}
		if self.require_experience && !profile.has_experience {
			return Err(EnrollmentError::Validation(
				"Invalid Profile. Please Add Your Work Experience on LinkedIn".to_string(),
			));
		}
		Ok(())
	}
}

/// Split a display name into first and last name.
///
/// The first whitespace token is the first name and the last token the last
/// name; middle tokens are dropped. A single-token name yields an empty last
/// name.
pub fn split_display_name(name: &str) -> (String, String) {
	let mut tokens = name.split_whitespace();
	let first = tokens.next().unwrap_or_default().to_string();
	let last = tokens.next_back().unwrap_or_default().to_string();
	(first, last)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn complete_profile() -> Profile {
		Profile {
			email: "jane@example.com".to_string(),
			name: "Jane Doe".to_string(),
			photo: "https://media.example.com/jane.jpg".to_string(),
			profile_url: "https://www.linkedin.com/in/jane-doe".to_string(),
			location: "Austin, Texas".to_string(),
			phone: "+1 555 0100".to_string(),
			has_experience: true,
		}
	}

	#[test]
	fn complete_profile_passes_defaults() {
		assert!(ProfileRequirements::default().check(&complete_profile()).is_ok());
	}

	#[test]
	fn missing_name_is_rejected() {
		let profile = Profile {
			name: String::new(),
			..complete_profile()
		};
		let err = ProfileRequirements::default().check(&profile).unwrap_err();
		assert_eq!(err.to_string(), "Invalid Profile. Found No Name");
	}

	#[test]
	fn missing_photo_is_rejected() {
		let profile = Profile {
			photo: String::new(),
			..complete_profile()
		};
		let err = ProfileRequirements::default().check(&profile).unwrap_err();
		assert!(err.to_string().contains("Profile Picture"));
	}

	#[test]
	fn location_only_checked_when_required() {
		let profile = Profile {
			location: String::new(),
			..complete_profile()
		};
		assert!(ProfileRequirements::default().check(&profile).is_ok());

		let strict = ProfileRequirements {
			require_location: true,
			..ProfileRequirements::default()
		};
		assert!(strict.check(&profile).is_err());
	}

	#[test]
	fn experience_only_checked_when_required() {
		let profile = Profile {
			has_experience: false,
			..complete_profile()
		};
		assert!(ProfileRequirements::default().check(&profile).is_ok());

		let strict = ProfileRequirements {
			require_experience: true,
			..ProfileRequirements::default()
		};
		assert!(strict.check(&profile).is_err());
	}

	#[test]
	fn two_token_name_splits() {
		assert_eq!(
			split_display_name("Jane Doe"),
			("Jane".to_string(), "Doe".to_string())
		);
	}

	#[test]
	fn single_token_name_has_empty_last_name() {
		assert_eq!(
			split_display_name("Madonna"),
			("Madonna".to_string(), String::new())
		);
	}

	#[test]
	fn middle_names_are_dropped() {
		assert_eq!(
			split_display_name("Jane Mary Doe"),
			("Jane".to_string(), "Doe".to_string())
		);
	}

	#[test]
	fn empty_name_splits_to_empty_pair() {
		assert_eq!(split_display_name(""), (String::new(), String::new()));
	}

	#[test]
	fn surrounding_whitespace_is_ignored() {
		assert_eq!(
			split_display_name("  Jane   Doe  "),
			("Jane".to_string(), "Doe".to_string())
		);
	}
}
