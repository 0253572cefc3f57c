// Copyright (c) 2025 Cohort Platform Authors. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Enrollment submission validation.
//!
//! [`validate`] checks a submission against the stored account and produces
//! the merged record to persist. It is fail-fast: the first violated rule
//! wins, and no storage is touched here at all — the caller persists the
//! returned value in one write, so a failed validation can never leave a
//! partially-updated account behind.

use cohort_server_accounts::{Account, EnrollmentForm};

use crate::error::EnrollmentError;

/// Accepted profile-URL prefixes. The check is a plain prefix + non-blank
/// remainder test, deliberately permissive about trailing content.
const PROFILE_URL_PREFIXES: &[&str] = &[
	"https://www.linkedin.com/in/",
	"https://linkedin.com/in/",
];

fn missing(message: &str) -> EnrollmentError {
	EnrollmentError::Validation(format!("Missing Fields! {message}"))
}

/// Whether a profile URL points at a member profile.
pub fn is_valid_profile_url(url: &str) -> bool {
	PROFILE_URL_PREFIXES
		.iter()
		.any(|prefix| match url.strip_prefix(prefix) {
			Some(rest) => !rest.trim().is_empty(),
			None => false,
		})
}

/// Whether a comma-separated list has at least one entry and every trimmed
/// entry is purely alphabetic.
pub fn is_alphabetic_list(value: &str) -> bool {
	let mut entries = 0;
	for entry in value.split(',') {
		let entry = entry.trim();
		if entry.is_empty() || !entry.chars().all(char::is_alphabetic) {
			return false;
		}
		entries += 1;
	}
	entries > 0
}

/// Validate an enrollment submission and produce the merged account.
///
/// The precondition comes first: an already-enrolled account is rejected
/// before any field is examined. Required fields follow in a fixed order,
/// each with its own message, then the format rules layered on top.
///
/// # Errors
///
/// Returns [`EnrollmentError::AlreadyEnrolled`] or
/// [`EnrollmentError::Validation`] with a caller-safe message.
pub fn validate(current: &Account, form: &EnrollmentForm) -> Result<Account, EnrollmentError> {
	if current.enrolled {
		return Err(EnrollmentError::AlreadyEnrolled);
	}

	let mut update = current.clone();

	if form.linkedin_url.is_empty() {
		return Err(missing("LinkedIn Profile URL is required"));
	}
	if !is_valid_profile_url(&form.linkedin_url) {
		return Err(EnrollmentError::Validation(
			"Invalid LinkedIn Profile URL".to_string(),
		));
	}
	update.linkedin_url = form.linkedin_url.clone();

	if form.phone.is_empty() {
		return Err(missing("Phone Number is required"));
	}
	update.phone = form.phone.clone();

	if form.representation.is_empty() {
		return Err(missing("Representation is required"));
	}
	update.representation = form.representation.clone();

	if form.gender.is_empty() {
		return Err(missing("Gender is required"));
	}
	update.gender = form.gender.clone();

	if form.age_group.is_empty() {
		return Err(missing("Age Group is required"));
	}
	update.age_group = form.age_group.clone();

	if form.employment_status.is_empty() {
		return Err(missing("Employment Status is required"));
	}
	update.employment_status = form.employment_status.clone();

	if form.highest_school.is_empty() {
		return Err(missing("Please choose Highest Education"));
	}
	update.highest_school = form.highest_school.clone();

	if form.can_work_in_usa.is_empty() {
		return Err(missing("Please choose if you can work in USA"));
	}
	if !form.can_work_in_usa.eq_ignore_ascii_case("yes") {
		return Err(EnrollmentError::Validation(
			"You must be Authorized to Work in the USA".to_string(),
		));
	}
	update.can_work_in_usa = form.can_work_in_usa.clone();

	if form.learning_track.is_empty() {
		return Err(missing("Please choose a Learning Track"));
	}
	update.learning_track = form.learning_track.clone();

	if form.hours_per_week.is_empty() {
		return Err(missing("Please choose Hours available Per Week"));
	}
	update.hours_per_week = form.hours_per_week.clone();

	if form.referral.is_empty() {
		return Err(missing("Please choose your Referral"));
	}
	update.referral = form.referral.clone();

	if form.photo.is_empty() {
		return Err(missing("Photo is required"));
	}
	update.photo = form.photo.clone();

	if form.city.is_empty() {
		return Err(missing("City is required"));
	}
	update.city = form.city.clone();

	if form.professional_experience.is_empty() {
		return Err(missing("Please specify Professional Experience"));
	}
	update.professional_experience = form.professional_experience.clone();

	if form.prior_knowledge.is_empty() {
		return Err(missing("Prior Knowledge is required"));
	}
	update.prior_knowledge = form.prior_knowledge.clone();

	if !is_alphabetic_list(&form.industries) {
		return Err(EnrollmentError::Validation(
			"Invalid Industries. Provide a comma separated list of industries".to_string(),
		));
	}
	update.industries = form.industries.clone();

	// field_of_study is the one optional-with-format field
	if !form.field_of_study.is_empty() {
		if !form.field_of_study.chars().all(char::is_alphabetic) {
			return Err(EnrollmentError::Validation(
				"Invalid Field of Study".to_string(),
			));
		}
		update.field_of_study = form.field_of_study.clone();
	}

	// Optional free-form fields: copied when provided, otherwise untouched.
	if !form.timezone.is_empty() {
		update.timezone = form.timezone.clone();
	}
	if !form.tech_experience.is_empty() {
		update.tech_experience = form.tech_experience.clone();
	}
	if !form.referral_other.is_empty() {
		update.referral_other = form.referral_other.clone();
	}
	if !form.state.is_empty() {
		update.state = form.state.clone();
	}
	if !form.will_change_job.is_empty() {
		update.will_change_job = form.will_change_job.clone();
	}
	if !form.will_change_job_role.is_empty() {
		update.will_change_job_role = form.will_change_job_role.clone();
	}
	if !form.open_to_meet.is_empty() {
		update.open_to_meet = form.open_to_meet.clone();
	}
	if !form.racial_demographic.is_empty() {
		update.racial_demographic = form.racial_demographic.clone();
	}

	update.enrolled = true;
	Ok(update)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn provisional_account() -> Account {
		Account {
			email: "jane@example.com".to_string(),
			name: "Jane Doe".to_string(),
			first_name: "Jane".to_string(),
			last_name: "Doe".to_string(),
			phone: "+1 555 0199".to_string(),
			photo: "https://media.example.com/old.jpg".to_string(),
			..Account::default()
		}
	}

	fn complete_form() -> EnrollmentForm {
		EnrollmentForm {
			linkedin_url: "https://www.linkedin.com/in/jane-doe-1a2b3c".to_string(),
			phone: "+1 555 0100".to_string(),
			representation: "Myself".to_string(),
			gender: "Female".to_string(),
			age_group: "25-34".to_string(),
			employment_status: "Employed".to_string(),
			highest_school: "Bachelors".to_string(),
			can_work_in_usa: "Yes".to_string(),
			learning_track: "Software Engineering".to_string(),
			hours_per_week: "10-20".to_string(),
			referral: "Friend".to_string(),
			photo: "https://media.example.com/jane.jpg".to_string(),
			city: "Austin".to_string(),
			professional_experience: "5 years".to_string(),
			industries: "Tech, Finance".to_string(),
			prior_knowledge: "Some".to_string(),
			..EnrollmentForm::default()
		}
	}

	#[test]
	fn complete_form_enrolls_and_merges() {
		let account = provisional_account();
		let update = validate(&account, &complete_form()).unwrap();

		assert!(update.enrolled);
		assert_eq!(update.email, "jane@example.com");
		assert_eq!(update.gender, "Female");
		assert_eq!(update.city, "Austin");
		// Submission overwrites the provider-seeded contact fields.
		assert_eq!(update.phone, "+1 555 0100");
		assert_eq!(update.photo, "https://media.example.com/jane.jpg");
		// Untouched provider fields survive the merge.
		assert_eq!(update.name, "Jane Doe");
		assert_eq!(update.first_name, "Jane");
	}

	#[test]
	fn validation_does_not_mutate_input() {
		let account = provisional_account();
		let _ = validate(&account, &complete_form()).unwrap();
		assert!(!account.enrolled);
	}

	#[test]
	fn already_enrolled_is_rejected_before_fields() {
		let account = Account {
			enrolled: true,
			..provisional_account()
		};
		// Even an empty form must hit the precondition, not a field check.
		let err = validate(&account, &EnrollmentForm::default()).unwrap_err();
		assert!(matches!(err, EnrollmentError::AlreadyEnrolled));
	}

	#[test]
	fn each_required_field_is_enforced_in_order() {
		let account = provisional_account();
		let cases: &[(fn(&mut EnrollmentForm), &str)] = &[
			(|f| f.linkedin_url.clear(), "LinkedIn Profile URL"),
			(|f| f.phone.clear(), "Phone Number"),
			(|f| f.representation.clear(), "Representation"),
			(|f| f.gender.clear(), "Gender"),
			(|f| f.age_group.clear(), "Age Group"),
			(|f| f.employment_status.clear(), "Employment Status"),
			(|f| f.highest_school.clear(), "Highest Education"),
			(|f| f.can_work_in_usa.clear(), "work in USA"),
			(|f| f.learning_track.clear(), "Learning Track"),
			(|f| f.hours_per_week.clear(), "Hours available Per Week"),
			(|f| f.referral.clear(), "Referral"),
			(|f| f.photo.clear(), "Photo"),
			(|f| f.city.clear(), "City"),
			(|f| f.professional_experience.clear(), "Professional Experience"),
			(|f| f.prior_knowledge.clear(), "Prior Knowledge"),
		];

		for (clear, needle) in cases {
			let mut form = complete_form();
			clear(&mut form);
			let err = validate(&account, &form).unwrap_err();
			let message = err.to_string();
			assert!(
				message.starts_with("Missing Fields!"),
				"expected missing-field error, got: {message}"
			);
			assert!(message.contains(needle), "expected {needle} in: {message}");
		}
	}

	#[test]
	fn profile_url_prefixes() {
		assert!(is_valid_profile_url("https://www.linkedin.com/in/james-bond-007/"));
		assert!(is_valid_profile_url("https://linkedin.com/in/marllos-p-a383641b2/"));
		assert!(is_valid_profile_url("https://www.linkedin.com/in/jane-doe-1a2b3c"));
		assert!(!is_valid_profile_url("https://"));
		assert!(!is_valid_profile_url("https://www.linkedin.com/in/"));
		assert!(!is_valid_profile_url("https://linkedin.com/in/   "));
		assert!(!is_valid_profile_url("https://example.com/in/jane"));
		assert!(!is_valid_profile_url(""));
	}

	#[test]
	fn bad_profile_url_is_rejected() {
		let mut form = complete_form();
		form.linkedin_url = "https://example.com/jane".to_string();
		let err = validate(&provisional_account(), &form).unwrap_err();
		assert_eq!(err.to_string(), "Invalid LinkedIn Profile URL");
	}

	#[test]
	fn work_authorization_is_case_insensitive_yes() {
		for answer in ["yes", "Yes", "YES", "yEs"] {
			let mut form = complete_form();
			form.can_work_in_usa = answer.to_string();
			assert!(validate(&provisional_account(), &form).is_ok(), "{answer}");
		}

		for answer in ["no", "maybe", "yess", "y"] {
			let mut form = complete_form();
			form.can_work_in_usa = answer.to_string();
			let err = validate(&provisional_account(), &form).unwrap_err();
			assert_eq!(
				err.to_string(),
				"You must be Authorized to Work in the USA",
				"{answer}"
			);
		}
	}

	#[test]
	fn industries_list_rules() {
		assert!(is_alphabetic_list("Tech"));
		assert!(is_alphabetic_list("Tech, Finance"));
		assert!(is_alphabetic_list("  Tech ,Finance,Healthcare "));
		assert!(!is_alphabetic_list(""));
		assert!(!is_alphabetic_list("Tech,123"));
		assert!(!is_alphabetic_list("Tech,,Finance"));
		assert!(!is_alphabetic_list("Tech, Fin-tech"));
		assert!(!is_alphabetic_list(","));
	}

	#[test]
	fn bad_industries_fail_the_whole_list() {
		let mut form = complete_form();
		form.industries = "Tech,123".to_string();
		let err = validate(&provisional_account(), &form).unwrap_err();
		assert!(err.to_string().contains("Invalid Industries"));
	}

	#[test]
	fn field_of_study_is_optional_but_alphabetic() {
		let mut form = complete_form();
		form.field_of_study = String::new();
		assert!(validate(&provisional_account(), &form).is_ok());

		form.field_of_study = "Physics".to_string();
		let update = validate(&provisional_account(), &form).unwrap();
		assert_eq!(update.field_of_study, "Physics");

		form.field_of_study = "Physics 101".to_string();
		let err = validate(&provisional_account(), &form).unwrap_err();
		assert_eq!(err.to_string(), "Invalid Field of Study");
	}

	#[test]
	fn optional_fields_are_copied_when_present() {
		let mut form = complete_form();
		form.timezone = "America/Chicago".to_string();
		form.state = "Texas".to_string();
		form.racial_demographic = "Prefer not to say".to_string();

		let update = validate(&provisional_account(), &form).unwrap();
		assert_eq!(update.timezone, "America/Chicago");
		assert_eq!(update.state, "Texas");
		assert_eq!(update.racial_demographic, "Prefer not to say");
	}

	mod property_tests {
		use super::*;
		use proptest::prelude::*;

		proptest! {
			/// Any alphabetic comma-separated list passes.
			#[test]
			fn alphabetic_lists_pass(
				entries in proptest::collection::vec("[a-zA-Z]{1,12}", 1..6)
			) {
				let list = entries.join(", ");
				prop_assert!(is_alphabetic_list(&list));
			}

			/// A digit anywhere in an entry fails the whole list.
			#[test]
			fn digit_fails_list(
				entries in proptest::collection::vec("[a-zA-Z]{1,12}", 1..4),
				bad in "[a-zA-Z]{0,6}[0-9][a-zA-Z0-9]{0,6}"
			) {
				let mut entries = entries;
				entries.push(bad);
				let list = entries.join(",");
				prop_assert!(!is_alphabetic_list(&list));
			}

			/// Any non-blank suffix after an accepted prefix is a valid URL.
			#[test]
			fn prefixed_urls_pass(slug in "[a-z][a-z0-9-]{0,30}") {
				let url = format!("https://www.linkedin.com/in/{slug}");
				prop_assert!(is_valid_profile_url(&url));
			}
		}
	}
}
