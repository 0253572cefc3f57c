// Copyright (c) 2025 Cohort Platform Authors. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The enrollment form submission.

use serde::{Deserialize, Serialize};

/// The multi-field enrollment submission.
///
/// Every field deserializes to an owned string with a missing-field default,
/// so "absent" and "empty" collapse to the same value; the enrollment
/// validator treats the empty string as not provided. Which fields are
/// required, and the format rules layered on top, live in the validator —
/// this type is pure transport shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct EnrollmentForm {
	pub linkedin_url: String,
	pub timezone: String,
	pub phone: String,
	pub representation: String,
	pub gender: String,
	pub age_group: String,
	pub employment_status: String,
	pub highest_school: String,
	pub field_of_study: String,
	pub can_work_in_usa: String,
	pub learning_track: String,
	pub tech_experience: String,
	pub hours_per_week: String,
	pub referral: String,
	pub referral_other: String,
	pub photo: String,
	pub city: String,
	pub state: String,
	pub professional_experience: String,
	pub industries: String,
	pub will_change_job: String,
	pub will_change_job_role: String,
	pub open_to_meet: String,
	pub racial_demographic: String,
	pub prior_knowledge: String,
}
