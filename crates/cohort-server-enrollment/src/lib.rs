// Copyright (c) 2025 Cohort Platform Authors. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Enrollment validation and registration workflow for Cohort.
//!
//! This crate holds the account state machine:
//!
//! ```text
//! unregistered --register--> provisional --enroll--> enrolled (terminal)
//! ```
//!
//! - [`EnrollmentService::register`] acquires a profile from the identity
//!   provider, gates it through [`ProfileRequirements`], and stores a
//!   provisional account.
//! - [`EnrollmentService::enroll`] validates the enrollment submission
//!   against the stored account ([`validate`]), persists the merged record
//!   with `enrolled = true`, and fires a best-effort welcome notification.
//! - [`EnrollmentService::lookup`] is a read-only pass-through.
//!
//! Validation is fail-fast everywhere: the first violated rule wins and
//! nothing is persisted on failure.

pub mod error;
pub mod profile;
pub mod service;
pub mod validator;

pub use error::EnrollmentError;
pub use profile::{split_display_name, ProfileRequirements};
pub use service::{EnrollmentService, WelcomeNotifier};
pub use validator::validate;
