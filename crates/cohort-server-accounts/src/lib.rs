// Copyright (c) 2025 Cohort Platform Authors. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Applicant account domain types.
//!
//! This crate provides:
//! - [`Account`] - the durable applicant entity, keyed by email
//! - [`EnrollmentForm`] - the multi-field enrollment submission
//! - [`normalize_email`] - the canonical email form used as the store key
//!
//! An account moves through exactly two states: it is created *provisional*
//! (`enrolled == false`) from identity-provider data, and a single successful
//! enrollment flips it to *enrolled* (`enrolled == true`), after which it is
//! read-only. Validation of the enrollment submission lives in
//! `cohort-server-enrollment`, not here.

pub mod account;
pub mod form;

pub use account::{normalize_email, Account};
pub use form::EnrollmentForm;
