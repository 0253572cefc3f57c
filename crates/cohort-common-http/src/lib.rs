// Copyright (c) 2025 Cohort Platform Authors. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for Cohort services.
//!
//! This crate provides a pre-configured HTTP client with a consistent
//! User-Agent header so all outbound calls identify themselves the same way.

mod client;

pub use client::{builder, new_client, new_client_with_timeout, user_agent};
