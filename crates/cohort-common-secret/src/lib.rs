// Copyright (c) 2025 Cohort Platform Authors. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Secret wrapper type for sensitive string values.
//!
//! [`SecretString`] holds credentials (OAuth client secrets, access tokens,
//! SMTP passwords) in a way that makes accidental exposure hard:
//!
//! - `Debug` and `Display` always print `[REDACTED]`
//! - The inner value is zeroized from memory on drop
//! - With the `serde` feature, serialization emits `[REDACTED]` while
//!   deserialization accepts the plain value (so secrets can be loaded from
//!   configuration but never round-tripped back out)
//!
//! Access to the underlying value is explicit via [`SecretString::expose`]
//! or [`SecretString::into_inner`], which keeps every use greppable.

use std::fmt;

use zeroize::Zeroize;

/// A string whose value is redacted from all derived output.
#[derive(Clone)]
pub struct SecretString(String);

impl SecretString {
	/// Wrap a sensitive value.
	pub fn new(value: String) -> Self {
		Self(value)
	}

	/// Borrow the underlying value.
	///
	/// Callers must not log or serialize the returned reference.
	pub fn expose(&self) -> &String {
		&self.0
	}

	/// Consume the wrapper and return the underlying value.
	pub fn into_inner(mut self) -> String {
		std::mem::take(&mut self.0)
	}

	/// Whether the wrapped value is the empty string.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl Drop for SecretString {
	fn drop(&mut self) {
		self.0.zeroize();
	}
}

impl fmt::Debug for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("[REDACTED]")
	}
}

impl fmt::Display for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("[REDACTED]")
	}
}

impl From<String> for SecretString {
	fn from(value: String) -> Self {
		Self::new(value)
	}
}

impl From<&str> for SecretString {
	fn from(value: &str) -> Self {
		Self::new(value.to_string())
	}
}

#[cfg(feature = "serde")]
impl serde::Serialize for SecretString {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_str("[REDACTED]")
	}
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SecretString {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let value = String::deserialize(deserializer)?;
		Ok(Self::new(value))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn debug_is_redacted() {
		let secret = SecretString::new("hunter2".to_string());
		assert_eq!(format!("{secret:?}"), "[REDACTED]");
	}

	#[test]
	fn display_is_redacted() {
		let secret = SecretString::new("hunter2".to_string());
		assert_eq!(format!("{secret}"), "[REDACTED]");
	}

	#[test]
	fn expose_returns_value() {
		let secret = SecretString::new("hunter2".to_string());
		assert_eq!(secret.expose(), "hunter2");
	}

	#[test]
	fn into_inner_returns_value() {
		let secret = SecretString::new("hunter2".to_string());
		assert_eq!(secret.into_inner(), "hunter2");
	}

	#[test]
	fn is_empty_reflects_inner() {
		assert!(SecretString::new(String::new()).is_empty());
		assert!(!SecretString::new("x".to_string()).is_empty());
	}

	#[cfg(feature = "serde")]
	#[test]
	fn serialize_is_redacted() {
		let secret = SecretString::new("hunter2".to_string());
		let json = serde_json::to_string(&secret).unwrap();
		assert_eq!(json, "\"[REDACTED]\"");
	}

	#[cfg(feature = "serde")]
	#[test]
	fn deserialize_accepts_plain_value() {
		let secret: SecretString = serde_json::from_str("\"hunter2\"").unwrap();
		assert_eq!(secret.expose(), "hunter2");
	}

	mod property_tests {
		use super::*;
		use proptest::prelude::*;

		proptest! {
			#[test]
			fn value_never_in_debug(value in "[a-zA-Z0-9!@#$%^&*]{8,64}") {
				prop_assume!(!value.contains("REDACTED"));
				let secret = SecretString::new(value.clone());
				let debug = format!("{:?}", secret);
				prop_assert!(!debug.contains(&value));
			}

			#[test]
			fn expose_roundtrips(value in ".{0,64}") {
				let secret = SecretString::new(value.clone());
				prop_assert_eq!(secret.expose(), &value);
			}
		}
	}
}
