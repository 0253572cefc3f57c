// Copyright (c) 2025 Cohort Platform Authors. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections: resolved structs plus partial layers for merging.

use cohort_common_secret::SecretString;
use serde::Deserialize;

// =============================================================================
// HTTP
// =============================================================================

/// HTTP listener configuration (runtime, fully resolved).
#[derive(Debug, Clone)]
pub struct HttpConfig {
	pub host: String,
	pub port: u16,
}

impl Default for HttpConfig {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_string(),
			port: 8080,
		}
	}
}

/// HTTP configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpConfigLayer {
	#[serde(default)]
	pub host: Option<String>,
	#[serde(default)]
	pub port: Option<u16>,
}

impl HttpConfigLayer {
	pub fn merge(&mut self, other: HttpConfigLayer) {
		if other.host.is_some() {
			self.host = other.host;
		}
		if other.port.is_some() {
			self.port = other.port;
		}
	}

	pub fn finalize(self) -> HttpConfig {
		let defaults = HttpConfig::default();
		HttpConfig {
			host: self.host.unwrap_or(defaults.host),
			port: self.port.unwrap_or(defaults.port),
		}
	}
}

// =============================================================================
// Database
// =============================================================================

/// Database configuration (runtime, fully resolved).
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
	pub url: String,
}

impl Default for DatabaseConfig {
	fn default() -> Self {
		Self {
			url: "sqlite:./cohort.db".to_string(),
		}
	}
}

/// Database configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseConfigLayer {
	#[serde(default)]
	pub url: Option<String>,
}

impl DatabaseConfigLayer {
	pub fn merge(&mut self, other: DatabaseConfigLayer) {
		if other.url.is_some() {
			self.url = other.url;
		}
	}

	pub fn finalize(self) -> DatabaseConfig {
		DatabaseConfig {
			url: self.url.unwrap_or_else(|| DatabaseConfig::default().url),
		}
	}
}

// =============================================================================
// OAuth (LinkedIn)
// =============================================================================

/// LinkedIn OAuth application configuration (runtime, fully resolved).
#[derive(Debug, Clone)]
pub struct OAuthConfig {
	pub client_id: String,
	pub client_secret: SecretString,
	pub redirect_uri: String,
}

impl Default for OAuthConfig {
	fn default() -> Self {
		Self {
			client_id: String::new(),
			client_secret: SecretString::new(String::new()),
			redirect_uri: String::new(),
		}
	}
}

impl OAuthConfig {
	/// Whether every field needed to run the OAuth flow is present.
	pub fn is_configured(&self) -> bool {
		!self.client_id.is_empty()
			&& !self.client_secret.expose().is_empty()
			&& !self.redirect_uri.is_empty()
	}
}

/// OAuth configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OAuthConfigLayer {
	#[serde(default)]
	pub client_id: Option<String>,
	#[serde(default)]
	pub client_secret: Option<SecretString>,
	#[serde(default)]
	pub redirect_uri: Option<String>,
}

impl OAuthConfigLayer {
	pub fn merge(&mut self, other: OAuthConfigLayer) {
		if other.client_id.is_some() {
			self.client_id = other.client_id;
		}
		if other.client_secret.is_some() {
			self.client_secret = other.client_secret;
		}
		if other.redirect_uri.is_some() {
			self.redirect_uri = other.redirect_uri;
		}
	}

	pub fn finalize(self) -> OAuthConfig {
		OAuthConfig {
			client_id: self.client_id.unwrap_or_default(),
			client_secret: self
				.client_secret
				.unwrap_or_else(|| SecretString::new(String::new())),
			redirect_uri: self.redirect_uri.unwrap_or_default(),
		}
	}
}

// =============================================================================
// Profile requirements
// =============================================================================

/// Profile-gating configuration (runtime, fully resolved).
///
/// These toggles have changed release-to-release; they are configuration, not
/// hard-coded business rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileConfig {
	pub require_location: bool,
	pub require_experience: bool,
}

/// Profile configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileConfigLayer {
	#[serde(default)]
	pub require_location: Option<bool>,
	#[serde(default)]
	pub require_experience: Option<bool>,
}

impl ProfileConfigLayer {
	pub fn merge(&mut self, other: ProfileConfigLayer) {
		if other.require_location.is_some() {
			self.require_location = other.require_location;
		}
		if other.require_experience.is_some() {
			self.require_experience = other.require_experience;
		}
	}

	pub fn finalize(self) -> ProfileConfig {
		ProfileConfig {
			require_location: self.require_location.unwrap_or(false),
			require_experience: self.require_experience.unwrap_or(false),
		}
	}
}

// =============================================================================
// SMTP
// =============================================================================

/// SMTP configuration layer (partial, for merging).
///
/// Finalizes to `None` unless the section is complete enough to build a
/// client (host and from-address present); a half-configured section simply
/// disables notification email.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SmtpConfigLayer {
	#[serde(default)]
	pub host: Option<String>,
	#[serde(default)]
	pub port: Option<u16>,
	#[serde(default)]
	pub username: Option<String>,
	#[serde(default)]
	pub password: Option<SecretString>,
	#[serde(default)]
	pub from_address: Option<String>,
	#[serde(default)]
	pub from_name: Option<String>,
	#[serde(default)]
	pub use_tls: Option<bool>,
}

impl SmtpConfigLayer {
	pub fn merge(&mut self, other: SmtpConfigLayer) {
		if other.host.is_some() {
			self.host = other.host;
		}
		if other.port.is_some() {
			self.port = other.port;
		}
		if other.username.is_some() {
			self.username = other.username;
		}
		if other.password.is_some() {
			self.password = other.password;
		}
		if other.from_address.is_some() {
			self.from_address = other.from_address;
		}
		if other.from_name.is_some() {
			self.from_name = other.from_name;
		}
		if other.use_tls.is_some() {
			self.use_tls = other.use_tls;
		}
	}

	pub fn finalize(self) -> Option<cohort_server_smtp::SmtpConfig> {
		let host = self.host?;
		let from_address = self.from_address?;
		Some(cohort_server_smtp::SmtpConfig {
			host,
			port: self.port.unwrap_or(587),
			username: self.username,
			password: self.password,
			from_address,
			from_name: self.from_name.unwrap_or_else(|| "Cohort".to_string()),
			use_tls: self.use_tls.unwrap_or(true),
		})
	}
}

// =============================================================================
// Logging
// =============================================================================

/// Logging configuration (runtime, fully resolved).
#[derive(Debug, Clone)]
pub struct LoggingConfig {
	/// Default tracing filter when `RUST_LOG` is not set.
	pub level: String,
}

impl Default for LoggingConfig {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
		}
	}
}

/// Logging configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfigLayer {
	#[serde(default)]
	pub level: Option<String>,
}

impl LoggingConfigLayer {
	pub fn merge(&mut self, other: LoggingConfigLayer) {
		if other.level.is_some() {
			self.level = other.level;
		}
	}

	pub fn finalize(self) -> LoggingConfig {
		LoggingConfig {
			level: self.level.unwrap_or_else(|| LoggingConfig::default().level),
		}
	}
}
