// Copyright (c) 2025 Cohort Platform Authors. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: built-in defaults, TOML files, environment variables.

use std::env;
use std::path::PathBuf;

use cohort_common_secret::SecretString;
use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::ServerConfigLayer;
use crate::sections::{
	DatabaseConfigLayer, HttpConfigLayer, LoggingConfigLayer, OAuthConfigLayer,
	ProfileConfigLayer, SmtpConfigLayer,
};

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ServerConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(ServerConfigLayer::default())
	}
}

/// TOML file configuration source.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new("/etc/cohort/server.toml")
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(ServerConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: ServerConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: `COHORT_SERVER_<SECTION>_<FIELD>`.
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Ok(ServerConfigLayer {
			http: Some(load_http_from_env()?),
			database: Some(load_database_from_env()),
			oauth: Some(load_oauth_from_env()),
			profile: Some(load_profile_from_env()),
			smtp: Some(load_smtp_from_env()?),
			logging: Some(load_logging_from_env()),
		})
	}
}

fn env_string(key: &str) -> Option<String> {
	env::var(key).ok().filter(|v| !v.is_empty())
}

fn env_bool(key: &str) -> Option<bool> {
	env_string(key).map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
}

fn env_port(key: &str) -> Result<Option<u16>, ConfigError> {
	match env_string(key) {
		Some(raw) => raw
			.parse()
			.map(Some)
			.map_err(|_| ConfigError::Invalid(format!("{key} must be a valid port number"))),
		None => Ok(None),
	}
}

fn load_http_from_env() -> Result<HttpConfigLayer, ConfigError> {
	Ok(HttpConfigLayer {
		host: env_string("COHORT_SERVER_HTTP_HOST"),
		port: env_port("COHORT_SERVER_HTTP_PORT")?,
	})
}

fn load_database_from_env() -> DatabaseConfigLayer {
	DatabaseConfigLayer {
		url: env_string("COHORT_SERVER_DATABASE_URL"),
	}
}

fn load_oauth_from_env() -> OAuthConfigLayer {
	OAuthConfigLayer {
		client_id: env_string("COHORT_SERVER_LINKEDIN_CLIENT_ID"),
		client_secret: env_string("COHORT_SERVER_LINKEDIN_CLIENT_SECRET").map(SecretString::new),
		redirect_uri: env_string("COHORT_SERVER_LINKEDIN_REDIRECT_URI"),
	}
}

fn load_profile_from_env() -> ProfileConfigLayer {
	ProfileConfigLayer {
		require_location: env_bool("COHORT_SERVER_PROFILE_REQUIRE_LOCATION"),
		require_experience: env_bool("COHORT_SERVER_PROFILE_REQUIRE_EXPERIENCE"),
	}
}

fn load_smtp_from_env() -> Result<SmtpConfigLayer, ConfigError> {
	Ok(SmtpConfigLayer {
		host: env_string("COHORT_SERVER_SMTP_HOST"),
		port: env_port("COHORT_SERVER_SMTP_PORT")?,
		username: env_string("COHORT_SERVER_SMTP_USERNAME"),
		password: env_string("COHORT_SERVER_SMTP_PASSWORD").map(SecretString::new),
		from_address: env_string("COHORT_SERVER_SMTP_FROM_ADDRESS"),
		from_name: env_string("COHORT_SERVER_SMTP_FROM_NAME"),
		use_tls: env_bool("COHORT_SERVER_SMTP_USE_TLS"),
	})
}

fn load_logging_from_env() -> LoggingConfigLayer {
	LoggingConfigLayer {
		level: env_string("COHORT_SERVER_LOG_LEVEL"),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn missing_toml_file_is_skipped() {
		let source = TomlSource::new("/nonexistent/cohort-server.toml");
		let layer = source.load().unwrap();
		assert!(layer.http.is_none());
	}

	#[test]
	fn toml_file_parses_sections() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(
			file,
			r#"
[http]
host = "127.0.0.1"
port = 9000

[oauth]
client_id = "abc"
client_secret = "shh"
redirect_uri = "https://example.com/cb"

[profile]
require_location = true
"#
		)
		.unwrap();

		let layer = TomlSource::new(file.path()).load().unwrap();
		let http = layer.http.unwrap();
		assert_eq!(http.host.as_deref(), Some("127.0.0.1"));
		assert_eq!(http.port, Some(9000));

		let oauth = layer.oauth.unwrap();
		assert_eq!(oauth.client_id.as_deref(), Some("abc"));
		assert_eq!(oauth.client_secret.unwrap().expose(), "shh");

		assert_eq!(layer.profile.unwrap().require_location, Some(true));
	}

	#[test]
	fn invalid_toml_is_an_error() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "this is not toml").unwrap();

		let err = TomlSource::new(file.path()).load().unwrap_err();
		assert!(matches!(err, ConfigError::TomlParse { .. }));
	}

	#[test]
	fn precedence_ordering() {
		assert!(Precedence::Defaults < Precedence::ConfigFile);
		assert!(Precedence::ConfigFile < Precedence::Environment);
	}
}
