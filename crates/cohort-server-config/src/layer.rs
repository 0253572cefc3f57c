// Copyright (c) 2025 Cohort Platform Authors. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration layer, merged across sources.

use serde::Deserialize;

use crate::sections::{
	DatabaseConfigLayer, HttpConfigLayer, LoggingConfigLayer, OAuthConfigLayer,
	ProfileConfigLayer, SmtpConfigLayer,
};

/// One source's worth of configuration. Every section is optional; merging
/// lets a later (higher-precedence) source override individual fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfigLayer {
	#[serde(default)]
	pub http: Option<HttpConfigLayer>,
	#[serde(default)]
	pub database: Option<DatabaseConfigLayer>,
	#[serde(default)]
	pub oauth: Option<OAuthConfigLayer>,
	#[serde(default)]
	pub profile: Option<ProfileConfigLayer>,
	#[serde(default)]
	pub smtp: Option<SmtpConfigLayer>,
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
}

impl ServerConfigLayer {
	/// Merge another layer into this one; `other` wins on conflicts.
	pub fn merge(&mut self, other: ServerConfigLayer) {
		merge_section(&mut self.http, other.http, HttpConfigLayer::merge);
		merge_section(&mut self.database, other.database, DatabaseConfigLayer::merge);
		merge_section(&mut self.oauth, other.oauth, OAuthConfigLayer::merge);
		merge_section(&mut self.profile, other.profile, ProfileConfigLayer::merge);
		merge_section(&mut self.smtp, other.smtp, SmtpConfigLayer::merge);
		merge_section(&mut self.logging, other.logging, LoggingConfigLayer::merge);
	}
}

fn merge_section<T>(current: &mut Option<T>, incoming: Option<T>, merge: fn(&mut T, T)) {
	match (current.as_mut(), incoming) {
		(Some(current), Some(incoming)) => merge(current, incoming),
		(None, Some(incoming)) => *current = Some(incoming),
		(_, None) => {}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn merge_overrides_individual_fields() {
		let mut base = ServerConfigLayer {
			http: Some(HttpConfigLayer {
				host: Some("127.0.0.1".to_string()),
				port: Some(8080),
			}),
			..ServerConfigLayer::default()
		};

		base.merge(ServerConfigLayer {
			http: Some(HttpConfigLayer {
				host: None,
				port: Some(9000),
			}),
			..ServerConfigLayer::default()
		});

		let http = base.http.unwrap();
		assert_eq!(http.host.as_deref(), Some("127.0.0.1"));
		assert_eq!(http.port, Some(9000));
	}

	#[test]
	fn merge_adopts_missing_sections() {
		let mut base = ServerConfigLayer::default();
		base.merge(ServerConfigLayer {
			database: Some(DatabaseConfigLayer {
				url: Some("sqlite::memory:".to_string()),
			}),
			..ServerConfigLayer::default()
		});

		assert_eq!(
			base.database.unwrap().url.as_deref(),
			Some("sqlite::memory:")
		);
	}
}
