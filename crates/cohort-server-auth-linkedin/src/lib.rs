// Copyright (c) 2025 Cohort Platform Authors. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! LinkedIn OAuth 2.0 profile acquisition for Cohort.
//!
//! This module implements the LinkedIn OAuth 2.0 authorization code flow and
//! the profile-fetch protocol used to provision applicant accounts.
//!
//! # OAuth Flow
//!
//! 1. **Authorization URL Generation**: Generate a URL with a state parameter
//!    for CSRF protection. The applicant is redirected to LinkedIn to
//!    authorize the application.
//!
//! 2. **User Authorization**: The applicant authorizes in their browser and is
//!    redirected back to the configured `redirect_uri` with an authorization
//!    `code` and `state` parameter.
//!
//! 3. **Code Exchange**: Exchange the authorization code for an access token
//!    by calling LinkedIn's token endpoint with the client credentials.
//!
//! 4. **Profile Fetch**: Use the access token to resolve the member's email
//!    address and then their public profile attributes.
//!
//! # Token renewal
//!
//! Bearer tokens expire. If the profile fetch reports an authorization
//! failure, [`fetch_profile`] renews the token out-of-band (refresh-token
//! grant) and retries the fetch exactly once. A second failure of any kind is
//! surfaced to the caller; there is deliberately no retry loop here, so a
//! provider outage can never keep a request spinning.
//!
//! # Example
//!
//! ```rust,no_run
//! use cohort_server_auth_linkedin::{fetch_profile, LinkedInOAuthClient, LinkedInOAuthConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = LinkedInOAuthConfig::from_env()?;
//! let client = LinkedInOAuthClient::new(config);
//!
//! // Step 1: Generate authorization URL with CSRF state
//! let auth_url = client.authorization_url("random-state-value");
//!
//! // Steps 2-4: exchange the callback code and pull the profile
//! let profile = fetch_profile(&client, "code-from-callback", "https://example.com/callback").await?;
//! println!("registering {}", profile.email);
//! # Ok(())
//! # }
//! ```
//!
//! # Security Considerations
//!
//! - The `client_secret` is wrapped in [`SecretString`] to prevent accidental logging.
//! - Access and refresh tokens in [`TokenResponse`] are also wrapped.
//! - All tracing instrumentation skips sensitive parameters.
//! - Always validate the `state` parameter in callbacks to prevent CSRF attacks.

use async_trait::async_trait;
use cohort_common_secret::SecretString;
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

const LINKEDIN_AUTHORIZE_URL: &str = "https://www.linkedin.com/oauth/v2/authorization";
const LINKEDIN_TOKEN_URL: &str = "https://www.linkedin.com/oauth/v2/accessToken";
const LINKEDIN_EMAIL_API_URL: &str =
	"https://api.linkedin.com/v2/emailAddress?q=members&projection=(elements*(handle~))";
const LINKEDIN_PROFILE_API_URL: &str = "https://api.linkedin.com/v2/profiles/full";

// =============================================================================
// Errors
// =============================================================================

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// A required environment variable was not set.
	#[error("missing environment variable: {0}")]
	MissingEnvVar(String),

	/// A configuration value was empty or invalid.
	#[error("invalid configuration: {0}")]
	InvalidConfig(String),
}

/// Errors that can occur during OAuth and profile-fetch operations.
///
/// The variants carry the classification the rest of the system relies on:
/// [`OAuthError::InvalidRequest`] is caller-caused, [`OAuthError::NoProfile`]
/// means the provider has no record for that identity, and everything else is
/// an upstream failure.
#[derive(Debug, thiserror::Error)]
pub enum OAuthError {
	/// The request was rejected before any network call was made.
	#[error("{0}")]
	InvalidRequest(String),

	/// The HTTP request to LinkedIn failed (network error, timeout, etc.).
	#[error("HTTP request failed: {0}")]
	HttpRequest(#[from] reqwest::Error),

	/// The provider reported the bearer token as invalid or expired.
	#[error("LinkedIn rejected the access token")]
	Unauthorized,

	/// LinkedIn returned an error response (invalid code, bad grant, etc.).
	#[error("LinkedIn API error: {0}")]
	Provider(String),

	/// The response from LinkedIn could not be parsed as expected.
	#[error("failed to parse response: {0}")]
	Parse(String),

	/// The provider returned an empty result set for this identity.
	#[error("No LinkedIn Profile Found")]
	NoProfile,
}

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for the LinkedIn OAuth client.
///
/// The `client_secret` is wrapped in [`SecretString`] to prevent accidental
/// logging or exposure.
#[derive(Debug, Clone)]
pub struct LinkedInOAuthConfig {
	/// The OAuth application client ID.
	pub client_id: String,
	/// The OAuth application client secret (wrapped to prevent logging).
	pub client_secret: SecretString,
	/// The callback URL where LinkedIn redirects after authorization.
	pub redirect_uri: String,
	/// OAuth scopes to request (e.g., "r_emailaddress", "r_liteprofile").
	pub scopes: Vec<String>,
}

impl LinkedInOAuthConfig {
	/// Load configuration from environment variables.
	///
	/// # Required Environment Variables
	///
	/// - `COHORT_SERVER_LINKEDIN_CLIENT_ID`: The OAuth application's client ID.
	/// - `COHORT_SERVER_LINKEDIN_CLIENT_SECRET`: The OAuth application's client secret.
	/// - `COHORT_SERVER_LINKEDIN_REDIRECT_URI`: The callback URL for OAuth redirects.
	///
	/// # Returns
	///
	/// Returns the configuration with default scopes (`r_emailaddress`,
	/// `r_liteprofile`).
	///
	/// # Errors
	///
	/// Returns [`ConfigError::MissingEnvVar`] if any required variable is not set.
	pub fn from_env() -> Result<Self, ConfigError> {
		let client_id = env::var("COHORT_SERVER_LINKEDIN_CLIENT_ID").map_err(|_| {
			ConfigError::MissingEnvVar("COHORT_SERVER_LINKEDIN_CLIENT_ID".to_string())
		})?;

		let client_secret = env::var("COHORT_SERVER_LINKEDIN_CLIENT_SECRET").map_err(|_| {
			ConfigError::MissingEnvVar("COHORT_SERVER_LINKEDIN_CLIENT_SECRET".to_string())
		})?;

		let redirect_uri = env::var("COHORT_SERVER_LINKEDIN_REDIRECT_URI").map_err(|_| {
			ConfigError::MissingEnvVar("COHORT_SERVER_LINKEDIN_REDIRECT_URI".to_string())
		})?;

		Ok(Self {
			client_id,
			client_secret: SecretString::new(client_secret),
			redirect_uri,
			scopes: vec!["r_emailaddress".to_string(), "r_liteprofile".to_string()],
		})
	}

	/// Validate that all configuration fields are non-empty.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::InvalidConfig`] if any field is empty.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.client_id.is_empty() {
			return Err(ConfigError::InvalidConfig(
				"client_id cannot be empty".to_string(),
			));
		}
		if self.client_secret.expose().is_empty() {
			return Err(ConfigError::InvalidConfig(
				"client_secret cannot be empty".to_string(),
			));
		}
		if self.redirect_uri.is_empty() {
			return Err(ConfigError::InvalidConfig(
				"redirect_uri cannot be empty".to_string(),
			));
		}
		Ok(())
	}

	/// Join scopes into a space-separated string for the authorization URL.
	pub fn scopes_string(&self) -> String {
		self.scopes.join(" ")
	}
}

// =============================================================================
// Response types
// =============================================================================

/// Response from LinkedIn's token endpoint.
///
/// The access and refresh tokens are wrapped in [`SecretString`]; use
/// `.expose()` when passing them to an API call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
	/// The access token for API requests (wrapped to prevent logging).
	pub access_token: SecretString,
	/// Seconds until the access token expires.
	pub expires_in: u64,
	/// Refresh token for out-of-band renewal, when granted.
	#[serde(default)]
	pub refresh_token: Option<SecretString>,
}

/// Raw profile attributes as returned by the provider's resource endpoint.
///
/// The endpoint answers with a (possibly empty) list of person records; the
/// first record is authoritative.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileResponse {
	#[serde(default)]
	pub persons: Vec<Person>,
}

/// A single person record from the profile endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
	#[serde(default)]
	pub display_name: String,
	#[serde(default)]
	pub phone_numbers: Vec<String>,
	#[serde(default)]
	pub location: String,
	#[serde(default)]
	pub photo_url: String,
	#[serde(default)]
	pub linked_in_url: String,
	#[serde(default)]
	pub positions: Positions,
}

/// Employment history container on a person record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Positions {
	#[serde(default)]
	pub position_history: Vec<Position>,
}

/// One employment entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Position {
	#[serde(default)]
	pub title: String,
}

/// Normalized applicant profile, the output of [`fetch_profile`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
	/// The member's primary email address.
	pub email: String,
	/// Display name as shown on the profile.
	pub name: String,
	/// Profile photo URL.
	pub photo: String,
	/// Public profile URL.
	pub profile_url: String,
	/// Free-form location string.
	pub location: String,
	/// First listed phone number, or empty.
	pub phone: String,
	/// Whether the profile lists any work experience.
	pub has_experience: bool,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorResponse {
	error: String,
	error_description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EmailResponse {
	#[serde(default)]
	elements: Vec<EmailElement>,
}

#[derive(Debug, Deserialize)]
struct EmailElement {
	#[serde(rename = "handle~")]
	handle: EmailHandle,
}

#[derive(Debug, Deserialize)]
struct EmailHandle {
	#[serde(rename = "emailAddress")]
	email_address: String,
}

// =============================================================================
// Provider boundary
// =============================================================================

/// The identity-provider boundary used by the registration workflow.
///
/// [`LinkedInOAuthClient`] is the production implementation; tests substitute
/// scripted implementations to exercise the retry protocol without a network.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
	/// Exchange an authorization code for an access token.
	async fn exchange_code(
		&self,
		code: &str,
		redirect_uri: &str,
	) -> Result<TokenResponse, OAuthError>;

	/// Resolve the authenticated member's primary email address.
	async fn member_email(&self, access_token: &str) -> Result<String, OAuthError>;

	/// Fetch the member's profile attributes, keyed by email.
	///
	/// Implementations must map a provider-side authorization failure to
	/// [`OAuthError::Unauthorized`] so the caller can renew and retry.
	async fn member_profile(
		&self,
		access_token: &str,
		email: &str,
	) -> Result<ProfileResponse, OAuthError>;

	/// Obtain a fresh token out-of-band after an authorization failure.
	async fn renew_token(&self, previous: &TokenResponse) -> Result<TokenResponse, OAuthError>;
}

// =============================================================================
// Profile fetch protocol
// =============================================================================

/// Fetch a normalized applicant profile for a newly-authenticating member.
///
/// This is the full acquisition protocol: exchange the authorization code,
/// resolve the member email, fetch the profile attributes, and — on an
/// authorization failure only — renew the token and retry the fetch exactly
/// once. The renewed token lives and dies inside this call; nothing is cached
/// across invocations.
///
/// # Errors
///
/// - [`OAuthError::InvalidRequest`]: `auth_code` or `redirect_uri` was empty;
///   returned before any network call.
/// - [`OAuthError::NoProfile`]: the provider has no record for this member.
/// - Any other variant: the upstream call that failed, after at most one
///   renew-and-retry of the profile fetch.
#[tracing::instrument(skip_all)]
pub async fn fetch_profile(
	provider: &dyn IdentityProvider,
	auth_code: &str,
	redirect_uri: &str,
) -> Result<Profile, OAuthError> {
	if auth_code.trim().is_empty() {
		return Err(OAuthError::InvalidRequest(
			"authorization code is required".to_string(),
		));
	}
	if redirect_uri.trim().is_empty() {
		return Err(OAuthError::InvalidRequest(
			"redirect URI is required".to_string(),
		));
	}

	let token = provider.exchange_code(auth_code, redirect_uri).await?;
	let email = provider.member_email(token.access_token.expose()).await?;

	// Single compensating retry: renew on an authorization failure, try once
	// more, and surface whatever the second attempt returns.
	let response = match provider
		.member_profile(token.access_token.expose(), &email)
		.await
	{
		Ok(response) => response,
		Err(OAuthError::Unauthorized) => {
			tracing::debug!("profile fetch unauthorized, renewing token and retrying once");
			let fresh = provider.renew_token(&token).await?;
			provider
				.member_profile(fresh.access_token.expose(), &email)
				.await?
		}
		Err(e) => return Err(e),
	};

	let person = response.persons.into_iter().next().ok_or(OAuthError::NoProfile)?;

	Ok(Profile {
		email,
		name: person.display_name,
		photo: person.photo_url,
		profile_url: person.linked_in_url,
		location: person.location,
		phone: person.phone_numbers.into_iter().next().unwrap_or_default(),
		has_experience: !person.positions.position_history.is_empty(),
	})
}

// =============================================================================
// Client
// =============================================================================

/// OAuth client for authenticating applicants via LinkedIn.
///
/// Handles the OAuth 2.0 authorization code flow: generating authorization
/// URLs, exchanging codes for tokens, and fetching member information.
#[derive(Debug, Clone)]
pub struct LinkedInOAuthClient {
	config: LinkedInOAuthConfig,
	http_client: reqwest::Client,
}

impl LinkedInOAuthClient {
	/// Create a new LinkedIn OAuth client with the given configuration.
	///
	/// # Panics
	///
	/// Panics if the HTTP client cannot be built (should never happen in practice).
	#[tracing::instrument(skip_all, name = "LinkedInOAuthClient::new")]
	pub fn new(config: LinkedInOAuthConfig) -> Self {
		let http_client = cohort_common_http::builder()
			.build()
			.expect("failed to build HTTP client");

		Self {
			config,
			http_client,
		}
	}

	/// Generate the LinkedIn authorization URL for the OAuth flow.
	///
	/// # Arguments
	///
	/// - `state`: A random, unguessable string to prevent CSRF attacks. Store
	///   it server-side and verify it when the user is redirected back.
	#[tracing::instrument(skip(self), fields(client_id = %self.config.client_id))]
	pub fn authorization_url(&self, state: &str) -> String {
		let mut url = Url::parse(LINKEDIN_AUTHORIZE_URL).expect("invalid authorize URL");

		url
			.query_pairs_mut()
			.append_pair("response_type", "code")
			.append_pair("client_id", &self.config.client_id)
			.append_pair("redirect_uri", &self.config.redirect_uri)
			.append_pair("scope", &self.config.scopes_string())
			.append_pair("state", state);

		url.to_string()
	}

	async fn token_request(
		&self,
		params: &[(&str, &str)],
	) -> Result<TokenResponse, OAuthError> {
		let response = self
			.http_client
			.post(LINKEDIN_TOKEN_URL)
			.header("Accept", "application/json")
			.form(params)
			.send()
			.await?;

		let body = response.text().await?;

		if let Ok(error_response) = serde_json::from_str::<ProviderErrorResponse>(&body) {
			if !error_response.error.is_empty() {
				let message = error_response
					.error_description
					.unwrap_or(error_response.error);
				return Err(OAuthError::Provider(message));
			}
		}

		serde_json::from_str(&body)
			.map_err(|e| OAuthError::Parse(format!("failed to parse token response: {e}")))
	}
}

#[async_trait]
impl IdentityProvider for LinkedInOAuthClient {
	/// Exchange an authorization code for an access token.
	///
	/// # Errors
	///
	/// - [`OAuthError::HttpRequest`]: Network error or timeout.
	/// - [`OAuthError::Provider`]: LinkedIn rejected the code (expired, invalid, etc.).
	/// - [`OAuthError::Parse`]: Unexpected response format.
	#[tracing::instrument(skip(self, code), name = "LinkedInOAuthClient::exchange_code")]
	async fn exchange_code(
		&self,
		code: &str,
		redirect_uri: &str,
	) -> Result<TokenResponse, OAuthError> {
		tracing::debug!("exchanging authorization code for access token");

		self
			.token_request(&[
				("grant_type", "authorization_code"),
				("code", code),
				("client_id", self.config.client_id.as_str()),
				("client_secret", self.config.client_secret.expose().as_str()),
				("redirect_uri", redirect_uri),
			])
			.await
	}

	/// Resolve the authenticated member's primary email address.
	#[tracing::instrument(skip_all, name = "LinkedInOAuthClient::member_email")]
	async fn member_email(&self, access_token: &str) -> Result<String, OAuthError> {
		tracing::debug!("fetching member email address");

		let response = self
			.http_client
			.get(LINKEDIN_EMAIL_API_URL)
			.header("Authorization", format!("Bearer {access_token}"))
			.send()
			.await?;

		if !response.status().is_success() {
			let body = response.text().await.unwrap_or_default();
			return Err(OAuthError::Provider(format!("failed to get email: {body}")));
		}

		let payload: EmailResponse = response
			.json()
			.await
			.map_err(|e| OAuthError::Parse(format!("failed to parse email response: {e}")))?;

		let element = payload.elements.into_iter().next().ok_or(OAuthError::NoProfile)?;
		Ok(element.handle.email_address)
	}

	/// Fetch the member's profile attributes, keyed by email.
	#[tracing::instrument(skip(self, access_token), name = "LinkedInOAuthClient::member_profile")]
	async fn member_profile(
		&self,
		access_token: &str,
		email: &str,
	) -> Result<ProfileResponse, OAuthError> {
		tracing::debug!("fetching member profile");

		let response = self
			.http_client
			.get(LINKEDIN_PROFILE_API_URL)
			.query(&[("email", email)])
			.header("Authorization", format!("Bearer {access_token}"))
			.send()
			.await?;

		let status = response.status();
		if status == reqwest::StatusCode::UNAUTHORIZED {
			return Err(OAuthError::Unauthorized);
		}
		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			return Err(OAuthError::Provider(format!(
				"expected 200 getting profile, got {status}: {body}"
			)));
		}

		response
			.json()
			.await
			.map_err(|e| OAuthError::Parse(format!("failed to parse profile response: {e}")))
	}

	/// Obtain a fresh token via the refresh-token grant.
	///
	/// # Errors
	///
	/// Returns [`OAuthError::Unauthorized`] if the previous exchange granted
	/// no refresh token; there is nothing to renew with.
	#[tracing::instrument(skip_all, name = "LinkedInOAuthClient::renew_token")]
	async fn renew_token(&self, previous: &TokenResponse) -> Result<TokenResponse, OAuthError> {
		let refresh_token = previous
			.refresh_token
			.as_ref()
			.ok_or(OAuthError::Unauthorized)?;

		tracing::debug!("renewing access token via refresh grant");

		self
			.token_request(&[
				("grant_type", "refresh_token"),
				("refresh_token", refresh_token.expose().as_str()),
				("client_id", self.config.client_id.as_str()),
				("client_secret", self.config.client_secret.expose().as_str()),
			])
			.await
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn test_config() -> LinkedInOAuthConfig {
		LinkedInOAuthConfig {
			client_id: "test_client_id".to_string(),
			client_secret: SecretString::new("test_secret".to_string()),
			redirect_uri: "https://example.com/callback".to_string(),
			scopes: vec!["r_emailaddress".to_string(), "r_liteprofile".to_string()],
		}
	}

	#[test]
	fn config_default_scopes() {
		let config = test_config();
		assert_eq!(config.scopes.len(), 2);
		assert!(config.scopes.contains(&"r_emailaddress".to_string()));
		assert!(config.scopes.contains(&"r_liteprofile".to_string()));
	}

	#[test]
	fn authorization_url_contains_required_params() {
		let client = LinkedInOAuthClient::new(test_config());
		let url = client.authorization_url("test_state_123");

		assert!(url.starts_with("https://www.linkedin.com/oauth/v2/authorization"));
		assert!(url.contains("response_type=code"));
		assert!(url.contains("client_id=test_client_id"));
		assert!(url.contains("redirect_uri=https%3A%2F%2Fexample.com%2Fcallback"));
		assert!(url.contains("state=test_state_123"));
		assert!(url.contains("scope=r_emailaddress+r_liteprofile"));
	}

	#[test]
	fn token_response_deserializes() {
		let json = r#"{
            "access_token": "AQVoAaCqcqQ",
            "expires_in": 5183999
        }"#;

		let token: TokenResponse = serde_json::from_str(json).unwrap();
		assert_eq!(token.access_token.expose(), "AQVoAaCqcqQ");
		assert_eq!(token.expires_in, 5183999);
		assert!(token.refresh_token.is_none());
	}

	#[test]
	fn token_response_with_refresh_token() {
		let json = r#"{
            "access_token": "AQVoAaCqcqQ",
            "expires_in": 5183999,
            "refresh_token": "AQWnpOAGZ"
        }"#;

		let token: TokenResponse = serde_json::from_str(json).unwrap();
		assert_eq!(token.refresh_token.unwrap().expose(), "AQWnpOAGZ");
	}

	#[test]
	fn profile_response_deserializes() {
		let json = r#"{
            "persons": [{
                "displayName": "Jane Doe",
                "phoneNumbers": ["+1 555 0100", "+1 555 0101"],
                "location": "Austin, Texas",
                "photoUrl": "https://media.example.com/jane.jpg",
                "linkedInUrl": "https://www.linkedin.com/in/jane-doe",
                "positions": {"positionHistory": [{"title": "Engineer"}]}
            }]
        }"#;

		let response: ProfileResponse = serde_json::from_str(json).unwrap();
		let person = &response.persons[0];
		assert_eq!(person.display_name, "Jane Doe");
		assert_eq!(person.phone_numbers.len(), 2);
		assert_eq!(person.location, "Austin, Texas");
		assert_eq!(person.positions.position_history.len(), 1);
	}

	#[test]
	fn profile_response_tolerates_missing_fields() {
		let json = r#"{"persons": [{"displayName": "Jane Doe"}]}"#;

		let response: ProfileResponse = serde_json::from_str(json).unwrap();
		let person = &response.persons[0];
		assert_eq!(person.display_name, "Jane Doe");
		assert!(person.phone_numbers.is_empty());
		assert!(person.positions.position_history.is_empty());
	}

	#[test]
	fn email_response_deserializes_handle_projection() {
		let json = r#"{
            "elements": [{
                "handle": "urn:li:emailAddress:7832573868",
                "handle~": {"emailAddress": "jane@example.com"}
            }]
        }"#;

		let response: EmailResponse = serde_json::from_str(json).unwrap();
		assert_eq!(response.elements[0].handle.email_address, "jane@example.com");
	}

	#[test]
	fn config_validation_rejects_empty_fields() {
		let config = LinkedInOAuthConfig {
			client_id: "".to_string(),
			..test_config()
		};
		assert!(config.validate().is_err());

		let config = LinkedInOAuthConfig {
			client_secret: SecretString::new("".to_string()),
			..test_config()
		};
		assert!(config.validate().is_err());

		let config = LinkedInOAuthConfig {
			redirect_uri: "".to_string(),
			..test_config()
		};
		assert!(config.validate().is_err());
	}

	#[test]
	fn config_validation_accepts_valid_config() {
		assert!(test_config().validate().is_ok());
	}

	#[test]
	fn access_token_is_not_logged() {
		let json = r#"{"access_token": "AQV_supersecret", "expires_in": 60}"#;

		let token: TokenResponse = serde_json::from_str(json).unwrap();
		let debug_output = format!("{token:?}");

		assert!(!debug_output.contains("AQV_supersecret"));
		assert!(debug_output.contains("[REDACTED]"));
	}

	#[test]
	fn client_secret_is_not_logged() {
		let config = test_config();
		let debug_output = format!("{config:?}");

		assert!(!debug_output.contains("test_secret"));
		assert!(debug_output.contains("[REDACTED]"));
	}
}


#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;

	proptest! {
		/// Authorization URLs must always contain required OAuth parameters
		/// regardless of the input values.
		#[test]
		fn authorization_url_always_has_required_params(
			client_id in "[a-zA-Z0-9]{1,40}",
			redirect_uri in "https://[a-z]{1,20}\\.[a-z]{2,5}/[a-z]{1,20}",
			state in "[a-zA-Z0-9]{1,64}",
		) {
			let config = LinkedInOAuthConfig {
				client_id: client_id.clone(),
				client_secret: SecretString::new("secret".to_string()),
				redirect_uri: redirect_uri.clone(),
				scopes: vec!["r_emailaddress".to_string()],
			};

			let client = LinkedInOAuthClient::new(config);
			let url = client.authorization_url(&state);

			prop_assert!(url.starts_with(LINKEDIN_AUTHORIZE_URL));
			prop_assert!(url.contains("response_type=code"));
			prop_assert!(url.contains("client_id="));
			prop_assert!(url.contains("redirect_uri="));
			prop_assert!(url.contains("scope="));
			prop_assert!(url.contains("state="));
		}

		/// Valid configurations should always pass validation.
		#[test]
		fn valid_config_passes_validation(
			client_id in "[a-zA-Z0-9]{1,40}",
			client_secret in "[a-zA-Z0-9]{1,40}",
			redirect_uri in "https://[a-z]{1,20}\\.[a-z]{2,5}/[a-z]{1,20}",
		) {
			let config = LinkedInOAuthConfig {
				client_id,
				client_secret: SecretString::new(client_secret),
				redirect_uri,
				scopes: vec!["r_emailaddress".to_string()],
			};

			prop_assert!(config.validate().is_ok());
		}

		/// Client secret should never appear in debug output.
		#[test]
		fn client_secret_never_in_debug(
			secret in "[a-zA-Z0-9]{10,40}"
		) {
			prop_assume!(!secret.contains("REDACTED"));

			let config = LinkedInOAuthConfig {
				client_id: "id".to_string(),
				client_secret: SecretString::new(secret.clone()),
				redirect_uri: "https://example.com".to_string(),
				scopes: vec![],
			};

			let debug = format!("{config:?}");
			prop_assert!(!debug.contains(&secret));
		}

		/// Access token should never appear in debug output.
		#[test]
		fn access_token_never_in_debug(
			token in "AQV[a-zA-Z0-9]{10,40}"
		) {
			prop_assume!(!token.contains("REDACTED"));

			let json = format!(
				r#"{{"access_token": "{token}", "expires_in": 60}}"#
			);
			let response: TokenResponse = serde_json::from_str(&json).unwrap();

			let debug = format!("{response:?}");
			prop_assert!(!debug.contains(&token));
		}
	}
}
