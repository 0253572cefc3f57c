// Copyright (c) 2025 Cohort Platform Authors. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! SMTP email client for Cohort.
//!
//! A thin async wrapper over [`lettre`] used by the notification service.
//! Sends multipart (HTML + plain text) mail over STARTTLS with optional
//! authentication. Credentials are held in [`SecretString`] so they never
//! reach the logs.

use lettre::{
	message::{header::ContentType, Mailbox, MultiPart, SinglePart},
	transport::smtp::authentication::Credentials,
	AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use cohort_common_secret::SecretString;
use serde::Deserialize;
use std::env;

/// Errors that can occur during SMTP operations.
#[derive(Debug, thiserror::Error)]
pub enum SmtpError {
	/// Failed to connect to the SMTP server.
	#[error("connection failed: {0}")]
	Connection(String),

	/// Failed to send an email message.
	#[error("send failed: {0}")]
	Send(String),

	/// Invalid configuration (missing required fields, invalid values).
	#[error("invalid configuration: {0}")]
	Config(String),

	/// Invalid email address format.
	#[error("invalid email address: {0}")]
	Address(String),
}

/// Configuration for the SMTP client.
///
/// Loadable from `COHORT_SERVER_SMTP_*` environment variables via
/// [`SmtpConfig::from_env`] or constructed directly. The password is wrapped
/// in [`SecretString`].
#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
	/// SMTP server hostname (e.g., "smtp.example.com").
	pub host: String,

	/// SMTP server port. Common values: 25, 465 (TLS), 587 (STARTTLS).
	pub port: u16,

	/// Optional username for SMTP authentication.
	pub username: Option<String>,

	/// Optional password for SMTP authentication.
	pub password: Option<SecretString>,

	/// Email address to send from (e.g., "info@example.org").
	pub from_address: String,

	/// Display name for the sender.
	pub from_name: String,

	/// Whether to use STARTTLS for the connection. Defaults to `true`.
	#[serde(default = "default_use_tls")]
	pub use_tls: bool,
}

fn default_use_tls() -> bool {
	true
}

impl SmtpConfig {
	/// Load SMTP configuration from environment variables.
	///
	/// # Environment Variables
	///
	/// - `COHORT_SERVER_SMTP_HOST` (required)
	/// - `COHORT_SERVER_SMTP_PORT` (optional, default: 587)
	/// - `COHORT_SERVER_SMTP_USERNAME` (optional)
	/// - `COHORT_SERVER_SMTP_PASSWORD` (optional)
	/// - `COHORT_SERVER_SMTP_FROM_ADDRESS` (required)
	/// - `COHORT_SERVER_SMTP_FROM_NAME` (optional, default: "Cohort")
	/// - `COHORT_SERVER_SMTP_USE_TLS` (optional, default: true)
	///
	/// # Errors
	///
	/// Returns [`SmtpError::Config`] if required variables are missing or invalid.
	pub fn from_env() -> Result<Self, SmtpError> {
		let host = env::var("COHORT_SERVER_SMTP_HOST")
			.map_err(|_| SmtpError::Config("COHORT_SERVER_SMTP_HOST is required".into()))?;

		let port = env::var("COHORT_SERVER_SMTP_PORT")
			.unwrap_or_else(|_| "587".into())
			.parse()
			.map_err(|_| {
				SmtpError::Config("COHORT_SERVER_SMTP_PORT must be a valid port number".into())
			})?;

		let username = env::var("COHORT_SERVER_SMTP_USERNAME").ok();
		let password = env::var("COHORT_SERVER_SMTP_PASSWORD")
			.ok()
			.map(SecretString::new);

		let from_address = env::var("COHORT_SERVER_SMTP_FROM_ADDRESS")
			.map_err(|_| SmtpError::Config("COHORT_SERVER_SMTP_FROM_ADDRESS is required".into()))?;

		let from_name =
			env::var("COHORT_SERVER_SMTP_FROM_NAME").unwrap_or_else(|_| "Cohort".into());

		let use_tls = env::var("COHORT_SERVER_SMTP_USE_TLS")
			.map(|v| v.to_lowercase() != "false" && v != "0")
			.unwrap_or(true);

		Ok(Self {
			host,
			port,
			username,
			password,
			from_address,
			from_name,
			use_tls,
		})
	}
}

/// Async SMTP client.
///
/// Built once from configuration; the connection is made lazily when sending.
pub struct SmtpClient {
	transport: AsyncSmtpTransport<Tokio1Executor>,
	from_mailbox: Mailbox,
}

impl SmtpClient {
	/// Create a new SMTP client from the given configuration.
	///
	/// # Errors
	///
	/// Returns [`SmtpError::Address`] if the from address is invalid.
	/// Returns [`SmtpError::Connection`] if the transport cannot be built.
	#[tracing::instrument(
		name = "smtp_client_new",
		skip(config),
		fields(host = %config.host, port = %config.port, use_tls = %config.use_tls)
	)]
	pub fn new(config: SmtpConfig) -> Result<Self, SmtpError> {
		let from_mailbox: Mailbox = format!("{} <{}>", config.from_name, config.from_address)
			.parse()
			.map_err(|e| SmtpError::Address(format!("{e}")))?;

		let builder = if config.use_tls {
			AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
				.map_err(|e| SmtpError::Connection(format!("{e}")))?
		} else {
			AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
		};

		let mut builder = builder.port(config.port);

		if let (Some(username), Some(password)) = (config.username, config.password) {
			let credentials = Credentials::new(username, password.into_inner());
			builder = builder.credentials(credentials);
		}

		let transport = builder.build();

		tracing::debug!("SMTP client initialized");

		Ok(Self {
			transport,
			from_mailbox,
		})
	}

	/// Check if the SMTP server is reachable and responding.
	///
	/// # Errors
	///
	/// Returns [`SmtpError::Connection`] if the server is unreachable.
	#[tracing::instrument(name = "smtp_check_health", skip(self))]
	pub async fn check_health(&self) -> Result<(), SmtpError> {
		self
			.transport
			.test_connection()
			.await
			.map_err(|e| SmtpError::Connection(format!("{e}")))?;
		Ok(())
	}

	/// Send a multipart email to a recipient.
	///
	/// The recipient's client chooses between the HTML and plain text body.
	///
	/// # Errors
	///
	/// Returns [`SmtpError::Address`] if the recipient address is invalid.
	/// Returns [`SmtpError::Send`] if the email fails to send.
	#[tracing::instrument(
		name = "smtp_send_email",
		skip(self, body_html, body_text),
		fields(to = %to, subject = %subject)
	)]
	pub async fn send_email(
		&self,
		to: &str,
		subject: &str,
		body_html: &str,
		body_text: &str,
	) -> Result<(), SmtpError> {
		let to_mailbox: Mailbox = to.parse().map_err(|e| SmtpError::Address(format!("{e}")))?;

		let message = Message::builder()
			.from(self.from_mailbox.clone())
			.to(to_mailbox)
			.subject(subject)
			.multipart(
				MultiPart::alternative()
					.singlepart(
						SinglePart::builder()
							.header(ContentType::TEXT_PLAIN)
							.body(body_text.to_string()),
					)
					.singlepart(
						SinglePart::builder()
							.header(ContentType::TEXT_HTML)
							.body(body_html.to_string()),
					),
			)
			.map_err(|e| SmtpError::Send(format!("failed to build message: {e}")))?;

		self
			.transport
			.send(message)
			.await
			.map_err(|e| SmtpError::Send(format!("{e}")))?;

		tracing::info!("email sent");

		Ok(())
	}
}

/// Validate an email address format.
///
/// Uses [`lettre`]'s [`Mailbox`] parser; this checks syntax, not existence.
pub fn is_valid_email(email: &str) -> bool {
	email.parse::<Mailbox>().is_ok()
}
