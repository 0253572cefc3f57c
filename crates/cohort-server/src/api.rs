// Copyright (c) 2025 Cohort Platform Authors. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Application state and router assembly.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Json, Router};
use sqlx::SqlitePool;
use utoipa::OpenApi;

use cohort_server_auth_linkedin::{LinkedInOAuthClient, LinkedInOAuthConfig};
use cohort_server_config::ServerConfig;
use cohort_server_db::AccountRepository;
use cohort_server_email::EmailService;
use cohort_server_enrollment::{EnrollmentService, ProfileRequirements, WelcomeNotifier};
use cohort_server_smtp::SmtpClient;

use crate::routes;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
	pub enrollment: Arc<EnrollmentService>,
	pub smtp_client: Option<Arc<SmtpClient>>,
	pub oauth_configured: bool,
	pub pool: SqlitePool,
}

impl AppState {
	/// Assemble state from already-built collaborators.
	///
	/// `create_app_state` is the production path; this constructor exists so
	/// tests can wire in scripted providers and notifiers.
	pub fn new(
		enrollment: Arc<EnrollmentService>,
		smtp_client: Option<Arc<SmtpClient>>,
		oauth_configured: bool,
		pool: SqlitePool,
	) -> Self {
		Self {
			enrollment,
			smtp_client,
			oauth_configured,
			pool,
		}
	}
}

/// Creates the application state from resolved configuration.
pub fn create_app_state(pool: SqlitePool, config: &ServerConfig) -> AppState {
	let repo = Arc::new(AccountRepository::new(pool.clone()));

	let oauth_configured = config.oauth.is_configured();
	if !oauth_configured {
		tracing::warn!("LinkedIn OAuth is not fully configured; registration will fail");
	}
	let oauth_config = LinkedInOAuthConfig {
		client_id: config.oauth.client_id.clone(),
		client_secret: config.oauth.client_secret.clone(),
		redirect_uri: config.oauth.redirect_uri.clone(),
		scopes: vec!["r_emailaddress".to_string(), "r_liteprofile".to_string()],
	};
	let provider = Arc::new(LinkedInOAuthClient::new(oauth_config));

	let smtp_client = match config.smtp.clone() {
		Some(smtp_config) => match SmtpClient::new(smtp_config) {
			Ok(client) => Some(Arc::new(client)),
			Err(e) => {
				tracing::error!(error = %e, "failed to build SMTP client, notifications disabled");
				None
			}
		},
		None => {
			tracing::info!("SMTP not configured, welcome email disabled");
			None
		}
	};

	let notifier = smtp_client
		.clone()
		.map(|client| Arc::new(EmailService::new(client)) as Arc<dyn WelcomeNotifier>);

	let requirements = ProfileRequirements {
		require_location: config.profile.require_location,
		require_experience: config.profile.require_experience,
	};

	let enrollment = Arc::new(EnrollmentService::new(
		provider,
		repo,
		notifier,
		requirements,
	));

	AppState::new(enrollment, smtp_client, oauth_configured, pool)
}

/// OpenAPI document for the registration endpoints.
#[derive(OpenApi)]
#[openapi(
	paths(
		routes::accounts::create_account,
		routes::accounts::enroll_account,
		routes::accounts::get_account,
		routes::health::health_check,
	),
	components(schemas(
		cohort_server_accounts::Account,
		cohort_server_accounts::EnrollmentForm,
		routes::accounts::CreateAccountRequest,
		crate::api_response::AccountEnvelope,
		crate::api_response::ErrorEnvelope,
		routes::health::HealthResponse,
		routes::health::HealthComponents,
		routes::health::HealthStatus,
	)),
	tags(
		(name = "accounts", description = "Registration and enrollment"),
		(name = "health", description = "Service health")
	)
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
	Json(ApiDoc::openapi())
}

/// Creates the application router with all routes.
pub fn create_router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(routes::health::health_check))
		.route("/api/accounts", post(routes::accounts::create_account))
		.route("/api/accounts/{email}", get(routes::accounts::get_account))
		.route(
			"/api/accounts/{email}/enrollment",
			post(routes::accounts::enroll_account),
		)
		.route("/api-docs/openapi.json", get(openapi_json))
		.with_state(state)
}
