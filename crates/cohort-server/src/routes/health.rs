// Copyright (c) 2025 Cohort Platform Authors. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Health HTTP handler.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::api::AppState;

/// Aggregate health state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
	Healthy,
	Degraded,
	Unhealthy,
}

/// Per-component health breakdown.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthComponents {
	/// Database reachability.
	pub database: String,
	/// Identity-provider OAuth configuration state.
	pub oauth: String,
	/// SMTP notification state.
	pub smtp: String,
}

/// Health check response body.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
	pub status: HealthStatus,
	pub timestamp: String,
	pub components: HealthComponents,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "System is healthy", body = HealthResponse),
        (status = 503, description = "System is unhealthy", body = HealthResponse)
    ),
    tag = "health"
)]
/// GET /health - Component health check endpoint.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
	let database = match sqlx::query("SELECT 1").execute(&state.pool).await {
		Ok(_) => "ok".to_string(),
		Err(e) => {
			tracing::error!(error = %e, "database health check failed");
			format!("error: {e}")
		}
	};

	let oauth = if state.oauth_configured {
		"configured".to_string()
	} else {
		"not configured".to_string()
	};

	// Notification email is optional; absence degrades rather than fails.
	let smtp = match &state.smtp_client {
		Some(client) => match client.check_health().await {
			Ok(()) => "ok".to_string(),
			Err(e) => {
				tracing::warn!(error = %e, "smtp health check failed");
				format!("error: {e}")
			}
		},
		None => "disabled".to_string(),
	};

	let status = if database != "ok" {
		HealthStatus::Unhealthy
	} else if smtp.starts_with("error") || !state.oauth_configured {
		HealthStatus::Degraded
	} else {
		HealthStatus::Healthy
	};

	let http_status = match status {
		HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
		HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
	};

	let response = HealthResponse {
		status,
		timestamp: chrono::Utc::now().to_rfc3339(),
		components: HealthComponents {
			database,
			oauth,
			smtp,
		},
	};

	(http_status, Json(response))
}
