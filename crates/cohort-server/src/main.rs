// Copyright (c) 2025 Cohort Platform Authors. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Cohort registration server binary.

use clap::{Parser, Subcommand};
use cohort_server::{create_app_state, create_router};
use tower_http::{
	cors::{Any, CorsLayer},
	trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Cohort server - HTTP server for applicant registration and enrollment.
#[derive(Parser, Debug)]
#[command(
	name = "cohort-server",
	about = "Cohort registration server",
	version
)]
struct Args {
	/// Path to a TOML config file (overrides the system location).
	#[arg(long)]
	config: Option<std::path::PathBuf>,

	/// Subcommands for cohort-server (e.g., `version`)
	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Show version information
	Version,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// Parse CLI arguments
	let args = Args::parse();

	// Handle subcommands that should not start the server
	if let Some(Command::Version) = args.command {
		println!("cohort-server {}", env!("CARGO_PKG_VERSION"));
		return Ok(());
	}

	// Load .env file if present
	dotenvy::dotenv().ok();

	// Load configuration
	let config = match &args.config {
		Some(path) => cohort_server_config::load_config_with_file(path)?,
		None => cohort_server_config::load_config()?,
	};

	// Setup tracing
	tracing_subscriber::registry()
		.with(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| config.logging.level.clone().into()),
		)
		.with(tracing_subscriber::fmt::layer())
		.init();

	tracing::info!(
		host = %config.http.host,
		port = config.http.port,
		database = %config.database.url,
		"starting cohort-server"
	);

	// Create database pool and run migrations
	let pool = cohort_server_db::create_pool(&config.database.url).await?;
	cohort_server_db::run_migrations(&pool).await?;

	let state = create_app_state(pool, &config);

	let app = create_router(state)
		.layer(TraceLayer::new_for_http())
		.layer(
			CorsLayer::new()
				.allow_origin(Any)
				.allow_methods(Any)
				.allow_headers(Any),
		);

	// Start server
	let addr = config.socket_addr();
	tracing::info!("listening on {}", addr);

	let listener = tokio::net::TcpListener::bind(&addr).await?;

	// Run server with graceful shutdown
	tokio::select! {
		result = axum::serve(listener, app) => {
			if let Err(e) = result {
				tracing::error!(error = %e, "Server error");
			}
		}
		_ = tokio::signal::ctrl_c() => {
			tracing::info!("Received shutdown signal");
		}
	}

	tracing::info!("Server shutdown complete");
	Ok(())
}
