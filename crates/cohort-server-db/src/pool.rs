// Copyright (c) 2025 Cohort Platform Authors. All rights reserved.
// SPDX-License-Identifier: Proprietary

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqliteSynchronous};
use std::str::FromStr;

use crate::error::DbError;

/// Create a SqlitePool with WAL mode and common settings.
///
/// # Arguments
/// * `database_url` - SQLite connection string (e.g., "sqlite:./cohort.db")
///
/// # Errors
/// Returns `DbError::Internal` if the URL is invalid or connection fails.
#[tracing::instrument(skip(database_url))]
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, DbError> {
	let options = SqliteConnectOptions::from_str(database_url)
		.map_err(|e| DbError::Internal(format!("Invalid database URL: {e}")))?
		.journal_mode(SqliteJournalMode::Wal)
		.synchronous(SqliteSynchronous::Normal)
		.create_if_missing(true);

	let pool = SqlitePool::connect_with(options).await?;

	tracing::debug!("database pool created");
	Ok(pool)
}

/// Create the schema if it does not exist yet.
///
/// # Errors
/// Returns `DbError::Sqlx` if a statement fails.
#[tracing::instrument(skip(pool))]
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), DbError> {
	sqlx::query(
		r#"
		CREATE TABLE IF NOT EXISTS accounts (
			email TEXT PRIMARY KEY,
			name TEXT NOT NULL DEFAULT '',
			first_name TEXT NOT NULL DEFAULT '',
			last_name TEXT NOT NULL DEFAULT '',
			linkedin_url TEXT NOT NULL DEFAULT '',
			location TEXT NOT NULL DEFAULT '',
			timezone TEXT NOT NULL DEFAULT '',
			phone TEXT NOT NULL DEFAULT '',
			photo TEXT NOT NULL DEFAULT '',
			representation TEXT NOT NULL DEFAULT '',
			gender TEXT NOT NULL DEFAULT '',
			age_group TEXT NOT NULL DEFAULT '',
			employment_status TEXT NOT NULL DEFAULT '',
			highest_school TEXT NOT NULL DEFAULT '',
			field_of_study TEXT NOT NULL DEFAULT '',
			can_work_in_usa TEXT NOT NULL DEFAULT '',
			learning_track TEXT NOT NULL DEFAULT '',
			tech_experience TEXT NOT NULL DEFAULT '',
			hours_per_week TEXT NOT NULL DEFAULT '',
			referral TEXT NOT NULL DEFAULT '',
			referral_other TEXT NOT NULL DEFAULT '',
			city TEXT NOT NULL DEFAULT '',
			state TEXT NOT NULL DEFAULT '',
			professional_experience TEXT NOT NULL DEFAULT '',
			industries TEXT NOT NULL DEFAULT '',
			will_change_job TEXT NOT NULL DEFAULT '',
			will_change_job_role TEXT NOT NULL DEFAULT '',
			open_to_meet TEXT NOT NULL DEFAULT '',
			racial_demographic TEXT NOT NULL DEFAULT '',
			prior_knowledge TEXT NOT NULL DEFAULT '',
			enrolled INTEGER NOT NULL DEFAULT 0,
			created_at TEXT NOT NULL
		)
		"#,
	)
	.execute(pool)
	.await?;

	tracing::debug!("database migrations applied");
	Ok(())
}
