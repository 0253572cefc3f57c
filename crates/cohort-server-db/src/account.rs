// Copyright (c) 2025 Cohort Platform Authors. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Account repository for database operations.
//!
//! The store enforces the two existence invariants the registration workflow
//! relies on: `create_account` never overwrites, `update_account` never
//! inserts. Keys are normalized emails; normalization happens before calls
//! reach this layer, never inside it.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use cohort_server_accounts::Account;
use sqlx::{sqlite::SqlitePool, Row};

use crate::error::DbError;

/// Storage boundary for applicant accounts.
#[async_trait]
pub trait AccountStore: Send + Sync {
	/// Insert a new account. Fails with `DbError::Conflict` if the email is taken.
	async fn create_account(&self, account: &Account) -> Result<Account, DbError>;

	/// Fetch an account by normalized email. Fails with `DbError::NotFound`.
	async fn get_account(&self, email: &str) -> Result<Account, DbError>;

	/// Replace the full record for an existing account.
	///
	/// Fails with `DbError::NotFound` if no account exists for that email.
	/// The caller is responsible for merging fields onto a previously-read
	/// copy; this is a whole-record write.
	async fn update_account(&self, account: &Account) -> Result<Account, DbError>;
}

/// Repository for account database operations.
///
/// One row per account, keyed by email. `created_at` is stored as RFC 3339
/// TEXT; `enrolled` as 0/1.
#[derive(Clone)]
pub struct AccountRepository {
	pool: SqlitePool,
}

impl AccountRepository {
	/// Create a new repository with the given pool.
	///
	/// # Arguments
	/// * `pool` - SQLite connection pool
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	fn row_to_account(&self, row: &sqlx::sqlite::SqliteRow) -> Result<Account, DbError> {
		let created_at: String = row.try_get("created_at")?;
		let created_at = DateTime::parse_from_rfc3339(&created_at)
			.map_err(|e| DbError::Internal(format!("invalid created_at timestamp: {e}")))?
			.with_timezone(&Utc);
		let enrolled: i64 = row.try_get("enrolled")?;

		Ok(Account {
			email: row.try_get("email")?,
			name: row.try_get("name")?,
			first_name: row.try_get("first_name")?,
			last_name: row.try_get("last_name")?,
			linkedin_url: row.try_get("linkedin_url")?,
			location: row.try_get("location")?,
			timezone: row.try_get("timezone")?,
			phone: row.try_get("phone")?,
			photo: row.try_get("photo")?,
			representation: row.try_get("representation")?,
			gender: row.try_get("gender")?,
			age_group: row.try_get("age_group")?,
			employment_status: row.try_get("employment_status")?,
			highest_school: row.try_get("highest_school")?,
			field_of_study: row.try_get("field_of_study")?,
			can_work_in_usa: row.try_get("can_work_in_usa")?,
			learning_track: row.try_get("learning_track")?,
			tech_experience: row.try_get("tech_experience")?,
			hours_per_week: row.try_get("hours_per_week")?,
			referral: row.try_get("referral")?,
			referral_other: row.try_get("referral_other")?,
			city: row.try_get("city")?,
			state: row.try_get("state")?,
			professional_experience: row.try_get("professional_experience")?,
			industries: row.try_get("industries")?,
			will_change_job: row.try_get("will_change_job")?,
			will_change_job_role: row.try_get("will_change_job_role")?,
			open_to_meet: row.try_get("open_to_meet")?,
			racial_demographic: row.try_get("racial_demographic")?,
			prior_knowledge: row.try_get("prior_knowledge")?,
			enrolled: enrolled != 0,
			created_at,
		})
	}
}

#[async_trait]
impl AccountStore for AccountRepository {
	/// Insert a new account.
	///
	/// # Errors
	/// Returns `DbError::Conflict` if an account with that email already
	/// exists; the existing row is left untouched.
	#[tracing::instrument(skip(self, account), fields(email = %account.email))]
	async fn create_account(&self, account: &Account) -> Result<Account, DbError> {
		let result = sqlx::query(
			r#"
			INSERT INTO accounts (
				email, name, first_name, last_name, linkedin_url, location, timezone,
				phone, photo, representation, gender, age_group, employment_status,
				highest_school, field_of_study, can_work_in_usa, learning_track,
				tech_experience, hours_per_week, referral, referral_other, city, state,
				professional_experience, industries, will_change_job, will_change_job_role,
				open_to_meet, racial_demographic, prior_knowledge, enrolled, created_at
			)
			VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
			"#,
		)
		.bind(&account.email)
		.bind(&account.name)
		.bind(&account.first_name)
		.bind(&account.last_name)
		.bind(&account.linkedin_url)
		.bind(&account.location)
		.bind(&account.timezone)
		.bind(&account.phone)
		.bind(&account.photo)
		.bind(&account.representation)
		.bind(&account.gender)
		.bind(&account.age_group)
		.bind(&account.employment_status)
		.bind(&account.highest_school)
		.bind(&account.field_of_study)
		.bind(&account.can_work_in_usa)
		.bind(&account.learning_track)
		.bind(&account.tech_experience)
		.bind(&account.hours_per_week)
		.bind(&account.referral)
		.bind(&account.referral_other)
		.bind(&account.city)
		.bind(&account.state)
		.bind(&account.professional_experience)
		.bind(&account.industries)
		.bind(&account.will_change_job)
		.bind(&account.will_change_job_role)
		.bind(&account.open_to_meet)
		.bind(&account.racial_demographic)
		.bind(&account.prior_knowledge)
		.bind(account.enrolled as i32)
		.bind(account.created_at.to_rfc3339())
		.execute(&self.pool)
		.await;

		match result {
			Ok(_) => {
				tracing::debug!(email = %account.email, "account created");
				Ok(account.clone())
			}
			Err(e) => {
				if e
					.as_database_error()
					.is_some_and(|d| d.is_unique_violation())
				{
					return Err(DbError::Conflict(format!(
						"Account with email {} already exists",
						account.email
					)));
				}
				Err(e.into())
			}
		}
	}

	/// Get an account by email.
	///
	/// # Errors
	/// Returns `DbError::NotFound` if no account exists for that email.
	#[tracing::instrument(skip(self))]
	async fn get_account(&self, email: &str) -> Result<Account, DbError> {
		let row = sqlx::query("SELECT * FROM accounts WHERE email = ?")
			.bind(email)
			.fetch_optional(&self.pool)
			.await?;

		match row {
			Some(row) => self.row_to_account(&row),
			None => Err(DbError::NotFound(format!(
				"Account with email {email} does not exist"
			))),
		}
	}

	/// Replace the full record for an existing account.
	///
	/// # Errors
	/// Returns `DbError::NotFound` if no account exists for that email.
	#[tracing::instrument(skip(self, account), fields(email = %account.email))]
	async fn update_account(&self, account: &Account) -> Result<Account, DbError> {
		let result = sqlx::query(
			r#"
			UPDATE accounts SET
				name = ?, first_name = ?, last_name = ?, linkedin_url = ?, location = ?,
				timezone = ?, phone = ?, photo = ?, representation = ?, gender = ?,
				age_group = ?, employment_status = ?, highest_school = ?, field_of_study = ?,
				can_work_in_usa = ?, learning_track = ?, tech_experience = ?, hours_per_week = ?,
				referral = ?, referral_other = ?, city = ?, state = ?,
				professional_experience = ?, industries = ?, will_change_job = ?,
				will_change_job_role = ?, open_to_meet = ?, racial_demographic = ?,
				prior_knowledge = ?, enrolled = ?, created_at = ?
			WHERE email = ?
			"#,
		)
		.bind(&account.name)
		.bind(&account.first_name)
		.bind(&account.last_name)
		.bind(&account.linkedin_url)
		.bind(&account.location)
		.bind(&account.timezone)
		.bind(&account.phone)
		.bind(&account.photo)
		.bind(&account.representation)
		.bind(&account.gender)
		.bind(&account.age_group)
		.bind(&account.employment_status)
		.bind(&account.highest_school)
		.bind(&account.field_of_study)
		.bind(&account.can_work_in_usa)
		.bind(&account.learning_track)
		.bind(&account.tech_experience)
		.bind(&account.hours_per_week)
		.bind(&account.referral)
		.bind(&account.referral_other)
		.bind(&account.city)
		.bind(&account.state)
		.bind(&account.professional_experience)
		.bind(&account.industries)
		.bind(&account.will_change_job)
		.bind(&account.will_change_job_role)
		.bind(&account.open_to_meet)
		.bind(&account.racial_demographic)
		.bind(&account.prior_knowledge)
		.bind(account.enrolled as i32)
		.bind(account.created_at.to_rfc3339())
		.bind(&account.email)
		.execute(&self.pool)
		.await?;

		if result.rows_affected() == 0 {
			return Err(DbError::NotFound(format!(
				"Account with email {} does not exist",
				account.email
			)));
		}

		tracing::debug!(email = %account.email, "account updated");
		Ok(account.clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::setup_test_repository;

	fn sample_account(email: &str) -> Account {
		Account {
			email: email.to_string(),
			name: "Jane Doe".to_string(),
			first_name: "Jane".to_string(),
			last_name: "Doe".to_string(),
			linkedin_url: "https://www.linkedin.com/in/jane-doe".to_string(),
			location: "Austin, Texas".to_string(),
			phone: "+1 555 0100".to_string(),
			photo: "https://media.example.com/jane.jpg".to_string(),
			created_at: Utc::now(),
			..Account::default()
		}
	}

	#[tokio::test]
	async fn create_and_get_roundtrip() {
		let repo = setup_test_repository().await;
		let account = sample_account("jane@example.com");

		repo.create_account(&account).await.unwrap();
		let fetched = repo.get_account("jane@example.com").await.unwrap();

		assert_eq!(fetched.email, account.email);
		assert_eq!(fetched.name, "Jane Doe");
		assert_eq!(fetched.phone, "+1 555 0100");
		assert!(!fetched.enrolled);
		assert_eq!(
			fetched.created_at.timestamp(),
			account.created_at.timestamp()
		);
	}

	#[tokio::test]
	async fn create_duplicate_is_conflict() {
		let repo = setup_test_repository().await;
		let account = sample_account("jane@example.com");

		repo.create_account(&account).await.unwrap();
		let err = repo.create_account(&account).await.unwrap_err();

		assert!(matches!(err, DbError::Conflict(_)));
		assert!(err.to_string().contains("jane@example.com"));
	}

	#[tokio::test]
	async fn duplicate_create_does_not_overwrite() {
		let repo = setup_test_repository().await;
		let original = sample_account("jane@example.com");
		repo.create_account(&original).await.unwrap();

		let clobber = Account {
			name: "Someone Else".to_string(),
			..original.clone()
		};
		repo.create_account(&clobber).await.unwrap_err();

		let fetched = repo.get_account("jane@example.com").await.unwrap();
		assert_eq!(fetched.name, "Jane Doe");
	}

	#[tokio::test]
	async fn get_unknown_email_is_not_found() {
		let repo = setup_test_repository().await;
		let err = repo.get_account("ghost@example.com").await.unwrap_err();
		assert!(matches!(err, DbError::NotFound(_)));
	}

	#[tokio::test]
	async fn update_unknown_email_is_not_found() {
		let repo = setup_test_repository().await;
		let err = repo
			.update_account(&sample_account("ghost@example.com"))
			.await
			.unwrap_err();
		assert!(matches!(err, DbError::NotFound(_)));
	}

	#[tokio::test]
	async fn update_replaces_full_record() {
		let repo = setup_test_repository().await;
		let account = sample_account("jane@example.com");
		repo.create_account(&account).await.unwrap();

		let updated = Account {
			gender: "female".to_string(),
			city: "Austin".to_string(),
			// An update with an empty field clears it; the store never merges.
			phone: String::new(),
			enrolled: true,
			..account.clone()
		};
		repo.update_account(&updated).await.unwrap();

		let fetched = repo.get_account("jane@example.com").await.unwrap();
		assert_eq!(fetched.gender, "female");
		assert_eq!(fetched.city, "Austin");
		assert_eq!(fetched.phone, "");
		assert!(fetched.enrolled);
	}

	#[tokio::test]
	async fn distinct_keys_do_not_interfere() {
		let repo = setup_test_repository().await;
		repo.create_account(&sample_account("jane@example.com"))
			.await
			.unwrap();
		repo.create_account(&sample_account("john@example.com"))
			.await
			.unwrap();

		let jane = repo.get_account("jane@example.com").await.unwrap();
		let john = repo.get_account("john@example.com").await.unwrap();
		assert_ne!(jane.email, john.email);
	}
}
