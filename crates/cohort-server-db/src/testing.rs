// Copyright (c) 2025 Cohort Platform Authors. All rights reserved.
// SPDX-License-Identifier: Proprietary

use sqlx::sqlite::SqlitePool;

use crate::account::AccountRepository;
use crate::pool::run_migrations;

pub async fn create_test_pool() -> SqlitePool {
	SqlitePool::connect(":memory:").await.unwrap()
}

pub async fn setup_test_repository() -> AccountRepository {
	let pool = create_test_pool().await;
	run_migrations(&pool).await.unwrap();
	AccountRepository::new(pool)
}
