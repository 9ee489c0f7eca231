//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::{MappingRepository, StoreError};
use crate::utils::db_error::classify_insert_error;

/// PostgreSQL repository for the `links` table.
///
/// The insert relies on the table's primary key and unique URL constraint
/// for atomicity; concurrent inserts of the same code or URL are serialized
/// by the database and all but one fail with a unique violation.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<Mapping>, StoreError> {
        let mapping = sqlx::query_as::<_, Mapping>(
            r#"
            SELECT code, url, created_at
            FROM links
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<Mapping>, StoreError> {
        let mapping = sqlx::query_as::<_, Mapping>(
            r#"
            SELECT code, url, created_at
            FROM links
            WHERE url = $1
            "#,
        )
        .bind(url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn insert(&self, new_mapping: NewMapping) -> Result<Mapping, StoreError> {
        sqlx::query_as::<_, Mapping>(
            r#"
            INSERT INTO links (code, url)
            VALUES ($1, $2)
            RETURNING code, url, created_at
            "#,
        )
        .bind(&new_mapping.code)
        .bind(&new_mapping.url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(classify_insert_error)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
