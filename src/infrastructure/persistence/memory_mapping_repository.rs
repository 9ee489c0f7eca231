//! In-process implementation of the mapping repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::{MappingRepository, StoreError};

#[derive(Default)]
struct Tables {
    by_code: HashMap<String, Mapping>,
    code_by_url: HashMap<String, String>,
}

/// Mapping store held in memory.
///
/// Enforces the same two uniqueness constraints as the PostgreSQL table:
/// an insert checks and writes both indexes under one write lock, so it is
/// atomic with respect to every other call. Data does not survive a restart.
#[derive(Default)]
pub struct InMemoryMappingRepository {
    tables: RwLock<Tables>,
}

impl InMemoryMappingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored mappings.
    pub async fn len(&self) -> usize {
        self.tables.read().await.by_code.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl MappingRepository for InMemoryMappingRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<Mapping>, StoreError> {
        Ok(self.tables.read().await.by_code.get(code).cloned())
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<Mapping>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .code_by_url
            .get(url)
            .and_then(|code| tables.by_code.get(code))
            .cloned())
    }

    async fn insert(&self, new_mapping: NewMapping) -> Result<Mapping, StoreError> {
        let mut tables = self.tables.write().await;

        // Same precedence as the primary key being checked first.
        if tables.by_code.contains_key(&new_mapping.code) {
            return Err(StoreError::CodeTaken);
        }
        if tables.code_by_url.contains_key(&new_mapping.url) {
            return Err(StoreError::UrlTaken);
        }

        let mapping = Mapping::new(new_mapping.code, new_mapping.url, Utc::now());
        tables
            .code_by_url
            .insert(mapping.url.clone(), mapping.code.clone());
        tables.by_code.insert(mapping.code.clone(), mapping.clone());

        Ok(mapping)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
