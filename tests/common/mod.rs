#![allow(dead_code)]

use async_trait::async_trait;
use linkservice::application::services::LinkService;
use linkservice::domain::entities::{Mapping, NewMapping};
use linkservice::domain::repositories::{MappingRepository, StoreError};
use linkservice::infrastructure::persistence::InMemoryMappingRepository;
use linkservice::state::AppState;
use linkservice::utils::code_generator::CodeGenerator;
use linkservice::utils::validator::Validator;
use sqlx::PgPool;
use std::sync::Arc;

pub fn create_test_state(repository: Arc<dyn MappingRepository>) -> AppState {
    let link_service = LinkService::new(
        repository,
        Arc::new(Validator::new().unwrap()),
        Arc::new(CodeGenerator::seeded(2024)),
    );

    AppState::new(Arc::new(link_service))
}

pub fn create_memory_state() -> (AppState, Arc<InMemoryMappingRepository>) {
    let repository = Arc::new(InMemoryMappingRepository::new());
    (create_test_state(repository.clone()), repository)
}

pub async fn create_test_mapping(pool: &PgPool, code: &str, url: &str) {
    sqlx::query("INSERT INTO links (code, url) VALUES ($1, $2)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

/// Store whose every call fails as if the database were down.
pub struct UnavailableRepository;

#[async_trait]
impl MappingRepository for UnavailableRepository {
    async fn find_by_code(&self, _code: &str) -> Result<Option<Mapping>, StoreError> {
        Err(StoreError::Backend(sqlx::Error::PoolClosed))
    }

    async fn find_by_url(&self, _url: &str) -> Result<Option<Mapping>, StoreError> {
        Err(StoreError::Backend(sqlx::Error::PoolClosed))
    }

    async fn insert(&self, _new_mapping: NewMapping) -> Result<Mapping, StoreError> {
        Err(StoreError::Backend(sqlx::Error::PoolClosed))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Backend(sqlx::Error::PoolClosed))
    }
}
