//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::MappingRepository;

/// Link service over whichever store the process was started with.
pub type DynLinkService = LinkService<dyn MappingRepository>;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<DynLinkService>,
}

impl AppState {
    pub fn new(link_service: Arc<DynLinkService>) -> Self {
        Self { link_service }
    }
}
