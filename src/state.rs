use std::sync::Arc;

use crate::application::services::{AuthService, LinkResolutionService};
use crate::domain::repositories::RecordRepository;
use crate::domain::tabs::TabRegistry;

/// Shared application state injected into handlers.
///
/// Everything in here is read-only after startup; concurrent requests share
/// it without coordination.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkResolutionService>,
    pub auth_service: Arc<AuthService>,
    pub tabs: Arc<TabRegistry>,
    pub record_repository: Arc<dyn RecordRepository>,
}
