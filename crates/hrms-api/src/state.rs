use std::sync::Arc;
use tokio::sync::RwLock;

use hrms_core::services::TenantService;
use hrms_infrastructure::memory::InMemoryTenantRepository;
use hrms_infrastructure::HrStore;
use hrms_shared::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<HrStore>>,
    pub tenants: Arc<TenantService<InMemoryTenantRepository>>,
    pub config: AppConfig,
}
