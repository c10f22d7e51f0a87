use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use hrms_api::{api_router, AppState};
use hrms_core::services::TenantService;
use hrms_infrastructure::memory::InMemoryTenantRepository;
use hrms_infrastructure::HrStore;
use hrms_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    hrms_shared::telemetry::init_telemetry();

    info!("HRMS Server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Seed the demo dataset and tenant directory
    let store = HrStore::seeded().map_err(|e| anyhow::anyhow!("seed failed: {e}"))?;
    let tenant_repo = InMemoryTenantRepository::seeded()
        .map_err(|e| anyhow::anyhow!("tenant seed failed: {e}"))?;
    let tenants =
        TenantService::new(Arc::new(tenant_repo), config.tenant.default_domain.clone());
    info!("Seeded demo dataset ({} audit entries)", store.audit_logs().len());

    // Create App State
    let state = AppState {
        store: Arc::new(RwLock::new(store)),
        tenants: Arc::new(tenants),
        config: config.clone(),
    };

    // Build router
    let app = api_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::PUT,
                    axum::http::Method::DELETE,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([axum::http::header::CONTENT_TYPE]),
        );

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
