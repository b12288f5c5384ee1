// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc, time::Duration};
use tower_http::trace::TraceLayer;

use crate::application::dashboard_controller::DashboardController;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::disease_repository::DiseaseShRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::router;
use crate::presentation::view::DashboardView;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "covid_dashboard=info,tower_http=info".into()),
        )
        .init();

    // Load configuration
    let config = load_dashboard_config()?;
    let locale = config.display.number_locale()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(DiseaseShRepository::new(
        &config.api.base_url,
        Duration::from_secs(config.api.timeout_secs),
    )?);

    // Render targets and controller (presentation + application layers)
    let view = DashboardView::new();
    let controller = Arc::new(DashboardController::new(
        repository,
        view.render_targets(),
        locale,
        config.display.history_days,
    ));

    // Initial load runs alongside the server; each surface fills in as its fetch lands
    let startup = controller.clone();
    tokio::spawn(async move {
        startup.start().await;
    });

    let state = Arc::new(AppState { controller, view });
    let app = router(state).layer(TraceLayer::new_for_http());

    // Start server
    let addr: SocketAddr = config.server.bind_addr.parse()?;
    tracing::info!("Starting covid-dashboard on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}
