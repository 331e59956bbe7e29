pub mod routes;
pub mod state;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::adapters::backend::client::HttpDetectionApi;
use crate::adapters::http::state::HttpState;
use crate::adapters::notify::BannerNotifier;
use crate::application::services::DashboardService;
use crate::config::ClientConfig;

pub fn router(state: HttpState) -> Router {
    let upload = post(routes::upload).layer(DefaultBodyLimit::max(state.max_upload_bytes));
    Router::new()
        .route("/", get(routes::index))
        .route("/upload/:modality", upload)
        .route("/detect", post(routes::detect))
        .route("/process_video", post(routes::process_video))
        .route("/healthz", get(routes::healthz))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
}

/// Arranca el front-end: carga la info del modelo una vez y sirve el dashboard.
pub async fn serve(config: ClientConfig) -> anyhow::Result<()> {
    let api = Arc::new(HttpDetectionApi::new(config.clone())?);
    let banner = Arc::new(BannerNotifier::new());
    let dashboard = Arc::new(DashboardService::new(api, banner.clone()));

    tracing::info!("🔗 Backend de inferencia: {}", config.backend_url);
    tracing::info!("📦 Subidas de hasta {} MiB", config.max_upload_bytes / 1024 / 1024);
    dashboard.load_model_info().await;

    let app = router(HttpState { dashboard, banner, max_upload_bytes: config.max_upload_bytes });

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("🚀 Dashboard iniciado en http://{}", listener.local_addr()?);
    tracing::info!("📂 Archivos estáticos servidos desde la carpeta './static'");
    axum::serve(listener, app).await?;

    Ok(())
}
