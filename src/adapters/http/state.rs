use std::sync::Arc;
use crate::adapters::notify::BannerNotifier;
use crate::application::services::DashboardService;

/// Estado compartido para los manejadores HTTP de Axum.
#[derive(Clone)]
pub struct HttpState {
    /// Caso de uso del dashboard (subidas, flujos, estadísticas).
    pub dashboard: Arc<DashboardService>,
    /// Alertas pendientes; el mismo notificador que recibe el servicio.
    pub banner: Arc<BannerNotifier>,
    /// Límite del cuerpo multipart de las subidas, en bytes.
    pub max_upload_bytes: usize,
}
