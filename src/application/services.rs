use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::{
    application::ports::{DetectionApiPort, NotifierPort},
    domain::{
        dashboard::Dashboard,
        detection::summarize_detections,
        errors::{DomainError, DomainResult},
        flow::FlowState,
        media::{MediaFile, Modality},
        model::{HealthStatus, ModelPanel},
    },
};

/// Caso de uso principal: conecta los eventos de la UI (selección, drop, disparo)
/// con el backend de inferencia y mantiene el estado del dashboard.
///
/// El mutex nunca se mantiene durante un `.await`: un flujo bloquea para pasar a
/// `Submitting`, suelta el lock mientras espera al backend y vuelve a bloquear
/// para aplicar el resultado. Así la otra modalidad sigue operativa.
pub struct DashboardService {
    api: Arc<dyn DetectionApiPort>,
    notifier: Arc<dyn NotifierPort>,
    state: Mutex<Dashboard>,
}

impl DashboardService {
    pub fn new(api: Arc<dyn DetectionApiPort>, notifier: Arc<dyn NotifierPort>) -> Self {
        Self {
            api,
            notifier,
            state: Mutex::new(Dashboard::default()),
        }
    }

    pub fn snapshot(&self) -> Dashboard {
        self.state.lock().clone()
    }

    /// Carga única de la información del modelo; un fallo queda como mensaje en el panel.
    pub async fn load_model_info(&self) -> ModelPanel {
        let panel = match self.api.model_info().await {
            Ok(info) => {
                info!("🧠 Model {} loaded with {} classes", info.model_name, info.num_classes);
                ModelPanel::Loaded(info)
            }
            Err(DomainError::Server { message, .. }) => {
                warn!("Model info request rejected: {}", message);
                ModelPanel::Failed(format!("Failed to load model information: {}", message))
            }
            Err(e) => {
                warn!("Model info request failed: {}", e);
                ModelPanel::Failed(e.alert_text())
            }
        };
        self.state.lock().model = panel.clone();
        panel
    }

    pub fn select_file(&self, modality: Modality, file: MediaFile) {
        info!("📎 Selected {} file {:?}", modality, file);
        self.state.lock().area_mut(modality).select(file);
    }

    /// Devuelve si el drop fue aceptado. Los rechazos no generan alerta.
    pub fn drop_files(&self, modality: Modality, files: Vec<MediaFile>) -> bool {
        let first = files.first().map(|f| (f.name.clone(), f.mime.clone()));
        let accepted = self.state.lock().area_mut(modality).drop_files(files);
        match (accepted, first) {
            (true, Some((name, _))) => info!("📎 Dropped {} file {}", modality, name),
            (false, Some((name, mime))) => warn!("Ignoring {} drop of {} ({})", modality, name, mime),
            _ => {}
        }
        accepted
    }

    pub fn drag_enter(&self, modality: Modality) {
        self.state.lock().area_mut(modality).drag_enter();
    }

    pub fn drag_leave(&self, modality: Modality) {
        self.state.lock().area_mut(modality).drag_leave();
    }

    /// Flujo de imagen. Devuelve el estado final del flujo, o el estado sin cambios
    /// si el disparo no hizo nada.
    pub async fn detect_image(&self) -> FlowState {
        let Some(mut in_flight) = InFlight::begin(&self.state, Modality::Image) else {
            return self.state.lock().image.flow.clone();
        };
        info!("🔍 Submitting image {}", in_flight.file.name);

        let outcome = self.api.detect_image(in_flight.file.clone()).await;
        if let Ok(result) = &outcome {
            info!(
                "✅ Image done: {} objects in {:.3}s [{}]",
                result.total_objects,
                result.inference_time,
                summarize_detections(&result.detections)
            );
        }
        let failure = in_flight.settle(|dash| dash.finish_image(outcome));
        self.report(failure);
        self.state.lock().image.flow.clone()
    }

    /// Flujo de vídeo, misma forma que [`Self::detect_image`].
    pub async fn process_video(&self) -> FlowState {
        let Some(mut in_flight) = InFlight::begin(&self.state, Modality::Video) else {
            return self.state.lock().video.flow.clone();
        };
        info!("🎬 Submitting video {}", in_flight.file.name);

        let outcome = self.api.detect_video(in_flight.file.clone()).await;
        if let Ok(result) = &outcome {
            info!(
                "✅ Video done: {}/{} frames processed, {} detections, {:.1} fps",
                result.processed_frames, result.total_frames, result.total_detections, result.fps
            );
        }
        let failure = in_flight.settle(|dash| dash.finish_video(outcome));
        self.report(failure);
        self.state.lock().video.flow.clone()
    }

    pub async fn health(&self) -> DomainResult<HealthStatus> {
        self.api.health().await
    }

    fn report(&self, failure: Option<DomainError>) {
        if let Some(err) = failure {
            error!("❌ Request failed: {}", err);
            self.notifier.alert(&err.alert_text());
        }
    }
}

/// Petición en curso de una modalidad. Si el futuro se descarta antes de
/// `settle` (p. ej. el cliente HTTP cierra la conexión), el control vuelve a `Idle`.
struct InFlight<'a> {
    state: &'a Mutex<Dashboard>,
    modality: Modality,
    file: MediaFile,
    settled: bool,
}

impl<'a> InFlight<'a> {
    fn begin(state: &'a Mutex<Dashboard>, modality: Modality) -> Option<Self> {
        let file = state.lock().begin(modality)?;
        Some(Self { state, modality, file, settled: false })
    }

    fn settle<T>(&mut self, apply: impl FnOnce(&mut Dashboard) -> T) -> T {
        self.settled = true;
        let mut dash = self.state.lock();
        apply(&mut dash)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            warn!("{} request dropped before completion", self.modality);
            self.state.lock().abandon(self.modality);
        }
    }
}
