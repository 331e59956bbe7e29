use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use crate::adapters::backend::client::HttpDetectionApi;
use crate::adapters::fs::{annotated::save_annotated, media_loader::load_media};
use crate::adapters::notify::ConsoleNotifier;
use crate::adapters::view::render_page;
use crate::application::dto::StatsSummary;
use crate::application::ports::{DetectionApiPort, NotifierPort};
use crate::application::services::DashboardService;
use crate::config::{ClientConfig, DEFAULT_BACKEND_URL, DEFAULT_BIND_ADDR, DEFAULT_MAX_UPLOAD_MB};
use crate::domain::errors::DomainResult;
use crate::domain::media::Modality;

#[derive(Parser, Debug)]
#[command(name = "cv-dashboard")]
#[command(about = "Upload images or videos to a YOLO inference API and review the detections")]
pub struct Cli {
    /// URL base del backend de inferencia.
    #[arg(long, env = "CV_BACKEND_URL", default_value = DEFAULT_BACKEND_URL, global = true)]
    pub backend: String,

    /// Timeout por petición en segundos (sin timeout si se omite).
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sirve el dashboard a un navegador.
    Serve {
        #[arg(long, default_value = DEFAULT_BIND_ADDR)]
        bind: String,
        /// Tamaño máximo de una subida, en MiB.
        #[arg(long, default_value_t = DEFAULT_MAX_UPLOAD_MB)]
        max_upload_mb: usize,
    },
    /// Envía los archivos una vez y escribe el dashboard renderizado.
    Run(RunArgs),
    /// Consulta el endpoint de salud del backend.
    Health,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct RunArgs {
    #[arg(long)]
    pub image: Option<PathBuf>,
    #[arg(long)]
    pub video: Option<PathBuf>,
    /// Dónde escribir la página; stdout si se omite.
    #[arg(long)]
    pub html: Option<PathBuf>,
    /// Guarda la imagen anotada devuelta para `--image`.
    #[arg(long)]
    pub save_annotated: Option<PathBuf>,
}

impl Cli {
    pub fn config(&self) -> ClientConfig {
        let cfg = ClientConfig::new(self.backend.clone(), self.timeout_secs);
        match &self.command {
            Command::Serve { bind, max_upload_mb } => {
                cfg.with_bind_addr(bind.clone()).with_max_upload_mb(*max_upload_mb)
            }
            _ => cfg,
        }
    }
}

pub struct BatchReport {
    pub page: String,
    pub stats: StatsSummary,
}

/// Versión por lotes del dashboard: cada ruta se suelta en su área de subida
/// (MIME según la extensión) y ambos flujos corren a la vez.
pub async fn run_batch(svc: &DashboardService, args: &RunArgs) -> DomainResult<BatchReport> {
    svc.load_model_info().await;

    for (modality, path) in [(Modality::Image, &args.image), (Modality::Video, &args.video)] {
        let Some(path) = path else { continue };
        let file = load_media(path).await?;
        if !svc.drop_files(modality, vec![file]) {
            warn!("{} does not look like a {} file, skipping", path.display(), modality);
        }
    }

    let (image_state, video_state) = tokio::join!(svc.detect_image(), svc.process_video());
    info!("Flows finished: image={:?} video={:?}", image_state, video_state);

    let dash = svc.snapshot();
    if let (Some(out), Some(result)) = (&args.save_annotated, &dash.image.last_result) {
        save_annotated(&result.annotated_image, out).await?;
    }

    Ok(BatchReport {
        page: render_page(&dash, &[]),
        stats: StatsSummary::from(&dash.stats),
    })
}

pub fn build_service(config: &ClientConfig) -> DomainResult<DashboardService> {
    let api: Arc<dyn DetectionApiPort> = Arc::new(HttpDetectionApi::new(config.clone())?);
    let notifier: Arc<dyn NotifierPort> = Arc::new(ConsoleNotifier);
    Ok(DashboardService::new(api, notifier))
}
