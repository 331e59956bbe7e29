use super::detection::{DetectionResult, VideoResult};
use super::errors::DomainError;
use super::flow::{control_view, ControlView, FlowState};
use super::media::{MediaFile, Modality, UploadArea};
use super::model::ModelPanel;
use super::session::SessionStats;

/// Área de subida, estado del flujo y último resultado de una modalidad.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalityPanel<R> {
    pub area: UploadArea,
    pub flow: FlowState,
    pub last_result: Option<R>,
}

impl<R> ModalityPanel<R> {
    fn new(modality: Modality) -> Self {
        Self { area: UploadArea::new(modality), flow: FlowState::Idle, last_result: None }
    }

    pub fn control(&self) -> ControlView {
        control_view(self.area.modality, &self.flow, self.area.has_selection())
    }

    /// Pasa a `Submitting` y devuelve el archivo a enviar, o `None` si el control
    /// está deshabilitado (sin selección, o con una petición ya en curso).
    fn begin(&mut self) -> Option<MediaFile> {
        if self.flow.is_submitting() {
            return None;
        }
        let file = self.area.selected.clone()?;
        self.flow = FlowState::Submitting;
        Some(file)
    }

    fn fail(&mut self, err: &DomainError) {
        self.flow = FlowState::Failed(err.to_string());
    }
}

/// Todo el estado visible del dashboard. Las vistas son una proyección de este valor.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub model: ModelPanel,
    pub image: ModalityPanel<DetectionResult>,
    pub video: ModalityPanel<VideoResult>,
    pub stats: SessionStats,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self {
            model: ModelPanel::Loading,
            image: ModalityPanel::new(Modality::Image),
            video: ModalityPanel::new(Modality::Video),
            stats: SessionStats::default(),
        }
    }
}

impl Dashboard {
    pub fn area_mut(&mut self, modality: Modality) -> &mut UploadArea {
        match modality {
            Modality::Image => &mut self.image.area,
            Modality::Video => &mut self.video.area,
        }
    }

    pub fn flow(&self, modality: Modality) -> &FlowState {
        match modality {
            Modality::Image => &self.image.flow,
            Modality::Video => &self.video.flow,
        }
    }

    pub fn begin(&mut self, modality: Modality) -> Option<MediaFile> {
        match modality {
            Modality::Image => self.image.begin(),
            Modality::Video => self.video.begin(),
        }
    }

    /// Descarta una petición en curso que nunca terminó, para que el control vuelva a estar usable.
    pub fn abandon(&mut self, modality: Modality) {
        let flow = match modality {
            Modality::Image => &mut self.image.flow,
            Modality::Video => &mut self.video.flow,
        };
        if flow.is_submitting() {
            *flow = FlowState::Idle;
        }
    }

    pub fn finish_image(&mut self, outcome: Result<DetectionResult, DomainError>) -> Option<DomainError> {
        match outcome {
            Ok(result) => {
                self.stats = std::mem::take(&mut self.stats).with_image(&result);
                self.image.last_result = Some(result);
                self.image.flow = FlowState::Succeeded;
                None
            }
            Err(err) => {
                self.image.fail(&err);
                Some(err)
            }
        }
    }

    pub fn finish_video(&mut self, outcome: Result<VideoResult, DomainError>) -> Option<DomainError> {
        match outcome {
            Ok(result) => {
                self.stats = std::mem::take(&mut self.stats).with_video(&result);
                self.video.last_result = Some(result);
                self.video.flow = FlowState::Succeeded;
                None
            }
            Err(err) => {
                self.video.fail(&err);
                Some(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jpeg(name: &str) -> MediaFile {
        MediaFile::new(name, "image/jpeg", vec![1, 2, 3])
    }

    #[test]
    fn begin_requires_selection_and_blocks_reentry() {
        let mut dash = Dashboard::default();
        assert!(dash.begin(Modality::Image).is_none());
        assert_eq!(dash.image.flow, FlowState::Idle);

        dash.area_mut(Modality::Image).select(jpeg("cat.jpg"));
        assert_eq!(dash.begin(Modality::Image).unwrap().name, "cat.jpg");
        assert!(dash.begin(Modality::Image).is_none());
        assert!(!dash.image.control().enabled);

        // la otra modalidad no se ve afectada
        assert_eq!(*dash.flow(Modality::Video), FlowState::Idle);
    }

    #[test]
    fn failure_leaves_results_and_stats_untouched() {
        let mut dash = Dashboard::default();
        dash.area_mut(Modality::Image).select(jpeg("cat.jpg"));
        dash.begin(Modality::Image);

        let err = dash.finish_image(Err(DomainError::Server { status: 400, message: "bad file".into() }));
        assert!(err.is_some());
        assert!(dash.image.last_result.is_none());
        assert_eq!(dash.stats, SessionStats::default());
        assert_eq!(dash.image.flow, FlowState::Failed("bad file".into()));
        assert!(dash.image.control().enabled);
    }

    #[test]
    fn abandon_only_resets_in_flight_requests() {
        let mut dash = Dashboard::default();
        dash.area_mut(Modality::Image).select(jpeg("cat.jpg"));
        dash.begin(Modality::Image);
        dash.abandon(Modality::Image);
        assert_eq!(dash.image.flow, FlowState::Idle);

        dash.video.flow = FlowState::Succeeded;
        dash.abandon(Modality::Video);
        assert_eq!(dash.video.flow, FlowState::Succeeded);
    }
}
