use super::media::Modality;

/// Estado de envío por modalidad. Determina la etiqueta y habilitación del botón.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FlowState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl FlowState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, FlowState::Submitting)
    }
}

/// Aspecto actual del botón de disparo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlView {
    pub label: &'static str,
    pub enabled: bool,
    pub busy: bool,
}

pub fn idle_label(modality: Modality) -> &'static str {
    match modality {
        Modality::Image => "Detect Objects",
        Modality::Video => "Process Video",
    }
}

pub const BUSY_LABEL: &str = "Processing...";

pub fn control_view(modality: Modality, state: &FlowState, has_selection: bool) -> ControlView {
    if state.is_submitting() {
        ControlView { label: BUSY_LABEL, enabled: false, busy: true }
    } else {
        ControlView { label: idle_label(modality), enabled: has_selection, busy: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_is_disabled_without_selection_or_while_submitting() {
        let idle = control_view(Modality::Image, &FlowState::Idle, false);
        assert_eq!(idle, ControlView { label: "Detect Objects", enabled: false, busy: false });

        let busy = control_view(Modality::Video, &FlowState::Submitting, true);
        assert_eq!(busy, ControlView { label: BUSY_LABEL, enabled: false, busy: true });
    }

    #[test]
    fn terminal_states_restore_idle_label() {
        for state in [FlowState::Succeeded, FlowState::Failed("bad file".into())] {
            let view = control_view(Modality::Video, &state, true);
            assert_eq!(view.label, "Process Video");
            assert!(view.enabled);
        }
    }
}
