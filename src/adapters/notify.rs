use parking_lot::Mutex;
use tracing::warn;

use crate::application::ports::NotifierPort;

/// Alerta para la CLI: va a stderr para no mezclarse con la página en stdout.
pub struct ConsoleNotifier;

impl NotifierPort for ConsoleNotifier {
    fn alert(&self, message: &str) {
        eprintln!("⚠️  {}", message);
    }
}

/// Alerta para el front-end web: se encola y se muestra una vez en el siguiente render.
#[derive(Default)]
pub struct BannerNotifier {
    pending: Mutex<Vec<String>>,
}

impl BannerNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.pending.lock())
    }
}

impl NotifierPort for BannerNotifier {
    fn alert(&self, message: &str) {
        warn!("🔔 {}", message);
        self.pending.lock().push(message.to_string());
    }
}
