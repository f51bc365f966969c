//! Services shared by every page, built once at startup.
//!
//! `App` constructs `AppServices`, provides it through context and disposes
//! it on cleanup. Pages reach it with [`use_services`].

use std::sync::Arc;

use contracts::shared::config::DemoConfig;
use contracts::usecases::u501_simulate_upload::UploadSimulator;
use contracts::usecases::u502_translate_document::{CannedTranslator, TranslationProvider};
use contracts::usecases::u503_consult_assistant::{ResponseProvider, ScriptedResponder};
use leptos::prelude::*;

use super::toast_service::ToastService;

/// Overrides shipped next to `index.html`
const DEMO_TOML: &str = include_str!("../../demo.toml");

#[derive(Clone)]
pub struct AppServices {
    pub config: Arc<DemoConfig>,
    pub toasts: ToastService,
    pub upload: UploadSimulator,
    pub responder: Arc<dyn ResponseProvider>,
    pub translator: Arc<dyn TranslationProvider>,
}

impl AppServices {
    pub fn new(config: DemoConfig) -> Self {
        let toasts = ToastService::new(config.toast.dismiss_ms);
        let upload = UploadSimulator::from_config(&config.upload);
        let responder = Arc::new(ScriptedResponder::new(
            config.consultation.reference_probability,
        ));
        log::info!(
            "services ready: upload tick {}ms step {} failure rate {}",
            upload.tick_ms,
            upload.step,
            config.upload.failure_rate
        );
        Self {
            config: Arc::new(config),
            toasts,
            upload,
            responder,
            translator: Arc::new(CannedTranslator),
        }
    }

    /// Parses the bundled `demo.toml`, falling back to the embedded defaults
    pub fn load() -> Self {
        Self::new(load_config())
    }

    pub fn dispose(&self) {
        self.toasts.clear();
        log::info!("services disposed");
    }
}

fn load_config() -> DemoConfig {
    match DemoConfig::from_toml_str(DEMO_TOML) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("demo.toml rejected, using defaults: {:#}", e);
            DemoConfig::embedded_default().unwrap_or_else(|e| {
                log::warn!("embedded config rejected: {:#}", e);
                DemoConfig::default()
            })
        }
    }
}

pub fn use_services() -> AppServices {
    use_context::<AppServices>().expect("AppServices context not found")
}
