use crate::layout::app_services::AppServices;
use contracts::domain::a001_uploaded_file::{UploadedFile, UploadedFileId};
use contracts::usecases::u501_simulate_upload::{
    summary_message, validate_file, TickOutcome, UploadQueue, UploadSimulator,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct DocumentUploadVm {
    pub queue: RwSignal<UploadQueue>,
    pub drag_active: RwSignal<bool>,
}

impl DocumentUploadVm {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(UploadQueue::new()),
            drag_active: RwSignal::new(false),
        }
    }

    pub fn file(&self, id: UploadedFileId) -> Option<UploadedFile> {
        self.queue.with(|q| q.get(id).cloned())
    }

    pub fn file_ids(&self) -> Vec<UploadedFileId> {
        self.queue.with(|q| q.files().iter().map(|f| f.id).collect())
    }

    /// Validates each picked file, queues the accepted ones and starts their
    /// simulation. Rejections are toasted one by one, acceptances summarised.
    pub fn add_files(&self, services: &AppServices, picked: Vec<(String, u64)>) {
        let mut accepted = 0;
        for (name, size) in picked {
            if let Err(rejection) = validate_file(&services.config.upload, &name, size) {
                log::warn!("upload rejected: {:?}", rejection);
                services
                    .toasts
                    .error(rejection.title(), rejection.description());
                continue;
            }
            let id = self.queue.try_update(|q| q.enqueue(name, size));
            if let Some(id) = id {
                self.simulate(services.upload.clone(), id);
                accepted += 1;
            }
        }
        if accepted > 0 {
            services
                .toasts
                .show("Files uploaded", summary_message(accepted));
        }
    }

    /// Removing a file ends its timer loop on the next tick
    pub fn remove(&self, id: UploadedFileId) {
        self.queue.update(|q| {
            q.remove(id);
        });
    }

    fn simulate(&self, simulator: UploadSimulator, id: UploadedFileId) {
        let queue = self.queue;
        log::debug!("upload {} started", id);
        spawn_local(async move {
            loop {
                TimeoutFuture::new(simulator.tick_ms).await;
                // None: the page was unmounted and the signal disposed
                let Some(outcome) = queue.try_update(|q| q.tick(&simulator, id)) else {
                    return;
                };
                match outcome {
                    Ok(TickOutcome::Advanced(_)) => continue,
                    Ok(TickOutcome::ReachedProcessing) => {
                        log::debug!("upload {} processing", id);
                        break;
                    }
                    Ok(TickOutcome::Failed(reason)) => {
                        log::warn!("upload {} failed: {}", id, reason);
                        return;
                    }
                    Ok(TickOutcome::Idle) => return,
                    Err(e) => {
                        log::debug!("upload loop stopped: {}", e);
                        return;
                    }
                }
            }

            TimeoutFuture::new(simulator.processing_delay_ms).await;
            if let Some(Ok(true)) = queue.try_update(|q| q.finish(&simulator, id)) {
                log::debug!("upload {} completed", id);
            }
        });
    }
}
