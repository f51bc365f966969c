use super::media::{request_camera, BrowserTracks};
use crate::layout::app_services::AppServices;
use contracts::usecases::u503_consult_assistant::{ConsultationSession, MediaTracks};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct VideoCallVm {
    pub session: RwSignal<ConsultationSession>,
    pub draft: RwSignal<String>,
    /// Replies scheduled but not yet delivered
    pub pending_replies: RwSignal<u32>,
    pub video_ref: NodeRef<leptos::html::Video>,
    tracks: StoredValue<BrowserTracks, LocalStorage>,
}

impl VideoCallVm {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(ConsultationSession::new()),
            draft: RwSignal::new(String::new()),
            pending_replies: RwSignal::new(0),
            video_ref: NodeRef::new(),
            tracks: StoredValue::new_local(BrowserTracks::default()),
        }
    }

    pub fn start_call(&self) {
        self.session.update(|s| s.start());
        log::info!("call started");

        let this = *self;
        spawn_local(async move {
            match request_camera().await {
                Ok(stream) => {
                    let still_active = this
                        .session
                        .try_with_untracked(|s| s.call_active())
                        .unwrap_or(false);
                    if !still_active {
                        // Call ended while the permission prompt was open
                        let mut late = BrowserTracks::default();
                        late.attach(stream);
                        late.stop_all();
                        return;
                    }
                    if let Some(video) = this.video_ref.get_untracked() {
                        video.set_src_object(Some(&stream));
                    }
                    this.tracks.update_value(|t| {
                        t.attach(stream);
                        this.session.with_untracked(|s| s.apply_to(t));
                    });
                }
                Err(e) => log::warn!("{}", e),
            }
        });
    }

    pub fn end_call(&self) {
        let tracks = self.tracks;
        self.session.update(|s| tracks.update_value(|t| s.end(t)));
        if let Some(video) = self.video_ref.get_untracked() {
            video.set_src_object(None);
        }
        log::info!("call ended");
    }

    /// Stops the camera when the page goes away mid-call
    pub fn release(&self) {
        let _ = self.tracks.try_update_value(|t| t.stop_all());
    }

    pub fn toggle_mute(&self) {
        let tracks = self.tracks;
        self.session.update(|s| {
            s.toggle_mute();
            tracks.update_value(|t| s.apply_to(t));
        });
    }

    pub fn toggle_video(&self) {
        let tracks = self.tracks;
        self.session.update(|s| {
            s.toggle_video();
            tracks.update_value(|t| s.apply_to(t));
        });
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.pending_replies.get() > 0
    }

    fn reply_scheduled(&self) {
        self.pending_replies.update(|n| *n += 1);
    }

    fn reply_delivered(&self) {
        let _ = self.pending_replies.try_update(|n| *n = n.saturating_sub(1));
    }

    /// Appends the draft and schedules the assistant's reply
    pub fn send(&self, services: &AppServices) {
        let text = self.draft.get_untracked();
        let Some(message) = self.session.try_update(|s| s.send(&text)).flatten() else {
            return;
        };
        self.draft.set(String::new());
        self.reply_scheduled();

        let this = *self;
        let session = self.session;
        let responder = services.responder.clone();
        let delay_ms = services.config.consultation.reply_delay_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            session.try_update(|s| s.reply(responder.as_ref(), &message.text));
            this.reply_delivered();
        });
    }

    pub fn save_for_lawyer(&self, services: &AppServices, question: &str) {
        if let Some(true) = self.session.try_update(|s| s.save_question(question)) {
            services
                .toasts
                .show("Question saved", "Your lawyer will see it in the saved list.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_indicator_waits_for_every_reply() {
        let vm = VideoCallVm::new();
        assert!(!vm.is_awaiting_reply());

        vm.reply_scheduled();
        vm.reply_scheduled();
        vm.reply_delivered();
        assert!(vm.is_awaiting_reply());

        vm.reply_delivered();
        assert!(!vm.is_awaiting_reply());

        vm.reply_delivered();
        assert_eq!(vm.pending_replies.get(), 0);
    }
}
