use crate::domain::a005_chat_message::{ChatMessage, ChatTranscript};

use super::media::MediaTracks;
use super::responder::ResponseProvider;

/// State of the video-call page
#[derive(Debug, Clone)]
pub struct ConsultationSession {
    call_active: bool,
    muted: bool,
    video_on: bool,
    transcript: ChatTranscript,
    saved_questions: Vec<String>,
}

impl Default for ConsultationSession {
    fn default() -> Self {
        Self {
            call_active: false,
            muted: false,
            video_on: true,
            transcript: ChatTranscript::with_greeting(),
            saved_questions: Vec::new(),
        }
    }
}

impl ConsultationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_active(&self) -> bool {
        self.call_active
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    pub fn video_on(&self) -> bool {
        self.video_on
    }

    pub fn transcript(&self) -> &ChatTranscript {
        &self.transcript
    }

    pub fn saved_questions(&self) -> &[String] {
        &self.saved_questions
    }

    pub fn start(&mut self) {
        self.call_active = true;
    }

    /// Clears the active flag and stops every acquired track
    pub fn end(&mut self, tracks: &mut impl MediaTracks) {
        self.call_active = false;
        tracks.stop_all();
    }

    /// Returns the new muted state
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Returns the new video state
    pub fn toggle_video(&mut self) -> bool {
        self.video_on = !self.video_on;
        self.video_on
    }

    /// Pushes the mute/video flags down to live tracks
    pub fn apply_to(&self, tracks: &mut impl MediaTracks) {
        tracks.set_audio_enabled(!self.muted);
        tracks.set_video_enabled(self.video_on);
    }

    /// Appends the user's message; blank input is ignored
    pub fn send(&mut self, text: &str) -> Option<ChatMessage> {
        if text.trim().is_empty() {
            return None;
        }
        let message = ChatMessage::user(text);
        self.transcript.push(message.clone());
        Some(message)
    }

    /// Appends the assistant's answer to `input`
    pub fn reply(&mut self, provider: &dyn ResponseProvider, input: &str) -> ChatMessage {
        let message = ChatMessage::assistant(provider.respond(input), provider.reference_for(input));
        self.transcript.push(message.clone());
        message
    }

    /// Keeps a question for a human lawyer. Blank or already saved questions
    /// are ignored; returns whether it was added.
    pub fn save_question(&mut self, question: &str) -> bool {
        let question = question.trim();
        if question.is_empty() || self.saved_questions.iter().any(|q| q == question) {
            return false;
        }
        self.saved_questions.push(question.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_chat_message::Sender;
    use crate::usecases::u503_consult_assistant::{ScriptedResponder, NON_COMPETE_REFERENCE};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Default)]
    struct FakeTracks {
        stopped: Vec<bool>,
        audio: bool,
        video: bool,
    }

    impl FakeTracks {
        fn acquired(count: usize) -> Self {
            Self {
                stopped: vec![false; count],
                audio: true,
                video: true,
            }
        }
    }

    impl MediaTracks for FakeTracks {
        fn stop_all(&mut self) {
            self.stopped.iter_mut().for_each(|s| *s = true);
        }

        fn set_audio_enabled(&mut self, enabled: bool) {
            self.audio = enabled;
        }

        fn set_video_enabled(&mut self, enabled: bool) {
            self.video = enabled;
        }
    }

    #[test]
    fn test_end_stops_every_track() {
        let mut session = ConsultationSession::new();
        session.start();
        assert!(session.call_active());
        let mut tracks = FakeTracks::acquired(2);
        session.end(&mut tracks);
        assert!(!session.call_active());
        assert!(tracks.stopped.iter().all(|s| *s));
    }

    #[test]
    fn test_end_without_tracks() {
        let mut session = ConsultationSession::new();
        session.start();
        session.end(&mut ());
        assert!(!session.call_active());
    }

    #[test]
    fn test_toggles_reach_tracks() {
        let mut session = ConsultationSession::new();
        let mut tracks = FakeTracks::acquired(2);
        assert!(session.toggle_mute());
        assert!(!session.toggle_video());
        session.apply_to(&mut tracks);
        assert!(!tracks.audio);
        assert!(!tracks.video);
        session.toggle_mute();
        session.apply_to(&mut tracks);
        assert!(tracks.audio);
    }

    #[test]
    fn test_blank_messages_ignored() {
        let mut session = ConsultationSession::new();
        assert!(session.send("   ").is_none());
        assert_eq!(session.transcript().len(), 1);
    }

    #[test]
    fn test_send_and_reply() {
        let mut session = ConsultationSession::new();
        let responder = ScriptedResponder::with_rng(1.0, StdRng::seed_from_u64(5));
        let sent = session.send("Can I freelance?").unwrap();
        assert_eq!(sent.sender, Sender::User);
        let reply = session.reply(&responder, &sent.text);
        assert_eq!(reply.sender, Sender::Assistant);
        assert_eq!(reply.document_ref.as_deref(), Some(NON_COMPETE_REFERENCE));
        let senders: Vec<_> = session
            .transcript()
            .messages()
            .iter()
            .map(|m| m.sender)
            .collect();
        assert_eq!(senders, vec![Sender::Assistant, Sender::User, Sender::Assistant]);
    }

    #[test]
    fn test_save_question() {
        let mut session = ConsultationSession::new();
        assert!(session.save_question("Is the non-compete enforceable?"));
        assert!(!session.save_question("Is the non-compete enforceable?"));
        assert!(!session.save_question(" "));
        assert_eq!(session.saved_questions().len(), 1);
    }
}
