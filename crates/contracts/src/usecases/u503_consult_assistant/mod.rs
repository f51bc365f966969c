pub mod media;
pub mod responder;
pub mod session;

pub use media::MediaTracks;
pub use responder::{ResponseProvider, ScriptedResponder, NON_COMPETE_REFERENCE, SCRIPTED_REPLIES};
pub use session::ConsultationSession;

use crate::usecases::common::UseCaseMetadata;

pub struct ConsultAssistant;

impl UseCaseMetadata for ConsultAssistant {
    fn usecase_index() -> &'static str {
        "u503"
    }

    fn usecase_name() -> &'static str {
        "consult_assistant"
    }

    fn display_name() -> &'static str {
        "AI Legal Consultation"
    }

    fn description() -> &'static str {
        "Get real-time explanations and advice from your AI legal assistant"
    }
}
