pub mod language;
pub mod provider;
pub mod session;

pub use language::Language;
pub use provider::{CannedTranslator, TranslationProvider, TranslationRequest, SAMPLE_LEGAL_TEXT};
pub use session::{TranslationError, TranslationPhase, TranslationSession};

use crate::usecases::common::UseCaseMetadata;

pub struct TranslateDocument;

impl UseCaseMetadata for TranslateDocument {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "translate_document"
    }

    fn display_name() -> &'static str {
        "Document Translation"
    }

    fn description() -> &'static str {
        "Transform legal jargon into clear, understandable language"
    }
}
