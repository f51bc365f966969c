use thiserror::Error;

use super::language::Language;
use super::provider::{TranslationProvider, TranslationRequest};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    #[error("Please enter text and select a target language.")]
    MissingInformation,
}

impl TranslationError {
    pub fn title(&self) -> &'static str {
        match self {
            TranslationError::MissingInformation => "Missing Information",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TranslationPhase {
    #[default]
    Idle,
    Translating(TranslationRequest),
    Completed {
        request: TranslationRequest,
        text: String,
    },
}

/// `Idle -> Translating -> Completed`, re-submittable from `Completed`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranslationSession {
    phase: TranslationPhase,
}

impl TranslationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &TranslationPhase {
        &self.phase
    }

    pub fn is_translating(&self) -> bool {
        matches!(self.phase, TranslationPhase::Translating(_))
    }

    pub fn translated_text(&self) -> Option<&str> {
        match &self.phase {
            TranslationPhase::Completed { text, .. } => Some(text),
            _ => None,
        }
    }

    pub fn completed_request(&self) -> Option<&TranslationRequest> {
        match &self.phase {
            TranslationPhase::Completed { request, .. } => Some(request),
            _ => None,
        }
    }

    /// The Translate button is enabled only when this is true
    pub fn can_submit(language: Option<Language>, text: &str) -> bool {
        language.is_some() && !text.trim().is_empty()
    }

    /// Validates the input and enters `Translating`. On error the phase is
    /// left untouched. Submitting while already translating is ignored.
    pub fn submit(
        &mut self,
        language: Option<Language>,
        text: &str,
    ) -> Result<Option<TranslationRequest>, TranslationError> {
        let language = match language {
            Some(language) if !text.trim().is_empty() => language,
            _ => return Err(TranslationError::MissingInformation),
        };
        if self.is_translating() {
            return Ok(None);
        }
        let request = TranslationRequest {
            language,
            text: text.to_string(),
        };
        self.phase = TranslationPhase::Translating(request.clone());
        Ok(Some(request))
    }

    /// Finishes the pending request. Returns false when nothing was pending.
    pub fn complete(&mut self, provider: &dyn TranslationProvider) -> bool {
        let TranslationPhase::Translating(request) = &self.phase else {
            return false;
        };
        let request = request.clone();
        let text = provider.translate(&request);
        self.phase = TranslationPhase::Completed { request, text };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u502_translate_document::CannedTranslator;

    #[test]
    fn test_missing_information_never_translates() {
        let inputs: [(Option<Language>, &str); 4] = [
            (None, "WHEREAS"),
            (Some(Language::French), ""),
            (Some(Language::French), "  \n\t "),
            (None, ""),
        ];
        for (language, text) in inputs {
            let mut session = TranslationSession::new();
            assert_eq!(
                session.submit(language, text),
                Err(TranslationError::MissingInformation)
            );
            assert!(!session.is_translating());
            assert_eq!(session.phase(), &TranslationPhase::Idle);
            assert!(!TranslationSession::can_submit(language, text));
        }
    }

    #[test]
    fn test_error_keeps_previous_result() {
        let mut session = TranslationSession::new();
        session.submit(Some(Language::German), "text").unwrap();
        session.complete(&CannedTranslator);
        let before = session.clone();
        assert!(session.submit(Some(Language::German), " ").is_err());
        assert_eq!(session, before);
    }

    #[test]
    fn test_phases() {
        let mut session = TranslationSession::new();
        let request = session
            .submit(Some(Language::PlainEnglish), "WHEREAS")
            .unwrap()
            .unwrap();
        assert_eq!(request.language, Language::PlainEnglish);
        assert!(session.is_translating());
        assert_eq!(session.submit(Some(Language::Spanish), "x"), Ok(None));

        assert!(session.complete(&CannedTranslator));
        assert!(session
            .translated_text()
            .unwrap()
            .starts_with("SIMPLE TRANSLATION:"));
        assert!(!session.complete(&CannedTranslator));
    }

    #[test]
    fn test_error_message() {
        let err = TranslationError::MissingInformation;
        assert_eq!(err.title(), "Missing Information");
        assert_eq!(
            err.to_string(),
            "Please enter text and select a target language."
        );
    }
}
