use super::language::Language;

/// Legal text loaded by "Load Sample"
pub const SAMPLE_LEGAL_TEXT: &str = "WHEREAS, the parties desire to enter into this Agreement to define and set forth the terms and conditions of their mutual agreement regarding the provision of services;

NOW, THEREFORE, in consideration of the mutual covenants and agreements contained herein, and for other good and valuable consideration, the receipt and sufficiency of which are hereby acknowledged, the parties agree as follows:

1. SERVICES: The Service Provider agrees to perform the services described in Exhibit A attached hereto and incorporated herein by reference (the \"Services\").

2. COMPENSATION: In consideration for the Services, the Client shall pay the Service Provider the fees set forth in Exhibit B attached hereto and incorporated herein by reference.

3. TERM: This Agreement shall commence on the Effective Date and shall continue until terminated in accordance with the provisions hereof.
";

const PLAIN_ENGLISH: &str = "SIMPLE TRANSLATION:

Since both parties want to work together, they're making this agreement to clearly explain what each person will do:

1. WHAT WORK WILL BE DONE: The service provider will do the specific work listed in the attached document called \"Exhibit A.\"

2. HOW MUCH WILL BE PAID: The client will pay the service provider the amounts shown in the attached document called \"Exhibit B.\"

3. HOW LONG THIS LASTS: This agreement starts on the date both parties sign it and continues until someone ends it according to the rules in this agreement.

KEY POINTS TO UNDERSTAND:
- This is a business agreement between two parties
- One party will provide services, the other will pay for them
- The specific details of work and payment are in separate attached documents
- Either party can end the agreement following the termination rules
";

/// A validated translation job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub language: Language,
    pub text: String,
}

impl TranslationRequest {
    /// File name offered by "Download"
    pub fn download_name(&self) -> String {
        format!("translation-{}.txt", self.language.code())
    }
}

pub trait TranslationProvider: Send + Sync {
    fn translate(&self, request: &TranslationRequest) -> String;
}

/// Canned output: the plain-English rewrite, or a placeholder naming the language.
/// The input text is not inspected.
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedTranslator;

impl TranslationProvider for CannedTranslator {
    fn translate(&self, request: &TranslationRequest) -> String {
        match request.language {
            Language::PlainEnglish => PLAIN_ENGLISH.to_string(),
            other => format!("[Translated content would appear here in {}]", other.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(language: Language) -> TranslationRequest {
        TranslationRequest {
            language,
            text: "anything".into(),
        }
    }

    #[test]
    fn test_plain_english_rewrite() {
        let out = CannedTranslator.translate(&request(Language::PlainEnglish));
        assert!(out.starts_with("SIMPLE TRANSLATION:"));
        assert!(out.contains("KEY POINTS TO UNDERSTAND:"));
    }

    #[test]
    fn test_placeholder_names_language() {
        let out = CannedTranslator.translate(&request(Language::Chinese));
        assert_eq!(
            out,
            "[Translated content would appear here in Chinese (Simplified)]"
        );
    }

    #[test]
    fn test_download_name() {
        assert_eq!(
            request(Language::Spanish).download_name(),
            "translation-spanish.txt"
        );
    }
}
