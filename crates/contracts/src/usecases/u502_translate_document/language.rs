use serde::{Deserialize, Serialize};

/// Target language of a translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    PlainEnglish,
    Spanish,
    French,
    German,
    Italian,
    Portuguese,
    Chinese,
    Japanese,
}

impl Language {
    pub fn all() -> [Language; 8] {
        [
            Language::PlainEnglish,
            Language::Spanish,
            Language::French,
            Language::German,
            Language::Italian,
            Language::Portuguese,
            Language::Chinese,
            Language::Japanese,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::PlainEnglish => "plain-english",
            Language::Spanish => "spanish",
            Language::French => "french",
            Language::German => "german",
            Language::Italian => "italian",
            Language::Portuguese => "portuguese",
            Language::Chinese => "chinese",
            Language::Japanese => "japanese",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::PlainEnglish => "Plain English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Italian => "Italian",
            Language::Portuguese => "Portuguese",
            Language::Chinese => "Chinese (Simplified)",
            Language::Japanese => "Japanese",
        }
    }

    /// Empty or unknown codes mean "no language selected"
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|l| l.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for language in Language::all() {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
        assert_eq!(Language::from_code(""), None);
        assert_eq!(Language::from_code("klingon"), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Language::Chinese.label(), "Chinese (Simplified)");
        assert_eq!(Language::PlainEnglish.label(), "Plain English");
    }
}
