//! Cosmetic timings and demo knobs.
//!
//! Every field has a default, so a partial TOML document only overrides
//! what it names.

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    pub upload: UploadConfig,
    pub translation: TranslationConfig,
    pub consultation: ConsultationConfig,
    pub transition: TransitionConfig,
    pub toast: ToastConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct UploadConfig {
    pub tick_ms: u32,
    pub step: u8,
    pub processing_delay_ms: u32,
    /// Probability that a tick fails the upload; 0 disables injection
    pub failure_rate: f64,
    pub max_file_mb: u32,
    /// Comma separated extensions, as used by the file input `accept`
    pub accept: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            tick_ms: 200,
            step: 10,
            processing_delay_ms: 1000,
            failure_rate: 0.0,
            max_file_mb: 10,
            accept: ".pdf,.docx,.txt".to_string(),
        }
    }
}

impl UploadConfig {
    pub fn accepted_extensions(&self) -> Vec<String> {
        self.accept
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// "PDF, DOCX or TXT"
    pub fn accepted_types_label(&self) -> String {
        let mut types: Vec<String> = self
            .accepted_extensions()
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_uppercase())
            .collect();
        match types.pop() {
            None => String::new(),
            Some(last) if types.is_empty() => last,
            Some(last) => format!("{} or {}", types.join(", "), last),
        }
    }

    pub fn max_file_bytes(&self) -> u64 {
        u64::from(self.max_file_mb) * 1024 * 1024
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TranslationConfig {
    pub delay_ms: u32,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self { delay_ms: 2000 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ConsultationConfig {
    pub reply_delay_ms: u32,
    pub reference_probability: f64,
}

impl Default for ConsultationConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1000,
            reference_probability: 0.5,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TransitionConfig {
    pub duration_ms: u32,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self { duration_ms: 300 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ToastConfig {
    pub dismiss_ms: u32,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self { dismiss_ms: 4000 }
    }
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[upload]
tick_ms = 200
step = 10
processing_delay_ms = 1000
failure_rate = 0.0
max_file_mb = 10
accept = ".pdf,.docx,.txt"

[translation]
delay_ms = 2000

[consultation]
reply_delay_ms = 1000
reference_probability = 0.5

[transition]
duration_ms = 300

[toast]
dismiss_ms = 4000
"#;

impl DemoConfig {
    /// Parses a TOML document; missing keys keep their defaults
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let config: DemoConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn embedded_default() -> anyhow::Result<Self> {
        Self::from_toml_str(DEFAULT_CONFIG)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.upload.step == 0 || self.upload.step > 100 {
            anyhow::bail!("upload.step must be within 1..=100, got {}", self.upload.step);
        }
        if self.upload.tick_ms == 0 {
            anyhow::bail!("upload.tick_ms must be positive");
        }
        for (name, p) in [
            ("upload.failure_rate", self.upload.failure_rate),
            (
                "consultation.reference_probability",
                self.consultation.reference_probability,
            ),
        ] {
            if !(0.0..=1.0).contains(&p) {
                anyhow::bail!("{} must be within 0..=1, got {}", name, p);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = DemoConfig::embedded_default();
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.upload.tick_ms, 200);
        assert_eq!(config.translation.delay_ms, 2000);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = DemoConfig::from_toml_str("[upload]\nstep = 25\n").unwrap();
        assert_eq!(config.upload.step, 25);
        assert_eq!(config.upload.tick_ms, 200);
        assert_eq!(config.consultation.reply_delay_ms, 1000);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(DemoConfig::from_toml_str("[upload]\nstep = 0\n").is_err());
        assert!(DemoConfig::from_toml_str("[upload]\nfailure_rate = 1.5\n").is_err());
        assert!(DemoConfig::from_toml_str("[upload\n").is_err());
    }

    #[test]
    fn test_accepted_extensions() {
        let upload = UploadConfig {
            accept: ".PDF, .docx,,.txt".into(),
            ..Default::default()
        };
        assert_eq!(upload.accepted_extensions(), vec![".pdf", ".docx", ".txt"]);
        assert_eq!(UploadConfig::default().max_file_bytes(), 10 * 1024 * 1024);
    }

    #[test]
    fn test_accepted_types_label() {
        assert_eq!(UploadConfig::default().accepted_types_label(), "PDF, DOCX or TXT");
        let label = |accept: &str| {
            UploadConfig {
                accept: accept.into(),
                ..Default::default()
            }
            .accepted_types_label()
        };
        assert_eq!(label(".md"), "MD");
        assert_eq!(label(".pdf,.rtf"), "PDF or RTF");
        assert_eq!(label(""), "");
    }
}
