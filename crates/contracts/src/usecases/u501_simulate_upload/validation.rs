use crate::domain::a001_uploaded_file::aggregate::extension_of;
use crate::shared::config::UploadConfig;

/// Why a picked file never enters the queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    UnsupportedType { name: String, accepted: String },
    TooLarge { name: String, max_mb: u32 },
}

impl Rejection {
    pub fn title(&self) -> &'static str {
        match self {
            Rejection::UnsupportedType { .. } => "Unsupported file type",
            Rejection::TooLarge { .. } => "File too large",
        }
    }

    pub fn description(&self) -> String {
        match self {
            Rejection::UnsupportedType { name, accepted } => {
                format!("{} is not a {} document.", name, accepted)
            }
            Rejection::TooLarge { name, max_mb } => {
                format!("{} exceeds the {}MB limit.", name, max_mb)
            }
        }
    }
}

pub fn validate_file(config: &UploadConfig, name: &str, size_bytes: u64) -> Result<(), Rejection> {
    let accepted = config.accepted_extensions();
    let supported = extension_of(name).is_some_and(|ext| accepted.contains(&ext));
    if !supported {
        return Err(Rejection::UnsupportedType {
            name: name.to_string(),
            accepted: config.accepted_types_label(),
        });
    }
    if size_bytes > config.max_file_bytes() {
        return Err(Rejection::TooLarge {
            name: name.to_string(),
            max_mb: config.max_file_mb,
        });
    }
    Ok(())
}

/// "1 file(s) uploaded successfully"
pub fn summary_message(count: usize) -> String {
    format!("{} file(s) uploaded successfully", count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_supported_files() {
        let config = UploadConfig::default();
        assert!(validate_file(&config, "Contract.PDF", 1024).is_ok());
        assert!(validate_file(&config, "nda.docx", 1024).is_ok());
        assert!(validate_file(&config, "notes.txt", 0).is_ok());
    }

    #[test]
    fn test_rejects_type_and_size() {
        let config = UploadConfig::default();
        assert!(matches!(
            validate_file(&config, "photo.png", 1),
            Err(Rejection::UnsupportedType { .. })
        ));
        assert!(matches!(
            validate_file(&config, "README", 1),
            Err(Rejection::UnsupportedType { .. })
        ));
        let too_big = config.max_file_bytes() + 1;
        assert_eq!(
            validate_file(&config, "big.pdf", too_big),
            Err(Rejection::TooLarge {
                name: "big.pdf".into(),
                max_mb: 10
            })
        );
    }

    #[test]
    fn test_rejection_names_configured_types() {
        let config = UploadConfig {
            accept: ".pdf,.rtf".into(),
            ..Default::default()
        };
        let rejection = validate_file(&config, "notes.txt", 1).unwrap_err();
        assert_eq!(rejection.description(), "notes.txt is not a PDF or RTF document.");
        assert!(validate_file(&config, "brief.rtf", 1).is_ok());
    }

    #[test]
    fn test_summary_message() {
        assert_eq!(summary_message(2), "2 file(s) uploaded successfully");
    }
}
