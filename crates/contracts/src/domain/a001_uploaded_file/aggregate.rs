use crate::domain::common::{FixtureRecord, StatusTone};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Id of an uploaded file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UploadedFileId(pub Uuid);

impl UploadedFileId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for UploadedFileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle of a simulated upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    Uploading,
    Processing,
    Completed,
    /// Only produced through an explicit failure injection
    Error,
}

impl UploadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadStatus::Uploading => "uploading",
            UploadStatus::Processing => "processing",
            UploadStatus::Completed => "completed",
            UploadStatus::Error => "error",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, UploadStatus::Completed | UploadStatus::Error)
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            UploadStatus::Uploading | UploadStatus::Processing => StatusTone::Neutral,
            UploadStatus::Completed => StatusTone::Success,
            UploadStatus::Error => StatusTone::Danger,
        }
    }
}

/// A file picked or dropped by the user.
///
/// Progress only ever moves forward; the simulator is the single writer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub id: UploadedFileId,
    pub name: String,
    pub size_bytes: u64,
    pub status: UploadStatus,
    pub progress: u8,
    pub error: Option<String>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            id: UploadedFileId::new_v4(),
            name: name.into(),
            size_bytes,
            status: UploadStatus::Uploading,
            progress: 0,
            error: None,
        }
    }

    /// Size rendered as megabytes with two decimals, e.g. "1.50 MB"
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.size_bytes as f64 / BYTES_PER_MB)
    }

    /// Lower-cased extension including the dot, e.g. ".pdf"
    pub fn extension(&self) -> Option<String> {
        extension_of(&self.name)
    }
}

pub(crate) fn extension_of(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(format!(".{}", ext.to_lowercase()))
}

impl FixtureRecord for UploadedFile {
    fn fixture_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "uploaded_file"
    }

    fn list_name() -> &'static str {
        "Uploaded Documents"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_file_starts_uploading() {
        let file = UploadedFile::new("contract.pdf", 2048);
        assert_eq!(file.status, UploadStatus::Uploading);
        assert_eq!(file.progress, 0);
        assert!(file.error.is_none());
    }

    #[test]
    fn test_size_label() {
        let file = UploadedFile::new("a.pdf", 1_572_864);
        assert_eq!(file.size_label(), "1.50 MB");
        let empty = UploadedFile::new("b.txt", 0);
        assert_eq!(empty.size_label(), "0.00 MB");
    }

    #[test]
    fn test_extension() {
        assert_eq!(extension_of("Lease.DOCX").as_deref(), Some(".docx"));
        assert_eq!(extension_of("archive.tar.gz").as_deref(), Some(".gz"));
        assert_eq!(extension_of("README"), None);
        assert_eq!(extension_of(".hidden"), None);
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!UploadStatus::Uploading.is_terminal());
        assert!(!UploadStatus::Processing.is_terminal());
        assert!(UploadStatus::Completed.is_terminal());
        assert!(UploadStatus::Error.is_terminal());
    }
}
