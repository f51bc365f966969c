pub mod aggregate;

pub use aggregate::{UploadStatus, UploadedFile, UploadedFileId};
