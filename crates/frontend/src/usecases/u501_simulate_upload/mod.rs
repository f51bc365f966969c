//! Document upload page (MVVM)
//!
//! - view_model.rs: queue signal and the per-file timer loops
//! - view.rs: drop zone and file list

mod view;
mod view_model;

pub use view::DocumentUpload;
pub use view_model::DocumentUploadVm;
