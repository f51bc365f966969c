pub mod clipboard;
pub mod components;
pub mod export;
pub mod file_picker;
pub mod icons;
pub mod modal;
pub mod page_frame;
pub mod page_standard;
