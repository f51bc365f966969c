pub mod a001_uploaded_file;
pub mod a002_case;
pub mod a003_annotation;
pub mod a004_workflow;
pub mod a005_chat_message;
pub mod common;
