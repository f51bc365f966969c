//! Common types and traits shared by the use cases

pub mod usecase_metadata;

pub use usecase_metadata::UseCaseMetadata;
