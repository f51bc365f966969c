pub mod aggregate;
pub mod document;
pub mod fixtures;
pub mod selection;

pub use aggregate::{Annotation, AnnotationId, AnnotationKind};
pub use document::{AnnotatedDocument, AnnotationSummary, DocumentSegment};
pub use fixtures::sample_document;
pub use selection::AnnotationSelection;
