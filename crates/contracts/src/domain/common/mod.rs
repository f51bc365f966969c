//! Common types and traits for all fixture records

pub mod fixture_record;
pub mod status_tone;

// Re-exports
pub use fixture_record::FixtureRecord;
pub use status_tone::StatusTone;
