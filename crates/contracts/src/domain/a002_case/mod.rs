pub mod aggregate;
pub mod filter;
pub mod fixtures;

pub use aggregate::{Case, CaseId, CasePriority, CaseStatus, CaseType};
pub use filter::{CaseFilter, CaseStats};
pub use fixtures::{all_cases, find_case};
