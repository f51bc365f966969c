pub mod failure;
pub mod queue;
pub mod simulator;
pub mod validation;

pub use failure::{FailureInjection, NeverFail, RandomFailure};
pub use queue::{UploadError, UploadQueue};
pub use simulator::{TickOutcome, UploadSimulator};
pub use validation::{summary_message, validate_file, Rejection};

use crate::usecases::common::UseCaseMetadata;

pub struct SimulateUpload;

impl UseCaseMetadata for SimulateUpload {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "simulate_upload"
    }

    fn display_name() -> &'static str {
        "Document Upload"
    }

    fn description() -> &'static str {
        "Upload your legal documents for AI-powered analysis and insights"
    }
}
