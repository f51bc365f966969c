use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::a001_uploaded_file::UploadedFile;

/// Decides whether a simulated upload tick fails.
///
/// This is the only way an upload reaches the `error` status.
pub trait FailureInjection: Send + Sync {
    /// Returns the failure reason, or `None` to let the tick proceed
    fn should_fail(&self, file: &UploadedFile, progress: u8) -> Option<String>;
}

/// Default: uploads always succeed
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverFail;

impl FailureInjection for NeverFail {
    fn should_fail(&self, _file: &UploadedFile, _progress: u8) -> Option<String> {
        None
    }
}

/// Fails each tick independently with probability `rate`
pub struct RandomFailure {
    rate: f64,
    rng: Mutex<StdRng>,
}

impl RandomFailure {
    pub fn new(rate: f64) -> Self {
        Self::with_rng(rate, StdRng::from_entropy())
    }

    pub fn with_rng(rate: f64, rng: StdRng) -> Self {
        Self {
            rate: rate.clamp(0.0, 1.0),
            rng: Mutex::new(rng),
        }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl FailureInjection for RandomFailure {
    fn should_fail(&self, file: &UploadedFile, progress: u8) -> Option<String> {
        if self.rate <= 0.0 {
            return None;
        }
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        if rng.gen_bool(self.rate) {
            Some(format!(
                "Upload of {} interrupted at {}%",
                file.name, progress
            ))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_fail() {
        let file = UploadedFile::new("a.pdf", 10);
        assert_eq!(NeverFail.should_fail(&file, 50), None);
    }

    #[test]
    fn test_random_failure_extremes() {
        let file = UploadedFile::new("a.pdf", 10);
        let always = RandomFailure::with_rng(1.0, StdRng::seed_from_u64(7));
        let never = RandomFailure::with_rng(0.0, StdRng::seed_from_u64(7));
        assert!(always.should_fail(&file, 30).is_some());
        assert!(never.should_fail(&file, 30).is_none());
    }

    #[test]
    fn test_rate_is_clamped() {
        let failure = RandomFailure::with_rng(3.0, StdRng::seed_from_u64(1));
        assert_eq!(failure.rate(), 1.0);
    }
}
