use std::sync::Arc;

use crate::domain::a001_uploaded_file::{UploadStatus, UploadedFile};
use crate::shared::config::UploadConfig;

use super::failure::{FailureInjection, NeverFail, RandomFailure};

/// What one timer tick did to a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still uploading at the given progress
    Advanced(u8),
    /// Progress hit 100 and the file moved to `processing`
    ReachedProcessing,
    /// The injected failure fired; the file is now in `error`
    Failed(String),
    /// The file was not uploading; nothing changed
    Idle,
}

/// Drives the cosmetic upload state machine:
/// `uploading -(ticks)-> processing -(delay)-> completed`.
#[derive(Clone)]
pub struct UploadSimulator {
    pub step: u8,
    pub tick_ms: u32,
    pub processing_delay_ms: u32,
    failure: Arc<dyn FailureInjection>,
}

impl std::fmt::Debug for UploadSimulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadSimulator")
            .field("step", &self.step)
            .field("tick_ms", &self.tick_ms)
            .field("processing_delay_ms", &self.processing_delay_ms)
            .finish_non_exhaustive()
    }
}

impl Default for UploadSimulator {
    fn default() -> Self {
        Self::from_config(&UploadConfig::default())
    }
}

impl UploadSimulator {
    pub fn new(step: u8, tick_ms: u32, processing_delay_ms: u32) -> Self {
        Self {
            step: step.clamp(1, 100),
            tick_ms,
            processing_delay_ms,
            failure: Arc::new(NeverFail),
        }
    }

    /// A zero `failure_rate` keeps the `NeverFail` injector
    pub fn from_config(config: &UploadConfig) -> Self {
        let simulator = Self::new(config.step, config.tick_ms, config.processing_delay_ms);
        if config.failure_rate > 0.0 {
            simulator.with_failure(Arc::new(RandomFailure::new(config.failure_rate)))
        } else {
            simulator
        }
    }

    pub fn with_failure(mut self, failure: Arc<dyn FailureInjection>) -> Self {
        self.failure = failure;
        self
    }

    /// `ceil(100 / step)`
    pub fn ticks_to_complete(&self) -> u32 {
        let step = u32::from(self.step.max(1));
        100u32.div_ceil(step)
    }

    pub fn tick(&self, file: &mut UploadedFile) -> TickOutcome {
        if file.status != UploadStatus::Uploading {
            return TickOutcome::Idle;
        }

        let next = file.progress.saturating_add(self.step).min(100);
        if let Some(reason) = self.failure.should_fail(file, next) {
            file.status = UploadStatus::Error;
            file.error = Some(reason.clone());
            return TickOutcome::Failed(reason);
        }

        file.progress = next;
        if next >= 100 {
            file.status = UploadStatus::Processing;
            TickOutcome::ReachedProcessing
        } else {
            TickOutcome::Advanced(next)
        }
    }

    /// `processing -> completed`; returns whether the file changed
    pub fn finish(&self, file: &mut UploadedFile) -> bool {
        if file.status == UploadStatus::Processing {
            file.status = UploadStatus::Completed;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_progress_monotonic_and_reaches_processing() {
        for step in [1u8, 3, 7, 10, 33, 100] {
            let simulator = UploadSimulator::new(step, 200, 1000);
            let mut file = UploadedFile::new("contract.pdf", 1024);
            let mut last = file.progress;
            let mut ticks = 0;
            while file.status == UploadStatus::Uploading {
                simulator.tick(&mut file);
                ticks += 1;
                assert!(file.progress >= last, "step {}", step);
                last = file.progress;
            }
            assert_eq!(ticks, simulator.ticks_to_complete(), "step {}", step);
            assert_eq!(file.progress, 100);
            assert_eq!(file.status, UploadStatus::Processing);
            assert!(simulator.finish(&mut file));
            assert_eq!(file.status, UploadStatus::Completed);
        }
    }

    #[test]
    fn test_default_ten_ticks() {
        let simulator = UploadSimulator::default();
        assert_eq!(simulator.ticks_to_complete(), 10);
        let mut file = UploadedFile::new("nda.docx", 2048);
        for _ in 0..9 {
            assert!(matches!(simulator.tick(&mut file), TickOutcome::Advanced(_)));
        }
        assert_eq!(simulator.tick(&mut file), TickOutcome::ReachedProcessing);
        assert_eq!(simulator.tick(&mut file), TickOutcome::Idle);
    }

    #[test]
    fn test_finish_only_from_processing() {
        let simulator = UploadSimulator::default();
        let mut file = UploadedFile::new("lease.txt", 10);
        assert!(!simulator.finish(&mut file));
        assert_eq!(file.status, UploadStatus::Uploading);
    }

    #[test]
    fn test_injected_failure_freezes_progress() {
        let simulator = UploadSimulator::default().with_failure(Arc::new(
            RandomFailure::with_rng(1.0, StdRng::seed_from_u64(3)),
        ));
        let mut file = UploadedFile::new("contract.pdf", 1024);
        let outcome = simulator.tick(&mut file);
        assert!(matches!(outcome, TickOutcome::Failed(_)));
        assert_eq!(file.status, UploadStatus::Error);
        assert_eq!(file.progress, 0);
        assert!(file.error.is_some());
        assert_eq!(simulator.tick(&mut file), TickOutcome::Idle);
    }

    #[test]
    fn test_default_config_never_errors() {
        let simulator = UploadSimulator::from_config(&UploadConfig::default());
        for i in 0..50 {
            let mut file = UploadedFile::new(format!("f{}.pdf", i), 1);
            while simulator.tick(&mut file) != TickOutcome::Idle {}
            assert_ne!(file.status, UploadStatus::Error);
        }
    }
}
