use thiserror::Error;

use crate::domain::a001_uploaded_file::{UploadedFile, UploadedFileId};

use super::simulator::{TickOutcome, UploadSimulator};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// The file was removed; its timer loop must stop
    #[error("unknown upload {0}")]
    UnknownFile(UploadedFileId),
}

/// Files in selection order, each driven by the shared simulator
#[derive(Debug, Clone, Default)]
pub struct UploadQueue {
    files: Vec<UploadedFile>,
}

impl UploadQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    pub fn get(&self, id: UploadedFileId) -> Option<&UploadedFile> {
        self.files.iter().find(|f| f.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn enqueue(&mut self, name: impl Into<String>, size_bytes: u64) -> UploadedFileId {
        let file = UploadedFile::new(name, size_bytes);
        let id = file.id;
        self.files.push(file);
        id
    }

    pub fn tick(
        &mut self,
        simulator: &UploadSimulator,
        id: UploadedFileId,
    ) -> Result<TickOutcome, UploadError> {
        let file = self.file_mut(id)?;
        Ok(simulator.tick(file))
    }

    pub fn finish(
        &mut self,
        simulator: &UploadSimulator,
        id: UploadedFileId,
    ) -> Result<bool, UploadError> {
        let file = self.file_mut(id)?;
        Ok(simulator.finish(file))
    }

    pub fn remove(&mut self, id: UploadedFileId) -> Option<UploadedFile> {
        let index = self.files.iter().position(|f| f.id == id)?;
        Some(self.files.remove(index))
    }

    fn file_mut(&mut self, id: UploadedFileId) -> Result<&mut UploadedFile, UploadError> {
        self.files
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or(UploadError::UnknownFile(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_uploaded_file::UploadStatus;

    #[test]
    fn test_files_progress_independently() {
        let simulator = UploadSimulator::default();
        let mut queue = UploadQueue::new();
        let a = queue.enqueue("a.pdf", 1);
        let b = queue.enqueue("b.pdf", 1);
        queue.tick(&simulator, a).unwrap();
        queue.tick(&simulator, a).unwrap();
        queue.tick(&simulator, b).unwrap();
        assert_eq!(queue.get(a).unwrap().progress, 20);
        assert_eq!(queue.get(b).unwrap().progress, 10);
        assert_eq!(queue.files()[0].name, "a.pdf");
    }

    #[test]
    fn test_remove_cancels_simulation() {
        let simulator = UploadSimulator::default();
        let mut queue = UploadQueue::new();
        let id = queue.enqueue("a.pdf", 1);
        queue.tick(&simulator, id).unwrap();
        let removed = queue.remove(id).unwrap();
        assert_eq!(removed.status, UploadStatus::Uploading);
        assert_eq!(queue.tick(&simulator, id), Err(UploadError::UnknownFile(id)));
        assert_eq!(queue.finish(&simulator, id), Err(UploadError::UnknownFile(id)));
        assert!(queue.remove(id).is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_full_lifecycle_through_queue() {
        let simulator = UploadSimulator::default();
        let mut queue = UploadQueue::new();
        let id = queue.enqueue("a.pdf", 1);
        let mut outcome = TickOutcome::Idle;
        for _ in 0..simulator.ticks_to_complete() {
            outcome = queue.tick(&simulator, id).unwrap();
        }
        assert_eq!(outcome, TickOutcome::ReachedProcessing);
        assert!(queue.finish(&simulator, id).unwrap());
        assert_eq!(queue.get(id).unwrap().status, UploadStatus::Completed);
    }
}
