/// Camera and microphone tracks acquired for a call.
///
/// The browser implementation wraps a `MediaStream`; tests use a fake.
pub trait MediaTracks {
    /// Stops every acquired track. Stopped tracks cannot be restarted.
    fn stop_all(&mut self);

    fn set_audio_enabled(&mut self, enabled: bool);

    fn set_video_enabled(&mut self, enabled: bool);
}

/// Nothing acquired yet, e.g. the camera permission was denied
impl MediaTracks for () {
    fn stop_all(&mut self) {}

    fn set_audio_enabled(&mut self, _enabled: bool) {}

    fn set_video_enabled(&mut self, _enabled: bool) {}
}
