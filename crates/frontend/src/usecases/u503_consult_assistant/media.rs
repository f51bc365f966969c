use contracts::usecases::u503_consult_assistant::MediaTracks;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{MediaStream, MediaStreamConstraints, MediaStreamTrack};

/// Stream acquired from `getUserMedia`, if any
#[derive(Default)]
pub struct BrowserTracks {
    stream: Option<MediaStream>,
}

impl BrowserTracks {
    pub fn attach(&mut self, stream: MediaStream) {
        self.stop_all();
        self.stream = Some(stream);
    }

    fn for_each(tracks: js_sys::Array, f: impl Fn(&MediaStreamTrack)) {
        tracks
            .iter()
            .filter_map(|t| t.dyn_into::<MediaStreamTrack>().ok())
            .for_each(|t| f(&t));
    }
}

impl MediaTracks for BrowserTracks {
    fn stop_all(&mut self) {
        if let Some(stream) = self.stream.take() {
            Self::for_each(stream.get_tracks(), |t| t.stop());
            log::debug!("media tracks stopped");
        }
    }

    fn set_audio_enabled(&mut self, enabled: bool) {
        if let Some(stream) = &self.stream {
            Self::for_each(stream.get_audio_tracks(), |t| t.set_enabled(enabled));
        }
    }

    fn set_video_enabled(&mut self, enabled: bool) {
        if let Some(stream) = &self.stream {
            Self::for_each(stream.get_video_tracks(), |t| t.set_enabled(enabled));
        }
    }
}

/// Asks the browser for camera and microphone
pub async fn request_camera() -> Result<MediaStream, String> {
    let window = web_sys::window().ok_or_else(|| "No window object".to_string())?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|e| format!("Media devices unavailable: {:?}", e))?;

    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&JsValue::TRUE);
    constraints.set_audio(&JsValue::TRUE);

    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|e| format!("getUserMedia failed: {:?}", e))?;
    let stream = JsFuture::from(promise)
        .await
        .map_err(|e| format!("Camera access denied: {:?}", e))?;
    stream
        .dyn_into::<MediaStream>()
        .map_err(|_| "getUserMedia resolved to a non-stream value".to_string())
}
