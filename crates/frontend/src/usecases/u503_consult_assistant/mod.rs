//! AI consultation page (MVVM)
//!
//! - media.rs: camera/microphone stream behind `MediaTracks`
//! - view_model.rs: session signal, chat sending and scripted replies
//! - view.rs: video panel, document context, chat

mod media;
mod view;
mod view_model;

pub use view::VideoCall;
