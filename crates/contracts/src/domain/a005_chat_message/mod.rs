pub mod aggregate;
pub mod transcript;

pub use aggregate::{ChatMessage, ChatMessageId, Sender};
pub use transcript::ChatTranscript;
