use super::aggregate::ChatMessage;

pub const GREETING: &str = "Hello! I'm your AI legal assistant. I can help explain the employment contract you uploaded. What specific clauses would you like me to clarify?";

/// Append-only list of chat messages
#[derive(Debug, Clone, PartialEq)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
}

impl Default for ChatTranscript {
    fn default() -> Self {
        Self::with_greeting()
    }
}

impl ChatTranscript {
    pub fn empty() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Transcript opened by the assistant's greeting
    pub fn with_greeting() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(GREETING, None)],
        }
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_chat_message::aggregate::Sender;

    #[test]
    fn test_default_transcript_starts_with_greeting() {
        let transcript = ChatTranscript::default();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.messages()[0].sender, Sender::Assistant);
        assert_eq!(transcript.messages()[0].text, GREETING);
    }

    #[test]
    fn test_push_appends_in_order() {
        let mut transcript = ChatTranscript::empty();
        assert!(transcript.is_empty());
        transcript.push(ChatMessage::user("first"));
        transcript.push(ChatMessage::assistant("second", Some("Section 4".into())));
        let texts: Vec<_> = transcript.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
        assert!(transcript.messages()[0].is_user());
    }
}
