use super::answer::ChatAnswer;
use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Assistant text substituted for any failed chat turn
pub const CHAT_ERROR_MESSAGE: &str =
    "Sorry, I encountered an error while processing your question. Please try again.";

/// Render key of a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub Uuid);

impl MessageId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for MessageId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(MessageId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Author of a transcript entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// Transcript entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub role: ChatRole,
    pub content: String,
    /// Present only on answers that came back with at least one citation
    pub sources: Option<Vec<String>>,
    /// Display-only creation time
    pub timestamp: String,
}

impl ChatMessage {
    /// Create a user message
    pub fn user(content: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            id: MessageId::new_v4(),
            role: ChatRole::User,
            content: content.into(),
            sources: None,
            timestamp: timestamp.into(),
        }
    }

    /// Create an assistant message from a parsed answer
    pub fn assistant(answer: ChatAnswer, timestamp: impl Into<String>) -> Self {
        let sources = (!answer.sources.is_empty()).then_some(answer.sources);
        Self {
            id: MessageId::new_v4(),
            role: ChatRole::Assistant,
            content: answer.answer,
            sources,
            timestamp: timestamp.into(),
        }
    }

    /// Create the assistant message standing in for a failed turn
    pub fn assistant_error(timestamp: impl Into<String>) -> Self {
        Self {
            id: MessageId::new_v4(),
            role: ChatRole::Assistant,
            content: CHAT_ERROR_MESSAGE.to_string(),
            sources: None,
            timestamp: timestamp.into(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == ChatRole::User
    }
}

/// Send gate of the chat session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SendPhase {
    #[default]
    Idle,
    Sending,
    /// Idle again after the last turn failed
    IdleWithError,
}

/// Events that drive the chat session
#[derive(Debug, Clone, PartialEq)]
pub enum ChatEvent {
    /// The user pressed send with the raw input text
    Submitted { text: String, timestamp: String },
    /// The backend answered the outstanding question
    Answered { answer: ChatAnswer, timestamp: String },
    /// The outstanding question failed for any reason
    Failed { timestamp: String },
}

/// Transcript plus send gate.
///
/// The transcript is append-only and every question gets exactly one
/// assistant reply, either the answer or [`CHAT_ERROR_MESSAGE`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    phase: SendPhase,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn phase(&self) -> SendPhase {
        self.phase
    }

    pub fn is_sending(&self) -> bool {
        self.phase == SendPhase::Sending
    }

    /// The trimmed question if `text` may be sent now, `None` otherwise
    pub fn accepts(&self, text: &str) -> Option<String> {
        let question = text.trim();
        if question.is_empty() || self.is_sending() {
            return None;
        }
        Some(question.to_string())
    }

    /// Apply one event and return the resulting session.
    ///
    /// Rejected submits and replies arriving while nothing is outstanding
    /// leave the session unchanged.
    pub fn apply(&self, event: ChatEvent) -> Self {
        match event {
            ChatEvent::Submitted { text, timestamp } => match self.accepts(&text) {
                Some(question) => self.push(ChatMessage::user(question, timestamp), SendPhase::Sending),
                None => self.clone(),
            },
            ChatEvent::Answered { answer, timestamp } if self.is_sending() => {
                self.push(ChatMessage::assistant(answer, timestamp), SendPhase::Idle)
            }
            ChatEvent::Failed { timestamp } if self.is_sending() => self.push(
                ChatMessage::assistant_error(timestamp),
                SendPhase::IdleWithError,
            ),
            ChatEvent::Answered { .. } | ChatEvent::Failed { .. } => self.clone(),
        }
    }

    fn push(&self, message: ChatMessage, phase: SendPhase) -> Self {
        let mut messages = self.messages.clone();
        messages.push(message);
        Self { messages, phase }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit(session: &ChatSession, text: &str) -> ChatSession {
        session.apply(ChatEvent::Submitted {
            text: text.to_string(),
            timestamp: "10:00".to_string(),
        })
    }

    fn answered(session: &ChatSession, text: &str, sources: &[&str]) -> ChatSession {
        session.apply(ChatEvent::Answered {
            answer: ChatAnswer {
                answer: text.to_string(),
                sources: sources.iter().map(|s| s.to_string()).collect(),
            },
            timestamp: "10:01".to_string(),
        })
    }

    fn failed(session: &ChatSession) -> ChatSession {
        session.apply(ChatEvent::Failed {
            timestamp: "10:01".to_string(),
        })
    }

    #[test]
    fn test_blank_input_is_a_no_op() {
        let session = ChatSession::new();
        assert_eq!(submit(&session, ""), session);
        assert_eq!(submit(&session, "   "), session);
        assert_eq!(submit(&session, "\n\t"), session);
    }

    #[test]
    fn test_submit_trims_and_enters_sending() {
        let session = submit(&ChatSession::new(), "  What is the refund policy?  ");
        assert_eq!(session.phase(), SendPhase::Sending);
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, ChatRole::User);
        assert_eq!(session.messages()[0].content, "What is the refund policy?");
        assert_eq!(session.messages()[0].timestamp, "10:00");
    }

    #[test]
    fn test_submit_while_sending_is_a_no_op() {
        let session = submit(&ChatSession::new(), "first");
        assert!(session.accepts("second").is_none());
        assert_eq!(submit(&session, "second"), session);
    }

    #[test]
    fn test_successful_turn_appends_two_messages() {
        let session = submit(&ChatSession::new(), "What is the refund policy?");
        let session = answered(&session, "Refunds within 30 days.", &["policy.pdf (Page 2)"]);

        assert_eq!(session.phase(), SendPhase::Idle);
        assert_eq!(session.messages().len(), 2);
        let reply = &session.messages()[1];
        assert_eq!(reply.role, ChatRole::Assistant);
        assert_eq!(reply.content, "Refunds within 30 days.");
        assert_eq!(reply.sources, Some(vec!["policy.pdf (Page 2)".to_string()]));
    }

    #[test]
    fn test_answer_without_citations_has_no_sources() {
        let session = answered(&submit(&ChatSession::new(), "hi"), "hello", &[]);
        assert_eq!(session.messages()[1].sources, None);
    }

    #[test]
    fn test_failed_turn_appends_error_reply() {
        let session = failed(&submit(&ChatSession::new(), "hi"));

        assert_eq!(session.phase(), SendPhase::IdleWithError);
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[1].role, ChatRole::Assistant);
        assert_eq!(session.messages()[1].content, CHAT_ERROR_MESSAGE);
        assert_eq!(session.messages()[1].sources, None);
    }

    #[test]
    fn test_can_send_again_after_error() {
        let session = failed(&submit(&ChatSession::new(), "hi"));
        let session = submit(&session, "again");
        assert_eq!(session.phase(), SendPhase::Sending);
        assert_eq!(session.messages().len(), 3);
    }

    #[test]
    fn test_reply_without_outstanding_question_is_ignored() {
        let session = ChatSession::new();
        assert_eq!(answered(&session, "stray", &[]), session);
        assert_eq!(failed(&session), session);

        let done = answered(&submit(&session, "q"), "a", &[]);
        assert_eq!(failed(&done), done);
    }

    #[test]
    fn test_transcript_alternates_roles() {
        let mut session = ChatSession::new();
        for i in 0..4 {
            session = submit(&session, &format!("q{}", i));
            session = if i % 2 == 0 {
                answered(&session, "a", &[])
            } else {
                failed(&session)
            };
        }
        assert_eq!(session.messages().len(), 8);
        for (i, message) in session.messages().iter().enumerate() {
            assert_eq!(message.is_user(), i % 2 == 0);
        }
    }
}
