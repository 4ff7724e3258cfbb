//! Chat transcript and its turn-state rules.
//!
//! A transcript is an append-only message sequence. Seeding installs exactly
//! one system message followed by the assistant's scenario opener; user
//! messages may only be appended after that, and never beyond
//! [`USER_TURN_LIMIT`] of them.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Maximum number of user-authored messages per session. The attempt after
/// the limit is rejected client-side without touching the transcript.
pub const USER_TURN_LIMIT: usize = 5;

/// System prompt seeded at the start of every session.
pub const PARTNER_SYSTEM_PROMPT: &str =
    "You are a Korean conversation partner helping the user practice Korean.";

/// Author of a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    Assistant,
    User,
}

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Ordered, append-only chat transcript for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// An empty, unseeded transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a fresh transcript: the fixed system prompt followed by the
    /// scenario opener as the assistant's first line.
    pub fn seeded(opener: impl Into<String>) -> Self {
        Self {
            messages: vec![
                Message::system(PARTNER_SYSTEM_PROMPT),
                Message::assistant(opener),
            ],
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// True once the system/assistant seed pair is in place.
    pub fn is_seeded(&self) -> bool {
        matches!(
            self.messages.as_slice(),
            [Message {
                role: Role::System,
                ..
            }, Message {
                role: Role::Assistant,
                ..
            }, ..]
        )
    }

    /// Count of user-authored entries. Pure function of the transcript.
    pub fn user_turns(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.role == Role::User)
            .count()
    }

    /// Whether the session has used up its user turns.
    pub fn turn_limit_reached(&self) -> bool {
        self.user_turns() >= USER_TURN_LIMIT
    }

    /// Append a user message.
    ///
    /// Rejected (leaving the transcript unchanged) when the content is
    /// blank, the transcript has not been seeded, or the turn limit is
    /// already reached.
    pub fn push_user(&mut self, content: &str) -> Result<(), DomainError> {
        if content.trim().is_empty() {
            return Err(DomainError::BlankMessage);
        }
        if !self.is_seeded() {
            return Err(DomainError::NotSeeded);
        }
        if self.turn_limit_reached() {
            return Err(DomainError::TurnLimitReached);
        }
        self.messages.push(Message::user(content));
        Ok(())
    }

    /// Append an assistant reply (or the localized fallback line).
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(Message::assistant(content));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod seeding_tests {
        use super::*;

        #[test]
        fn seeded_transcript_starts_with_system_then_assistant() {
            let transcript = Transcript::seeded("안녕하세요! 오늘 뭐 했어요?");

            assert_eq!(transcript.len(), 2);
            assert_eq!(transcript.messages()[0].role, Role::System);
            assert_eq!(transcript.messages()[0].content, PARTNER_SYSTEM_PROMPT);
            assert_eq!(transcript.messages()[1].role, Role::Assistant);
            assert!(transcript.is_seeded());
        }

        #[test]
        fn empty_transcript_is_not_seeded() {
            assert!(!Transcript::new().is_seeded());
        }

        #[test]
        fn user_message_before_seeding_is_rejected() {
            let mut transcript = Transcript::new();
            assert_eq!(
                transcript.push_user("안녕하세요"),
                Err(DomainError::NotSeeded)
            );
            assert!(transcript.is_empty());
        }
    }

    mod send_tests {
        use super::*;

        #[test]
        fn blank_input_is_rejected() {
            let mut transcript = Transcript::seeded("opener");
            assert_eq!(transcript.push_user("   "), Err(DomainError::BlankMessage));
            assert_eq!(transcript.len(), 2);
        }

        #[test]
        fn user_and_assistant_entries_append_in_order() {
            let mut transcript = Transcript::seeded("opener");
            transcript.push_user("안녕하세요").expect("first turn accepted");
            transcript.push_assistant("반갑습니다");

            let roles: Vec<Role> = transcript.messages().iter().map(|m| m.role).collect();
            assert_eq!(
                roles,
                vec![Role::System, Role::Assistant, Role::User, Role::Assistant]
            );
        }
    }

    mod turn_limit_tests {
        use super::*;

        #[test]
        fn four_exchanges_leave_the_limit_unreached() {
            let mut transcript = Transcript::seeded("opener");
            for _ in 0..4 {
                transcript.push_user("안녕하세요").expect("turn accepted");
                transcript.push_assistant("ok");
            }

            assert_eq!(transcript.len(), 10);
            assert_eq!(transcript.user_turns(), 4);
            assert!(!transcript.turn_limit_reached());
        }

        #[test]
        fn fifth_turn_is_accepted_and_reaches_the_limit() {
            let mut transcript = Transcript::seeded("opener");
            for _ in 0..4 {
                transcript.push_user("안녕하세요").expect("turn accepted");
                transcript.push_assistant("ok");
            }

            transcript.push_user("안녕하세요").expect("fifth turn accepted");
            assert!(transcript.turn_limit_reached());
        }

        #[test]
        fn sixth_turn_is_rejected_without_mutation() {
            let mut transcript = Transcript::seeded("opener");
            for _ in 0..5 {
                transcript.push_user("안녕하세요").expect("turn accepted");
                transcript.push_assistant("ok");
            }
            let before = transcript.clone();

            assert_eq!(
                transcript.push_user("한 번 더"),
                Err(DomainError::TurnLimitReached)
            );
            assert_eq!(transcript, before);
        }
    }

    #[test]
    fn roles_serialize_lowercase_for_the_wire() {
        let message = Message::user("안녕하세요");
        let json = serde_json::to_value(&message).expect("message serializes");

        assert_eq!(json["role"], "user");
        assert_eq!(json["content"], "안녕하세요");
    }
}
