//! Unified error type for domain operations.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A chat message with no visible content was submitted
    #[error("Blank chat message")]
    BlankMessage,

    /// A user message was appended before the transcript was seeded
    #[error("Chat transcript is not seeded")]
    NotSeeded,

    /// The per-session limit of user messages has been reached
    #[error("User turn limit reached")]
    TurnLimitReached,
}
