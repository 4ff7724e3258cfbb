//! Hanmal Domain - core types and invariants for the conversation practice flow.
//!
//! Everything here is pure data and rules: the learner profile and its
//! submission normalization, the scenario record returned by the scenario
//! service, and the chat transcript with its seeding and turn-limit
//! invariants. No I/O, no platform concerns.

pub mod chat;
pub mod error;
pub mod profile;
pub mod scenario;

pub use chat::{Message, Role, Transcript, PARTNER_SYSTEM_PROMPT, USER_TURN_LIMIT};
pub use error::DomainError;
pub use profile::{ProfileDraft, Residency, UserProfile, STAY_NOT_APPLICABLE, VISA_OTHERS, VISA_TYPES};
pub use scenario::Scenario;
