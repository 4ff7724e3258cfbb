//! Presentation state containers provided via Dioxus context.

pub mod chat_state;
pub mod session_state;

pub use chat_state::{speak_repeated, ChatState, DEFAULT_SPEECH_REPEATS, SPEECH_REPEAT_DELAY_MS};
pub use session_state::{ScenarioFetch, SessionState};
