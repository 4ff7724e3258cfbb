//! Speech capability adapters
//!
//! The browser adapter drives the Web Speech API; desktop installs the
//! absent implementation so the UI simply hides the speech controls.

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

pub mod mock;

#[cfg(target_arch = "wasm32")]
pub use wasm::{create_speech, WebSpeech};

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::{create_speech, NullSpeech};

/// Recognition and synthesis language for the practice sessions.
pub const SPEECH_LANG: &str = "ko-KR";
