//! SpeechPort - speech capability interface
//!
//! Browser-only capabilities (speech recognition and synthesis) sit behind
//! this port so the rest of the UI never probes global objects. Platforms
//! without the capability install the absent implementation
//! (`infrastructure::speech::NullSpeech`) and the UI hides the controls.

use std::{future::Future, pin::Pin};
use thiserror::Error;

/// Errors surfaced by the speech capability.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpeechError {
    /// The platform exposes no recognition capability
    #[error("Speech recognition is not available")]
    RecognitionUnavailable,

    /// Recognition ended without producing a transcription
    #[error("Recognition ended without a result")]
    NoResult,

    /// The recognizer reported an error
    #[error("Recognition failed: {0}")]
    Recognition(String),
}

/// Speech capability port
///
/// Use via Dioxus context: `use_context::<Arc<dyn SpeechPort>>()`
pub trait SpeechPort: Send + Sync {
    /// Whether one-shot speech recognition is available
    fn recognition_supported(&self) -> bool;

    /// Whether speech synthesis is available
    fn synthesis_supported(&self) -> bool;

    /// One-shot listen: resolves with the first transcription result and
    /// stops listening on result, error, or natural end. No retry, no
    /// multi-utterance handling.
    fn recognize_once(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<String, SpeechError>> + 'static>>;

    /// Speak the given text, cancelling any in-flight utterance first.
    fn speak(&self, text: &str);

    /// Stop any in-flight utterance.
    fn cancel(&self);
}
