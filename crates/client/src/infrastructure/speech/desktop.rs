//! Absent speech capability for desktop builds
//!
//! Desktop has no Web Speech API equivalent wired up; the port reports both
//! capabilities as unsupported and the UI hides the speech controls.

use std::{future::Future, pin::Pin};

use crate::ports::outbound::{SpeechError, SpeechPort};

/// Speech adapter that reports no capability
#[derive(Clone, Default)]
pub struct NullSpeech;

impl SpeechPort for NullSpeech {
    fn recognition_supported(&self) -> bool {
        false
    }

    fn synthesis_supported(&self) -> bool {
        false
    }

    fn recognize_once(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<String, SpeechError>> + 'static>> {
        Box::pin(std::future::ready(Err(SpeechError::RecognitionUnavailable)))
    }

    fn speak(&self, text: &str) {
        tracing::debug!("Speech synthesis unavailable, dropping utterance: {}", text);
    }

    fn cancel(&self) {}
}

/// Create the speech adapter for desktop
pub fn create_speech() -> NullSpeech {
    NullSpeech
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn absent_capability_rejects_recognition() {
        let speech = NullSpeech;

        assert!(!speech.recognition_supported());
        assert!(!speech.synthesis_supported());
        assert_eq!(
            speech.recognize_once().await,
            Err(SpeechError::RecognitionUnavailable)
        );
    }
}
