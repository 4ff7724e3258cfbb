//! Mock speech adapter for tests
//!
//! Records spoken utterances and cancellations, and plays back a scripted
//! recognition result.

use std::sync::{Arc, Mutex};
use std::{future::Future, pin::Pin};

use crate::ports::outbound::{SpeechError, SpeechPort};

/// Test double for the speech capability
#[derive(Clone, Default)]
pub struct MockSpeech {
    spoken: Arc<Mutex<Vec<String>>>,
    cancel_count: Arc<Mutex<u32>>,
    recognition_result: Arc<Mutex<Option<Result<String, SpeechError>>>>,
}

impl MockSpeech {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the next `recognize_once` outcome.
    pub fn with_recognition(self, result: Result<String, SpeechError>) -> Self {
        if let Ok(mut guard) = self.recognition_result.lock() {
            *guard = Some(result);
        }
        self
    }

    /// Utterances spoken so far, in order.
    pub fn spoken(&self) -> Vec<String> {
        self.spoken.lock().map(|g| g.clone()).unwrap_or_default()
    }

    /// Number of explicit and implicit (speak-preempting) cancellations.
    pub fn cancel_count(&self) -> u32 {
        self.cancel_count.lock().map(|g| *g).unwrap_or(0)
    }
}

impl SpeechPort for MockSpeech {
    fn recognition_supported(&self) -> bool {
        self.recognition_result
            .lock()
            .map(|g| g.is_some())
            .unwrap_or(false)
    }

    fn synthesis_supported(&self) -> bool {
        true
    }

    fn recognize_once(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<String, SpeechError>> + 'static>> {
        let result = self
            .recognition_result
            .lock()
            .ok()
            .and_then(|mut g| g.take())
            .unwrap_or(Err(SpeechError::RecognitionUnavailable));
        Box::pin(std::future::ready(result))
    }

    fn speak(&self, text: &str) {
        // Mirrors the real adapter: speaking preempts the current utterance.
        if let Ok(mut guard) = self.cancel_count.lock() {
            *guard += 1;
        }
        if let Ok(mut guard) = self.spoken.lock() {
            guard.push(text.to_string());
        }
    }

    fn cancel(&self) {
        if let Ok(mut guard) = self.cancel_count.lock() {
            *guard += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_utterances_in_order() {
        let speech = MockSpeech::new();
        speech.speak("안녕하세요");
        speech.speak("반갑습니다");

        assert_eq!(speech.spoken(), vec!["안녕하세요", "반갑습니다"]);
        // Each speak cancels whatever was playing first.
        assert_eq!(speech.cancel_count(), 2);
    }

    #[tokio::test]
    async fn scripted_recognition_is_consumed_once() {
        let speech = MockSpeech::new().with_recognition(Ok("안녕하세요".to_string()));

        assert!(speech.recognition_supported());
        assert_eq!(speech.recognize_once().await, Ok("안녕하세요".to_string()));
        assert_eq!(
            speech.recognize_once().await,
            Err(SpeechError::RecognitionUnavailable)
        );
    }
}
