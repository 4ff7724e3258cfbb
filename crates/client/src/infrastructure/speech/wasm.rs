//! Web Speech API adapter
//!
//! Recognition is one-shot: the recognizer is created per listen, resolves
//! with the first transcription result, and is torn down on result, error,
//! or natural end. Synthesis cancels any in-flight utterance before
//! speaking a new one.

use std::cell::RefCell;
use std::rc::Rc;
use std::{future::Future, pin::Pin};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::SPEECH_LANG;
use crate::ports::outbound::{SpeechError, SpeechPort};

/// Speech adapter backed by the browser's Web Speech API
#[derive(Clone, Default)]
pub struct WebSpeech;

fn synthesis_handle() -> Option<web_sys::SpeechSynthesis> {
    web_sys::window().and_then(|w| w.speech_synthesis().ok())
}

impl SpeechPort for WebSpeech {
    fn recognition_supported(&self) -> bool {
        web_sys::SpeechRecognition::new().is_ok()
    }

    fn synthesis_supported(&self) -> bool {
        synthesis_handle().is_some()
    }

    fn recognize_once(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<String, SpeechError>> + 'static>> {
        Box::pin(async move {
            let recognition = web_sys::SpeechRecognition::new()
                .map_err(|_| SpeechError::RecognitionUnavailable)?;
            recognition.set_lang(SPEECH_LANG);

            let (tx, rx) = futures_channel::oneshot::channel::<Result<String, SpeechError>>();
            // One sender shared by the three handlers; whichever fires first wins.
            let sender = Rc::new(RefCell::new(Some(tx)));

            let on_result = {
                let sender = sender.clone();
                Closure::<dyn FnMut(web_sys::SpeechRecognitionEvent)>::new(
                    move |event: web_sys::SpeechRecognitionEvent| {
                        if let Some(tx) = sender.borrow_mut().take() {
                            let transcript = event
                                .results()
                                .get(0)
                                .and_then(|result| result.get(0))
                                .map(|alternative| alternative.transcript());
                            let _ = tx.send(transcript.ok_or(SpeechError::NoResult));
                        }
                    },
                )
            };

            let on_error = {
                let sender = sender.clone();
                Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
                    if let Some(tx) = sender.borrow_mut().take() {
                        let _ = tx.send(Err(SpeechError::Recognition(
                            "recognizer reported an error".to_string(),
                        )));
                    }
                })
            };

            let on_end = {
                let sender = sender.clone();
                Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
                    // Natural end without a result resolves as NoResult.
                    if let Some(tx) = sender.borrow_mut().take() {
                        let _ = tx.send(Err(SpeechError::NoResult));
                    }
                })
            };

            recognition.set_onresult(Some(on_result.as_ref().unchecked_ref()));
            recognition.set_onerror(Some(on_error.as_ref().unchecked_ref()));
            recognition.set_onend(Some(on_end.as_ref().unchecked_ref()));

            recognition
                .start()
                .map_err(|_| SpeechError::Recognition("failed to start listening".to_string()))?;

            let outcome = rx.await.unwrap_or(Err(SpeechError::NoResult));

            recognition.set_onresult(None);
            recognition.set_onerror(None);
            recognition.set_onend(None);
            let _ = recognition.stop();

            outcome
        })
    }

    fn speak(&self, text: &str) {
        let Some(synthesis) = synthesis_handle() else {
            return;
        };
        // Only one utterance at a time; a new one replaces whatever is playing.
        synthesis.cancel();
        match web_sys::SpeechSynthesisUtterance::new_with_text(text) {
            Ok(utterance) => {
                utterance.set_lang(SPEECH_LANG);
                synthesis.speak(&utterance);
            }
            Err(e) => {
                tracing::warn!("Failed to build utterance: {e:?}");
            }
        }
    }

    fn cancel(&self) {
        if let Some(synthesis) = synthesis_handle() {
            synthesis.cancel();
        }
    }
}

/// Create the speech adapter for the browser
pub fn create_speech() -> WebSpeech {
    WebSpeech
}
