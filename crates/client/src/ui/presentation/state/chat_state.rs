//! Chat screen state and the repeated-utterance playback loop.
//!
//! The transcript itself (ordering, seeding, turn limit) lives in the
//! domain crate; this wraps it in signals and adds the screen-local flags:
//! the input draft, the busy flag that serializes sends, the listening
//! flag for speech input, and the index of the entry currently being
//! spoken (highlight only).
//!
//! Everything async is bound to the chat epoch: reseeding or clearing bumps
//! it, and both reply application and the repeat loop check it before
//! touching state, so navigating away cancels them deterministically.

use dioxus::prelude::*;
use hanmal_domain::{DomainError, Transcript};

use crate::{Platform, Speech};

/// Delay between repeats of the same utterance.
pub const SPEECH_REPEAT_DELAY_MS: u64 = 1000;

/// How many times a reply is spoken by default.
pub const DEFAULT_SPEECH_REPEATS: u32 = 2;

/// Chat screen state
#[derive(Clone)]
pub struct ChatState {
    transcript: Signal<Transcript>,
    input: Signal<String>,
    is_sending: Signal<bool>,
    is_listening: Signal<bool>,
    speak_replies: Signal<bool>,
    repeat_count: Signal<u32>,
    /// Transcript index currently being spoken, for the highlight effect
    speaking_entry: Signal<Option<usize>>,
    epoch: Signal<u32>,
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            transcript: Signal::new(Transcript::new()),
            input: Signal::new(String::new()),
            is_sending: Signal::new(false),
            is_listening: Signal::new(false),
            speak_replies: Signal::new(true),
            repeat_count: Signal::new(DEFAULT_SPEECH_REPEATS),
            speaking_entry: Signal::new(None),
            epoch: Signal::new(0),
        }
    }

    pub fn transcript(&self) -> Signal<Transcript> {
        self.transcript
    }

    pub fn input(&self) -> Signal<String> {
        self.input
    }

    pub fn is_sending(&self) -> Signal<bool> {
        self.is_sending
    }

    pub fn is_listening(&self) -> Signal<bool> {
        self.is_listening
    }

    pub fn speak_replies(&self) -> Signal<bool> {
        self.speak_replies
    }

    pub fn repeat_count(&self) -> Signal<u32> {
        self.repeat_count
    }

    pub fn speaking_entry(&self) -> Signal<Option<usize>> {
        self.speaking_entry
    }

    /// Current epoch value, captured before spawning screen-scoped work.
    pub fn epoch(&self) -> u32 {
        *self.epoch.peek()
    }

    fn bump_epoch(&mut self) {
        let epoch = *self.epoch.peek();
        self.epoch.set(epoch.wrapping_add(1));
    }

    /// Seed a fresh session transcript from the scenario opener and stop
    /// whatever the previous session still had in flight.
    pub fn seed(&mut self, opener: &str) {
        self.transcript.set(Transcript::seeded(opener));
        self.input.set(String::new());
        self.is_sending.set(false);
        self.is_listening.set(false);
        self.speaking_entry.set(None);
        self.bump_epoch();
    }

    /// Reset to an unseeded transcript (leaving the chat screen).
    pub fn clear(&mut self) {
        self.transcript.set(Transcript::new());
        self.input.set(String::new());
        self.is_sending.set(false);
        self.is_listening.set(false);
        self.speaking_entry.set(None);
        self.bump_epoch();
    }

    /// Append the user message, enforcing the transcript rules.
    pub fn push_user(&mut self, content: &str) -> Result<(), DomainError> {
        self.transcript.with_mut(|t| t.push_user(content))
    }

    /// Append an assistant reply and return its transcript index.
    pub fn push_assistant(&mut self, content: &str) -> usize {
        self.transcript.with_mut(|t| {
            t.push_assistant(content);
            t.len() - 1
        })
    }

    pub fn turn_limit_reached(&self) -> bool {
        self.transcript.read().turn_limit_reached()
    }
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

/// Speak one transcript entry, repeating it per the configured repeat count
/// with a fixed delay between repeats.
///
/// Each repeat goes through `SpeechPort::speak`, which cancels the previous
/// utterance first; distinct utterances are never queued. The loop checks
/// the chat epoch before every repeat, so reseeding or leaving the screen
/// stops it. The spoken entry index is tracked purely for the highlight.
pub fn speak_repeated(
    platform: Platform,
    speech: Speech,
    chat: &ChatState,
    entry: usize,
    text: String,
) {
    if !speech.synthesis_supported() || !*chat.speak_replies().peek() {
        return;
    }

    let repeats = (*chat.repeat_count().peek()).max(1);
    let started_epoch = chat.epoch();
    let epoch = chat.epoch;
    let mut speaking_entry = chat.speaking_entry();

    spawn(async move {
        for _ in 0..repeats {
            if *epoch.read() != started_epoch {
                return;
            }
            speaking_entry.set(Some(entry));
            speech.speak(&text);
            platform.sleep_ms(SPEECH_REPEAT_DELAY_MS).await;
        }
        if *epoch.read() == started_epoch {
            speaking_entry.set(None);
        }
    });
}
