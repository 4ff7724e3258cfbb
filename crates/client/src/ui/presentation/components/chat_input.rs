//! Message composer: text input, send button, and the speech controls.
//!
//! The microphone button appears only when the platform reports a
//! recognition capability; one listen fills the input box with the first
//! transcription result. The speech-output toggle and repeat count drive
//! the repeated-utterance playback of replies.

use dioxus::prelude::*;

use crate::infrastructure::spawn_task;
use crate::presentation::state::ChatState;
use crate::{use_platform, use_speech};

#[component]
pub fn ChatInput(on_send: EventHandler<()>) -> Element {
    let platform = use_platform();
    let speech = use_speech();
    let chat = use_context::<ChatState>();

    let mut input = chat.input();
    let is_sending = chat.is_sending();
    let is_listening = chat.is_listening();
    let mut speak_replies = chat.speak_replies();
    let mut repeat_count = chat.repeat_count();
    let limit_reached = chat.turn_limit_reached();

    let input_disabled = *is_sending.read() || limit_reached;

    let start_listening = {
        let platform = platform.clone();
        let speech = speech.clone();
        let chat = chat.clone();
        move |_: MouseEvent| {
            if *chat.is_listening().peek() {
                return;
            }
            chat.is_listening().set(true);
            let platform = platform.clone();
            let speech = speech.clone();
            let chat_task = chat.clone();
            spawn_task(async move {
                match speech.recognize_once().await {
                    Ok(text) => {
                        chat_task.input().set(text);
                    }
                    Err(e) => {
                        platform.log_warn(&format!("Speech input failed: {e}"));
                    }
                }
                chat_task.is_listening().set(false);
            });
        }
    };

    rsx! {
        div {
            class: "chat-composer",

            textarea {
                class: "input chat-textarea",
                rows: 2,
                placeholder: "메시지를 입력하세요...",
                disabled: input_disabled,
                value: "{input}",
                oninput: move |e| input.set(e.value()),
                onkeydown: move |e: KeyboardEvent| {
                    if e.key() == Key::Enter && !e.modifiers().contains(Modifiers::SHIFT) {
                        e.prevent_default();
                        on_send.call(());
                    }
                },
            }

            div {
                class: "chat-controls",

                button {
                    class: "btn btn-primary",
                    disabled: input_disabled,
                    onclick: move |_| on_send.call(()),
                    if *is_sending.read() { "응답 중..." } else { "보내기" }
                }

                if speech.recognition_supported() {
                    button {
                        class: "btn btn-secondary",
                        disabled: input_disabled || *is_listening.read(),
                        onclick: start_listening,
                        if *is_listening.read() { "🎙️ 듣는 중..." } else { "🎙️ 말하기" }
                    }
                }

                if speech.synthesis_supported() {
                    label {
                        class: "speech-toggle",

                        input {
                            r#type: "checkbox",
                            checked: *speak_replies.read(),
                            onchange: move |e| speak_replies.set(e.checked()),
                        }
                        "🔊 응답 읽어주기"
                    }

                    select {
                        class: "select select-small",
                        value: "{repeat_count}",
                        onchange: move |e| {
                            if let Ok(count) = e.value().parse::<u32>() {
                                repeat_count.set(count);
                            }
                        },

                        option { value: "1", "1회" }
                        option { value: "2", "2회" }
                        option { value: "3", "3회" }
                    }
                }
            }
        }
    }
}
