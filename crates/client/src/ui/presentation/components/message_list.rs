//! Transcript display.
//!
//! Renders the assistant/user exchange as chat bubbles (the system seed is
//! not shown) and highlights the entry currently being spoken.

use dioxus::prelude::*;

use hanmal_domain::Role;

use crate::presentation::state::ChatState;
use crate::use_platform;

/// Anchor element kept at the bottom of the log for smooth scrolling.
const CHAT_END_ANCHOR: &str = "chat-end";

#[component]
pub fn MessageList() -> Element {
    let platform = use_platform();
    let chat = use_context::<ChatState>();
    let transcript = chat.transcript();
    let speaking_entry = chat.speaking_entry();
    let is_sending = chat.is_sending();

    // Keep the newest entry visible as the transcript grows.
    use_effect(move || {
        let _len = transcript.read().len();
        platform.scroll_into_view(CHAT_END_ANCHOR);
    });

    rsx! {
        div {
            class: "chat-log",

            for (idx, message) in transcript.read().messages().iter().enumerate() {
                if message.role != Role::System {
                    div {
                        key: "{idx}",
                        class: if message.role == Role::User { "chat-row chat-row-user" } else { "chat-row chat-row-assistant" },

                        div {
                            class: if *speaking_entry.read() == Some(idx) { "bubble bubble-speaking" } else { "bubble" },

                            strong {
                                class: "bubble-author",
                                if message.role == Role::User { "🧑 나" } else { "🤖 챗봇" }
                            }
                            div {
                                class: "bubble-content",
                                "{message.content}"
                            }
                        }
                    }
                }
            }

            if *is_sending.read() {
                p {
                    class: "loading-hint",
                    "응답 중..."
                }
            }

            div {
                id: "{CHAT_END_ANCHOR}",
            }
        }
    }
}
