//! Chat session screen.
//!
//! Entered with a selected scenario, seeds the two opening messages and
//! drives the send loop: append user message, busy flag on, POST the full
//! transcript, append the reply or the localized fallback, busy flag off.
//! Replies are optionally spoken with the repeated-utterance loop. All
//! in-flight work is epoch-guarded so leaving the screen or reseeding
//! cancels it.

use dioxus::prelude::*;

use crate::infrastructure::spawn_task;
use crate::presentation::components::{ChatInput, MessageList, TurnLimitBanner};
use crate::presentation::services::use_chat_service;
use crate::presentation::state::{speak_repeated, ChatState, SessionState};
use crate::ui::routes::Route;
use crate::{use_platform, use_speech};

/// Appended in place of a reply when the chat endpoint fails.
const REPLY_FAILED_MESSAGE: &str = "⚠️ 응답을 가져오는 데 실패했습니다.";

/// Transcript index of the scenario opener (after the system entry).
const OPENER_ENTRY: usize = 1;

#[component]
pub fn ChatView() -> Element {
    let platform = use_platform();
    let speech = use_speech();
    let chat_service = use_chat_service();
    let session = use_context::<SessionState>();
    let chat = use_context::<ChatState>();
    let navigator = use_navigator();

    let selected = session.selected();

    // Entry guard: without a selected scenario there is nothing to seed.
    use_effect(move || {
        if selected.read().is_none() {
            navigator.push(Route::ScenariosRoute {});
        }
    });

    // Seed the system prompt and the scenario opener on entry; the opener
    // is spoken when speech output is enabled.
    {
        let platform = platform.clone();
        let speech = speech.clone();
        let mut chat = chat.clone();
        use_effect(move || {
            let Some(scenario) = selected.read().clone() else {
                return;
            };
            chat.seed(&scenario.content);
            speak_repeated(
                platform.clone(),
                speech.clone(),
                &chat,
                OPENER_ENTRY,
                scenario.content,
            );
        });
    }

    // Leaving the screen invalidates the epoch, which stops the repeat
    // loop and discards any reply still in flight.
    {
        let chat = chat.clone();
        use_drop(move || {
            let mut chat = chat.clone();
            chat.clear();
        });
    }

    // Send flow. The transcript itself rejects blank input and over-limit
    // turns, so a rejected append simply drops the attempt.
    let send_message = {
        let platform = platform.clone();
        let speech = speech.clone();
        let service = chat_service.clone();
        let chat = chat.clone();
        move |_: ()| {
            let mut chat_send = chat.clone();
            if *chat_send.is_sending().peek() {
                return;
            }
            let text = chat_send.input().peek().clone();
            if chat_send.push_user(&text).is_err() {
                return;
            }
            chat_send.input().set(String::new());
            chat_send.is_sending().set(true);

            let snapshot = chat_send.transcript().peek().clone();
            let started_epoch = chat_send.epoch();
            let platform = platform.clone();
            let speech = speech.clone();
            let service = service.clone();
            spawn_task(async move {
                let result = service.request_reply(&snapshot).await;
                if chat_send.epoch() != started_epoch {
                    // Reseeded while the request was in flight; seed()
                    // already reset the busy flag, so just drop the reply.
                    return;
                }
                let reply = match result {
                    Ok(reply) => reply,
                    Err(e) => {
                        platform.log_error(&format!("Chat request failed: {e}"));
                        REPLY_FAILED_MESSAGE.to_string()
                    }
                };
                let entry = chat_send.push_assistant(&reply);
                chat_send.is_sending().set(false);
                speak_repeated(platform, speech, &chat_send, entry, reply);
            });
        }
    };

    rsx! {
        div {
            class: "screen",

            h2 {
                class: "screen-title",
                "💬 챗봇과 대화하기"
            }

            MessageList {}

            if chat.turn_limit_reached() {
                TurnLimitBanner {}
            }

            ChatInput {
                on_send: move |_| send_message(()),
            }
        }
    }
}
