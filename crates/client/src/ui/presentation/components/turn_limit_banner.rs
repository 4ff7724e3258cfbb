//! Completion banner shown once the user turns are used up.
//!
//! The input is disabled at this point; the only action offered is going
//! back to scenario selection, which drops the selection and transcript
//! but keeps the profile and the cached scenario list.

use dioxus::prelude::*;

use crate::presentation::state::SessionState;

#[component]
pub fn TurnLimitBanner() -> Element {
    let mut session = use_context::<SessionState>();

    rsx! {
        div {
            class: "turn-limit-banner",

            p {
                "🎉 대화가 끝났어요! 5번의 대화를 완료했습니다."
            }

            button {
                class: "btn btn-primary",
                // Dropping the selection trips the chat screen's entry
                // guard, which navigates back to the selector; the screen's
                // teardown resets the transcript.
                onclick: move |_| {
                    session.clear_selection();
                },
                "🔄 새로운 대화 시작하기"
            }
        }
    }
}
