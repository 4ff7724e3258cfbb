//! Questionnaire screen: collects the learning profile.

use dioxus::prelude::*;

use crate::presentation::components::ProfileForm;

#[component]
pub fn QuestionnaireView() -> Element {
    rsx! {
        div {
            class: "screen",

            h2 {
                class: "screen-title",
                "📋 사용자 정보 입력"
            }

            ProfileForm {}
        }
    }
}
