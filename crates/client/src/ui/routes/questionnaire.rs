//! Questionnaire route handler

use dioxus::prelude::*;

use crate::use_platform;

#[component]
pub fn QuestionnaireRoute() -> Element {
    let platform = use_platform();

    use_effect(move || {
        platform.set_page_title("사용자 정보 입력");
    });

    rsx! {
        crate::presentation::views::QuestionnaireView {}
    }
}
