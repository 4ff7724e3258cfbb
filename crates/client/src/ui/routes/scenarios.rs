//! Scenario selection route handler

use dioxus::prelude::*;

use crate::use_platform;

#[component]
pub fn ScenariosRoute() -> Element {
    let platform = use_platform();

    use_effect(move || {
        platform.set_page_title("대화 시나리오 선택");
    });

    rsx! {
        crate::presentation::views::ScenarioView {}
    }
}
