//! Chat session route handler

use dioxus::prelude::*;

use crate::use_platform;

#[component]
pub fn ChatRoute() -> Element {
    let platform = use_platform();

    use_effect(move || {
        platform.set_page_title("챗봇과 대화하기");
    });

    rsx! {
        crate::presentation::views::ChatView {}
    }
}
