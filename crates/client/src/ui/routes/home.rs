//! Home route handler

use dioxus::prelude::*;

use crate::presentation::state::{ChatState, SessionState};
use crate::use_platform;

/// Landing screen; entering it tears down any previous session.
#[component]
pub fn HomeRoute() -> Element {
    let platform = use_platform();
    let mut session = use_context::<SessionState>();
    let mut chat = use_context::<ChatState>();

    use_effect(move || {
        platform.set_page_title("Hanmal");
        session.clear();
        chat.clear();
    });

    rsx! {
        crate::presentation::views::HomeView {}
    }
}
