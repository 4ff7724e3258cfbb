//! Landing screen.

use dioxus::prelude::*;

use crate::ui::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let navigator = use_navigator();

    rsx! {
        div {
            class: "screen screen-centered",

            h1 {
                class: "home-title",
                "맞춤형 한국어 회화 챗봇"
            }

            button {
                class: "btn btn-primary btn-large",
                onclick: move |_| {
                    navigator.push(Route::QuestionnaireRoute {});
                },
                "시작하기"
            }
        }
    }
}
