//! Scenario selection screen.
//!
//! Issues the scenario fetch once per session (profile present, nothing
//! cached), shows a loading indicator while the call is outstanding, and
//! surfaces a fixed localized message on failure with no retry. Selection
//! is by list index; confirming commits the scenario and moves to the chat
//! screen.

use dioxus::prelude::*;

use crate::application::services::fetch_needed;
use crate::infrastructure::spawn_task;
use crate::presentation::services::use_scenario_service;
use crate::presentation::state::{ScenarioFetch, SessionState};
use crate::ui::routes::Route;
use crate::use_platform;

/// Shown when the scenario fetch fails; the list stays empty.
const SCENARIOS_FAILED_MESSAGE: &str = "시나리오를 불러오는 데 실패했습니다.";

#[component]
pub fn ScenarioView() -> Element {
    let platform = use_platform();
    let scenario_service = use_scenario_service();
    let session = use_context::<SessionState>();
    let navigator = use_navigator();

    let profile = session.profile();
    let scenarios = session.scenarios();
    let fetch = session.fetch();
    let mut selected_index: Signal<Option<usize>> = use_signal(|| None);

    // One-shot fetch: only when a profile exists and nothing is cached yet.
    {
        let platform = platform.clone();
        let service = scenario_service.clone();
        let session = session.clone();
        use_effect(move || {
            let Some(profile) = profile.read().clone() else {
                return;
            };
            if !fetch_needed(Some(&profile), &scenarios.read()) {
                return;
            }
            if *fetch.peek() == ScenarioFetch::Loading {
                return;
            }

            let mut session_task = session.clone();
            session_task.start_loading();
            let started_epoch = session_task.epoch();
            let platform = platform.clone();
            let service = service.clone();
            spawn_task(async move {
                let result = service.generate(&profile).await;
                if session_task.epoch() != started_epoch {
                    // The session was torn down while the request was in
                    // flight; a stale list must not be applied.
                    return;
                }
                match result {
                    Ok(list) => {
                        session_task.set_scenarios(list);
                    }
                    Err(e) => {
                        platform.log_error(&format!("Scenario fetch failed: {e}"));
                        session_task.fail_fetch(SCENARIOS_FAILED_MESSAGE);
                    }
                }
            });
        });
    }

    let mut on_confirm = {
        let mut session = session.clone();
        move |_: MouseEvent| {
            let Some(index) = *selected_index.peek() else {
                return;
            };
            if session.select(index) {
                navigator.push(Route::ChatRoute {});
            }
        }
    };

    rsx! {
        div {
            class: "screen",

            h2 {
                class: "screen-title",
                "🧠 맞춤형 대화 시나리오"
            }

            if profile.read().is_none() {
                p {
                    "Missing user info. Please go back and fill out the form."
                }
            } else {
                if *fetch.read() == ScenarioFetch::Loading {
                    p {
                        class: "loading-hint",
                        "시나리오 생성 중... ⏳"
                    }
                }

                if let ScenarioFetch::Failed(message) = &*fetch.read() {
                    p {
                        class: "error-text",
                        "{message}"
                    }
                }

                if !scenarios.read().is_empty() {
                    div {
                        class: "scenario-picker",

                        select {
                            class: "select",
                            onchange: move |e| {
                                selected_index.set(e.value().parse::<usize>().ok());
                            },

                            option {
                                value: "",
                                disabled: true,
                                selected: selected_index.read().is_none(),
                                "시나리오를 선택하세요"
                            }
                            for (idx, scenario) in scenarios.read().iter().enumerate() {
                                option {
                                    value: "{idx}",
                                    "{scenario.title}"
                                }
                            }
                        }

                        button {
                            class: "btn btn-primary",
                            disabled: selected_index.read().is_none(),
                            onclick: move |e| on_confirm(e),
                            "선택하고 챗봇 시작하기"
                        }
                    }
                }
            }
        }
    }
}
