//! Profile questionnaire form.
//!
//! Maintains one signal per field; submission resolves the draft through
//! the domain rules (consent gate, visa override, stay-duration sentinel)
//! and commits the result to the session context. A submission without
//! consent is silently dropped.

use dioxus::prelude::*;

use hanmal_domain::{ProfileDraft, Residency, VISA_OTHERS, VISA_TYPES};

use crate::presentation::components::common::FormField;
use crate::presentation::state::SessionState;
use crate::ui::routes::Route;

#[component]
pub fn ProfileForm() -> Element {
    let session = use_context::<SessionState>();
    let navigator = use_navigator();

    // Form state
    let mut name = use_signal(String::new);
    let mut nationality = use_signal(String::new);
    let mut native_language = use_signal(String::new);
    let mut living_in_korea = use_signal(|| Residency::No);
    let mut stay_duration = use_signal(String::new);
    let mut visa_type = use_signal(String::new);
    let mut custom_visa = use_signal(String::new);
    let mut industry = use_signal(String::new);
    let mut work_experience = use_signal(String::new);
    let mut korean_test_score = use_signal(String::new);
    let mut korean_study_duration = use_signal(String::new);
    let mut interests = use_signal(String::new);
    let mut hobbies = use_signal(String::new);
    let mut consented = use_signal(|| true);

    let mut on_submit = {
        let mut session = session.clone();
        move |_: ()| {
            let draft = ProfileDraft {
                name: name.peek().clone(),
                nationality: nationality.peek().clone(),
                native_language: native_language.peek().clone(),
                living_in_korea: *living_in_korea.peek(),
                stay_duration: stay_duration.peek().clone(),
                visa_type: visa_type.peek().clone(),
                custom_visa: custom_visa.peek().clone(),
                industry: industry.peek().clone(),
                work_experience: work_experience.peek().clone(),
                korean_test_score: korean_test_score.peek().clone(),
                korean_study_duration: korean_study_duration.peek().clone(),
                interests: interests.peek().clone(),
                hobbies: hobbies.peek().clone(),
                consented: *consented.peek(),
            };

            // Without consent the resolve yields nothing: no state change,
            // no navigation.
            if let Some(profile) = draft.resolve() {
                session.set_profile(profile);
                navigator.push(Route::ScenariosRoute {});
            }
        }
    };

    let residency = living_in_korea.read().as_str();

    rsx! {
        form {
            class: "profile-form",
            onsubmit: move |e| {
                e.prevent_default();
                on_submit(());
            },

            FormField {
                label: "Name",
                children: rsx! {
                    input {
                        r#type: "text",
                        class: "input",
                        placeholder: "Name",
                        value: "{name}",
                        oninput: move |e| name.set(e.value()),
                    }
                }
            }

            FormField {
                label: "Nationality",
                children: rsx! {
                    input {
                        r#type: "text",
                        class: "input",
                        placeholder: "Nationality",
                        value: "{nationality}",
                        oninput: move |e| nationality.set(e.value()),
                    }
                }
            }

            FormField {
                label: "Native Language",
                children: rsx! {
                    input {
                        r#type: "text",
                        class: "input",
                        placeholder: "Native Language",
                        value: "{native_language}",
                        oninput: move |e| native_language.set(e.value()),
                    }
                }
            }

            FormField {
                label: "Do you live in Korea?",
                children: rsx! {
                    select {
                        class: "select",
                        value: "{residency}",
                        onchange: move |e| living_in_korea.set(Residency::from_select(&e.value())),

                        option { value: "Yes", "Yes" }
                        option { value: "No", "No" }
                    }
                }
            }

            if *living_in_korea.read() == Residency::Yes {
                FormField {
                    label: "Stay Duration",
                    children: rsx! {
                        input {
                            r#type: "text",
                            class: "input",
                            placeholder: "Stay Duration (예: 1년, 6개월)",
                            value: "{stay_duration}",
                            oninput: move |e| stay_duration.set(e.value()),
                        }
                    }
                }
            }

            FormField {
                label: "Visa Type",
                children: rsx! {
                    select {
                        class: "select",
                        value: "{visa_type}",
                        onchange: move |e| visa_type.set(e.value()),

                        option {
                            value: "",
                            disabled: true,
                            selected: visa_type.read().is_empty(),
                            "선택하세요"
                        }
                        for visa in VISA_TYPES {
                            option { value: "{visa}", "{visa}" }
                        }
                    }
                }
            }

            if *visa_type.read() == VISA_OTHERS {
                FormField {
                    label: "Visa Type (직접 입력)",
                    children: rsx! {
                        input {
                            r#type: "text",
                            class: "input",
                            placeholder: "Enter Visa Type",
                            value: "{custom_visa}",
                            oninput: move |e| custom_visa.set(e.value()),
                        }
                    }
                }
            }

            FormField {
                label: "Industry",
                children: rsx! {
                    input {
                        r#type: "text",
                        class: "input",
                        placeholder: "Industry (e.g., IT, Education, Healthcare)",
                        value: "{industry}",
                        oninput: move |e| industry.set(e.value()),
                    }
                }
            }

            FormField {
                label: "Work Experience",
                children: rsx! {
                    input {
                        r#type: "text",
                        class: "input",
                        placeholder: "Work Experience in the Industry",
                        value: "{work_experience}",
                        oninput: move |e| work_experience.set(e.value()),
                    }
                }
            }

            FormField {
                label: "Korean Test Score",
                children: rsx! {
                    input {
                        r#type: "text",
                        class: "input",
                        placeholder: "Korean Test Score (leave blank if none)",
                        value: "{korean_test_score}",
                        oninput: move |e| korean_test_score.set(e.value()),
                    }
                }
            }

            FormField {
                label: "Duration of Korean Study",
                children: rsx! {
                    input {
                        r#type: "text",
                        class: "input",
                        placeholder: "Duration of Korean Study (e.g., 2 years)",
                        value: "{korean_study_duration}",
                        oninput: move |e| korean_study_duration.set(e.value()),
                    }
                }
            }

            FormField {
                label: "Interests",
                children: rsx! {
                    input {
                        r#type: "text",
                        class: "input",
                        placeholder: "Interests (e.g., Travel, History, Food)",
                        value: "{interests}",
                        oninput: move |e| interests.set(e.value()),
                    }
                }
            }

            FormField {
                label: "Hobbies",
                children: rsx! {
                    input {
                        r#type: "text",
                        class: "input",
                        placeholder: "Hobbies (e.g., Soccer, Reading, Gaming)",
                        value: "{hobbies}",
                        oninput: move |e| hobbies.set(e.value()),
                    }
                }
            }

            div {
                class: "form-consent",

                label {
                    input {
                        r#type: "checkbox",
                        checked: *consented.read(),
                        onchange: move |e| consented.set(e.checked()),
                    }
                    "📜 Consent for Data Collection"
                }
            }

            button {
                r#type: "submit",
                class: "btn btn-success",
                "Submit"
            }
        }
    }
}
