//! Labeled form field wrapper.

use dioxus::prelude::*;

/// A labeled block around one form control
#[component]
pub fn FormField(label: String, #[props(default = false)] required: bool, children: Element) -> Element {
    rsx! {
        div {
            class: "form-field",

            label {
                class: "form-label",
                "{label}"
                if required {
                    span { class: "form-required", " *" }
                }
            }

            {children}
        }
    }
}
