use crate::ports::outbound::{PlatformPort, SpeechPort};
use dioxus::prelude::*;
use std::sync::Arc;

pub mod presentation;
pub mod routes;

pub use routes::Route;

/// Type alias for the platform port used throughout the UI
pub type Platform = Arc<dyn PlatformPort>;

/// Type alias for the speech capability port used throughout the UI
pub type Speech = Arc<dyn SpeechPort>;

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

/// Hook to access the speech capability from Dioxus context
pub fn use_speech() -> Speech {
    use_context::<Speech>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Session and chat state live for the whole app run; screens get them
    // via context. These must be created inside an active Dioxus runtime.
    use_context_provider(presentation::state::SessionState::new);
    use_context_provider(presentation::state::ChatState::new);

    rsx! {
        document::Stylesheet {
            href: asset!("assets/main.css"),
        }

        Router::<routes::Route> {}
    }
}
