//! Hanmal Client - unified composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hanmal_client::ports::outbound::{PlatformPort, RawApiPort, SpeechPort};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hanmal_client=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Hanmal Client");

    // Platform
    let platform = hanmal_client::infrastructure::platform::create_platform();
    let platform: std::sync::Arc<dyn PlatformPort> = std::sync::Arc::new(platform);

    // Speech capability (absent implementation on platforms without it)
    let speech = hanmal_client::infrastructure::speech::create_speech();
    let speech: std::sync::Arc<dyn SpeechPort> = std::sync::Arc::new(speech);

    // HTTP
    let api_url = hanmal_client::config::resolve_api_url(platform.as_ref());
    let raw_api: std::sync::Arc<dyn RawApiPort> =
        match hanmal_client::infrastructure::http_client::ApiAdapter::new(&api_url) {
            Ok(adapter) => std::sync::Arc::new(adapter),
            Err(e) => {
                tracing::error!("Invalid API base URL {}: {}", api_url, e);
                return;
            }
        };
    let api = hanmal_client::application::api::Api::new(raw_api);

    // Launch Dioxus
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let window = dioxus_desktop::WindowBuilder::new().with_title("Hanmal");
        builder = builder.with_cfg(dioxus_desktop::Config::new().with_window(window));
    }

    builder
        .with_context(platform)
        .with_context(speech)
        .with_context(hanmal_client::ui::presentation::Services::new(api))
        .launch(hanmal_client::ui::app);
}
