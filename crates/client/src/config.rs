//! API endpoint configuration.
//!
//! The base URL is resolved once at startup: environment override first,
//! then the value persisted from a previous run, then the default. The
//! resolved value is persisted back so the next run reuses it.

use crate::ports::outbound::{storage_keys, PlatformPort};

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "HANMAL_API_URL";

/// Default base URL for the scenario/chat service.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Endpoint path for scenario generation.
pub const SCENARIOS_PATH: &str = "scenarios";

/// Endpoint path for chat turns.
pub const CHAT_PATH: &str = "chat";

/// Resolve the API base URL from the environment and platform storage.
pub fn resolve_api_url(platform: &dyn PlatformPort) -> String {
    resolve_api_url_from(std::env::var(API_URL_ENV).ok(), platform)
}

fn resolve_api_url_from(env_override: Option<String>, platform: &dyn PlatformPort) -> String {
    let url = env_override
        .filter(|v| !v.trim().is_empty())
        .or_else(|| platform.storage_load(storage_keys::API_URL))
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    platform.storage_save(storage_keys::API_URL, &url);
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::create_mock_platform;

    #[test]
    fn falls_back_to_the_default_and_persists_it() {
        let platform = create_mock_platform();

        let url = resolve_api_url_from(None, &platform);

        assert_eq!(url, DEFAULT_API_URL);
        assert_eq!(
            platform.storage_load(storage_keys::API_URL),
            Some(DEFAULT_API_URL.to_string())
        );
    }

    #[test]
    fn environment_override_wins_over_storage() {
        let platform = create_mock_platform();
        platform.storage_save(storage_keys::API_URL, "http://stored:8000");

        let url = resolve_api_url_from(Some("http://override:9000".to_string()), &platform);

        assert_eq!(url, "http://override:9000");
        assert_eq!(
            platform.storage_load(storage_keys::API_URL),
            Some("http://override:9000".to_string())
        );
    }

    #[test]
    fn persisted_value_is_reused_when_no_override_is_set() {
        let platform = create_mock_platform();
        platform.storage_save(storage_keys::API_URL, "http://stored:8000");

        let url = resolve_api_url_from(None, &platform);

        assert_eq!(url, "http://stored:8000");
    }
}
