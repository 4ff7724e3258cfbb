//! Scenario generation service.
//!
//! Sends the learner profile to the scenario endpoint and returns the
//! proposed scenarios. The request is issued at most once per session; the
//! guard is a pure function so the views stay trivial.

use hanmal_domain::{Scenario, UserProfile};

use crate::application::dto::ScenarioListResponse;
use crate::application::ServiceError;
use crate::config::SCENARIOS_PATH;
use crate::ports::outbound::ApiPort;

/// Whether the scenario screen should issue the fetch: a profile exists and
/// nothing is cached yet. Once a non-empty list is cached the fetch is never
/// issued again for the session.
pub fn fetch_needed(profile: Option<&UserProfile>, cached: &[Scenario]) -> bool {
    profile.is_some() && cached.is_empty()
}

/// Service for scenario generation
#[derive(Clone)]
pub struct ScenarioService<A: ApiPort> {
    api: A,
}

impl<A: ApiPort> ScenarioService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// POST the profile and return the proposed scenarios.
    pub async fn generate(&self, profile: &UserProfile) -> Result<Vec<Scenario>, ServiceError> {
        let response: ScenarioListResponse = self.api.post(SCENARIOS_PATH, profile).await?;
        Ok(response.scenarios.into_iter().map(Scenario::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::api::Api;
    use crate::ports::outbound::{ApiError, MockRawApiPort};
    use hanmal_domain::{ProfileDraft, Residency};
    use serde_json::json;
    use std::sync::Arc;

    fn test_profile() -> UserProfile {
        ProfileDraft {
            name: "Minji".to_string(),
            living_in_korea: Residency::Yes,
            stay_duration: "2 years".to_string(),
            visa_type: "E7".to_string(),
            ..ProfileDraft::default()
        }
        .resolve()
        .expect("consented draft resolves")
    }

    mod fetch_guard_tests {
        use super::*;

        #[test]
        fn no_profile_means_no_fetch() {
            assert!(!fetch_needed(None, &[]));
        }

        #[test]
        fn profile_with_empty_cache_triggers_the_fetch() {
            assert!(fetch_needed(Some(&test_profile()), &[]));
        }

        #[test]
        fn a_cached_list_suppresses_further_fetches() {
            let cached = vec![Scenario {
                title: "방향 묻기".to_string(),
                content: "어디 가세요?".to_string(),
            }];
            assert!(!fetch_needed(Some(&test_profile()), &cached));
        }
    }

    #[tokio::test]
    async fn posts_the_profile_and_returns_the_scenarios() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .withf(|path, body| {
                path == SCENARIOS_PATH && body["Name"] == "Minji" && body["Visa_Type"] == "E7"
            })
            .times(1)
            .returning(|_, _| {
                Ok(json!({
                    "scenarios": [
                        { "title": "옷 고르고 사기", "content": "무슨 옷을 찾으세요?" },
                    ]
                }))
            });

        let service = ScenarioService::new(Api::new(Arc::new(raw)));
        let scenarios = service
            .generate(&test_profile())
            .await
            .expect("generation succeeds");

        assert_eq!(scenarios.len(), 1);
        assert_eq!(scenarios[0].title, "옷 고르고 사기");
    }

    #[tokio::test]
    async fn a_transport_failure_surfaces_as_a_service_error() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .returning(|_, _| Err(ApiError::Network("connection refused".to_string())));

        let service = ScenarioService::new(Api::new(Arc::new(raw)));
        let result = service.generate(&test_profile()).await;

        assert!(matches!(
            result,
            Err(ServiceError::Api(ApiError::Network(_)))
        ));
    }

    #[tokio::test]
    async fn a_delimited_string_payload_is_a_parse_error() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .returning(|_, _| Ok(json!({ "scenarios": "1. 하나\n2. 둘" })));

        let service = ScenarioService::new(Api::new(Arc::new(raw)));
        let result = service.generate(&test_profile()).await;

        assert!(matches!(
            result,
            Err(ServiceError::Api(ApiError::ParseError(_)))
        ));
    }
}
