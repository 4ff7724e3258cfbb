//! Chat turn service.
//!
//! Posts the full transcript to the chat endpoint and returns the
//! assistant's reply. Turn limiting and input validation happen before the
//! service is reached (the transcript rejects invalid appends), so this is
//! purely the wire exchange.

use hanmal_domain::Transcript;

use crate::application::dto::{ChatTurnRequest, ChatTurnResponse};
use crate::application::ServiceError;
use crate::config::CHAT_PATH;
use crate::ports::outbound::ApiPort;

/// Service for chat turns
#[derive(Clone)]
pub struct ChatService<A: ApiPort> {
    api: A,
}

impl<A: ApiPort> ChatService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// POST the transcript so far and return the assistant reply.
    pub async fn request_reply(&self, transcript: &Transcript) -> Result<String, ServiceError> {
        let request = ChatTurnRequest::from_transcript(transcript);
        let response: ChatTurnResponse = self.api.post(CHAT_PATH, &request).await?;
        Ok(response.reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::api::Api;
    use crate::ports::outbound::{ApiError, MockRawApiPort};
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn posts_the_full_transcript_and_returns_the_reply() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .withf(|path, body| {
                let messages = match body["messages"].as_array() {
                    Some(m) => m,
                    None => return false,
                };
                path == CHAT_PATH
                    && messages.len() == 3
                    && messages[0]["role"] == "system"
                    && messages[1]["role"] == "assistant"
                    && messages[2]["role"] == "user"
                    && messages[2]["content"] == "안녕하세요"
            })
            .times(1)
            .returning(|_, _| Ok(json!({ "reply": "반갑습니다!" })));

        let mut transcript = Transcript::seeded("오늘 뭐 했어요?");
        transcript.push_user("안녕하세요").expect("turn accepted");

        let service = ChatService::new(Api::new(Arc::new(raw)));
        let reply = service
            .request_reply(&transcript)
            .await
            .expect("reply received");

        assert_eq!(reply, "반갑습니다!");
    }

    #[tokio::test]
    async fn an_http_failure_surfaces_as_a_service_error() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .returning(|_, _| Err(ApiError::Status(500)));

        let service = ChatService::new(Api::new(Arc::new(raw)));
        let result = service.request_reply(&Transcript::seeded("opener")).await;

        assert!(matches!(
            result,
            Err(ServiceError::Api(ApiError::Status(500)))
        ));
    }

    #[tokio::test]
    async fn a_rejected_sixth_turn_never_reaches_the_wire() {
        // The transcript itself refuses the append, so the service must not
        // be called at all once the limit is reached.
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json().times(0);

        let mut transcript = Transcript::seeded("opener");
        for _ in 0..5 {
            transcript.push_user("안녕하세요").expect("turn accepted");
            transcript.push_assistant("ok");
        }
        let before = transcript.clone();

        assert!(transcript.push_user("한 번 더").is_err());
        assert_eq!(transcript, before);
        // No request_reply call: the mock's times(0) expectation verifies on
        // drop that nothing was sent.
        drop(ChatService::new(Api::new(Arc::new(raw))));
    }
}
