//! Wire DTOs for the scenario and chat endpoints.
//!
//! The scenario request body is the `UserProfile` itself (its serde names
//! are the wire names), so only the response shapes and the chat turn
//! request live here.

use serde::{Deserialize, Serialize};

use hanmal_domain::{Message, Role, Scenario, Transcript};

/// Response of `POST /scenarios`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioListResponse {
    pub scenarios: Vec<ScenarioDto>,
}

/// One proposed scenario on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioDto {
    pub title: String,
    pub content: String,
}

impl From<ScenarioDto> for Scenario {
    fn from(dto: ScenarioDto) -> Self {
        Scenario {
            title: dto.title,
            content: dto.content,
        }
    }
}

/// Request body of `POST /chat`: the full transcript so far.
#[derive(Debug, Clone, Serialize)]
pub struct ChatTurnRequest {
    pub messages: Vec<MessageDto>,
}

impl ChatTurnRequest {
    pub fn from_transcript(transcript: &Transcript) -> Self {
        Self {
            messages: transcript.messages().iter().map(MessageDto::from).collect(),
        }
    }
}

/// One transcript entry on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDto {
    pub role: Role,
    pub content: String,
}

impl From<&Message> for MessageDto {
    fn from(message: &Message) -> Self {
        Self {
            role: message.role,
            content: message.content.clone(),
        }
    }
}

/// Response of `POST /chat`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatTurnResponse {
    pub reply: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_carries_the_whole_transcript_in_order() {
        let mut transcript = Transcript::seeded("오늘 뭐 했어요?");
        transcript.push_user("공원에 갔어요").expect("turn accepted");

        let request = ChatTurnRequest::from_transcript(&transcript);
        let json = serde_json::to_value(&request).expect("request serializes");

        let messages = json["messages"].as_array().expect("messages array");
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[1]["role"], "assistant");
        assert_eq!(messages[2]["role"], "user");
        assert_eq!(messages[2]["content"], "공원에 갔어요");
    }

    #[test]
    fn scenario_response_parses_the_structured_list() {
        let json = serde_json::json!({
            "scenarios": [
                { "title": "옷 고르고 사기", "content": "무슨 옷을 찾으세요?" },
                { "title": "방향 묻기", "content": "어디 가고 싶으세요?" },
            ]
        });

        let response: ScenarioListResponse =
            serde_json::from_value(json).expect("valid response shape");
        let scenarios: Vec<Scenario> = response.scenarios.into_iter().map(Scenario::from).collect();

        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].title, "옷 고르고 사기");
        assert_eq!(scenarios[1].content, "어디 가고 싶으세요?");
    }

    #[test]
    fn a_string_scenario_payload_is_rejected() {
        // Legacy revisions returned one delimited string; that shape is no
        // longer accepted.
        let json = serde_json::json!({ "scenarios": "1. 첫 번째\n2. 두 번째" });

        assert!(serde_json::from_value::<ScenarioListResponse>(json).is_err());
    }
}
