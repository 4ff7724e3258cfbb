//! Conversation scenarios proposed by the scenario service.

use serde::{Deserialize, Serialize};

/// A candidate conversation topic with its opening line.
///
/// The scenario service returns these as structured records; the `content`
/// doubles as the assistant's opening message when a chat session starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub title: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_the_service_shape() {
        let json = r#"{"title":"상사에게 보고하기","content":"팀장님, 프로젝트 진행 상황을 말씀드릴게요."}"#;
        let scenario: Scenario = serde_json::from_str(json).expect("valid scenario JSON");

        assert_eq!(scenario.title, "상사에게 보고하기");
        assert!(scenario.content.starts_with("팀장님"));
    }
}
