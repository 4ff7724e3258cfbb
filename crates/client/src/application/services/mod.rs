//! Application services for the remote scenario and chat endpoints.

pub mod chat_service;
pub mod scenario_service;

pub use chat_service::ChatService;
pub use scenario_service::{fetch_needed, ScenarioService};
