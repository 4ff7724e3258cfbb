//! Service providers for the presentation layer
//!
//! This module provides Dioxus context providers for application services.
//! Components use `use_context` to access services without depending on
//! infrastructure implementations.
//!
//! Services are generic over `ApiPort`; the composition root instantiates
//! them with the typed `Api` wrapper over the object-safe `RawApiPort`.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::api::Api;
use crate::application::services::{ChatService, ScenarioService};
use crate::ports::outbound::ApiPort;

/// Concrete service bundle type used by the UI.
pub type UiServices = Services<Api>;

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services<A: ApiPort> {
    pub scenario: Arc<ScenarioService<A>>,
    pub chat: Arc<ChatService<A>>,
}

impl<A: ApiPort + Clone> Services<A> {
    /// Create all services with the given API port
    pub fn new(api: A) -> Self {
        Self {
            scenario: Arc::new(ScenarioService::new(api.clone())),
            chat: Arc::new(ChatService::new(api)),
        }
    }
}

/// Hook to access the ScenarioService from context
pub fn use_scenario_service() -> Arc<ScenarioService<Api>> {
    let services = use_context::<UiServices>();
    services.scenario.clone()
}

/// Hook to access the ChatService from context
pub fn use_chat_service() -> Arc<ChatService<Api>> {
    let services = use_context::<UiServices>();
    services.chat.clone()
}
