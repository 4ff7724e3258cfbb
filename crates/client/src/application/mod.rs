//! Application layer - typed API access, wire DTOs, and services.

pub mod api;
pub mod dto;
pub mod services;

pub use services::{ChatService, ScenarioService};

use thiserror::Error;

use crate::ports::outbound::ApiError;

/// Errors surfaced by application services.
#[derive(Debug, Error, Clone)]
pub enum ServiceError {
    #[error(transparent)]
    Api(#[from] ApiError),
}
