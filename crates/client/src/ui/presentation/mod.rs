//! Presentation layer - services bundle, state containers, views, components.

pub mod components;
pub mod services;
pub mod state;
pub mod views;

pub use services::{use_chat_service, use_scenario_service, Services, UiServices};
