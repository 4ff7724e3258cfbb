//! Hanmal Client - Dioxus UI for the conversation practice flow.
//!
//! Layering follows the port/adapter split: `ports` holds the outbound
//! trait boundaries (HTTP, platform services, speech capability),
//! `infrastructure` the concrete adapters per target, `application` the
//! typed API wrapper and services, `ui` the routes, presentation state,
//! and views.

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod state;
pub mod ui;

pub use ui::presentation;
pub use ui::{use_platform, use_speech, Platform, Speech};
