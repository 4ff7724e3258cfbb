//! Platform abstraction ports for cross-platform compatibility
//!
//! These traits abstract platform-specific operations so that:
//! 1. Application/presentation code remains platform-agnostic
//! 2. Platform-specific code is isolated in infrastructure
//! 3. Code becomes easily testable with mock implementations
//!
//! The `Platform` struct (DI container) that aggregates these traits lives
//! in `state/platform.rs`; this module contains only trait definitions.

use std::{future::Future, pin::Pin};

/// Async sleep abstraction
///
/// Used to avoid `#[cfg]` branches in UI code (e.g. the repeated-utterance
/// pacing in the chat view).
pub trait SleepProvider: Clone + 'static {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;
}

/// Persistent storage abstraction (localStorage/file-based)
pub trait StorageProvider: Clone + 'static {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);
}

/// Logging abstraction
pub trait LogProvider: Clone + 'static {
    fn info(&self, msg: &str);
    fn error(&self, msg: &str);
    fn debug(&self, msg: &str);
    fn warn(&self, msg: &str);
}

/// Browser document operations (page title, scrolling)
pub trait DocumentProvider: Clone + 'static {
    /// Set the browser page title (no-op on desktop)
    fn set_page_title(&self, title: &str);

    /// Smooth-scroll the element with the given id into view
    /// (no-op on desktop)
    fn scroll_into_view(&self, element_id: &str);
}

/// Storage key constants
///
/// Kept in the ports layer as they define the contract for what keys are
/// used across the application.
pub mod storage_keys {
    pub const API_URL: &str = "hanmal_api_url";
}
