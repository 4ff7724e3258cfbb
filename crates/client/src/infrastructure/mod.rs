//! Infrastructure adapters - concrete implementations of the outbound ports.

pub mod http_client;
pub mod platform;
pub mod speech;

use std::future::Future;

/// Spawn a UI-scoped async task.
///
/// Must be called from within the Dioxus runtime (components, hooks,
/// effects). Futures are local to the UI thread on both targets.
pub fn spawn_task<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    dioxus::prelude::spawn(fut);
}
