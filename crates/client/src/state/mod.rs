//! Concrete cross-cutting state containers.

pub mod platform;

pub use platform::Platform;
