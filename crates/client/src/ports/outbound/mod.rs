//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must
//! implement, allowing application and presentation code to interact with
//! the network, the platform, and the speech capability without depending
//! on concrete implementations.

pub mod api_port;
pub mod platform;
pub mod platform_port;
pub mod speech_port;

pub use api_port::{ApiError, ApiPort, RawApiPort};
#[cfg(any(test, feature = "testing"))]
pub use api_port::MockRawApiPort;
pub use platform::{storage_keys, DocumentProvider, LogProvider, SleepProvider, StorageProvider};
pub use platform_port::PlatformPort;
pub use speech_port::{SpeechError, SpeechPort};
