//! Mock platform for tests
//!
//! Mocks belong in the adapters layer (not ports) because they are concrete
//! implementations of port traits. The mock sleeps complete immediately and
//! storage is a plain in-memory map shared between clones.

use crate::ports::outbound::platform::{
    DocumentProvider, LogProvider, SleepProvider, StorageProvider,
};
use crate::state::Platform;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::{future::Future, pin::Pin};

/// Sleep provider whose futures resolve immediately
#[derive(Clone, Default)]
pub struct MockSleepProvider;

impl SleepProvider for MockSleepProvider {
    fn sleep_ms(&self, _ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(std::future::ready(()))
    }
}

/// In-memory storage shared between clones
#[derive(Clone, Default)]
pub struct MockStorageProvider {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl StorageProvider for MockStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if let Ok(mut guard) = self.values.lock() {
            guard.insert(key.to_string(), value.to_string());
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        self.values.lock().ok().and_then(|g| g.get(key).cloned())
    }

    fn remove(&self, key: &str) {
        if let Ok(mut guard) = self.values.lock() {
            guard.remove(key);
        }
    }
}

/// Log provider that swallows everything
#[derive(Clone, Default)]
pub struct MockLogProvider;

impl LogProvider for MockLogProvider {
    fn info(&self, _msg: &str) {}
    fn error(&self, _msg: &str) {}
    fn debug(&self, _msg: &str) {}
    fn warn(&self, _msg: &str) {}
}

/// Document provider recording the last title set and scroll targets
#[derive(Clone, Default)]
pub struct MockDocumentProvider {
    last_title: Arc<Mutex<Option<String>>>,
    scrolled_to: Arc<Mutex<Vec<String>>>,
}

impl MockDocumentProvider {
    pub fn last_title(&self) -> Option<String> {
        self.last_title.lock().ok().and_then(|g| g.clone())
    }

    pub fn scrolled_to(&self) -> Vec<String> {
        self.scrolled_to.lock().map(|g| g.clone()).unwrap_or_default()
    }
}

impl DocumentProvider for MockDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Ok(mut guard) = self.last_title.lock() {
            *guard = Some(title.to_string());
        }
    }

    fn scroll_into_view(&self, element_id: &str) {
        if let Ok(mut guard) = self.scrolled_to.lock() {
            guard.push(element_id.to_string());
        }
    }
}

/// Create a platform wired with mocks
pub fn create_mock_platform() -> Platform {
    Platform::new(
        MockSleepProvider,
        MockStorageProvider::default(),
        MockLogProvider,
        MockDocumentProvider::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_storage_round_trips_between_clones() {
        let storage = MockStorageProvider::default();
        let other = storage.clone();

        storage.save("key", "value");
        assert_eq!(other.load("key"), Some("value".to_string()));

        other.remove("key");
        assert_eq!(storage.load("key"), None);
    }
}
