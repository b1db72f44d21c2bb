//! Common test utilities: stores, hosts and ready-made submissions.
use quote_form::prelude::*;

/// The values from the reference quote request.
#[allow(dead_code)]
pub const JANE: [(&str, &str); 5] = [
    ("name", "Jane"),
    ("phone", "0790256695"),
    ("email", "jane@x.com"),
    ("service", "Window Cleaning"),
    ("message", "hi"),
];

/// Config with zero hand-off delays so async tests finish immediately.
#[allow(dead_code)]
pub fn instant_config() -> FormConfig {
    FormConfig {
        recipient: "quotes@example.com".to_string(),
        reset_delay_ms: 0,
        redirect_delay_ms: 0,
        ..FormConfig::default()
    }
}

/// An engine for the standard quote form backed by the given store.
#[allow(dead_code)]
pub fn quote_engine<S: DraftStore>(store: S) -> FormEngine<S> {
    FormEngine::new(FormDefinition::quote_request(), instant_config(), store)
}

/// Types every `(id, value)` pair into the engine.
#[allow(dead_code)]
pub fn fill<S: DraftStore>(engine: &mut FormEngine<S>, values: &[(&str, &str)]) {
    for (id, value) in values {
        engine.input(id, value).unwrap();
    }
}

/// A store whose every operation fails, as when storage access is denied.
#[allow(dead_code)]
#[derive(Default)]
pub struct DeniedStore;

impl DraftStore for DeniedStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("access denied".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("quota exceeded".to_string()))
    }

    fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("access denied".to_string()))
    }
}

/// Records what the hand-off asked the page to do, in order.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub events: Vec<String>,
}

impl HandoffHost for RecordingHost {
    fn open_mail_client(&mut self, mailto: &str) {
        self.events.push(format!("open {}", mailto));
    }

    fn show_confirmation(&mut self) {
        self.events.push("confirmation".to_string());
    }

    fn navigate(&mut self, location: &str) {
        self.events.push(format!("navigate {}", location));
    }
}
