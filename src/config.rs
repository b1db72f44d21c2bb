use crate::counter::DEFAULT_MESSAGE_LIMIT;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Deployment settings for a quote form, persisted as TOML.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Mailbox the quote request is addressed to.
    pub recipient: String,
    pub subject_prefix: String,
    /// Subject suffix when neither name nor email were given.
    pub subject_fallback: String,
    /// Namespace prepended to every field id in the draft store.
    pub draft_prefix: String,
    /// Wait between opening the mail client and resetting the page.
    pub reset_delay_ms: u64,
    /// Wait between the reset and navigating to the confirmation page.
    pub redirect_delay_ms: u64,
    pub confirmation_page: String,
    pub message_limit: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            recipient: "quotes@example.com".to_string(),
            subject_prefix: "Quote Request from ".to_string(),
            subject_fallback: "Website".to_string(),
            draft_prefix: "ubuntu_form_".to_string(),
            reset_delay_ms: 700,
            redirect_delay_ms: 1500,
            confirmation_page: "thankyou.html".to_string(),
            message_limit: DEFAULT_MESSAGE_LIMIT,
        }
    }
}

impl FormConfig {
    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns a list of problems. Empty if the config is usable.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !crate::validation::is_valid_email(&self.recipient) {
            errors.push(format!("recipient '{}' is not an email address", self.recipient));
        }

        if self.draft_prefix.is_empty() {
            errors.push("draft_prefix must not be empty".to_string());
        }

        if self.message_limit == 0 {
            errors.push("message_limit must be at least 1".to_string());
        }

        errors
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}
