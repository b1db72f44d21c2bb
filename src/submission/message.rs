use crate::config::FormConfig;
use ahash::AHashMap;
use itertools::Itertools;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use std::fmt;

/// Field ids and labels of the body lines, in the order they are written.
pub const BODY_FIELDS: [(&str, &str); 5] = [
    ("name", "Name"),
    ("phone", "Phone"),
    ("email", "Email"),
    ("service", "Service Needed"),
    ("message", "Message"),
];

/// Characters `encodeURIComponent` leaves untouched.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// A composed quote request, ready to be encoded as a `mailto:` URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundMessage {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl OutboundMessage {
    /// Builds the message from the submitted field values.
    ///
    /// The subject names the submitter by name, then email, then the
    /// configured fallback; blank values are skipped. Body lines carry the
    /// values exactly as typed. Missing fields produce empty body lines.
    pub fn compose(config: &FormConfig, values: &AHashMap<String, String>) -> Self {
        let submitter = [field_value(values, "name"), field_value(values, "email")]
            .into_iter()
            .map(str::trim)
            .find(|v| !v.is_empty())
            .unwrap_or(config.subject_fallback.as_str());

        let body = BODY_FIELDS
            .iter()
            .map(|(id, label)| format!("{}: {}", label, field_value(values, id)))
            .join("\n");

        Self {
            recipient: config.recipient.clone(),
            subject: format!("{}{}", config.subject_prefix, submitter),
            body,
        }
    }

    pub fn to_mailto(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            encode_component(&self.subject),
            encode_component(&self.body)
        )
    }
}

fn field_value<'a>(values: &'a AHashMap<String, String>, id: &str) -> &'a str {
    values.get(id).map(String::as_str).unwrap_or_default()
}

impl fmt::Display for OutboundMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "To: {}", self.recipient)?;
        writeln!(f, "Subject: {}", self.subject)?;
        writeln!(f)?;
        write!(f, "{}", self.body)
    }
}
