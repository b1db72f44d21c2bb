use super::catalog::with_popular_services;
use crate::error::FormError;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;

/// The input control a field is rendered with. Drives which rule `validate` applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Select,
    Textarea,
}

impl FieldKind {
    /// Kinds that carry a rule beyond "required".
    pub fn has_own_rule(self) -> bool {
        matches!(self, FieldKind::Email | FieldKind::Tel | FieldKind::Select)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Text => write!(f, "text"),
            FieldKind::Email => write!(f, "email"),
            FieldKind::Tel => write!(f, "tel"),
            FieldKind::Select => write!(f, "select"),
            FieldKind::Textarea => write!(f, "textarea"),
        }
    }
}

/// Static description of one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub id: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    /// Human label shown when prompting for the field. Falls back to the id.
    /// The outbound message uses its own fixed labels.
    #[serde(default)]
    pub label: Option<String>,
    /// Allowed values of a `select`. Empty accepts any non-empty value.
    #[serde(default)]
    pub options: Vec<String>,
}

impl FieldDescriptor {
    pub fn new(id: impl Into<String>, kind: FieldKind, required: bool) -> Self {
        Self {
            id: id.into(),
            kind,
            required,
            label: None,
            options: Vec::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = options;
        self
    }

    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }

    /// Whether the field takes part in the submit-time validation pass.
    pub fn is_checked_on_submit(&self) -> bool {
        self.required || self.kind.has_own_rule()
    }
}

/// An ordered, validated set of field descriptors.
///
/// Field order is presentation order: it decides which invalid field is
/// reported "first" after a failed submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormDefinition {
    fields: Vec<FieldDescriptor>,
}

#[derive(Deserialize)]
struct RawFormDefinition {
    fields: Vec<FieldDescriptor>,
}

impl FormDefinition {
    /// Builds a definition, rejecting empty or duplicate field ids.
    pub fn new(fields: Vec<FieldDescriptor>) -> Result<Self, FormError> {
        let mut seen = AHashSet::new();
        for (position, field) in fields.iter().enumerate() {
            if field.id.trim().is_empty() {
                return Err(FormError::EmptyFieldId { position });
            }
            if !seen.insert(field.id.as_str()) {
                return Err(FormError::DuplicateField(field.id.clone()));
            }
        }
        Ok(Self { fields })
    }

    /// Parses a definition of the form `{"fields": [{"id": ..., "kind": ..., "required": ...}]}`.
    pub fn from_json(json: &str) -> Result<Self, FormError> {
        let raw: RawFormDefinition =
            serde_json::from_str(json).map_err(|e| FormError::JsonParseError(e.to_string()))?;
        Self::new(raw.fields)
    }

    /// Loads a definition from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, FormError> {
        let content = fs::read_to_string(path).map_err(|e| {
            FormError::JsonParseError(format!("Could not read file '{}': {}", path, e))
        })?;
        Self::from_json(&content)
    }

    /// The standard quote-request form: name, phone, email, service, message.
    pub fn quote_request() -> Self {
        let fields = vec![
            FieldDescriptor::new("name", FieldKind::Text, true).with_label("Name"),
            FieldDescriptor::new("phone", FieldKind::Tel, true).with_label("Phone"),
            FieldDescriptor::new("email", FieldKind::Email, true).with_label("Email"),
            FieldDescriptor::new("service", FieldKind::Select, true)
                .with_label("Service Needed")
                .with_options(with_popular_services(Vec::new())),
            FieldDescriptor::new("message", FieldKind::Textarea, false).with_label("Message"),
        ];
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field(&self, id: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Like `field`, but an unknown id is an error.
    pub fn require_field(&self, id: &str) -> Result<&FieldDescriptor, FormError> {
        self.field(id)
            .ok_or_else(|| FormError::UnknownField(id.to_string()))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.id.as_str())
    }
}
