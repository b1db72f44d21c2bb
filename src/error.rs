use thiserror::Error;

/// Errors raised while building a form definition or addressing its fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Failed to parse form definition JSON: {0}")]
    JsonParseError(String),

    #[error("Form field at position {position} has an empty id")]
    EmptyFieldId { position: usize },

    #[error("Field id '{0}' is declared more than once in the form")]
    DuplicateField(String),

    #[error("Field '{0}' is not part of this form")]
    UnknownField(String),
}

/// Errors reported by a draft store backend.
///
/// The engine treats every variant as "persistence unavailable": it logs the
/// failure and carries on.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Draft storage is unavailable: {0}")]
    Unavailable(String),

    #[error("Draft storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Draft storage could not be encoded or decoded: {0}")]
    Codec(String),
}

/// Errors that can occur when loading or saving the form configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config TOML: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Errors that stop a submission attempt before a verdict is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("A submission is already being handed off; the form is inert until it completes")]
    InProgress,

    #[error(transparent)]
    Form(#[from] FormError),
}
