//! Prelude module for convenient imports
//!
//! Re-exports the types needed to describe a form, drive a `FormEngine` and
//! run the mail hand-off.

// Engine and submission
pub use crate::engine::{FormEngine, SubmitOutcome, Submission};
pub use crate::submission::{HandoffHost, HandoffOutcome, OutboundMessage, hand_off};

// Form description
pub use crate::form::{FieldDescriptor, FieldKind, FormDefinition};

// Validation and formatting
pub use crate::validation::{
    FieldPresentation, FieldState, ValidationReport, ValidationVerdict, format_phone,
    is_valid_email, is_valid_phone, strip_non_digits, validate,
};

// Drafts and configuration
pub use crate::config::FormConfig;
pub use crate::counter::{CharacterCounter, CounterReading};
pub use crate::draft::{DraftStore, FileDraftStore, MemoryDraftStore};

// Error types
pub use crate::error::{ConfigError, FormError, StoreError, SubmitError};
