//! # quote-form - Quote Request Form Engine
//!
//! **quote-form** holds the logic behind a small business's quote-request
//! contact form: field validation, live phone number formatting, inline error
//! state, best-effort draft persistence and the `mailto:` hand-off that sends
//! the finished request through the visitor's own mail client.
//!
//! The crate never touches a DOM. A thin host adapter forwards UI events to a
//! [`FormEngine`](engine::FormEngine) and renders what it returns.
//!
//! ## Core Workflow
//!
//! 1.  **Describe the form**: Build a [`FormDefinition`](form::FormDefinition) from field
//!     descriptors, load one from JSON, or use `FormDefinition::quote_request()`.
//! 2.  **Pick a draft store**: Any [`DraftStore`](draft::DraftStore) works. `MemoryDraftStore`
//!     and `FileDraftStore` ship with the crate.
//! 3.  **Forward events**: Call `input`, `focus` and `blur` as the visitor edits fields and
//!     render the returned values and `FieldPresentation`.
//! 4.  **Submit**: `hand_off` validates every field, opens the `mailto:` URI through the host,
//!     then resets the form and redirects after fixed delays.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use quote_form::prelude::*;
//!
//! let mut engine = FormEngine::new(
//!     FormDefinition::quote_request(),
//!     FormConfig::default(),
//!     MemoryDraftStore::new(),
//! );
//!
//! engine.input("name", "Jane").unwrap();
//! let shown = engine.input("phone", "0790256695").unwrap().to_string();
//! assert_eq!(shown, "079 025 6695");
//! engine.input("email", "jane@x.com").unwrap();
//! engine.input("service", "Window Cleaning").unwrap();
//!
//! match engine.submit().unwrap() {
//!     SubmitOutcome::Accepted(submission) => println!("Open {}", submission.mailto),
//!     SubmitOutcome::Rejected(report) => {
//!         if let Some((id, verdict)) = report.first_invalid() {
//!             println!("{}: {}", id, verdict.message);
//!         }
//!     }
//! }
//! ```

pub mod config;
pub mod counter;
pub mod draft;
pub mod engine;
pub mod error;
pub mod form;
pub mod prelude;
pub mod submission;
pub mod validation;
