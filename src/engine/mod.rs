use crate::config::FormConfig;
use crate::counter::{CharacterCounter, CounterReading};
use crate::draft::{DraftKeyspace, DraftStore};
use crate::error::{FormError, SubmitError};
use crate::form::{FieldKind, FormDefinition};
use crate::submission::OutboundMessage;
use crate::validation::{
    FieldPresentation, ValidationReport, ValidationVerdict, format_phone, validate,
};
use ahash::AHashMap;

/// The result of a submit attempt that was allowed to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field failed. Nothing was composed.
    Rejected(ValidationReport),
    /// Every field passed. The form stays inert until
    /// [`FormEngine::complete_submission`] is called.
    Accepted(Submission),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub message: OutboundMessage,
    /// The `mailto:` URI the host should navigate to.
    pub mailto: String,
    pub report: ValidationReport,
}

/// Reacts to field events of one form: formats, validates, persists drafts
/// and composes the outbound message.
///
/// Every reaction is a synchronous call on a single owner; the host forwards
/// UI events one at a time.
pub struct FormEngine<S> {
    form: FormDefinition,
    config: FormConfig,
    drafts: DraftKeyspace<S>,
    values: AHashMap<String, String>,
    presentation: AHashMap<String, FieldPresentation>,
    counter: CharacterCounter,
    submitting: bool,
}

impl<S: DraftStore> FormEngine<S> {
    /// Creates an engine and pre-populates every field that has a saved draft.
    pub fn new(form: FormDefinition, config: FormConfig, store: S) -> Self {
        let drafts = DraftKeyspace::new(store, config.draft_prefix.clone());
        let counter = CharacterCounter::new(config.message_limit);
        let mut engine = Self {
            values: form.ids().map(|id| (id.to_string(), String::new())).collect(),
            presentation: AHashMap::new(),
            form,
            config,
            drafts,
            counter,
            submitting: false,
        };
        let restored = engine.restore_drafts();
        if restored > 0 {
            log::info!("Restored {} draft value(s) under '{}'", restored, engine.drafts.prefix());
        }
        engine
    }

    /// Copies saved drafts into the field values. Returns how many were found.
    fn restore_drafts(&mut self) -> usize {
        let mut restored = 0;
        for id in self.form.ids() {
            if let Some(saved) = self.drafts.load(id) {
                self.values.insert(id.to_string(), saved);
                restored += 1;
            }
        }
        restored
    }

    /// Handles a keystroke or paste: reformats phone fields, stores the value
    /// and writes the draft. Returns the value the field should now display.
    ///
    /// Edits made while a submission is in flight are accepted but discarded
    /// by [`complete_submission`](Self::complete_submission); hosts should
    /// disable the fields until then.
    pub fn input(&mut self, id: &str, raw: &str) -> Result<&str, FormError> {
        let kind = self.form.require_field(id)?.kind;
        let value = match kind {
            FieldKind::Tel => format_phone(raw),
            _ => raw.to_string(),
        };
        log::debug!("Input on '{}' ({})", id, kind);

        self.drafts.save(id, &value);
        let slot = self.values.entry(id.to_string()).or_default();
        *slot = value;
        Ok(slot.as_str())
    }

    /// Focus hides the field's inline error until the next blur.
    pub fn focus(&mut self, id: &str) -> Result<(), FormError> {
        self.form.require_field(id)?;
        if let Some(presentation) = self.presentation.get_mut(id) {
            presentation.clear_error();
        }
        Ok(())
    }

    /// Validates the field's current value and updates its presentation.
    pub fn blur(&mut self, id: &str) -> Result<ValidationVerdict, FormError> {
        let field = self.form.require_field(id)?;
        let raw = self.values.get(id).map(String::as_str).unwrap_or_default();
        let verdict = validate(field, raw);
        log::debug!("Validated '{}': valid={}", id, verdict.valid);

        self.presentation
            .insert(id.to_string(), FieldPresentation::from_verdict(&verdict, raw));
        Ok(verdict)
    }

    /// Validates, in form order, every field that is required or has a rule of
    /// its own, updating each one's presentation.
    pub fn validate_all(&mut self) -> ValidationReport {
        let mut report = ValidationReport::default();
        for field in self.form.fields().iter().filter(|f| f.is_checked_on_submit()) {
            let raw = self.values.get(&field.id).map(String::as_str).unwrap_or_default();
            let verdict = validate(field, raw);
            self.presentation
                .insert(field.id.clone(), FieldPresentation::from_verdict(&verdict, raw));
            report.entries.push((field.id.clone(), verdict));
        }
        report
    }

    /// Runs the submit-time validation pass and, if everything passes,
    /// composes the outbound message and marks the form inert.
    pub fn submit(&mut self) -> Result<SubmitOutcome, SubmitError> {
        if self.submitting {
            return Err(SubmitError::InProgress);
        }

        let report = self.validate_all();
        if let Some((id, verdict)) = report.first_invalid() {
            log::info!("Submission rejected: '{}' {}", id, verdict.message);
            return Ok(SubmitOutcome::Rejected(report));
        }

        let message = OutboundMessage::compose(&self.config, &self.values);
        let mailto = message.to_mailto();
        self.submitting = true;
        log::info!("Submission accepted: {}", message.subject);

        Ok(SubmitOutcome::Accepted(Submission {
            message,
            mailto,
            report,
        }))
    }

    /// Ends an accepted submission: drops the drafts, empties the form and
    /// makes it interactive again.
    pub fn complete_submission(&mut self) {
        self.clear_form();
        self.submitting = false;
        log::info!("Submission completed, form reset");
    }

    /// Ends an accepted submission whose hand-off was cancelled before the
    /// reset. The form becomes interactive again and keeps its values and
    /// drafts, since the request may never have reached the mail client.
    pub fn abort_submission(&mut self) {
        if self.submitting {
            self.submitting = false;
            log::info!("Submission aborted, drafts kept");
        }
    }

    /// Explicit reset by the visitor.
    pub fn reset(&mut self) {
        self.clear_form();
        log::info!("Form reset");
    }

    fn clear_form(&mut self) {
        let failures = self.drafts.clear(self.form.ids());
        if failures > 0 {
            log::warn!("{} draft value(s) could not be removed", failures);
        }
        for value in self.values.values_mut() {
            value.clear();
        }
        self.presentation.clear();
    }

    pub fn value(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    pub fn values(&self) -> &AHashMap<String, String> {
        &self.values
    }

    /// Presentation of a field. Fields never validated are neutral.
    pub fn presentation(&self, id: &str) -> FieldPresentation {
        self.presentation.get(id).cloned().unwrap_or_default()
    }

    /// Character count of a free-text field.
    pub fn character_count(&self, id: &str) -> Result<CounterReading, FormError> {
        self.form.require_field(id)?;
        Ok(self.counter.read(self.value(id).unwrap_or_default()))
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn form(&self) -> &FormDefinition {
        &self.form
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        self.drafts.store()
    }

    pub fn store_mut(&mut self) -> &mut S {
        self.drafts.store_mut()
    }

    pub fn into_store(self) -> S {
        self.drafts.into_store()
    }
}
