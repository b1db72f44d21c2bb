use crate::draft::DraftStore;
use crate::engine::{FormEngine, SubmitOutcome};
use crate::error::SubmitError;
use crate::validation::ValidationReport;
use tokio::time::sleep;

/// The page the form lives on, as seen from the hand-off sequence.
pub trait HandoffHost {
    /// Navigates to the `mailto:` URI so the visitor's mail client opens.
    fn open_mail_client(&mut self, mailto: &str);
    /// Replaces the form with the local success message.
    fn show_confirmation(&mut self);
    /// Leaves the page for the confirmation view.
    fn navigate(&mut self, location: &str);
}

/// How a hand-off attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandoffOutcome {
    /// Validation failed; the host should scroll to `report.first_invalid()`.
    Rejected(ValidationReport),
    /// The mail client was asked to open. Whether it did is unknown.
    Sent { mailto: String },
}

/// Submits the form and, on success, runs the fire-and-forget mail hand-off:
///
/// 1. open the `mailto:` URI
/// 2. after the reset delay, show the confirmation and clear drafts and fields
/// 3. after the redirect delay, navigate to the confirmation page
///
/// There is no feedback channel from the mail client, so success is assumed
/// once the URI has been opened. Nothing is retried.
///
/// Dropping the future before step 2 calls
/// [`FormEngine::abort_submission`]: the form becomes interactive again and
/// keeps its drafts. Dropping it during the redirect wait changes nothing.
pub async fn hand_off<S, H>(
    engine: &mut FormEngine<S>,
    host: &mut H,
) -> Result<HandoffOutcome, SubmitError>
where
    S: DraftStore,
    H: HandoffHost,
{
    let submission = match engine.submit()? {
        SubmitOutcome::Rejected(report) => return Ok(HandoffOutcome::Rejected(report)),
        SubmitOutcome::Accepted(submission) => submission,
    };
    let mut in_flight = InFlight {
        engine,
        completed: false,
    };

    host.open_mail_client(&submission.mailto);

    sleep(in_flight.engine.config().reset_delay()).await;
    host.show_confirmation();
    in_flight.engine.complete_submission();
    in_flight.completed = true;

    sleep(in_flight.engine.config().redirect_delay()).await;
    let location = in_flight.engine.config().confirmation_page.clone();
    log::debug!("Navigating to '{}'", location);
    host.navigate(&location);

    Ok(HandoffOutcome::Sent {
        mailto: submission.mailto,
    })
}

/// Releases the engine's in-flight flag if the hand-off never reached the reset.
struct InFlight<'a, S: DraftStore> {
    engine: &'a mut FormEngine<S>,
    completed: bool,
}

impl<S: DraftStore> Drop for InFlight<'_, S> {
    fn drop(&mut self) {
        if !self.completed {
            self.engine.abort_submission();
        }
    }
}
