mod handoff;
mod message;

pub use handoff::{HandoffHost, HandoffOutcome, hand_off};
pub use message::{BODY_FIELDS, OutboundMessage, encode_component};
