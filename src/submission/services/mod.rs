//! Intake orchestration services.

mod compose;
mod intake;

pub use compose::compose_draft;
pub use intake::{IntakeAccepted, IntakeError, IntakeResult, IntakeService};
