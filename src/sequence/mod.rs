pub mod commands;
pub mod orchestrator;
mod types;

pub use orchestrator::run_sequence;
pub use types::{RunReport, SequenceEvent, SequenceInput, Step, StepOutcome};
