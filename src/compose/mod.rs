// Compose orchestration — subprocess management, streaming output, cancellation.

pub mod engine;
pub mod run;
pub mod types;

pub use engine::ensure_available;
pub use run::spawn;
pub use types::{CancelToken, ComposeCommand, ComposeResult, OutputLine};
