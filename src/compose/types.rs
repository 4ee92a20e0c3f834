use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Shared cancellation flag. The sequencer keeps one and hands a clone to
/// every subprocess supervisor; the supervisor's poll loop kills its child
/// once the flag is raised.
#[derive(Debug, Clone)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    /// Raise the flag. Safe to call more than once.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Describes a `docker compose` invocation. The `args` field is the full
/// argument list passed to `docker` (the sequence layer assembles it,
/// `compose` subcommand included). The subprocess runs in `work_dir` so
/// compose file lookup happens there. `timeout: None` means run until the
/// process exits or is cancelled — the log-follow step relies on this.
pub struct ComposeCommand {
    pub args: Vec<String>,
    pub work_dir: PathBuf,
    pub timeout: Option<Duration>,
}

/// Outcome of a compose subprocess.
#[derive(Debug)]
pub struct ComposeResult {
    pub success: bool,
    pub exit_code: Option<i32>,
    pub log: String,
    pub cancelled: bool,
    pub timed_out: bool,
}

/// Streamed output from a running compose subprocess.
#[derive(Debug)]
pub enum OutputLine {
    Stdout(String),
    Stderr(String),
    Done(ComposeResult),
}
