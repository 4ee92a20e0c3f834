use std::path::PathBuf;

use crate::config::Config;

/// Input to the lifecycle sequence.
pub struct SequenceInput {
    pub config: Config,
    pub work_dir: PathBuf,
}

/// The four compose lifecycle steps, in execution order.
///
/// The marker touch precedes all of them but is not a step: it spawns no
/// subprocess and never gates anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Remove,
    Build,
    Up,
    Logs,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Remove => "remove",
            Step::Build => "build",
            Step::Up => "up",
            Step::Logs => "logs",
        }
    }
}

/// Outcome of one executed step.
#[derive(Debug, Clone)]
pub struct StepOutcome {
    pub step: Step,
    pub success: bool,
    pub exit_code: Option<i32>,
    pub log: String,
}

/// Assembled after the sequence ends, whether it ran to completion or was
/// halted by the build gate. `exit_code` is the exit code of the last
/// executed step; earlier failures do not propagate into it.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub steps: Vec<StepOutcome>,
    pub halted_at: Option<Step>,
    pub exit_code: i32,
}

impl RunReport {
    pub fn outcome(&self, step: Step) -> Option<&StepOutcome> {
        self.steps.iter().find(|o| o.step == step)
    }
}

/// Events emitted by the sequencer.
#[derive(Debug)]
pub enum SequenceEvent {
    MarkerTouched(PathBuf),
    /// Marker touch is best-effort; this never halts the sequence.
    MarkerFailed(String),
    StepStarted(Step),
    Log {
        step: Step,
        line: String,
    },
    StepFinished {
        step: Step,
        success: bool,
    },
    Completed(RunReport),
    Aborted(String),
}
