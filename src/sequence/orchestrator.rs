use std::sync::mpsc::{self, Receiver, Sender};

use crate::compose::{self, CancelToken, OutputLine};
use crate::config::RemovePolicy;
use crate::marker;

use super::commands::{build_command, logs_command, remove_command, up_command};
use super::types::{RunReport, SequenceEvent, SequenceInput, Step, StepOutcome};

/// Launch the lifecycle sequence on a background thread.
///
/// Returns a receiver that streams `SequenceEvent` values. The final event
/// is always either `Completed` or `Aborted`.
pub fn run_sequence(input: SequenceInput, cancel: CancelToken) -> Receiver<SequenceEvent> {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        run_inner(input, cancel, tx);
    });
    rx
}

fn run_inner(input: SequenceInput, cancel: CancelToken, tx: Sender<SequenceEvent>) {
    let cfg = &input.config;
    let dir = input.work_dir.as_path();
    let mut report = RunReport::default();

    // ── Touch marker ──────────────────────────────────────────────────
    let marker_path = input.work_dir.join(&cfg.marker_path);
    match marker::touch(&marker_path) {
        Ok(()) => {
            let _ = tx.send(SequenceEvent::MarkerTouched(marker_path));
        }
        Err(e) => {
            let _ = tx.send(SequenceEvent::MarkerFailed(e.to_string()));
        }
    }

    // ── Remove stale containers ───────────────────────────────────────
    let removed = run_step(
        Step::Remove,
        remove_command(cfg, dir),
        &cancel,
        &tx,
        &mut report,
    );

    if cancel.is_cancelled() {
        let _ = tx.send(SequenceEvent::Aborted("Cancelled by user".into()));
        return;
    }

    if !removed && cfg.remove_failure == RemovePolicy::Halt {
        report.halted_at = Some(Step::Remove);
        let _ = tx.send(SequenceEvent::Completed(report));
        return;
    }

    // ── Build images (the gate) ───────────────────────────────────────
    let built = run_step(
        Step::Build,
        build_command(cfg, dir),
        &cancel,
        &tx,
        &mut report,
    );

    if cancel.is_cancelled() {
        let _ = tx.send(SequenceEvent::Aborted("Cancelled by user".into()));
        return;
    }

    if !built {
        // A broken image must never reach `up`.
        report.halted_at = Some(Step::Build);
        let _ = tx.send(SequenceEvent::Completed(report));
        return;
    }

    // ── Start stack ───────────────────────────────────────────────────
    // Not gated: log streaming is attempted even if `up` reported failure,
    // matching the original sequencing.
    run_step(Step::Up, up_command(cfg, dir), &cancel, &tx, &mut report);

    if cancel.is_cancelled() {
        let _ = tx.send(SequenceEvent::Aborted("Cancelled by user".into()));
        return;
    }

    // ── Stream logs ───────────────────────────────────────────────────
    if cfg.follow_logs {
        run_step(Step::Logs, logs_command(cfg, dir), &cancel, &tx, &mut report);

        if cancel.is_cancelled() {
            let _ = tx.send(SequenceEvent::Aborted("Cancelled by user".into()));
            return;
        }
    }

    let _ = tx.send(SequenceEvent::Completed(report));
}

/// Run one compose step, draining its output channel and forwarding lines
/// as `SequenceEvent::Log`. Records the outcome and updates the report's
/// running exit code.
fn run_step(
    step: Step,
    cmd: compose::ComposeCommand,
    cancel: &CancelToken,
    tx: &Sender<SequenceEvent>,
    report: &mut RunReport,
) -> bool {
    let _ = tx.send(SequenceEvent::StepStarted(step));

    let rx = match compose::spawn(cmd, cancel.clone()) {
        Ok(rx) => rx,
        Err(e) => {
            let _ = tx.send(SequenceEvent::StepFinished {
                step,
                success: false,
            });
            report.steps.push(StepOutcome {
                step,
                success: false,
                exit_code: None,
                log: format!("Failed to spawn docker compose: {e}"),
            });
            report.exit_code = 1;
            return false;
        }
    };

    let mut log = String::new();
    let mut success = false;
    let mut exit_code = None;

    for line in rx {
        match line {
            OutputLine::Stdout(s) | OutputLine::Stderr(s) => {
                let _ = tx.send(SequenceEvent::Log {
                    step,
                    line: s.clone(),
                });
                log.push_str(&s);
                log.push('\n');
            }
            OutputLine::Done(result) => {
                success = result.success && !result.cancelled;
                exit_code = result.exit_code;
                if log.is_empty() {
                    log = result.log;
                }
                break;
            }
        }
    }

    let _ = tx.send(SequenceEvent::StepFinished { step, success });

    report.steps.push(StepOutcome {
        step,
        success,
        exit_code,
        log,
    });
    // The process exit code mirrors the last executed command; a killed
    // subprocess has no code and maps to 1.
    report.exit_code = exit_code.unwrap_or(1);

    success
}
