use std::process::ExitCode;

use anyhow::{Context, Result};

use restack::compose::{self, CancelToken};
use restack::config;
use restack::sequence::{self, SequenceEvent, SequenceInput, Step};

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("restack: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    let cfg = config::load(&cwd)?;

    compose::ensure_available()?;

    let cancel = CancelToken::new();
    let rx = sequence::run_sequence(
        SequenceInput {
            config: cfg,
            work_dir: cwd,
        },
        cancel,
    );

    // Blocks on the log-follow step until the operator interrupts; SIGINT
    // takes down this process and the attached subprocess together.
    for event in rx {
        match event {
            SequenceEvent::MarkerTouched(_) => {}
            SequenceEvent::MarkerFailed(reason) => {
                eprintln!("restack: could not touch marker file: {reason}");
            }
            SequenceEvent::StepStarted(Step::Remove) => {
                println!("Stopping and removing containers...");
            }
            SequenceEvent::StepStarted(Step::Build) => {
                println!("Rebuilding images...");
            }
            SequenceEvent::StepStarted(_) => {}
            SequenceEvent::Log { line, .. } => println!("{line}"),
            SequenceEvent::StepFinished { .. } => {}
            SequenceEvent::Completed(report) => {
                return Ok(exit_code_from(report.exit_code));
            }
            SequenceEvent::Aborted(reason) => {
                eprintln!("restack: {reason}");
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    // Channel closed without a terminal event: the sequencer thread died.
    Ok(ExitCode::FAILURE)
}

fn exit_code_from(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
