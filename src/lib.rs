//! Dev-loop helper for a Docker Compose stack: refresh the marker file,
//! tear down stale containers, rebuild images from scratch, start the stack
//! detached, and follow its logs.

pub mod compose;
pub mod config;
pub mod marker;
pub mod sequence;
