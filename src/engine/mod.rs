// src/engine/mod.rs

//! Batch engine: drives the command builder and the invocation runner over
//! the manifest's programs.

pub mod batch;

pub use batch::{BatchFailure, BatchOutcome, LaunchRecord, plan, run_batch};
