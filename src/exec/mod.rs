// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`backend`] provides the `InvocationRunner` trait the batch engine talks
//!   to, so tests can replace real processes with a recording fake.
//! - [`shell`] is the production runner, built on `tokio::process::Command`.

pub mod backend;
pub mod shell;

pub use backend::{InvocationRunner, LaunchStatus};
pub use shell::ShellRunner;
