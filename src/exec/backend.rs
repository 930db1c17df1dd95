// src/exec/backend.rs

//! Pluggable invocation runner abstraction.
//!
//! The batch engine hands each [`ResolvedCommand`] to an
//! [`InvocationRunner`] instead of spawning processes itself. Production code
//! uses [`ShellRunner`](super::shell::ShellRunner); tests swap in a runner
//! that only records what it was asked to run.

use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;
use crate::resolve::ResolvedCommand;

/// How a launched command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchStatus {
    /// Exit code, if the platform reported one (not the case for signals).
    pub exit_code: Option<i32>,
    pub success: bool,
}

impl LaunchStatus {
    pub fn success() -> Self {
        Self {
            exit_code: Some(0),
            success: true,
        }
    }

    pub fn failed(code: i32) -> Self {
        Self {
            exit_code: Some(code),
            success: false,
        }
    }
}

/// Trait abstracting how resolved commands are executed.
pub trait InvocationRunner: Send {
    /// Run `command` and resolve once it has finished.
    ///
    /// An `Err` means the command could not be started at all; a program that
    /// ran and exited non-zero is an `Ok` with `success == false`.
    fn run(
        &mut self,
        command: &ResolvedCommand,
    ) -> Pin<Box<dyn Future<Output = Result<LaunchStatus>> + Send + '_>>;
}
