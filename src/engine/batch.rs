// src/engine/batch.rs

//! Sequential, fail-fast batch execution.
//!
//! Descriptors are processed strictly in manifest order: build, run, wait,
//! then move on. The first descriptor that cannot be built (or whose command
//! cannot be started) stops the batch; later descriptors are never looked at.

use tracing::{error, info, warn};

use crate::errors::LaunchError;
use crate::exec::{InvocationRunner, LaunchStatus};
use crate::manifest::ProgramDescriptor;
use crate::resolve::{CommandBuilder, ResolvedCommand};

/// One command that was handed to the runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRecord {
    /// Zero-based position of the descriptor in the manifest.
    pub index: usize,
    pub command: ResolvedCommand,
    pub status: LaunchStatus,
}

/// The failure that stopped a batch.
#[derive(Debug)]
pub struct BatchFailure {
    /// Zero-based position of the failing descriptor.
    pub index: usize,
    pub error: LaunchError,
}

/// Aggregate result of a batch run.
#[derive(Debug)]
pub enum BatchOutcome {
    /// Every descriptor was built and run.
    Completed { launched: Vec<LaunchRecord> },
    /// Stopped at the first failure; `launched` holds what ran before it.
    Aborted {
        failure: BatchFailure,
        launched: Vec<LaunchRecord>,
    },
}

impl BatchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, BatchOutcome::Completed { .. })
    }

    pub fn launched(&self) -> &[LaunchRecord] {
        match self {
            BatchOutcome::Completed { launched } | BatchOutcome::Aborted { launched, .. } => {
                launched
            }
        }
    }

    pub fn failure(&self) -> Option<&BatchFailure> {
        match self {
            BatchOutcome::Completed { .. } => None,
            BatchOutcome::Aborted { failure, .. } => Some(failure),
        }
    }

    /// Drop the partial-progress information and keep only the verdict.
    pub fn into_result(self) -> Result<Vec<LaunchRecord>, BatchFailure> {
        match self {
            BatchOutcome::Completed { launched } => Ok(launched),
            BatchOutcome::Aborted { failure, .. } => Err(failure),
        }
    }
}

/// Resolve every descriptor without running anything.
///
/// Stops at the first descriptor that fails to build, exactly like
/// [`run_batch`] would.
pub fn plan(
    builder: &CommandBuilder,
    programs: &[ProgramDescriptor],
) -> Result<Vec<ResolvedCommand>, BatchFailure> {
    programs
        .iter()
        .enumerate()
        .map(|(index, descriptor)| {
            builder
                .build(descriptor)
                .map_err(|error| BatchFailure { index, error })
        })
        .collect()
}

/// Build and run every descriptor in order, one at a time.
pub async fn run_batch<R>(
    builder: &CommandBuilder,
    programs: &[ProgramDescriptor],
    runner: &mut R,
) -> BatchOutcome
where
    R: InvocationRunner + ?Sized,
{
    let mut launched = Vec::with_capacity(programs.len());

    for (index, descriptor) in programs.iter().enumerate() {
        let command = match builder.build(descriptor) {
            Ok(command) => command,
            Err(error) => {
                error!(
                    index,
                    path = %descriptor.path,
                    error = %error,
                    "cannot resolve program; aborting batch"
                );
                return BatchOutcome::Aborted {
                    failure: BatchFailure { index, error },
                    launched,
                };
            }
        };

        info!(index, command = %command, "launching program");

        let status = match runner.run(&command).await {
            Ok(status) => status,
            Err(error) => {
                error!(
                    index,
                    command = %command,
                    error = %error,
                    "cannot start program; aborting batch"
                );
                return BatchOutcome::Aborted {
                    failure: BatchFailure { index, error },
                    launched,
                };
            }
        };

        if !status.success {
            warn!(index, exit_code = ?status.exit_code, "program exited unsuccessfully");
        }

        launched.push(LaunchRecord {
            index,
            command,
            status,
        });
    }

    info!(launched = launched.len(), "batch complete");
    BatchOutcome::Completed { launched }
}
