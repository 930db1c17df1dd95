// src/exec/shell.rs

//! Host-shell runner.

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::process::Stdio;

use anyhow::Context;
use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::Result;
use crate::exec::backend::{InvocationRunner, LaunchStatus};
use crate::resolve::ResolvedCommand;

/// Runs command lines through `sh -c` (or `cmd /C` on Windows).
///
/// The sub-shell starts in `base_directory`, so the `cd <runDirectory>`
/// prefix of each command is relative to the same directory program paths
/// were resolved against. Each command line is echoed to stdout as
/// `Running "<command>"` before it starts. Stdio is inherited; nothing is
/// captured.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    base_directory: PathBuf,
}

impl ShellRunner {
    pub fn new(base_directory: impl Into<PathBuf>) -> Self {
        Self {
            base_directory: base_directory.into(),
        }
    }

    fn shell_command(&self, line: &str) -> Command {
        let mut cmd = if cfg!(windows) {
            let mut c = Command::new("cmd");
            c.arg("/C").arg(line);
            c
        } else {
            let mut c = Command::new("sh");
            c.arg("-c").arg(line);
            c
        };

        cmd.current_dir(&self.base_directory)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }
}

impl InvocationRunner for ShellRunner {
    fn run(
        &mut self,
        command: &ResolvedCommand,
    ) -> Pin<Box<dyn Future<Output = Result<LaunchStatus>> + Send + '_>> {
        let line = command.command_line();
        let cmd = self.shell_command(&line);

        Box::pin(run_line(cmd, line))
    }
}

async fn run_line(mut cmd: Command, line: String) -> Result<LaunchStatus> {
    println!("Running \"{line}\"");
    debug!(command = %line, "spawning shell");

    let mut child = cmd
        .spawn()
        .with_context(|| format!("spawning shell for `{line}`"))?;

    let status = child
        .wait()
        .await
        .with_context(|| format!("waiting for `{line}`"))?;

    info!(
        command = %line,
        exit_code = ?status.code(),
        success = status.success(),
        "command exited"
    );

    Ok(LaunchStatus {
        exit_code: status.code(),
        success: status.success(),
    })
}
