// src/lib.rs

pub mod cli;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod manifest;
pub mod resolve;

use std::io::Write;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tracing::{debug, info, warn};

use crate::cli::CliArgs;
use crate::engine::{BatchFailure, BatchOutcome, plan, run_batch};
use crate::errors::{LaunchError, Result};
use crate::exec::ShellRunner;
use crate::manifest::{Manifest, load_from_path};
use crate::resolve::CommandBuilder;

/// High-level entry point used by `main.rs`, reporting to stdout.
pub async fn run(args: CliArgs) -> Result<()> {
    run_with_output(args, &mut std::io::stdout()).await
}

/// Load the manifest, resolve every program against the base directory and
/// run them one after another.
///
/// Dry-run listings and the unsupported-language diagnostic are written to
/// `out`. The first failure stops the batch and is returned.
pub async fn run_with_output<W>(args: CliArgs, out: &mut W) -> Result<()>
where
    W: Write + Send,
{
    let base_directory = match args.cwd {
        Some(ref dir) => dir.clone(),
        None => current_base_directory()?,
    };

    let manifest = load_from_path(&args.manifest)?;
    let builder = CommandBuilder::new(base_directory.clone());

    info!(
        manifest = %args.manifest.display(),
        base_directory = %base_directory,
        programs = manifest.len(),
        "starting launch batch"
    );

    if args.dry_run {
        return print_dry_run(&builder, &manifest, out);
    }

    let mut runner = ShellRunner::new(&base_directory);
    let outcome = run_batch(&builder, &manifest.programs, &mut runner).await;

    match outcome {
        BatchOutcome::Completed { .. } => Ok(()),
        BatchOutcome::Aborted { failure, launched } => {
            debug!(launched = launched.len(), "batch aborted after partial progress");
            Err(report_failure(&builder, failure, out))
        }
    }
}

/// The directory `multilaunch` was started from, as a string.
pub fn current_base_directory() -> Result<String> {
    let dir = std::env::current_dir()?;
    Ok(dir.to_string_lossy().into_owned())
}

/// Write user-facing diagnostics for a batch failure and hand back its error.
fn report_failure<W: Write>(
    builder: &CommandBuilder,
    failure: BatchFailure,
    out: &mut W,
) -> LaunchError {
    if matches!(failure.error, LaunchError::UnsupportedInterpreter { .. }) {
        let diagnostic = builder.interpreters().unsupported_diagnostic();
        if let Err(err) = writeln!(out, "{diagnostic}") {
            warn!(error = %err, "could not write unsupported-language diagnostic");
        }
    }
    info!(index = failure.index, "no further programs will be launched");
    failure.error
}

/// Dry-run output: every resolved command, in launch order.
fn print_dry_run<W: Write>(
    builder: &CommandBuilder,
    manifest: &Manifest,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "multilaunch dry-run")?;
    writeln!(out, "  base directory = {}", builder.base_directory())?;
    writeln!(out)?;

    writeln!(out, "programs ({}):", manifest.len())?;
    let commands = plan(builder, &manifest.programs)
        .map_err(|failure| report_failure(builder, failure, out))?;
    for (index, command) in commands.iter().enumerate() {
        writeln!(out, "  [{index}] {command}")?;
    }

    debug!("dry-run complete (no execution)");
    Ok(())
}

/// Block until the user presses Enter (or stdin closes).
pub async fn wait_for_enter() -> Result<()> {
    wait_for_enter_from(tokio::io::stdin()).await
}

/// Prompt, then read one line from `input`.
pub async fn wait_for_enter_from<R>(input: R) -> Result<()>
where
    R: AsyncRead + Unpin,
{
    println!("To exit the program, press \"Enter\".");
    let mut line = String::new();
    BufReader::new(input).read_line(&mut line).await?;
    Ok(())
}
