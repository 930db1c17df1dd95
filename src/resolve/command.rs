// src/resolve/command.rs

//! Command builder: turns a [`ProgramDescriptor`] into the exact shell
//! command line that gets executed.
//!
//! ```text
//! cd <runDirectory> && [<interpreter> ]<absolute path> <arg1> ... <argN>
//! ```
//!
//! The builder is a pure transform. It reads no process-global state (the
//! base directory is passed in), touches no files and spawns nothing.

use std::fmt;

use tracing::trace;

use crate::errors::{LaunchError, Result};
use crate::manifest::ProgramDescriptor;
use crate::resolve::args::serialize;
use crate::resolve::interpreter::{InterpreterDecision, InterpreterTable};
use crate::resolve::path::resolve;

/// A fully resolved invocation for one descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCommand {
    /// Normalized run directory (`""` already replaced by `"./"`).
    pub run_directory: String,
    /// `cd <dir> && `
    pub working_directory_change: String,
    /// Interpreter executable, empty for self-executing programs.
    pub interpreter_prefix: String,
    pub absolute_executable_path: String,
    /// Serialized arguments, each followed by a space.
    pub argument_string: String,
}

impl ResolvedCommand {
    /// The full command line handed to the shell.
    pub fn command_line(&self) -> String {
        let mut line = self.working_directory_change.clone();
        if !self.interpreter_prefix.is_empty() {
            line.push_str(&self.interpreter_prefix);
            line.push(' ');
        }
        line.push_str(&self.absolute_executable_path);
        line.push(' ');
        line.push_str(&self.argument_string);
        line
    }
}

impl fmt::Display for ResolvedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// Builds [`ResolvedCommand`]s against a fixed base directory and
/// interpreter table.
#[derive(Debug, Clone)]
pub struct CommandBuilder {
    base_directory: String,
    interpreters: InterpreterTable,
}

impl CommandBuilder {
    /// Builder using the built-in interpreter table.
    pub fn new(base_directory: impl Into<String>) -> Self {
        Self::with_interpreters(base_directory, InterpreterTable::builtin())
    }

    pub fn with_interpreters(
        base_directory: impl Into<String>,
        interpreters: InterpreterTable,
    ) -> Self {
        Self {
            base_directory: base_directory.into(),
            interpreters,
        }
    }

    pub fn base_directory(&self) -> &str {
        &self.base_directory
    }

    pub fn interpreters(&self) -> &InterpreterTable {
        &self.interpreters
    }

    pub fn build(&self, descriptor: &ProgramDescriptor) -> Result<ResolvedCommand> {
        if descriptor.path.is_empty() {
            return Err(LaunchError::MalformedDescriptor(
                "program `path` is missing or empty".to_string(),
            ));
        }

        let run_directory = descriptor.effective_run_directory().to_string();
        let working_directory_change = format!("cd {run_directory} && ");

        // Dispatch is case-insensitive; the command keeps the original
        // casing of the path.
        let interpreter_prefix = match self.interpreters.dispatch(&descriptor.path) {
            InterpreterDecision::Unsupported => {
                return Err(LaunchError::UnsupportedInterpreter {
                    path: descriptor.path.clone(),
                });
            }
            decision => decision.prefix().to_string(),
        };

        let absolute_executable_path = resolve(&descriptor.path, &self.base_directory)?;
        let argument_string = serialize(&descriptor.args);

        let command = ResolvedCommand {
            run_directory,
            working_directory_change,
            interpreter_prefix,
            absolute_executable_path,
            argument_string,
        };

        trace!(path = %descriptor.path, command = %command, "descriptor resolved");

        Ok(command)
    }
}
