// src/resolve/mod.rs

//! Command resolution engine.
//!
//! - [`path`] anchors program paths at the base directory.
//! - [`interpreter`] maps file extensions to interpreter prefixes.
//! - [`args`] serializes argument lists.
//! - [`command`] composes the three into a [`ResolvedCommand`].

pub mod args;
pub mod command;
pub mod interpreter;
pub mod path;

pub use args::serialize;
pub use command::{CommandBuilder, ResolvedCommand};
pub use interpreter::{Invocation, InterpreterDecision, InterpreterRule, InterpreterTable};
pub use path::resolve;
