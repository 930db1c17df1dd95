#![allow(dead_code)]

pub use multilaunch_test_utils::{init_tracing, with_timeout};
pub use multilaunch_test_utils::builders::{ManifestBuilder, ProgramBuilder};
pub use multilaunch_test_utils::fake_runner::RecordingRunner;

/// Base directory used by tests that don't touch the filesystem.
pub const BASE: &str = "/home/user/projects/launcher";
