use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use multilaunch::errors::{LaunchError, Result};
use multilaunch::exec::{InvocationRunner, LaunchStatus};
use multilaunch::resolve::ResolvedCommand;

/// A fake runner that:
/// - records every command line it is asked to run, in order
/// - reports success, unless an exit code or a spawn failure was scripted
///   for that call (zero-based call number).
#[derive(Default)]
pub struct RecordingRunner {
    executed: Arc<Mutex<Vec<String>>>,
    exit_codes: HashMap<usize, i32>,
    spawn_failures: Vec<usize>,
    calls: usize,
}

impl RecordingRunner {
    pub fn new(executed: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            executed,
            ..Self::default()
        }
    }

    /// Make call number `call` report the given exit code.
    pub fn exit_with(mut self, call: usize, code: i32) -> Self {
        self.exit_codes.insert(call, code);
        self
    }

    /// Make call number `call` fail as if the shell could not be started.
    pub fn fail_spawn(mut self, call: usize) -> Self {
        self.spawn_failures.push(call);
        self
    }
}

impl InvocationRunner for RecordingRunner {
    fn run(
        &mut self,
        command: &ResolvedCommand,
    ) -> Pin<Box<dyn Future<Output = Result<LaunchStatus>> + Send + '_>> {
        let call = self.calls;
        self.calls += 1;

        let line = command.command_line();
        let executed = Arc::clone(&self.executed);
        let spawn_fails = self.spawn_failures.contains(&call);
        let exit_code = self.exit_codes.get(&call).copied();

        Box::pin(async move {
            if spawn_fails {
                return Err(LaunchError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "shell not found",
                )));
            }

            executed.lock().unwrap().push(line);

            Ok(match exit_code {
                Some(code) if code != 0 => LaunchStatus::failed(code),
                _ => LaunchStatus::success(),
            })
        })
    }
}
