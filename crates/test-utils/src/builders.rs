#![allow(dead_code)]

use multilaunch::manifest::{Manifest, ProgramDescriptor};

/// Builder for `Manifest` to simplify test setup.
pub struct ManifestBuilder {
    manifest: Manifest,
}

impl ManifestBuilder {
    pub fn new() -> Self {
        Self {
            manifest: Manifest::default(),
        }
    }

    pub fn with_program(mut self, program: ProgramDescriptor) -> Self {
        self.manifest.programs.push(program);
        self
    }

    pub fn build(self) -> Manifest {
        self.manifest
    }
}

impl Default for ManifestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `ProgramDescriptor`.
pub struct ProgramBuilder {
    program: ProgramDescriptor,
}

impl ProgramBuilder {
    pub fn new(path: &str) -> Self {
        Self {
            program: ProgramDescriptor::new(path),
        }
    }

    pub fn run_directory(mut self, dir: &str) -> Self {
        self.program.run_directory = dir.to_string();
        self
    }

    pub fn arg(mut self, arg: &str) -> Self {
        self.program.args.push(arg.to_string());
        self
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.program
            .args
            .extend(args.iter().map(|a| a.to_string()));
        self
    }

    pub fn build(self) -> ProgramDescriptor {
        self.program
    }
}
