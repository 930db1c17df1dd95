// src/manifest/model.rs

use serde::Deserialize;

/// One program entry of the manifest.
///
/// JSON form (`programs.json`, a top-level array):
///
/// ```json
/// [
///   { "path": "./run.py", "runDirectory": "", "args": ["--x"] },
///   { "path": "../tools/build.exe", "runDirectory": "tools" }
/// ]
/// ```
///
/// `path` is required, but a missing key deserializes to an empty string so
/// that it is reported as a malformed descriptor (with its index) when the
/// batch reaches it, rather than as a generic parse error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProgramDescriptor {
    /// Path to the program; may be relative and contain `./` or `../`.
    #[serde(default)]
    pub path: String,

    /// Directory the sub-shell changes into before running the program.
    ///
    /// `""` means the current directory and is normalized to `"./"`.
    #[serde(default, rename = "runDirectory")]
    pub run_directory: String,

    /// Positional arguments, in order.
    #[serde(default)]
    pub args: Vec<String>,
}

impl ProgramDescriptor {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            run_directory: String::new(),
            args: Vec::new(),
        }
    }

    /// `runDirectory` with the empty sentinel replaced by `"./"`.
    pub fn effective_run_directory(&self) -> &str {
        if self.run_directory.is_empty() {
            "./"
        } else {
            &self.run_directory
        }
    }
}

/// TOML manifest layout:
///
/// ```toml
/// [[program]]
/// path = "./run.py"
/// runDirectory = ""
/// args = ["--x"]
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
pub struct TomlManifest {
    #[serde(default)]
    pub program: Vec<ProgramDescriptor>,
}

/// An ordered list of program descriptors, as loaded from disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    pub programs: Vec<ProgramDescriptor>,
}

impl Manifest {
    pub fn new(programs: Vec<ProgramDescriptor>) -> Self {
        Self { programs }
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}

impl From<TomlManifest> for Manifest {
    fn from(raw: TomlManifest) -> Self {
        Manifest::new(raw.program)
    }
}
