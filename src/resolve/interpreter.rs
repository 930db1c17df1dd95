// src/resolve/interpreter.rs

//! Interpreter dispatch table.
//!
//! A program path is matched against an ordered list of extension markers.
//! Matching is case-insensitive *substring containment*, not suffix
//! matching, and the first entry that matches wins. With the built-in table
//! this means `tool.py.exe` runs under `python`.

/// How a matched program is invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Run through an interpreter executable, e.g. `python`.
    Interpreter(String),
    /// The file can be started directly.
    SelfExecuting,
}

/// Result of dispatching a program path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterpreterDecision {
    Interpreter(String),
    SelfExecuting,
    Unsupported,
}

impl InterpreterDecision {
    /// Command prefix for this decision; empty for self-executing programs.
    pub fn prefix(&self) -> &str {
        match self {
            InterpreterDecision::Interpreter(prefix) => prefix.as_str(),
            InterpreterDecision::SelfExecuting | InterpreterDecision::Unsupported => "",
        }
    }
}

/// A single row of the dispatch table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterRule {
    /// Lower-case marker searched for in the lower-cased path (e.g. `.py`).
    pub marker: String,
    pub invocation: Invocation,
    /// Human readable language name used in diagnostics.
    pub language: String,
}

impl InterpreterRule {
    pub fn interpreter(marker: &str, prefix: &str, language: &str) -> Self {
        Self {
            marker: marker.to_lowercase(),
            invocation: Invocation::Interpreter(prefix.to_string()),
            language: language.to_string(),
        }
    }

    pub fn self_executing(marker: &str, language: &str) -> Self {
        Self {
            marker: marker.to_lowercase(),
            invocation: Invocation::SelfExecuting,
            language: language.to_string(),
        }
    }
}

/// Ordered extension -> invocation mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterTable {
    rules: Vec<InterpreterRule>,
}

impl Default for InterpreterTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl InterpreterTable {
    /// The built-in table: `.py`, `.ps1`, `.exe`, in that priority order.
    pub fn builtin() -> Self {
        Self {
            rules: vec![
                InterpreterRule::interpreter(".py", "python", "Python"),
                InterpreterRule::interpreter(".ps1", "powershell", "PowerShell"),
                InterpreterRule::self_executing(".exe", "C++ or any other .exe"),
            ],
        }
    }

    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule with the lowest priority so far.
    pub fn with_rule(mut self, rule: InterpreterRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[InterpreterRule] {
        &self.rules
    }

    /// Decide how `path` is invoked.
    pub fn dispatch(&self, path: &str) -> InterpreterDecision {
        let lowered = path.to_lowercase();

        self.rules
            .iter()
            .find(|rule| lowered.contains(&rule.marker))
            .map(|rule| match &rule.invocation {
                Invocation::Interpreter(prefix) => InterpreterDecision::Interpreter(prefix.clone()),
                Invocation::SelfExecuting => InterpreterDecision::SelfExecuting,
            })
            .unwrap_or(InterpreterDecision::Unsupported)
    }

    /// Comma-separated language list, e.g.
    /// `Python, PowerShell, C++ or any other .exe`.
    pub fn supported_languages(&self) -> String {
        self.rules
            .iter()
            .map(|rule| rule.language.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Diagnostic printed when a program matches no rule.
    pub fn unsupported_diagnostic(&self) -> String {
        format!(
            "Language not supported.\n\
             Supported languages: {}\n\
             To add support for a language, add an extension -> interpreter entry to the interpreter table.",
            self.supported_languages()
        )
    }
}
