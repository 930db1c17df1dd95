// src/resolve/path.rs

//! Path resolution for program paths.
//!
//! Program paths are anchored at an explicit base directory (the directory
//! `multilaunch` itself was started from), *not* at the descriptor's
//! `runDirectory`. Resolution is plain string algebra:
//!
//! - no `./` anywhere: base + path, unchanged (absolute paths included)
//! - `./` but no `../`: the first `./` is dropped, then base + rest
//! - `../` present: every `../` is dropped and the base loses one trailing
//!   segment per occurrence
//!
//! Only this counting rule is applied. Interior traversal such as `a/../b`
//! is not normalized the way `std::fs::canonicalize` would, and the output
//! must stay exactly as described above.

use crate::errors::{LaunchError, Result};

const CURRENT_DIR: &str = "./";
const PARENT_DIR: &str = "../";

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Separator used when joining onto `base`: `\` for pure Windows-style
/// bases, `/` otherwise.
fn separator_for(base: &str) -> char {
    if base.contains('\\') && !base.contains('/') {
        '\\'
    } else {
        '/'
    }
}

/// Join `rest` onto `prefix` with exactly one separator between them.
///
/// `sep` comes from the original base, since a fully reduced prefix may be
/// empty (the filesystem root).
fn join(prefix: &str, rest: &str, sep: char) -> String {
    if prefix.ends_with(is_separator) {
        format!("{prefix}{rest}")
    } else {
        format!("{prefix}{sep}{rest}")
    }
}

/// Drop `count` trailing segments from `base`.
///
/// Fails when the base runs out of segments (i.e. would climb above the
/// root, or above a drive prefix like `C:`).
fn drop_trailing_segments<'a>(path: &str, base: &'a str, count: usize) -> Result<&'a str> {
    let trimmed = base.trim_end_matches(is_separator);
    let available = trimmed.matches(is_separator).count();

    if count > available {
        return Err(LaunchError::InvalidPath {
            path: path.to_string(),
            base: base.to_string(),
            requested: count,
            available,
        });
    }

    let mut reduced = trimmed;
    for _ in 0..count {
        // Checked above: there is always a separator left to cut at.
        let idx = reduced.rfind(is_separator).unwrap_or(0);
        reduced = &reduced[..idx];
    }

    Ok(reduced)
}

/// Resolve `program_path` against `base` into an absolute path string.
pub fn resolve(program_path: &str, base: &str) -> Result<String> {
    if program_path.is_empty() {
        return Err(LaunchError::MalformedDescriptor(
            "program `path` must not be empty".to_string(),
        ));
    }

    let sep = separator_for(base);

    if program_path.contains(PARENT_DIR) {
        let count = program_path.matches(PARENT_DIR).count();
        let remainder = program_path.replace(PARENT_DIR, "");
        let reduced = drop_trailing_segments(program_path, base, count)?;
        return Ok(join(reduced, &remainder, sep));
    }

    if program_path.contains(CURRENT_DIR) {
        let remainder = program_path.replacen(CURRENT_DIR, "", 1);
        return Ok(join(base, &remainder, sep));
    }

    Ok(join(base, program_path, sep))
}
