// src/manifest/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::errors::{LaunchError, Result};
use crate::manifest::model::{Manifest, ProgramDescriptor, TomlManifest};

/// On-disk manifest format, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Json,
    Toml,
}

impl ManifestFormat {
    /// `.toml` (any case) selects TOML; everything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ManifestFormat::Toml,
            _ => ManifestFormat::Json,
        }
    }
}

/// Parse manifest text in the given format.
///
/// Text that is not valid JSON/TOML fails with the format's own error.
/// Well-formed text whose entries have the wrong shape (e.g. `"path": null`
/// or a non-list `args`) fails with [`LaunchError::Manifest`].
pub fn parse_manifest(contents: &str, format: ManifestFormat) -> Result<Manifest> {
    let manifest = match format {
        ManifestFormat::Json => {
            let value: serde_json::Value = serde_json::from_str(contents)?;
            let programs: Vec<ProgramDescriptor> = serde_json::from_value(value)
                .map_err(|e| LaunchError::Manifest(format!("invalid program entry: {e}")))?;
            Manifest::new(programs)
        }
        ManifestFormat::Toml => {
            let table: toml::Table = toml::from_str(contents)?;
            let raw: TomlManifest = toml::Value::Table(table)
                .try_into()
                .map_err(|e| LaunchError::Manifest(format!("invalid [[program]] entry: {e}")))?;
            Manifest::from(raw)
        }
    };
    Ok(manifest)
}

/// Load a manifest from `path`.
///
/// Descriptors are only deserialized here; whether each one can be turned
/// into a command is decided later, in order, by the batch engine.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Manifest> {
    let path = path.as_ref();
    let format = ManifestFormat::from_path(path);
    let contents = fs::read_to_string(path)?;

    let manifest = parse_manifest(&contents, format)?;

    debug!(path = %path.display(), ?format, programs = manifest.len(), "manifest loaded");
    if manifest.is_empty() {
        warn!(path = %path.display(), "manifest contains no programs");
    }

    Ok(manifest)
}

/// Default manifest location: `programs.json` in the current directory.
pub fn default_manifest_path() -> PathBuf {
    PathBuf::from("programs.json")
}
