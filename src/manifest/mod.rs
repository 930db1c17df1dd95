// src/manifest/mod.rs

//! Manifest handling: the on-disk list of programs to launch.
//!
//! - [`model`] holds the serde models.
//! - [`loader`] reads JSON or TOML manifests from disk.

pub mod loader;
pub mod model;

pub use loader::{ManifestFormat, default_manifest_path, load_from_path, parse_manifest};
pub use model::{Manifest, ProgramDescriptor, TomlManifest};
