//! Source asset discovery.
//!
//! A logo collection is a flat directory of SVG files — no nesting, no
//! manifest, no sidecar metadata. The filesystem is the data source:
//!
//! ```text
//! logos/
//! ├── logo.svg
//! ├── logo-mono.svg
//! └── badge.svg
//! ```
//!
//! [`scan`] lists that directory once per invocation and produces a
//! [`Listing`] that every other stage (icon regeneration, gallery
//! generation, `check`) consumes. Subdirectories and non-SVG files are
//! ignored; assets are sorted by name so output order is deterministic.
//!
//! ## Validation
//!
//! Scanning fails fast — before any artifact is written — when:
//! - the source directory does not exist ([`ScanError::MissingSourceDir`])
//! - it contains no `.svg` file ([`ScanError::NoAssets`])

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Source directory not found: {0}")]
    MissingSourceDir(PathBuf),
    #[error("No .svg files in source directory: {0}")]
    NoAssets(PathBuf),
}

/// A single SVG source file.
///
/// The logical `name` is the file stem; it names the rendered artifact
/// (`<size>x<size>/<name>.png`) and the gallery entry. Source files are
/// inputs only — nothing in this crate ever writes to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// Logical name: filename without the `.svg` extension.
    pub name: String,
    /// Filename including extension, relative to the source directory.
    pub file_name: String,
    /// Full path to the source file.
    pub path: PathBuf,
}

/// Result of scanning a logo directory: all assets, sorted by name.
#[derive(Debug, Clone)]
pub struct Listing {
    pub source_dir: PathBuf,
    pub assets: Vec<Asset>,
}

/// Scan a logo directory.
///
/// Single non-recursive listing filtered to the `svg` extension
/// (case-insensitive, so `LOGO.SVG` from other tooling is picked up too).
pub fn scan(source_dir: &Path) -> Result<Listing, ScanError> {
    if !source_dir.is_dir() {
        return Err(ScanError::MissingSourceDir(source_dir.to_path_buf()));
    }

    let mut assets = Vec::new();
    for entry in fs::read_dir(source_dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_svg = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("svg"))
            .unwrap_or(false);
        if !is_svg {
            continue;
        }
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let file_name = entry.file_name().to_string_lossy().into_owned();
        assets.push(Asset {
            name,
            file_name,
            path,
        });
    }

    if assets.is_empty() {
        return Err(ScanError::NoAssets(source_dir.to_path_buf()));
    }

    assets.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(Listing {
        source_dir: source_dir.to_path_buf(),
        assets,
    })
}
