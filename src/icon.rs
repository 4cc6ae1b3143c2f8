//! Incremental icon regeneration.
//!
//! Renders every SVG in the logo directory at every configured pixel size,
//! producing the standard hicolor layout:
//!
//! ```text
//! share/icons/hicolor/
//! ├── 16x16/
//! │   ├── badge.png
//! │   └── logo.png
//! ├── 32x32/
//! │   ├── badge.png
//! │   └── logo.png
//! └── ...
//! ```
//!
//! ## Incremental regeneration
//!
//! Rendering is the expensive step, so each (asset, size) pair is checked
//! against the filesystem first: a task runs only when its artifact is
//! missing or strictly older than its source (equal timestamps are fresh).
//! A run over an unchanged collection converts nothing. There is no cache
//! manifest — the artifact's own modification time is the cache.
//!
//! Orphaned artifacts (source SVG deleted after a render) are left alone;
//! nothing here deletes files, and the source directory is never written.
//!
//! ## Batch semantics
//!
//! Tasks are independent and run sequentially, grouped by size. One failed
//! conversion does not stop the batch: the failure is recorded in the
//! [`RegenReport`] and every remaining pair still runs. Failures that make
//! the rest of a batch pointless — converter missing, source directory
//! invalid, size directory uncreatable — abort immediately with a typed
//! [`IconError`] instead.
//!
//! Progress streams over an optional [`mpsc::Sender<RegenEvent>`] channel;
//! the CLI drains it on a printer thread (see `main.rs`).

use crate::raster::{RasterBackend, RenderParams};
use crate::scan::{self, ScanError};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

/// Hicolor sizes rendered by default.
pub const DEFAULT_SIZES: &[u32] = &[16, 32, 64, 128, 256, 512];

#[derive(Error, Debug)]
pub enum IconError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("{0}")]
    BackendUnavailable(crate::raster::BackendError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Explicit regeneration parameters — no ambient state.
#[derive(Debug, Clone)]
pub struct IconConfig {
    pub source_dir: PathBuf,
    pub output_root: PathBuf,
    pub sizes: Vec<u32>,
}

impl IconConfig {
    pub fn new(source_dir: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_root: output_root.into(),
            sizes: DEFAULT_SIZES.to_vec(),
        }
    }
}

/// Name of a size's output directory: `16` → `16x16`.
pub fn size_dir_name(size: u32) -> String {
    format!("{size}x{size}")
}

/// Artifact path relative to the output root: `16x16/logo.png`.
///
/// The gallery builds its link targets through this same function, so the
/// regenerator's output layout and the gallery's references cannot drift
/// apart.
pub fn artifact_rel_path(size: u32, name: &str) -> String {
    format!("{}/{}.png", size_dir_name(size), name)
}

/// Whether the (source, artifact) pair must be re-rendered.
///
/// Stale iff the artifact does not exist or its mtime is strictly older
/// than the source's.
pub(crate) fn is_stale(source: &Path, artifact: &Path) -> io::Result<bool> {
    let artifact_meta = match fs::metadata(artifact) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(true),
        Err(e) => return Err(e),
    };
    let source_mtime = fs::metadata(source)?.modified()?;
    let artifact_mtime = artifact_meta.modified()?;
    Ok(artifact_mtime < source_mtime)
}

/// Progress event for one regeneration run.
#[derive(Debug, Clone, PartialEq)]
pub enum RegenEvent {
    SizeStarted { size: u32, asset_count: usize },
    Task {
        size: u32,
        name: String,
        status: TaskStatus,
    },
}

/// Outcome of a single (asset, size) task.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskStatus {
    /// Artifact was stale and has been rendered.
    Converted,
    /// Artifact was already at least as new as its source; nothing done.
    Fresh,
    /// Render (or the staleness check itself) failed; batch continued.
    Failed(String),
}

/// One recorded per-task failure.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskFailure {
    pub name: String,
    pub size: u32,
    pub message: String,
}

/// Typed outcome of a batch: work done, work skipped, tasks failed.
///
/// Callers can distinguish "everything already fresh" from "cannot proceed
/// at all" — the latter never produces a report, it returns [`IconError`].
#[derive(Debug, Default)]
pub struct RegenReport {
    pub converted: u32,
    pub fresh: u32,
    pub failures: Vec<TaskFailure>,
}

impl RegenReport {
    pub fn total(&self) -> u32 {
        self.converted + self.fresh + self.failures.len() as u32
    }

    /// True when no task failed. The CLI exits non-zero otherwise.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for RegenReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fresh > 0 {
            write!(
                f,
                "{} converted, {} fresh ({} total)",
                self.converted,
                self.fresh,
                self.total()
            )?;
        } else {
            write!(f, "{} converted", self.converted)?;
        }
        if !self.failures.is_empty() {
            write!(f, ", {} failed", self.failures.len())?;
        }
        Ok(())
    }
}

/// Regenerate every stale (asset, size) artifact.
///
/// Probes the backend and scans the source directory first — both are
/// fatal configuration errors if they fail. Size directories are created
/// idempotently; a creation failure aborts the batch (the whole size group
/// would fail anyway). Individual render failures are recorded and the
/// batch continues.
pub fn regenerate(
    backend: &impl RasterBackend,
    config: &IconConfig,
    events: Option<Sender<RegenEvent>>,
) -> Result<RegenReport, IconError> {
    backend.probe().map_err(IconError::BackendUnavailable)?;
    let listing = scan::scan(&config.source_dir)?;

    let mut report = RegenReport::default();

    for &size in &config.sizes {
        let size_dir = config.output_root.join(size_dir_name(size));
        fs::create_dir_all(&size_dir)?;
        emit(
            &events,
            RegenEvent::SizeStarted {
                size,
                asset_count: listing.assets.len(),
            },
        );

        for asset in &listing.assets {
            let artifact = size_dir.join(format!("{}.png", asset.name));
            let status = match is_stale(&asset.path, &artifact) {
                Ok(false) => {
                    report.fresh += 1;
                    TaskStatus::Fresh
                }
                Ok(true) => {
                    match backend.render(&RenderParams::icon(asset.path.clone(), artifact, size)) {
                        Ok(()) => {
                            report.converted += 1;
                            TaskStatus::Converted
                        }
                        Err(e) => record_failure(&mut report, &asset.name, size, e.to_string()),
                    }
                }
                Err(e) => record_failure(&mut report, &asset.name, size, e.to_string()),
            };
            emit(
                &events,
                RegenEvent::Task {
                    size,
                    name: asset.name.clone(),
                    status,
                },
            );
        }
    }

    Ok(report)
}

fn record_failure(report: &mut RegenReport, name: &str, size: u32, message: String) -> TaskStatus {
    report.failures.push(TaskFailure {
        name: name.to_string(),
        size,
        message: message.clone(),
    });
    TaskStatus::Failed(message)
}

fn emit(events: &Option<Sender<RegenEvent>>, event: RegenEvent) {
    if let Some(tx) = events {
        // A dropped receiver just means nobody is listening.
        let _ = tx.send(event);
    }
}
