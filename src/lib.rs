//! # Logo Gal
//!
//! A gallery and raster pipeline for SVG logo collections. Your
//! filesystem is the data source: a flat directory of `.svg` files is
//! the whole content model — no database, no manifest, no sidecar
//! metadata.
//!
//! # Architecture: One Listing, Three Consumers
//!
//! Every command starts from the same directory scan and fans out:
//!
//! ```text
//! Scan     logos/   →  Listing            (filesystem → structured data)
//! Icon     Listing  →  share/icons/…      (stale PNGs re-rendered per size)
//! Index    Listing  →  index.html         (static gallery page)
//! Server   dir      →  http://localhost   (external file server, wrapped)
//! ```
//!
//! The icon stage is incremental: an artifact is re-rendered only when it
//! is missing or strictly older than its source. Modification times are
//! the entire cache — there is no manifest to corrupt or invalidate, and
//! a run over an unchanged collection converts nothing.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Flat, non-recursive SVG discovery with fail-fast validation |
//! | [`icon`] | Incremental regeneration of `<size>x<size>/<name>.png` artifacts |
//! | [`raster`] | Conversion boundary: [`raster::RasterBackend`] trait + `rsvg-convert` wrapper |
//! | [`gallery`] | Maud-rendered `index.html` linking every rendered size |
//! | [`server`] | Spawn/wait wrapper around the external preview file server |
//! | [`output`] | CLI output formatting — pure `format_*` functions, `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## External Converter, Injected
//!
//! Rasterizing SVG correctly is a rendering-engine problem, and librsvg
//! already solved it. The crate shells out to `rsvg-convert` per stale
//! (logo, size) pair behind the [`raster::RasterBackend`] trait, so the
//! regeneration logic is testable against a recording mock and never
//! touches pixels itself. Availability is probed once per batch; a
//! machine without the converter fails before any work starts.
//!
//! ## Timestamps Over Hashes
//!
//! Staleness is a plain mtime comparison. Content hashing would survive
//! `git checkout` better, but a logo collection is edited by hand at
//! human frequency and renders in milliseconds per icon — the simplest
//! correct incremental policy wins. The worst case of a reset timestamp
//! is one redundant render.
//!
//! ## Best-Effort Batches, Honest Exits
//!
//! One corrupt SVG must not block the other 49 logos from rendering.
//! Per-task failures are recorded in a typed [`icon::RegenReport`] while
//! the batch continues; the CLI exits non-zero if anything failed, so CI
//! never mistakes a partial render for a clean one. Failures that poison
//! the whole batch — converter missing, source directory invalid,
//! output directory uncreatable — abort immediately instead.
//!
//! ## Maud Over Template Engines
//!
//! The gallery page is generated with [Maud](https://maud.lambda.xyz/):
//! compile-time checked HTML, auto-escaped interpolation, and no
//! template files to ship or drift out of sync. The stylesheet is
//! embedded at build time, so the output is a single self-contained
//! `index.html` sitting next to the logo directory.

pub mod gallery;
pub mod icon;
pub mod output;
pub mod raster;
pub mod scan;
pub mod server;

#[cfg(test)]
pub(crate) mod test_helpers;
