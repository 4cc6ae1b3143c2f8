//! Raster backend trait and shared types.
//!
//! The [`RasterBackend`] trait defines the two operations every backend
//! must support: probe (is the conversion capability available at all?)
//! and render (one SVG → PNG conversion).
//!
//! The production implementation is
//! [`RsvgBackend`](super::rsvg::RsvgBackend), which shells out to
//! `rsvg-convert`. This crate deliberately contains no image decoding or
//! encoding of its own — the backend boundary is where that work leaves
//! the process.

use super::params::RenderParams;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Converter not available: {0}")]
    NotAvailable(String),
    #[error("Conversion failed: {0}")]
    ConversionFailed(String),
}

/// Trait for raster conversion backends.
///
/// `probe` runs once, before any task; `render` runs once per stale
/// (asset, size) pair. Implementations must leave the source file
/// untouched and either produce the output file or return an error.
pub trait RasterBackend {
    /// Check that the conversion capability is usable. Called once per
    /// batch, before any render.
    fn probe(&self) -> Result<(), BackendError>;

    /// Execute a single conversion.
    fn render(&self, params: &RenderParams) -> Result<(), BackendError>;
}
