//! Production raster backend: `rsvg-convert`.
//!
//! librsvg's CLI does exactly one thing well — render an SVG to a raster
//! at a requested pixel size — so the backend is a thin
//! [`std::process::Command`] wrapper:
//!
//! ```text
//! rsvg-convert --width N --height N --background-color none \
//!     --output <out>.png <in>.svg
//! ```
//!
//! Availability is probed once per batch with `rsvg-convert --version`;
//! a missing binary surfaces as [`BackendError::NotAvailable`] before any
//! conversion is attempted, so a misconfigured machine fails fast instead
//! of failing once per (asset, size) pair.

use super::backend::{BackendError, RasterBackend};
use super::params::RenderParams;
use std::io;
use std::process::Command;

const CONVERTER: &str = "rsvg-convert";

/// Backend that shells out to `rsvg-convert` (Debian: `librsvg2-bin`).
#[derive(Debug, Default)]
pub struct RsvgBackend;

impl RsvgBackend {
    pub fn new() -> Self {
        Self
    }
}

impl RasterBackend for RsvgBackend {
    fn probe(&self) -> Result<(), BackendError> {
        let result = Command::new(CONVERTER).arg("--version").output();
        match result {
            Ok(output) if output.status.success() => Ok(()),
            Ok(output) => Err(BackendError::NotAvailable(format!(
                "{CONVERTER} --version exited with {}",
                output.status
            ))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(BackendError::NotAvailable(
                format!("{CONVERTER} not found on PATH (install librsvg2-bin)"),
            )),
            Err(e) => Err(BackendError::Io(e)),
        }
    }

    fn render(&self, params: &RenderParams) -> Result<(), BackendError> {
        let size = params.size.to_string();
        let mut cmd = Command::new(CONVERTER);
        cmd.arg("--width")
            .arg(&size)
            .arg("--height")
            .arg(&size)
            .arg("--output")
            .arg(&params.output);
        if params.transparent {
            cmd.arg("--background-color").arg("none");
        }
        cmd.arg(&params.source);

        let output = cmd.output()?;
        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(BackendError::ConversionFailed(format!(
                "{}: {}",
                params.source.display(),
                stderr.trim()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::write_svg;
    use tempfile::TempDir;

    // Integration tests against the real binary. Ignored by default so
    // the suite passes on machines without librsvg installed.

    #[test]
    #[ignore] // Requires rsvg-convert
    fn probe_finds_system_converter() {
        RsvgBackend::new().probe().unwrap();
    }

    #[test]
    #[ignore] // Requires rsvg-convert
    fn render_produces_png() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("logo.svg");
        write_svg(&source);
        let output = tmp.path().join("logo.png");

        RsvgBackend::new()
            .render(&RenderParams::icon(source, output.clone(), 16))
            .unwrap();

        let bytes = std::fs::read(&output).unwrap();
        // PNG signature
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    #[ignore] // Requires rsvg-convert
    fn render_rejects_invalid_svg() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("broken.svg");
        std::fs::write(&source, "this is not markup").unwrap();
        let output = tmp.path().join("broken.png");

        let err = RsvgBackend::new()
            .render(&RenderParams::icon(source, output, 16))
            .unwrap_err();
        assert!(matches!(err, BackendError::ConversionFailed(_)));
    }
}
