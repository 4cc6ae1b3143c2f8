//! Shared test utilities for the logo-gal test suite.
//!
//! Fixtures are tiny and built inline: a logo directory is just a temp
//! dir with a few stub SVG files, and timestamp-sensitive tests pin
//! modification times explicitly instead of sleeping.

use std::fs;
use std::path::Path;
use std::time::SystemTime;

/// A minimal valid SVG document. The mock backend never parses it; the
/// ignored `rsvg-convert` integration tests do.
pub const STUB_SVG: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" width="64" height="64">"#,
    r##"<circle cx="32" cy="32" r="24" fill="#345"/></svg>"##,
);

/// Write a stub SVG at `path`.
pub fn write_svg(path: &Path) {
    fs::write(path, STUB_SVG).unwrap();
}

/// Pin a file's modification time.
///
/// Staleness tests construct exact before/equal/after orderings rather
/// than relying on filesystem timestamp granularity.
pub fn set_mtime(path: &Path, time: SystemTime) {
    let file = fs::OpenOptions::new().write(true).open(path).unwrap();
    file.set_modified(time).unwrap();
}
