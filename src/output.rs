//! CLI output formatting for all commands.
//!
//! Output is information-centric: each entity leads with its positional
//! index and logical name, with filesystem paths as indented `Source:`
//! context lines. Per-task progress shows one line per (logo, size) pair
//! under its size group.
//!
//! ```text
//! 16x16 (2 logos)
//!     badge: converted
//!     logo: fresh
//! 32x32 (2 logos)
//!     badge: converted
//!     logo: failed (rsvg-convert: …)
//! Icons: 3 converted, 1 fresh (4 total), 1 failed
//! ```
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::icon::{self, RegenEvent, RegenReport, TaskStatus};
use crate::scan::Listing;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

// ============================================================================
// check / scan listing
// ============================================================================

/// Format the discovered logo listing.
pub fn format_check_output(listing: &Listing) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Logos".to_string());
    for (i, asset) in listing.assets.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), asset.name));
        lines.push(format!("    Source: {}", asset.file_name));
    }
    lines
}

/// Print the logo listing to stdout.
pub fn print_check_output(listing: &Listing) {
    for line in format_check_output(listing) {
        println!("{}", line);
    }
}

// ============================================================================
// icon progress and summary
// ============================================================================

/// Format a single regeneration progress event as display lines.
pub fn format_icon_event(event: &RegenEvent) -> Vec<String> {
    match event {
        RegenEvent::SizeStarted { size, asset_count } => {
            vec![format!(
                "{} ({} logos)",
                icon::size_dir_name(*size),
                asset_count
            )]
        }
        RegenEvent::Task { name, status, .. } => {
            let status_str = match status {
                TaskStatus::Converted => "converted".to_string(),
                TaskStatus::Fresh => "fresh".to_string(),
                TaskStatus::Failed(msg) => format!("failed ({})", msg),
            };
            vec![format!("    {}: {}", name, status_str)]
        }
    }
}

/// Format the end-of-batch summary, one detail line per failure.
pub fn format_icon_summary(report: &RegenReport) -> Vec<String> {
    let mut lines = vec![format!("Icons: {}", report)];
    for failure in &report.failures {
        lines.push(format!(
            "    failed {}: {}",
            icon::artifact_rel_path(failure.size, &failure.name),
            failure.message
        ));
    }
    lines
}

/// Print the regeneration summary to stdout.
pub fn print_icon_summary(report: &RegenReport) {
    for line in format_icon_summary(report) {
        println!("{}", line);
    }
}

// ============================================================================
// index generation
// ============================================================================

/// Format the gallery-generation result line.
pub fn format_index_output(listing: &Listing, out_path: &Path) -> Vec<String> {
    vec![format!(
        "Generated {} ({} logos)",
        out_path.display(),
        listing.assets.len()
    )]
}

/// Print the gallery-generation result to stdout.
pub fn print_index_output(listing: &Listing, out_path: &Path) {
    for line in format_index_output(listing, out_path) {
        println!("{}", line);
    }
}
