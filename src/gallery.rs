//! Static HTML gallery generation.
//!
//! Renders a single `index.html` listing every logo in the collection:
//! an inline SVG preview plus one download link per rendered PNG size.
//!
//! ```text
//! index.html
//! ├── logo      → share/icons/hicolor/{16x16,…,512x512}/logo.png
//! └── badge     → share/icons/hicolor/{16x16,…,512x512}/badge.png
//! ```
//!
//! Link targets are built with [`icon::artifact_rel_path`], the same
//! function the regenerator uses for its output paths — the page and the
//! rendered tree stay in sync by construction. The page itself never
//! checks whether the PNGs exist; `icon` owns that.
//!
//! HTML comes from [maud](https://maud.lambda.xyz/) — type-safe templates
//! with automatic escaping — and the stylesheet is embedded at compile
//! time, so the generated page is a single self-contained file next to
//! the logo directory.

use crate::icon::{self, IconConfig};
use crate::scan::{Asset, Listing};
use maud::{DOCTYPE, Markup, html};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS: &str = include_str!("../static/style.css");

/// Generate the gallery page at `out_path` (conventionally `index.html`
/// in the directory the preview server serves).
pub fn generate(
    listing: &Listing,
    config: &IconConfig,
    out_path: &Path,
) -> Result<(), GalleryError> {
    let page = render_index(listing, config);
    fs::write(out_path, page.into_string())?;
    Ok(())
}

/// Render the gallery page.
pub fn render_index(listing: &Listing, config: &IconConfig) -> Markup {
    let sizes_label = config
        .sizes
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let content = html! {
        header.page-header {
            h1 { "Logos" }
            p {
                (listing.assets.len()) " logos · sizes: " (sizes_label)
            }
        }
        main {
            @for asset in &listing.assets {
                (render_card(asset, config))
            }
        }
        footer {
            "Rendered PNGs live under " code { (config.output_root.display()) }
            " — regenerate with " code { "logo-gal icon" } "."
        }
    };

    base_document("Logos", content)
}

/// One gallery row: preview image plus per-size PNG links.
fn render_card(asset: &Asset, config: &IconConfig) -> Markup {
    let preview_src = format!(
        "{}/{}",
        config.source_dir.display(),
        asset.file_name
    );

    html! {
        section.logo-card {
            img.logo-preview src=(preview_src) alt=(asset.name);
            div {
                h2.logo-name { (asset.name) }
                p.size-links {
                    @for &size in &config.sizes {
                        a href=(png_href(config, size, &asset.name)) {
                            (size) "px"
                        }
                    }
                }
            }
        }
    }
}

/// Link target for one rendered artifact, e.g.
/// `share/icons/hicolor/16x16/logo.png`.
fn png_href(config: &IconConfig, size: u32, name: &str) -> String {
    format!(
        "{}/{}",
        config.output_root.display(),
        icon::artifact_rel_path(size, name)
    )
}

/// Base HTML document with the embedded stylesheet.
fn base_document(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (CSS) }
            }
            body {
                (content)
            }
        }
    }
}
