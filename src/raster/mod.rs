//! Raster conversion — delegated to an external converter.
//!
//! | Operation | Collaborator |
//! |---|---|
//! | **Probe** | `rsvg-convert --version` |
//! | **Render SVG → PNG** | `rsvg-convert -w N -h N --background-color none` |
//!
//! The module is split into:
//! - **Parameters**: data describing a single conversion ([`RenderParams`])
//! - **Backend**: [`RasterBackend`] trait (probe + render)
//! - **rsvg**: the production [`RsvgBackend`] process wrapper

pub mod backend;
mod params;
pub mod rsvg;

pub use backend::{BackendError, RasterBackend};
pub use params::RenderParams;
pub use rsvg::RsvgBackend;
