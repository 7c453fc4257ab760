//! SVG Viewer WASM API
//!
//! This module provides the JavaScript-facing API for the SVG viewer.
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros, serialization and state access
//! - `types`: the `ViewerUpdate` result returned by actions
//! - `core`: viewer lifecycle, source buffer, viewport and export name
//! - `export`: PNG / JPEG / SVG snapshot / source downloads
//! - `browser`: preview injection, clipboard, sample fetch and upload

pub mod helpers;
pub mod types;
pub mod core;
pub mod export;
pub mod browser;

pub use self::core::*;
pub use export::{export_raster, export_raster_bytes, export_vector, download_source};
pub use browser::{render_preview, copy_source, load_sample, upload_file, is_busy, save_artifact};
pub use types::{RasterBytesUpdate, ViewerUpdate};
