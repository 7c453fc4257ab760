//! SVG Viewer WASM Module
//!
//! Owns the state behind the SVG preview page: the editable source, the
//! last valid markup shown in the preview, the zoom/pan viewport and the
//! export actions (PNG, JPEG, SVG snapshot, raw source).

pub mod api;
pub mod config;
pub mod errors;
pub mod export;
pub mod models;
pub mod renderers;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use config::ViewerConfig;
pub use errors::{ViewerError, ViewerResult};
pub use export::Artifact;
pub use models::*;
pub use renderers::RasterFormat;
pub use validation::is_valid_svg;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("SVG viewer WASM module initialized");
}
