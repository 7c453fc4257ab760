//! Export operations for the WASM API
//!
//! This module provides the download actions:
//! - PNG / JPEG: rasterized rendered markup at nominal size
//! - SVG snapshot: normalized re-serialization of the rendered markup
//! - Source: the raw editor text
//!
//! Each action builds the artifact from the viewer state, then hands it to
//! the browser's save flow. Exports run to completion inside one call, so a
//! second click cannot overlap the first.

use wasm_bindgen::prelude::*;

use crate::api::browser::save_artifact;
use crate::api::core::to_update;
use crate::api::helpers::{describe_js_error, lock_viewer, require_viewer, serialize};
use crate::api::types::RasterBytesUpdate;
use crate::errors::{ViewerError, ViewerResult};
use crate::export::Artifact;
use crate::models::{OperationKind, ViewerState};
use crate::renderers::RasterFormat;
use crate::{wasm_error, wasm_info};

fn export_with(
    kind: OperationKind,
    build: impl FnOnce(&ViewerState) -> ViewerResult<Artifact>,
) -> Result<JsValue, JsValue> {
    let mut guard = lock_viewer()?;
    let state = require_viewer(&mut guard)?;

    let saved = build(state).and_then(|artifact| {
        save_artifact(&artifact).map_err(|e| {
            ViewerError::external(kind, describe_js_error(&e))
        })?;
        Ok(artifact)
    });

    match saved {
        Ok(artifact) => {
            wasm_info!("{} saved as {} ({} bytes)", kind, artifact.file_name, artifact.bytes.len());
            to_update(state, Some(artifact.saved_notice()), None)
        }
        Err(e) => {
            wasm_error!("{}", e);
            to_update(state, Some(e.notice()), None)
        }
    }
}

/// Export the preview as an image
///
/// # Parameters
/// - `format`: `"png"` or `"jpeg"` (`"jpg"` accepted)
#[wasm_bindgen(js_name = exportRaster)]
pub fn export_raster(format: &str) -> Result<JsValue, JsValue> {
    let format: RasterFormat = format.parse().map_err(|e: String| JsValue::from_str(&e))?;
    export_with(OperationKind::RasterExport, |state| state.export_raster(format))
}

/// Export a normalized SVG snapshot of the preview as `{baseName}.svg`
#[wasm_bindgen(js_name = exportVector)]
pub fn export_vector() -> Result<JsValue, JsValue> {
    export_with(OperationKind::VectorExport, ViewerState::export_vector_snapshot)
}

/// Download the raw source text as `{baseName}.svg`
#[wasm_bindgen(js_name = downloadSource)]
pub fn download_source() -> Result<JsValue, JsValue> {
    export_with(OperationKind::SourceDownload, ViewerState::download_source)
}

/// Build an image without saving it, for hosts that handle downloads themselves
///
/// # Returns
/// A `RasterBytesUpdate`. On success it carries the file name, MIME type and
/// a `bytes` Uint8Array; on failure only the notice, and nothing is thrown
#[wasm_bindgen(js_name = exportRasterBytes)]
pub fn export_raster_bytes(format: &str) -> Result<JsValue, JsValue> {
    let format: RasterFormat = format.parse().map_err(|e: String| JsValue::from_str(&e))?;
    let mut guard = lock_viewer()?;
    let state = require_viewer(&mut guard)?;

    match state.export_raster(format) {
        Ok(artifact) => {
            wasm_info!("{} built ({} bytes)", artifact.file_name, artifact.bytes.len());
            let update = RasterBytesUpdate {
                notice: None,
                file_name: Some(artifact.file_name.clone()),
                mime_type: Some(artifact.mime_type.clone()),
                snapshot: state.snapshot(),
            };
            let value = serialize(&update, "Failed to serialize raster export")?;
            let bytes = js_sys::Uint8Array::from(artifact.bytes.as_slice());
            js_sys::Reflect::set(&value, &JsValue::from_str("bytes"), &bytes)?;
            Ok(value)
        }
        Err(e) => {
            wasm_error!("{}", e);
            let update = RasterBytesUpdate {
                notice: Some(e.notice()),
                file_name: None,
                mime_type: None,
                snapshot: state.snapshot(),
            };
            serialize(&update, "Failed to serialize raster export")
        }
    }
}
