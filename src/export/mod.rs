//! Export bridge
//!
//! Produces downloadable artifacts from the viewer state:
//! - raster images (PNG/JPEG) and a vector snapshot from the rendered markup
//! - the raw source text as an `.svg` file
//!
//! Saving the artifact and writing to the clipboard are left to the browser
//! layer in `api::browser`.

use serde::{Deserialize, Serialize};

use crate::errors::{ViewerError, ViewerResult};
use crate::models::{Notice, OperationKind, ViewerState};
use crate::renderers::{self, RasterFormat, RenderError};

pub const SVG_MIME: &str = "image/svg+xml";
pub const SOURCE_MIME: &str = "image/svg+xml;charset=utf-8";

/// A file ready to be saved
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl Artifact {
    /// Notice shown once the artifact has been handed to the save flow
    pub fn saved_notice(&self) -> Notice {
        Notice::success(format!("Saved {}", self.file_name))
    }
}

fn render_failure(operation: OperationKind, err: RenderError) -> ViewerError {
    log::error!("{} failed: {}", operation, err);
    ViewerError::external(operation, err.to_string())
}

impl ViewerState {
    /// Rasterize the rendered markup at its nominal size
    ///
    /// Refused unless the current source is non-empty and passes the gate.
    pub fn export_raster(&self, format: RasterFormat) -> ViewerResult<Artifact> {
        let markup = self.exportable_markup()?;
        let raster = &self.config().raster;

        let bytes = renderers::rasterize(markup, format, raster.max_dimension, raster.jpeg_quality)
            .map_err(|e| render_failure(OperationKind::RasterExport, e))?;

        log::info!("exported {} ({} bytes)", format, bytes.len());
        Ok(Artifact {
            file_name: self.export_target.file_name(format.extension()),
            mime_type: format.mime_type().to_string(),
            bytes,
        })
    }

    /// Serialize the parsed render tree as a normalized SVG document
    pub fn export_vector_snapshot(&self) -> ViewerResult<Artifact> {
        let markup = self.exportable_markup()?;

        let snapshot = renderers::snapshot_markup(markup)
            .map_err(|e| render_failure(OperationKind::VectorExport, e))?;

        Ok(Artifact {
            file_name: self.export_target.file_name("svg"),
            mime_type: SVG_MIME.to_string(),
            bytes: snapshot.into_bytes(),
        })
    }

    /// The raw source text as typed, named after the export base name
    pub fn download_source(&self) -> ViewerResult<Artifact> {
        let source = self.exportable_source()?;

        Ok(Artifact {
            file_name: self.export_target.file_name("svg"),
            mime_type: SOURCE_MIME.to_string(),
            bytes: source.as_bytes().to_vec(),
        })
    }
}
