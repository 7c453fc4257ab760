//! Shared types for the WASM API
//!
//! This module contains the result types returned by the viewer actions.

use serde::{Deserialize, Serialize};

use crate::models::{Notice, SyncOutcome, ViewerSnapshot};

/// Result of a viewer action: an optional toast and the state to render
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ViewerUpdate {
    pub notice: Option<Notice>,
    /// Present when the action pushed text into the source buffer
    pub outcome: Option<SyncOutcome>,
    pub snapshot: ViewerSnapshot,
}

/// Result of `exportRasterBytes`
///
/// `fileName` and `mimeType` are set when the image was built; the browser
/// layer then attaches the encoded image as a `bytes` Uint8Array. On failure
/// only the notice explains what went wrong.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RasterBytesUpdate {
    pub notice: Option<Notice>,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
    pub snapshot: ViewerSnapshot,
}
