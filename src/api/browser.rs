//! Browser collaborators
//!
//! DOM preview injection, file saving, clipboard, sample fetching and upload
//! reading. Asynchronous operations mark their kind busy for as long as the
//! browser promise is pending, and never hold the viewer lock across an await.

use js_sys::{Array, Uint8Array};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, File, HtmlAnchorElement, HtmlElement, Response, Url};

use crate::api::core::{begin_operation, finish_operation, Started};
use crate::api::helpers::{describe_js_error, lock_viewer, require_viewer, validation_error};
use crate::errors::ViewerError;
use crate::export::Artifact;
use crate::models::{Notice, OperationKind};
use crate::utils::filename::has_svg_extension;
use crate::{wasm_info, wasm_log};

const PREVIEW_PLACEHOLDER: &str = "SVG preview will appear here";

fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

// ============================================================================
// Preview
// ============================================================================

/// Inject the rendered markup into the preview element and apply the viewport
///
/// `element_id` names the wrapper that carries the transform; its parent is
/// expected to clip overflow.
#[wasm_bindgen(js_name = renderPreview)]
pub fn render_preview(element_id: &str) -> Result<(), JsValue> {
    let document = window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let element: HtmlElement = document
        .get_element_by_id(element_id)
        .ok_or_else(|| validation_error(format!("Preview element '{}' not found", element_id)))?
        .dyn_into()
        .map_err(|_| validation_error(format!("Preview element '{}' is not an HTML element", element_id)))?;

    let mut guard = lock_viewer()?;
    let state = require_viewer(&mut guard)?;

    if state.rendered_markup().is_empty() {
        element.set_text_content(Some(PREVIEW_PLACEHOLDER));
    } else {
        element.set_inner_html(state.rendered_markup());
    }

    let style = element.style();
    style.set_property("transform", &state.viewport.css_transform())?;
    style.set_property("transform-origin", "center")?;
    style.set_property("transition", "none")?;
    style.set_property("will-change", "transform")?;

    Ok(())
}

// ============================================================================
// Downloads
// ============================================================================

const REVOKE_DELAY_MS: i32 = 1_000;

/// Trigger the browser's save flow for an artifact
pub fn save_artifact(artifact: &Artifact) -> Result<(), JsValue> {
    let document = window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let parts = Array::new();
    parts.push(&Uint8Array::from(artifact.bytes.as_slice()));
    let options = BlobPropertyBag::new();
    options.set_type(&artifact.mime_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;

    let url = Url::create_object_url_with_blob(&blob)?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(|_| JsValue::from_str("failed to create anchor element"))?;
    anchor.set_href(&url);
    anchor.set_download(&artifact.file_name);
    anchor.click();

    // Revoking in the same task can cancel the download in some browsers
    let revoke = Closure::once(move || {
        if let Err(e) = Url::revoke_object_url(&url) {
            log::warn!("failed to revoke object URL: {}", describe_js_error(&e));
        }
    });
    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        revoke.as_ref().unchecked_ref(),
        REVOKE_DELAY_MS,
    )?;
    revoke.forget();

    wasm_log!("save flow started for {}", artifact.file_name);
    Ok(())
}

// ============================================================================
// Clipboard
// ============================================================================

/// Copy the raw source text to the system clipboard
#[wasm_bindgen(js_name = copySource)]
pub async fn copy_source() -> Result<JsValue, JsValue> {
    let kind = OperationKind::ClipboardCopy;
    let text = match begin_operation(kind, |state| state.exportable_source().map(str::to_owned))? {
        Started::Proceed(text) => text,
        Started::Refused(update) => return Ok(update),
    };

    let written = async {
        let clipboard = window()?.navigator().clipboard();
        JsFuture::from(clipboard.write_text(&text)).await
    }
    .await;

    finish_operation(kind, |_| {
        written.map_err(|e| ViewerError::external(kind, describe_js_error(&e)))?;
        wasm_info!("copied {} bytes to clipboard", text.len());
        Ok((Notice::success("SVG code copied to clipboard"), None))
    })
}

// ============================================================================
// Samples
// ============================================================================

async fn fetch_text(locator: &str) -> Result<String, JsValue> {
    let response: Response = JsFuture::from(window()?.fetch_with_str(locator))
        .await?
        .dyn_into()?;

    if !response.ok() {
        return Err(JsValue::from_str(&format!(
            "HTTP {} for {}",
            response.status(),
            locator
        )));
    }

    JsFuture::from(response.text()?)
        .await?
        .as_string()
        .ok_or_else(|| JsValue::from_str("response body is not text"))
}

/// Fetch a sample from the catalog and load it into the source buffer
///
/// Fetch failures are logged and reported as a notice like every other
/// external failure.
#[wasm_bindgen(js_name = loadSample)]
pub async fn load_sample(index: usize) -> Result<JsValue, JsValue> {
    let kind = OperationKind::SampleFetch;
    let entry = match begin_operation(kind, |state| {
        state
            .samples
            .get(index)
            .cloned()
            .ok_or_else(|| ViewerError::external(kind, format!("no sample at index {}", index)))
    })? {
        Started::Proceed(entry) => entry,
        Started::Refused(update) => return Ok(update),
    };

    wasm_log!("fetching sample '{}' from {}", entry.label, entry.locator);
    let fetched = fetch_text(&entry.locator).await;

    finish_operation(kind, |state| {
        let text = fetched.map_err(|e| ViewerError::external(kind, describe_js_error(&e)))?;
        let outcome = state.set_source_text(text);
        let notice = outcome
            .notice()
            .unwrap_or_else(|| Notice::info(format!("Loaded sample {}", entry.label)));
        Ok((notice, Some(outcome)))
    })
}

// ============================================================================
// Upload
// ============================================================================

/// Read an uploaded `.svg` file into the source buffer
///
/// The file name without its extension becomes the export base name.
#[wasm_bindgen(js_name = uploadFile)]
pub async fn upload_file(file: File) -> Result<JsValue, JsValue> {
    let kind = OperationKind::Upload;
    let name = file.name();
    let started = begin_operation(kind, |_| {
        if has_svg_extension(&name) {
            Ok(())
        } else {
            Err(ViewerError::external(kind, format!("unsupported file type: {}", name)))
        }
    })?;
    if let Started::Refused(update) = started {
        return Ok(update);
    }

    let read = JsFuture::from(file.text()).await;

    finish_operation(kind, |state| {
        let content = read
            .map_err(|e| ViewerError::external(kind, describe_js_error(&e)))?
            .as_string()
            .ok_or_else(|| ViewerError::external(kind, "file content is not text"))?;

        let outcome = state.apply_upload(&name, content)?;
        let notice = outcome
            .notice()
            .unwrap_or_else(|| Notice::success(format!("Loaded {}", name)));
        Ok((notice, Some(outcome)))
    })
}

/// Whether an operation of the given kind is still pending
#[wasm_bindgen(js_name = isBusy)]
pub fn is_busy(kind: JsValue) -> Result<bool, JsValue> {
    let kind: OperationKind = crate::api::helpers::deserialize(kind, "Invalid operation kind")?;
    let mut guard = lock_viewer()?;
    let state = require_viewer(&mut guard)?;
    Ok(state.in_flight.is_busy(kind))
}
