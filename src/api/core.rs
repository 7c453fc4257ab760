//! Core viewer API
//!
//! JavaScript-facing functions for the source buffer, the viewport and the
//! export name. Every action returns a `ViewerUpdate` with the notice to show
//! (if any) and a fresh snapshot of the viewer.

use std::sync::Mutex;
use lazy_static::lazy_static;
use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, lock_viewer, require_viewer, serialize, validation_error};
use crate::api::types::ViewerUpdate;
use crate::config::{ConfigOverrides, ViewerConfig};
use crate::errors::{ViewerError, ViewerResult};
use crate::models::{Notice, OperationKind, SyncOutcome, ViewerState};
use crate::{wasm_error, wasm_info, wasm_log, wasm_warn};

// WASM-owned viewer storage (canonical source of truth)
lazy_static! {
    pub(crate) static ref VIEWER: Mutex<Option<ViewerState>> = Mutex::new(None);
}

// ============================================================================
// Update plumbing
// ============================================================================

pub(crate) fn to_update(
    state: &ViewerState,
    notice: Option<Notice>,
    outcome: Option<SyncOutcome>,
) -> Result<JsValue, JsValue> {
    let update = ViewerUpdate {
        notice,
        outcome,
        snapshot: state.snapshot(),
    };
    serialize(&update, "Failed to serialize viewer update")
}

/// Run a synchronous action against the viewer and report the result
fn update_viewer(
    action: &str,
    f: impl FnOnce(&mut ViewerState) -> ViewerResult<Option<Notice>>,
) -> Result<JsValue, JsValue> {
    let mut guard = lock_viewer()?;
    let state = require_viewer(&mut guard)?;

    let notice = match f(state) {
        Ok(notice) => notice,
        Err(e) => {
            wasm_warn!("{} refused: {}", action, e);
            Some(e.notice())
        }
    };

    to_update(state, notice, None)
}

/// Outcome of starting an asynchronous operation
pub(crate) enum Started<T> {
    /// The operation may proceed with this input; its kind is now busy
    Proceed(T),
    /// The operation was refused; hand this update back to the caller
    Refused(JsValue),
}

/// Validate preconditions and mark `kind` busy
///
/// The lock is released before returning, so the caller can await freely.
pub(crate) fn begin_operation<T>(
    kind: OperationKind,
    prepare: impl FnOnce(&ViewerState) -> ViewerResult<T>,
) -> Result<Started<T>, JsValue> {
    let mut guard = lock_viewer()?;
    let state = require_viewer(&mut guard)?;

    let started = prepare(state).and_then(|input| {
        state.in_flight.begin(kind)?;
        Ok(input)
    });

    match started {
        Ok(input) => Ok(Started::Proceed(input)),
        Err(e) => {
            wasm_warn!("{} refused: {}", kind, e);
            Ok(Started::Refused(to_update(state, Some(e.notice()), None)?))
        }
    }
}

/// Clear the busy flag for `kind` and apply the operation's result
pub(crate) fn finish_operation(
    kind: OperationKind,
    apply: impl FnOnce(&mut ViewerState) -> ViewerResult<(Notice, Option<SyncOutcome>)>,
) -> Result<JsValue, JsValue> {
    let mut guard = lock_viewer()?;
    let state = require_viewer(&mut guard)?;
    state.in_flight.finish(kind);

    match apply(state) {
        Ok((notice, outcome)) => to_update(state, Some(notice), outcome),
        Err(e) => {
            wasm_error!("{}", e);
            to_update(state, Some(e.notice()), None)
        }
    }
}

// ============================================================================
// Lifecycle
// ============================================================================

fn install_viewer(config: ViewerConfig, initial_svg: Option<String>) -> Result<JsValue, JsValue> {
    let state = match initial_svg {
        Some(text) => ViewerState::with_source(config, text),
        None => ViewerState::new(config),
    };

    let update = to_update(&state, None, None)?;
    *lock_viewer()? = Some(state);

    wasm_info!("SVG viewer initialized");
    Ok(update)
}

/// Create (or replace) the viewer
///
/// # Parameters
/// - `config_js`: optional object overriding parts of the built-in configuration
///   (`defaultBaseName`, `minScale`, `maxScale`, `zoomStep`, `jpegQuality`,
///   `maxDimension`, `samples`)
/// - `initial_svg`: optional markup to start with
#[wasm_bindgen(js_name = initViewer)]
pub fn init_viewer(config_js: JsValue, initial_svg: Option<String>) -> Result<JsValue, JsValue> {
    let overrides: ConfigOverrides = if config_js.is_undefined() || config_js.is_null() {
        ConfigOverrides::default()
    } else {
        deserialize(config_js, "Invalid viewer configuration")?
    };

    let config = ViewerConfig::builtin()
        .with_overrides(overrides)
        .map_err(|e| validation_error(ViewerError::from(e).to_string()))?;

    install_viewer(config, initial_svg)
}

/// Create the viewer from a complete YAML configuration document
#[wasm_bindgen(js_name = initViewerFromYaml)]
pub fn init_viewer_from_yaml(yaml: &str, initial_svg: Option<String>) -> Result<JsValue, JsValue> {
    let config = ViewerConfig::from_yaml(yaml)
        .map_err(|e| validation_error(ViewerError::from(e).to_string()))?;

    install_viewer(config, initial_svg)
}

#[wasm_bindgen(js_name = getSnapshot)]
pub fn get_snapshot() -> Result<JsValue, JsValue> {
    let mut guard = lock_viewer()?;
    let state = require_viewer(&mut guard)?;
    serialize(&state.snapshot(), "Failed to serialize snapshot")
}

// ============================================================================
// Source buffer
// ============================================================================

/// Validity gate, exposed for the host's own checks
#[wasm_bindgen(js_name = isValidSvg)]
pub fn is_valid_svg(text: &str) -> bool {
    crate::validation::is_valid_svg(text)
}

/// Push editor content into the source buffer
///
/// Called on every change of the code editor. Invalid text is kept in the
/// buffer but does not reach the preview.
#[wasm_bindgen(js_name = setSourceText)]
pub fn set_source_text(text: String) -> Result<JsValue, JsValue> {
    let mut guard = lock_viewer()?;
    let state = require_viewer(&mut guard)?;

    let outcome = state.set_source_text(text);
    wasm_log!("setSourceText: {:?} ({} bytes)", outcome, state.source_text().len());

    to_update(state, outcome.notice(), Some(outcome))
}

/// Empty the source buffer and the preview
#[wasm_bindgen(js_name = clearSource)]
pub fn clear_source() -> Result<JsValue, JsValue> {
    update_viewer("clearSource", |state| Ok(Some(state.clear_source())))
}

#[wasm_bindgen(js_name = setBaseName)]
pub fn set_base_name(name: String) -> Result<JsValue, JsValue> {
    update_viewer("setBaseName", |state| {
        state.set_base_name(name);
        Ok(None)
    })
}

// ============================================================================
// Viewport
// ============================================================================

#[wasm_bindgen(js_name = zoomIn)]
pub fn zoom_in() -> Result<JsValue, JsValue> {
    update_viewer("zoomIn", |state| {
        state.viewport.zoom_in();
        Ok(None)
    })
}

#[wasm_bindgen(js_name = zoomOut)]
pub fn zoom_out() -> Result<JsValue, JsValue> {
    update_viewer("zoomOut", |state| {
        state.viewport.zoom_out();
        Ok(None)
    })
}

/// Slider input; clamped to the configured scale range
#[wasm_bindgen(js_name = setScale)]
pub fn set_scale(value: f64) -> Result<JsValue, JsValue> {
    update_viewer("setScale", |state| {
        state.viewport.set_scale(value);
        Ok(None)
    })
}

/// Recenter the preview without changing the scale
#[wasm_bindgen(js_name = resetOffset)]
pub fn reset_offset() -> Result<JsValue, JsValue> {
    update_viewer("resetOffset", |state| {
        state.viewport.reset_offset();
        Ok(None)
    })
}

#[wasm_bindgen(js_name = beginDrag)]
pub fn begin_drag(x: f64, y: f64) -> Result<JsValue, JsValue> {
    update_viewer("beginDrag", |state| {
        state.viewport.begin_drag(x, y);
        Ok(None)
    })
}

#[wasm_bindgen(js_name = dragTo)]
pub fn drag_to(x: f64, y: f64) -> Result<JsValue, JsValue> {
    update_viewer("dragTo", |state| {
        state.viewport.drag_to(x, y);
        Ok(None)
    })
}

#[wasm_bindgen(js_name = endDrag)]
pub fn end_drag() -> Result<JsValue, JsValue> {
    update_viewer("endDrag", |state| {
        state.viewport.end_drag();
        Ok(None)
    })
}

// ============================================================================
// Samples
// ============================================================================

#[wasm_bindgen(js_name = listSamples)]
pub fn list_samples() -> Result<JsValue, JsValue> {
    let mut guard = lock_viewer()?;
    let state = require_viewer(&mut guard)?;
    serialize(&state.samples.entries(), "Failed to serialize sample catalog")
}
