//! WASM API test
//!
//! Exercises the JavaScript-facing functions in a browser.

use svg_viewer_wasm::api::{self, RasterBytesUpdate, ViewerUpdate};
use svg_viewer_wasm::{NoticeLevel, SyncOutcome};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const CIRCLE: &str = r#"<svg><circle r="5"/></svg>"#;

fn update(value: JsValue) -> ViewerUpdate {
    serde_wasm_bindgen::from_value(value).unwrap()
}

#[wasm_bindgen_test]
fn test_init_with_initial_svg() {
    let result = update(api::init_viewer(JsValue::UNDEFINED, Some(CIRCLE.to_string())).unwrap());

    assert_eq!(result.snapshot.rendered_markup, CIRCLE);
    assert_eq!(result.snapshot.base_name, "svg-preview");
    assert!(result.notice.is_none());
}

#[wasm_bindgen_test]
fn test_invalid_edit_returns_warning() {
    api::init_viewer(JsValue::UNDEFINED, Some(CIRCLE.to_string())).unwrap();

    let result = update(api::set_source_text("not svg".to_string()).unwrap());

    assert_eq!(result.outcome, Some(SyncOutcome::Rejected));
    assert_eq!(result.notice.unwrap().level, NoticeLevel::Warning);
    assert_eq!(result.snapshot.rendered_markup, CIRCLE);
    assert!(!result.snapshot.can_export_image);
}

#[wasm_bindgen_test]
fn test_zoom_controls() {
    api::init_viewer(JsValue::UNDEFINED, None).unwrap();

    api::zoom_in().unwrap();
    let result = update(api::set_scale(9.0).unwrap());
    assert_eq!(result.snapshot.scale, 3.0);
    assert_eq!(result.snapshot.scale_label, "3.0x");

    api::begin_drag(0.0, 0.0).unwrap();
    let result = update(api::drag_to(30.0, 30.0).unwrap());
    assert_eq!(result.snapshot.offset_x, 10.0);

    let result = update(api::zoom_out().unwrap());
    assert_eq!(result.snapshot.offset_x, 0.0);
}

#[wasm_bindgen_test]
fn test_raster_refused_for_invalid_source() {
    api::init_viewer(JsValue::UNDEFINED, Some("not svg".to_string())).unwrap();

    let result = update(api::export_raster("png").unwrap());

    let notice = result.notice.unwrap();
    assert_eq!(notice.level, NoticeLevel::Warning);
}

#[wasm_bindgen_test]
fn test_raster_bytes_refusal_is_a_notice() {
    api::init_viewer(JsValue::UNDEFINED, Some("not svg".to_string())).unwrap();

    let value = api::export_raster_bytes("png").unwrap();
    let result: RasterBytesUpdate = serde_wasm_bindgen::from_value(value.clone()).unwrap();

    assert_eq!(result.notice.unwrap().level, NoticeLevel::Warning);
    assert!(result.file_name.is_none());
    assert!(js_sys::Reflect::get(&value, &"bytes".into()).unwrap().is_undefined());
}

#[wasm_bindgen_test]
fn test_raster_bytes_are_png() {
    api::init_viewer(JsValue::UNDEFINED, Some(CIRCLE.to_string())).unwrap();

    let value = api::export_raster_bytes("png").unwrap();
    let result: RasterBytesUpdate = serde_wasm_bindgen::from_value(value.clone()).unwrap();
    let bytes = js_sys::Uint8Array::new(&js_sys::Reflect::get(&value, &"bytes".into()).unwrap()).to_vec();

    assert!(result.notice.is_none());
    assert_eq!(result.file_name.as_deref(), Some("svg-preview.png"));
    assert_eq!(&bytes[..4], b"\x89PNG");
}

#[wasm_bindgen_test]
fn test_config_override() {
    let config = js_sys::Object::new();
    js_sys::Reflect::set(&config, &"defaultBaseName".into(), &"drawing".into()).unwrap();

    let result = update(api::init_viewer(config.into(), None).unwrap());

    assert_eq!(result.snapshot.base_name, "drawing");
}

#[wasm_bindgen_test]
fn test_clear_source() {
    api::init_viewer(JsValue::UNDEFINED, Some(CIRCLE.to_string())).unwrap();

    let result = update(api::clear_source().unwrap());

    assert_eq!(result.notice.unwrap().level, NoticeLevel::Info);
    assert!(result.snapshot.show_placeholder);
    assert_eq!(result.snapshot.source_text, "");
}

#[wasm_bindgen_test]
async fn test_copy_refused_when_empty() {
    api::init_viewer(JsValue::UNDEFINED, None).unwrap();

    let result = update(api::copy_source().await.unwrap());

    assert_eq!(result.notice.unwrap().level, NoticeLevel::Warning);
    assert!(result.snapshot.busy.is_empty());
}

#[wasm_bindgen_test]
async fn test_missing_sample_reports_error() {
    api::init_viewer(JsValue::UNDEFINED, None).unwrap();

    let result = update(api::load_sample(99).await.unwrap());

    assert_eq!(result.notice.unwrap().level, NoticeLevel::Error);
}

#[wasm_bindgen_test]
fn test_save_flow_defers_url_revocation() {
    let artifact = svg_viewer_wasm::Artifact {
        file_name: "note.svg".to_string(),
        mime_type: "image/svg+xml".to_string(),
        bytes: CIRCLE.as_bytes().to_vec(),
    };

    // The revoke runs from a timer after this call returns
    assert!(api::save_artifact(&artifact).is_ok());
}
