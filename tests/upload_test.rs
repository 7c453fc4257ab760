// Uploaded files seed both the source buffer and the export name

use svg_viewer_wasm::{RasterFormat, SyncOutcome, ViewerError, ViewerState};

const ICON: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"8\" height=\"8\">\n  <rect width=\"8\" height=\"8\"/>\n</svg>\n";

#[test]
fn test_upload_sets_base_name_and_source() {
    let mut state = ViewerState::default();

    let outcome = state.apply_upload("icon.svg", ICON).unwrap();

    assert_eq!(outcome, SyncOutcome::Committed);
    assert_eq!(state.export_target.base_name, "icon");
    assert_eq!(state.source_text(), ICON);
    assert_eq!(state.rendered_markup(), ICON);
    assert_eq!(
        state.export_raster(RasterFormat::Png).unwrap().file_name,
        "icon.png"
    );
}

#[test]
fn test_upload_strips_only_last_extension() {
    let mut state = ViewerState::default();
    state.apply_upload("brand.logo.SVG", ICON).unwrap();
    assert_eq!(state.export_target.base_name, "brand.logo");
}

#[test]
fn test_upload_of_invalid_content_still_fills_buffer() {
    let mut state = ViewerState::default();

    let outcome = state.apply_upload("broken.svg", "<svg").unwrap();

    assert_eq!(outcome, SyncOutcome::Rejected);
    assert_eq!(state.source_text(), "<svg");
    assert_eq!(state.rendered_markup(), "");
    assert_eq!(state.export_target.base_name, "broken");
}

#[test]
fn test_non_svg_upload_changes_nothing() {
    let mut state = ViewerState::default();
    state.set_source_text(ICON);

    let err = state.apply_upload("notes.txt", "hello").unwrap_err();

    assert!(matches!(err, ViewerError::External { .. }));
    assert_eq!(state.source_text(), ICON);
    assert_eq!(state.export_target.base_name, "svg-preview");
}
