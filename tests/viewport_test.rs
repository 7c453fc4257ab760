// Viewport scale clamping and offset reset rules

use svg_viewer_wasm::config::ZoomConfig;
use svg_viewer_wasm::Viewport;

fn panned(viewport: &mut Viewport) {
    viewport.begin_drag(0.0, 0.0);
    viewport.drag_to(40.0, -20.0);
    viewport.end_drag();
    assert_ne!(viewport.offset(), (0.0, 0.0));
}

#[test]
fn test_repeated_zoom_in_never_exceeds_max() {
    let mut viewport = Viewport::default();

    for _ in 0..100 {
        viewport.zoom_in();
        assert!(viewport.scale() <= 3.0);
    }
    assert_eq!(viewport.scale(), 3.0);
}

#[test]
fn test_repeated_zoom_out_never_below_min() {
    let mut viewport = Viewport::default();

    for _ in 0..100 {
        viewport.zoom_out();
        assert!(viewport.scale() >= 0.1);
    }
    assert_eq!(viewport.scale(), 0.1);
}

#[test]
fn test_zoom_steps_by_tenth() {
    let mut viewport = Viewport::default();
    viewport.zoom_in();
    assert!((viewport.scale() - 1.1).abs() < 1e-9);
    assert_eq!(viewport.scale_label(), "1.1x");

    viewport.zoom_out();
    viewport.zoom_out();
    assert!((viewport.scale() - 0.9).abs() < 1e-9);
}

#[test]
fn test_slider_clamps_out_of_range_input() {
    let mut viewport = Viewport::default();

    viewport.set_scale(10.0);
    assert_eq!(viewport.scale(), 3.0);

    viewport.set_scale(-4.0);
    assert_eq!(viewport.scale(), 0.1);

    viewport.set_scale(0.0);
    assert_eq!(viewport.scale(), 0.1);

    viewport.set_scale(f64::INFINITY);
    assert_eq!(viewport.scale(), 0.1);

    viewport.set_scale(1.7);
    assert_eq!(viewport.scale(), 1.7);
}

#[test]
fn test_every_scale_change_resets_offset() {
    let mut viewport = Viewport::default();

    panned(&mut viewport);
    viewport.set_scale(2.0);
    assert_eq!(viewport.offset(), (0.0, 0.0));

    panned(&mut viewport);
    viewport.zoom_in();
    assert_eq!(viewport.offset(), (0.0, 0.0));

    panned(&mut viewport);
    viewport.zoom_out();
    assert_eq!(viewport.offset(), (0.0, 0.0));
}

#[test]
fn test_press_at_limit_keeps_offset() {
    let mut viewport = Viewport::default();

    viewport.set_scale(3.0);
    panned(&mut viewport);
    let offset = viewport.offset();
    viewport.zoom_in();
    assert_eq!(viewport.scale(), 3.0);
    assert_eq!(viewport.offset(), offset);

    viewport.set_scale(0.1);
    panned(&mut viewport);
    let offset = viewport.offset();
    viewport.zoom_out();
    viewport.set_scale(-1.0);
    assert_eq!(viewport.scale(), 0.1);
    assert_eq!(viewport.offset(), offset);
}

#[test]
fn test_explicit_recenter_keeps_scale() {
    let mut viewport = Viewport::default();
    viewport.set_scale(2.0);
    panned(&mut viewport);

    viewport.reset_offset();

    assert_eq!(viewport.offset(), (0.0, 0.0));
    assert_eq!(viewport.scale(), 2.0);
}

#[test]
fn test_css_transform_scales_then_translates() {
    let mut viewport = Viewport::default();
    viewport.set_scale(2.0);
    viewport.begin_drag(10.0, 10.0);
    viewport.drag_to(30.0, 0.0);

    assert_eq!(viewport.css_transform(), "scale(2) translate(10px, -5px)");
}

#[test]
fn test_custom_limits() {
    let mut viewport = Viewport::new(ZoomConfig {
        min: 0.5,
        max: 2.0,
        step: 0.5,
    });

    viewport.zoom_in();
    viewport.zoom_in();
    viewport.zoom_in();
    assert_eq!(viewport.scale(), 2.0);

    viewport.set_scale(0.1);
    assert_eq!(viewport.scale(), 0.5);
}
