//! Preview viewport transform
//!
//! Scale and offset only affect how the rendered markup is displayed. They
//! never touch the document and never leak into exports.

use serde::{Deserialize, Serialize};

use crate::config::ZoomConfig;

/// Active pointer drag, in screen coordinates
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DragAnchor {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    scale: f64,
    offset_x: f64,
    offset_y: f64,
    limits: ZoomConfig,
    #[serde(skip)]
    drag: Option<DragAnchor>,
}

impl Viewport {
    pub fn new(limits: ZoomConfig) -> Self {
        Self {
            scale: 1.0_f64.clamp(limits.min, limits.max),
            offset_x: 0.0,
            offset_y: 0.0,
            limits,
            drag: None,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> (f64, f64) {
        (self.offset_x, self.offset_y)
    }

    pub fn limits(&self) -> ZoomConfig {
        self.limits
    }

    pub fn zoom_in(&mut self) {
        self.apply_scale((self.scale + self.limits.step).min(self.limits.max));
    }

    pub fn zoom_out(&mut self) {
        self.apply_scale((self.scale - self.limits.step).max(self.limits.min));
    }

    /// Slider input. Non-finite values are ignored.
    pub fn set_scale(&mut self, value: f64) {
        if !value.is_finite() {
            log::warn!("ignoring non-finite scale {}", value);
            return;
        }
        self.apply_scale(value.clamp(self.limits.min, self.limits.max));
    }

    /// Recenter the content without touching the scale
    pub fn reset_offset(&mut self) {
        self.offset_x = 0.0;
        self.offset_y = 0.0;
    }

    // Every scale change recenters, whichever control caused it. A press at
    // a limit is not a change.
    fn apply_scale(&mut self, scale: f64) {
        if scale == self.scale {
            return;
        }
        self.scale = scale;
        self.reset_offset();
    }

    pub fn begin_drag(&mut self, x: f64, y: f64) {
        self.drag = Some(DragAnchor { x, y });
    }

    /// Move the content with the pointer while a drag is active
    ///
    /// The translation is applied after scaling, so screen deltas are divided
    /// by the scale to keep the content under the pointer.
    pub fn drag_to(&mut self, x: f64, y: f64) {
        let Some(anchor) = self.drag else {
            return;
        };
        self.offset_x += (x - anchor.x) / self.scale;
        self.offset_y += (y - anchor.y) / self.scale;
        self.drag = Some(DragAnchor { x, y });
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// CSS transform for the preview wrapper, applied around its center
    pub fn css_transform(&self) -> String {
        format!(
            "scale({}) translate({}px, {}px)",
            self.scale, self.offset_x, self.offset_y
        )
    }

    /// Scale as shown next to the zoom buttons, e.g. `1.2x`
    pub fn scale_label(&self) -> String {
        format!("{:.1}x", self.scale)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(ZoomConfig {
            min: 0.1,
            max: 3.0,
            step: 0.1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_unit_scale_centered() {
        let viewport = Viewport::default();
        assert_eq!(viewport.scale(), 1.0);
        assert_eq!(viewport.offset(), (0.0, 0.0));
        assert_eq!(viewport.css_transform(), "scale(1) translate(0px, 0px)");
        assert_eq!(viewport.scale_label(), "1.0x");
    }

    #[test]
    fn test_drag_does_not_change_scale() {
        let mut viewport = Viewport::default();
        viewport.set_scale(2.0);

        viewport.begin_drag(100.0, 100.0);
        viewport.drag_to(120.0, 90.0);
        viewport.drag_to(140.0, 80.0);
        viewport.end_drag();

        assert_eq!(viewport.scale(), 2.0);
        assert_eq!(viewport.offset(), (20.0, -10.0));
        assert!(!viewport.is_dragging());
    }

    #[test]
    fn test_drag_without_anchor_is_noop() {
        let mut viewport = Viewport::default();
        viewport.drag_to(50.0, 50.0);
        assert_eq!(viewport.offset(), (0.0, 0.0));
    }

    #[test]
    fn test_nan_scale_ignored() {
        let mut viewport = Viewport::default();
        viewport.set_scale(f64::NAN);
        assert_eq!(viewport.scale(), 1.0);
    }
}
