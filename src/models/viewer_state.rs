//! Viewer state management
//!
//! `ViewerState` is the WASM-owned source of truth for the viewer: the
//! editable source buffer, the markup actually shown in the preview, the
//! viewport, and export naming.
//!
//! The source buffer and the rendered markup are separate on purpose. Edits
//! always land in `source_text`; only text that passes the SVG gate is copied
//! into `rendered_markup`, so a half-typed document never replaces the last
//! good preview.

use serde::{Deserialize, Serialize};

use crate::config::ViewerConfig;
use crate::errors::{ViewerError, ViewerResult};
use crate::models::{
    ExportTarget, InFlight, Notice, OperationKind, SampleCatalog, Viewport,
};
use crate::utils::filename::{has_svg_extension, strip_extension};
use crate::validation::is_valid_svg;

/// Result of pushing new text into the source buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SyncOutcome {
    /// The text passed the gate and replaced the rendered markup
    Committed,
    /// The text passed the gate but was already rendered
    Unchanged,
    /// The text failed the gate; the preview keeps its previous markup
    Rejected,
}

impl SyncOutcome {
    pub fn notice(&self) -> Option<Notice> {
        match self {
            SyncOutcome::Rejected => Some(ViewerError::InvalidMarkup.notice()),
            SyncOutcome::Committed | SyncOutcome::Unchanged => None,
        }
    }
}

/// Read model handed to the host page after every action
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerSnapshot {
    pub source_text: String,
    pub rendered_markup: String,
    /// True while nothing valid has been rendered yet
    pub show_placeholder: bool,
    pub is_valid: bool,
    pub can_export_image: bool,
    pub can_export_source: bool,
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale_label: String,
    pub transform: String,
    pub transform_origin: String,
    pub dragging: bool,
    pub base_name: String,
    pub busy: Vec<OperationKind>,
}

/// Complete viewer state
#[derive(Clone, Debug)]
pub struct ViewerState {
    source_text: String,
    rendered_markup: String,
    pub viewport: Viewport,
    pub export_target: ExportTarget,
    pub samples: SampleCatalog,
    pub in_flight: InFlight,
    config: ViewerConfig,
}

impl ViewerState {
    /// Create an empty viewer
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            source_text: String::new(),
            rendered_markup: String::new(),
            viewport: Viewport::new(config.zoom),
            export_target: ExportTarget::new(config.default_base_name.clone()),
            samples: SampleCatalog::new(config.samples.clone()),
            in_flight: InFlight::new(),
            config,
        }
    }

    /// Create a viewer with initial markup, committed through the gate
    pub fn with_source(config: ViewerConfig, text: impl Into<String>) -> Self {
        let mut state = Self::new(config);
        state.set_source_text(text);
        state
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn rendered_markup(&self) -> &str {
        &self.rendered_markup
    }

    /// Replace the source buffer and propagate it to the preview if it passes the gate
    pub fn set_source_text(&mut self, text: impl Into<String>) -> SyncOutcome {
        self.source_text = text.into();

        if !is_valid_svg(&self.source_text) {
            log::debug!(
                "source rejected by gate ({} bytes), keeping previous preview",
                self.source_text.len()
            );
            return SyncOutcome::Rejected;
        }

        if self.source_text == self.rendered_markup {
            return SyncOutcome::Unchanged;
        }

        self.rendered_markup.clone_from(&self.source_text);
        log::debug!("committed {} bytes to preview", self.rendered_markup.len());
        SyncOutcome::Committed
    }

    /// Empty the source buffer and the preview
    pub fn clear_source(&mut self) -> Notice {
        self.source_text.clear();
        self.rendered_markup.clear();
        Notice::info("SVG content cleared")
    }

    pub fn is_source_valid(&self) -> bool {
        is_valid_svg(&self.source_text)
    }

    /// Image and vector exports need a non-empty source that passes the gate right now
    pub fn can_export_image(&self) -> bool {
        !self.source_text.is_empty() && self.is_source_valid()
    }

    /// Download and copy only need some source text
    pub fn can_export_source(&self) -> bool {
        !self.source_text.trim().is_empty()
    }

    /// Markup to hand to the renderer, or why there is none
    pub fn exportable_markup(&self) -> ViewerResult<&str> {
        if self.source_text.is_empty() {
            return Err(ViewerError::EmptyInput);
        }
        if !self.is_source_valid() {
            return Err(ViewerError::InvalidMarkup);
        }
        Ok(&self.rendered_markup)
    }

    /// Raw source for download or clipboard, or why there is none
    pub fn exportable_source(&self) -> ViewerResult<&str> {
        if !self.can_export_source() {
            return Err(ViewerError::EmptyInput);
        }
        Ok(&self.source_text)
    }

    pub fn set_base_name(&mut self, name: impl Into<String>) {
        self.export_target.base_name = name.into();
    }

    /// Take over an uploaded `.svg` file: its stem becomes the export name and
    /// its content the new source text
    pub fn apply_upload(&mut self, file_name: &str, content: impl Into<String>) -> ViewerResult<SyncOutcome> {
        if !has_svg_extension(file_name) {
            return Err(ViewerError::external(
                OperationKind::Upload,
                format!("unsupported file type: {}", file_name),
            ));
        }

        let stem = strip_extension(file_name);
        if stem.trim().is_empty() {
            self.set_base_name(self.config.default_base_name.clone());
        } else {
            self.set_base_name(stem);
        }

        Ok(self.set_source_text(content))
    }

    pub fn snapshot(&self) -> ViewerSnapshot {
        let (offset_x, offset_y) = self.viewport.offset();
        ViewerSnapshot {
            source_text: self.source_text.clone(),
            rendered_markup: self.rendered_markup.clone(),
            show_placeholder: self.rendered_markup.is_empty(),
            is_valid: self.is_source_valid(),
            can_export_image: self.can_export_image(),
            can_export_source: self.can_export_source(),
            scale: self.viewport.scale(),
            offset_x,
            offset_y,
            scale_label: self.viewport.scale_label(),
            transform: self.viewport.css_transform(),
            transform_origin: "center".to_string(),
            dragging: self.viewport.is_dragging(),
            base_name: self.export_target.base_name.clone(),
            busy: self.in_flight.active(),
        }
    }
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}
