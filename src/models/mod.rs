//! Models module for the SVG viewer
//!
//! This module contains the state owned by the viewer and the small value
//! types exchanged with the host page.

pub mod export_target;
pub mod notice;
pub mod operation;
pub mod samples;
pub mod viewer_state;
pub mod viewport;

// Re-export commonly used types
pub use export_target::ExportTarget;
pub use notice::{Notice, NoticeLevel};
pub use operation::{InFlight, OperationKind};
pub use samples::{SampleCatalog, SampleEntry};
pub use viewer_state::{SyncOutcome, ViewerSnapshot, ViewerState};
pub use viewport::{DragAnchor, Viewport};
