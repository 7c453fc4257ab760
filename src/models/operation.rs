//! Asynchronous operations and their in-flight tracking

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::errors::{ViewerError, ViewerResult};

/// Operations that leave the viewer and may fail for environment reasons
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OperationKind {
    Upload,
    SampleFetch,
    RasterExport,
    VectorExport,
    SourceDownload,
    ClipboardCopy,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperationKind::Upload => "Upload",
            OperationKind::SampleFetch => "Loading sample",
            OperationKind::RasterExport => "Export",
            OperationKind::VectorExport => "SVG export",
            OperationKind::SourceDownload => "Download",
            OperationKind::ClipboardCopy => "Copy to clipboard",
        };
        f.write_str(name)
    }
}

/// Set of operations currently in flight
///
/// At most one operation of each kind may run at a time. Callers pair every
/// successful `begin` with a `finish`, whatever the outcome of the operation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InFlight {
    active: BTreeSet<OperationKind>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, kind: OperationKind) -> ViewerResult<()> {
        if !self.active.insert(kind) {
            return Err(ViewerError::OperationInProgress(kind));
        }
        log::debug!("operation started: {:?}", kind);
        Ok(())
    }

    pub fn finish(&mut self, kind: OperationKind) {
        if self.active.remove(&kind) {
            log::debug!("operation settled: {:?}", kind);
        }
    }

    pub fn is_busy(&self, kind: OperationKind) -> bool {
        self.active.contains(&kind)
    }

    pub fn active(&self) -> Vec<OperationKind> {
        self.active.iter().copied().collect()
    }
}
