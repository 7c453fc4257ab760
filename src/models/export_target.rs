//! Export file naming

use serde::{Deserialize, Serialize};

/// File name stem shared by every export
///
/// The name is taken as typed; making it legal for the file system is left
/// to the browser's save flow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportTarget {
    pub base_name: String,
}

impl ExportTarget {
    pub fn new(base_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
        }
    }

    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.base_name, extension)
    }
}
