//! Sample SVG catalog
//!
//! The catalog only names samples and where to fetch them; fetching is done
//! by the browser layer.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleEntry {
    pub label: String,
    pub locator: String,
}

/// Ordered, read-only list of samples
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleCatalog {
    entries: Vec<SampleEntry>,
}

impl SampleCatalog {
    pub fn new(entries: Vec<SampleEntry>) -> Self {
        Self { entries }
    }

    pub fn get(&self, index: usize) -> Option<&SampleEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[SampleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
