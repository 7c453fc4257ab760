//! SVG presence check
//!
//! This is a syntactic gate, not an XML validator: any text containing an
//! opening `<svg ...>` tag followed somewhere by `</svg>` passes, whatever
//! sits between them.

use once_cell::sync::Lazy;
use regex::Regex;

static SVG_WRAPPER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<svg[^>]*>[\s\S]*</svg>").expect("SVG wrapper pattern must compile")
});

/// Returns true when `text` contains a `<svg ...>...</svg>` wrapper (case-insensitive)
pub fn is_valid_svg(text: &str) -> bool {
    SVG_WRAPPER.is_match(text)
}

/// The part of `text` matched by the gate, from the first `<svg` to the last `</svg>`
pub fn svg_wrapper(text: &str) -> Option<&str> {
    SVG_WRAPPER.find(text).map(|m| m.as_str())
}
