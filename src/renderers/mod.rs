//! SVG rendering for exports
//!
//! This module turns committed markup into export bytes:
//! - `raster`: PNG and JPEG images rendered with resvg on a white background
//! - `vector`: a normalized SVG snapshot re-serialized from the parsed tree

pub mod raster;
pub mod vector;

use once_cell::sync::Lazy;
use regex::Regex;
use resvg::usvg::{self, fontdb, Options, Tree};
use std::borrow::Cow;
use std::sync::Arc;
use thiserror::Error;

use crate::validation::svg_wrapper;

pub use raster::*;
pub use vector::*;

/// Family of the bundled face; generic families and unmatched names resolve to it
pub const BUNDLED_FAMILY: &str = "DejaVu Sans";

static FONTS: Lazy<Arc<fontdb::Database>> = Lazy::new(|| Arc::new(font_database()));

/// Font database with the bundled face loaded
///
/// The browser sandbox exposes no system fonts, so every build renders text
/// with the same embedded face.
pub fn font_database() -> fontdb::Database {
    let mut db = fontdb::Database::new();
    db.load_font_data(include_bytes!("../../assets/fonts/DejaVuSans.ttf").to_vec());

    // usvg falls back to the serif family when nothing named matches
    db.set_serif_family(BUNDLED_FAMILY);
    db.set_sans_serif_family(BUNDLED_FAMILY);
    db.set_monospace_family(BUNDLED_FAMILY);
    db.set_cursive_family(BUNDLED_FAMILY);
    db.set_fantasy_family(BUNDLED_FAMILY);
    db
}

static OPEN_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^<svg[^>]*>").expect("open tag pattern must compile"));

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("No <svg> element found")]
    MissingRoot,

    #[error("Failed to parse SVG: {0}")]
    Parse(String),

    #[error("Image size {width}x{height} exceeds the {limit}px limit")]
    TooLarge { width: u32, height: u32, limit: u32 },

    #[error("Failed to create {width}x{height} pixmap")]
    Allocation { width: u32, height: u32 },

    #[error("Failed to encode image: {0}")]
    Encode(String),
}

/// Turn markup accepted by the preview into a standalone SVG document
///
/// Inline SVG in HTML works without namespace declarations, a standalone
/// document does not. Text around the outer `<svg>...</svg>` is dropped.
pub fn standalone_document(markup: &str) -> Result<Cow<'_, str>, RenderError> {
    let wrapper = svg_wrapper(markup).ok_or(RenderError::MissingRoot)?;
    let open_tag = OPEN_TAG.find(wrapper).ok_or(RenderError::MissingRoot)?.as_str();

    let mut declarations = String::new();
    if !open_tag.contains("xmlns=") {
        declarations.push_str(&format!(" xmlns=\"{}\"", SVG_NS));
    }
    if wrapper.contains("xlink:") && !open_tag.contains("xmlns:xlink") {
        declarations.push_str(&format!(" xmlns:xlink=\"{}\"", XLINK_NS));
    }

    if declarations.is_empty() {
        return Ok(Cow::Borrowed(wrapper));
    }

    // Insert right after the tag name
    let (head, tail) = wrapper.split_at(4);
    Ok(Cow::Owned(format!("{}{}{}", head, declarations, tail)))
}

/// Parse markup into a render tree
pub fn parse_tree(markup: &str) -> Result<Tree, RenderError> {
    let document = standalone_document(markup)?;
    let options = Options {
        font_family: BUNDLED_FAMILY.to_string(),
        fontdb: FONTS.clone(),
        ..Default::default()
    };

    usvg::Tree::from_str(&document, &options).map_err(|e| RenderError::Parse(e.to_string()))
}
