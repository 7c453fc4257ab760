//! Raster export
//!
//! Images are always rendered at the document's nominal size: the preview
//! zoom and pan never influence the output.

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use resvg::tiny_skia::{Color, Pixmap, Transform};
use resvg::usvg::Tree;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::RenderError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RasterFormat {
    Png,
    Jpeg,
}

impl RasterFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            RasterFormat::Png => "png",
            RasterFormat::Jpeg => "jpg",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            RasterFormat::Png => "image/png",
            RasterFormat::Jpeg => "image/jpeg",
        }
    }
}

impl fmt::Display for RasterFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterFormat::Png => f.write_str("PNG"),
            RasterFormat::Jpeg => f.write_str("JPEG"),
        }
    }
}

impl FromStr for RasterFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(RasterFormat::Png),
            "jpeg" | "jpg" => Ok(RasterFormat::Jpeg),
            other => Err(format!("Unsupported raster format: '{}' (expected png or jpeg)", other)),
        }
    }
}

/// Render the tree at 1:1 onto an opaque white pixmap
pub fn render_pixmap(tree: &Tree, max_dimension: u32) -> Result<Pixmap, RenderError> {
    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());

    if width > max_dimension || height > max_dimension {
        return Err(RenderError::TooLarge {
            width,
            height,
            limit: max_dimension,
        });
    }

    let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::Allocation { width, height })?;
    pixmap.fill(Color::WHITE);
    resvg::render(tree, Transform::identity(), &mut pixmap.as_mut());

    log::debug!("rendered {}x{} pixmap", width, height);
    Ok(pixmap)
}

pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>, RenderError> {
    pixmap
        .encode_png()
        .map_err(|e| RenderError::Encode(e.to_string()))
}

/// Encode as JPEG, dropping the alpha channel
///
/// The pixmap must be opaque (see `render_pixmap`), so its premultiplied
/// channels equal the straight ones.
pub fn encode_jpeg(pixmap: &Pixmap, quality: u8) -> Result<Vec<u8>, RenderError> {
    let rgb: Vec<u8> = pixmap
        .data()
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();

    let mut bytes = Vec::new();
    {
        let mut encoder = JpegEncoder::new_with_quality(&mut bytes, quality);
        encoder
            .encode(&rgb, pixmap.width(), pixmap.height(), ExtendedColorType::Rgb8)
            .map_err(|e| RenderError::Encode(e.to_string()))?;
    }
    Ok(bytes)
}

/// Parse, render and encode in one step
pub fn rasterize(
    markup: &str,
    format: RasterFormat,
    max_dimension: u32,
    jpeg_quality: u8,
) -> Result<Vec<u8>, RenderError> {
    let tree = super::parse_tree(markup)?;
    let pixmap = render_pixmap(&tree, max_dimension)?;

    match format {
        RasterFormat::Png => encode_png(&pixmap),
        RasterFormat::Jpeg => encode_jpeg(&pixmap, jpeg_quality),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("png".parse::<RasterFormat>(), Ok(RasterFormat::Png));
        assert_eq!("JPEG".parse::<RasterFormat>(), Ok(RasterFormat::Jpeg));
        assert_eq!("jpg".parse::<RasterFormat>(), Ok(RasterFormat::Jpeg));
        assert!("gif".parse::<RasterFormat>().is_err());
    }

    #[test]
    fn test_empty_document_renders_white() {
        let tree = super::super::parse_tree(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="3"></svg>"#,
        )
        .unwrap();
        let pixmap = render_pixmap(&tree, 100).unwrap();

        assert_eq!((pixmap.width(), pixmap.height()), (4, 3));
        assert!(pixmap.data().iter().all(|&b| b == 255));
    }

    #[test]
    fn test_size_limit() {
        let tree = super::super::parse_tree(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="10"></svg>"#,
        )
        .unwrap();

        assert_eq!(
            render_pixmap(&tree, 100).unwrap_err(),
            RenderError::TooLarge {
                width: 200,
                height: 10,
                limit: 100
            }
        );
    }
}
