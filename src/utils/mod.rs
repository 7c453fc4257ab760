//! Utility modules for the SVG viewer

pub mod filename;
