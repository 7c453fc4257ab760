//! Vector snapshot export
//!
//! The snapshot is written from the parsed render tree, so it reflects what
//! the renderer understood (resolved styles, flattened `use` references)
//! rather than the exact source text.

use resvg::usvg::{Tree, WriteOptions};

pub fn serialize_snapshot(tree: &Tree) -> String {
    tree.to_string(&WriteOptions::default())
}

pub fn snapshot_markup(markup: &str) -> Result<String, super::RenderError> {
    let tree = super::parse_tree(markup)?;
    Ok(serialize_snapshot(&tree))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_is_svg_document() {
        let snapshot = snapshot_markup(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"><rect width="5" height="5" style="fill:#ff0000"/></svg>"##,
        )
        .unwrap();

        assert!(crate::validation::is_valid_svg(&snapshot));
        assert!(snapshot.contains("width=\"10\""));
    }
}
