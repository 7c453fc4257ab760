//! File name helpers for uploads

/// Drop the last extension, e.g. `icon.svg` -> `icon`, `a.b.svg` -> `a.b`
///
/// Only the final path segment is considered, so a dot inside a directory
/// name is never treated as an extension.
pub fn strip_extension(file_name: &str) -> &str {
    let segment_start = file_name.rfind('/').map(|i| i + 1).unwrap_or(0);
    match file_name[segment_start..].rfind('.') {
        Some(dot) if dot + 1 < file_name.len() - segment_start => &file_name[..segment_start + dot],
        _ => file_name,
    }
}

/// True when the file name ends in `.svg`, ignoring case
pub fn has_svg_extension(file_name: &str) -> bool {
    file_name.to_ascii_lowercase().ends_with(".svg")
}
