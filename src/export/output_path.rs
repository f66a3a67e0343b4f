use std::path::{Path, PathBuf};

const DEFAULT_BASE_NAME: &str = "bodies";

/// Builds `<folder>/<base>.svg` from a user-entered file name.
///
/// One trailing `.svg` or `.dxf` is stripped from `base_name`, ignoring
/// case, so `"plan.SVG"` and `"plan"` give the same file. An empty name
/// falls back to `bodies`.
#[must_use]
pub fn svg_output_path(folder: impl AsRef<Path>, base_name: &str) -> PathBuf {
    let stem = strip_drawing_extension(base_name);
    let stem = if stem.is_empty() {
        DEFAULT_BASE_NAME
    } else {
        stem
    };
    folder.as_ref().join(format!("{stem}.svg"))
}

fn strip_drawing_extension(name: &str) -> &str {
    for ext in [".svg", ".dxf"] {
        if name.len() >= ext.len() {
            let split = name.len() - ext.len();
            if name.is_char_boundary(split) && name[split..].eq_ignore_ascii_case(ext) {
                return &name[..split];
            }
        }
    }
    name
}
