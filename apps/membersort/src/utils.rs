//! Small shared helpers: message prefixes and path display.

use owo_colors::OwoColorize;
use std::path::Path;

pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

pub fn error_prefix() -> String {
    if colors_enabled() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

pub fn note_prefix() -> String {
    if colors_enabled() {
        "note:".cyan().bold().to_string()
    } else {
        "note:".to_string()
    }
}

/// Render `path` relative to `root` when possible.
pub fn display_path(root: &Path, path: &Path) -> String {
    pathdiff::diff_paths(path, root)
        .filter(|rel| !rel.starts_with(".."))
        .unwrap_or_else(|| path.to_path_buf())
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_inside_root_are_relative() {
        let root = Path::new("/repo");
        assert_eq!(display_path(root, Path::new("/repo/src/A.cs")), "src/A.cs");
        assert_eq!(display_path(root, Path::new("/elsewhere/B.cs")), "/elsewhere/B.cs");
    }
}
