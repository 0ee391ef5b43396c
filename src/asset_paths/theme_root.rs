use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Walk upwards from a stylesheet folder to the theme folder containing it.
///
/// The theme folder is the first directory on the way up whose parent is named exactly
/// `themes_dir_name`. The walk stops as soon as the remaining path no longer mentions
/// `themes_dir_name`, and folders that never mention it are rejected without walking. With
/// nested theme directories the innermost match wins.
///
/// `None` means the stylesheet is not part of a theme and must be left untouched.
pub fn locate_theme_root(folder: &Path, themes_dir_name: &str) -> Option<PathBuf> {
    let marker = OsStr::new(themes_dir_name);
    let mentions_themes = |path: &Path| path.to_string_lossy().contains(themes_dir_name);

    if !mentions_themes(folder) {
        return None;
    }

    let mut current = folder;
    while mentions_themes(current) {
        let parent = current.parent()?;
        if parent.file_name() == Some(marker) {
            return Some(current.to_path_buf());
        }
        current = parent;
    }

    None
}
