use std::path::Path;

use super::normalize::to_forward_slashes;

/// Build the `<themes>/<theme>/<relative>` url a rewritten reference points at.
///
/// `relative` is the asset's location below the theme folder; separators become `/` and
/// surrounding slashes are dropped. An empty `relative` yields `<themes>/<theme>` itself.
pub fn make_theme_asset_path(themes_dir_name: &str, theme_name: &str, relative: &Path) -> String {
    let relative = to_forward_slashes(relative);
    let relative = relative.trim_matches('/');
    if relative.is_empty() {
        format!("{themes_dir_name}/{theme_name}")
    } else {
        format!("{themes_dir_name}/{theme_name}/{relative}")
    }
}

/// Returns `true` when `path` already points at the canonical location of `theme_name`.
///
/// Used to recognise references emitted by an earlier rewrite pass.
pub fn is_theme_asset_path(themes_dir_name: &str, theme_name: &str, path: &str) -> bool {
    let prefix = format!("{themes_dir_name}/{theme_name}/");
    path.starts_with(&prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_theme_and_relative_paths() {
        let result = make_theme_asset_path("themes", "dark", Path::new("images/logo.png"));
        assert_eq!(result, "themes/dark/images/logo.png");
    }

    #[test]
    fn normalises_backslashes_from_windows_inputs() {
        let result = make_theme_asset_path("themes", "dark", Path::new("fonts\\inter.woff2"));
        assert_eq!(result, "themes/dark/fonts/inter.woff2");
    }

    #[test]
    fn empty_relative_points_at_theme_folder() {
        assert_eq!(make_theme_asset_path("themes", "dark", Path::new("")), "themes/dark");
    }

    #[test]
    fn recognises_rewritten_references() {
        assert!(is_theme_asset_path("themes", "dark", "themes/dark/icons/a.png"));
        assert!(!is_theme_asset_path("themes", "dark", "themes/darker/icons/a.png"));
        assert!(!is_theme_asset_path("themes", "dark", "icons/a.png"));
    }
}
