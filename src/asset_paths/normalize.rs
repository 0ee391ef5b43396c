use std::path::{Component, Path, PathBuf};

/// Lexically resolve `.` and `..` components without touching the filesystem.
///
/// Referenced assets often do not exist, so canonicalisation is not an option. A `..` at
/// the filesystem root stays at the root.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => normalized.push(prefix.as_os_str()),
            Component::RootDir => normalized.push(Component::RootDir.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            Component::Normal(segment) => normalized.push(segment),
        }
    }
    normalized
}

/// Render a path with forward slashes regardless of the host separator.
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_current_and_parent_components() {
        let path = Path::new("/app/themes/dark/sub/./../images/logo.svg");
        assert_eq!(
            normalize_path(path),
            PathBuf::from("/app/themes/dark/images/logo.svg")
        );
    }

    #[test]
    fn parent_of_root_stays_at_root() {
        assert_eq!(normalize_path(Path::new("/../../etc")), PathBuf::from("/etc"));
    }

    #[test]
    fn forward_slashes_for_windows_separators() {
        assert_eq!(
            to_forward_slashes(Path::new("images\\icons\\a.svg")),
            "images/icons/a.svg"
        );
    }
}
