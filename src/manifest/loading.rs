use std::fs;
use std::path::Path;

use glob::Pattern;

use super::ManifestError;
use crate::models::{ThemeManifest, ThemeManifestFile};

/// Load the manifest declared directly inside a theme folder.
///
/// A missing or empty manifest declares no assets. Anything else must parse into the
/// `assets[module][pattern] = destination` shape and every pattern must compile.
pub fn load_theme_manifest(
  theme_root: &Path,
  manifest_file: &str,
) -> Result<ThemeManifest, ManifestError> {
  let path = theme_root.join(manifest_file);
  let contents = match fs::read_to_string(&path) {
    Ok(contents) => contents,
    Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
      return Ok(ThemeManifest::default());
    }
    Err(err) => {
      return Err(ManifestError::Io { path, source: err });
    }
  };

  if contents.trim().is_empty() {
    return Ok(ThemeManifest::default());
  }

  let file: ThemeManifestFile =
    serde_json::from_str(&contents).map_err(|err| ManifestError::Parse {
      path: path.clone(),
      source: err,
    })?;
  let manifest = ThemeManifest::from(file);

  for rule in manifest.copy_rules() {
    Pattern::new(&rule.pattern).map_err(|err| ManifestError::InvalidPattern {
      module: rule.module.clone(),
      pattern: rule.pattern.clone(),
      source: err,
    })?;
  }

  Ok(manifest)
}
