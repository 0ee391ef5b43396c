use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::{ManifestError, load_theme_manifest};
use crate::models::ThemeManifest;

/// Provides the parsed manifest for a theme folder.
pub trait ManifestSource: Send + Sync {
  /// Return the manifest of `theme_root`, loading it if necessary.
  fn manifest(&self, theme_root: &Path) -> Result<Arc<ThemeManifest>, ManifestError>;
}

/// Reads the manifest from disk on every request.
#[derive(Debug, Clone)]
pub struct DiskManifests {
  manifest_file: String,
}

impl DiskManifests {
  /// Create a source reading `manifest_file` inside each theme folder.
  pub fn new(manifest_file: impl Into<String>) -> Self {
    Self {
      manifest_file: manifest_file.into(),
    }
  }
}

impl ManifestSource for DiskManifests {
  fn manifest(&self, theme_root: &Path) -> Result<Arc<ThemeManifest>, ManifestError> {
    load_theme_manifest(theme_root, &self.manifest_file).map(Arc::new)
  }
}

/// Parses each theme's manifest once and reuses it for the rest of a build pass.
///
/// Failed loads are not cached, so a fixed manifest is picked up on the next request.
#[derive(Debug)]
pub struct CachedManifests {
  manifest_file: String,
  cache: Mutex<BTreeMap<PathBuf, Arc<ThemeManifest>>>,
}

impl CachedManifests {
  /// Create an empty cache reading `manifest_file` inside each theme folder.
  pub fn new(manifest_file: impl Into<String>) -> Self {
    Self {
      manifest_file: manifest_file.into(),
      cache: Mutex::new(BTreeMap::new()),
    }
  }

  /// Forget every cached manifest, e.g. at the start of a new build pass.
  pub fn clear(&self) {
    self.entries().clear();
  }

  /// Number of theme folders with a cached manifest.
  pub fn len(&self) -> usize {
    self.entries().len()
  }

  /// Returns `true` when no manifest has been cached yet.
  pub fn is_empty(&self) -> bool {
    self.entries().is_empty()
  }

  fn entries(&self) -> std::sync::MutexGuard<'_, BTreeMap<PathBuf, Arc<ThemeManifest>>> {
    self
      .cache
      .lock()
      .unwrap_or_else(|poisoned| poisoned.into_inner())
  }
}

impl ManifestSource for CachedManifests {
  fn manifest(&self, theme_root: &Path) -> Result<Arc<ThemeManifest>, ManifestError> {
    if let Some(manifest) = self.entries().get(theme_root) {
      return Ok(Arc::clone(manifest));
    }

    let manifest = Arc::new(load_theme_manifest(theme_root, &self.manifest_file)?);
    self
      .entries()
      .insert(theme_root.to_path_buf(), Arc::clone(&manifest));
    Ok(manifest)
  }
}
