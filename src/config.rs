//! Loader configuration describing the theme layout and rewrite behaviour.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// File searched for by [`LoaderOptions::discover`].
pub const DEFAULT_CONFIG_FILE: &str = "theme-loader.config.json";

/// Options controlling how stylesheet urls are resolved and rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoaderOptions {
  /// Log references that were left untouched because no asset was found.
  pub dev_mode: bool,
  /// Name of the directory holding every theme folder.
  pub themes_dir_name: String,
  /// Manifest file looked up directly inside a theme folder.
  pub manifest_file: String,
  /// Directory containing installed dependency packages.
  pub dependencies_dir: String,
  /// Project root the dependency directory is resolved against.
  ///
  /// When unset, the dependency directory is resolved against the current directory.
  pub project_root: Option<PathBuf>,
}

impl Default for LoaderOptions {
  fn default() -> Self {
    Self {
      dev_mode: false,
      themes_dir_name: "themes".into(),
      manifest_file: "theme.json".into(),
      dependencies_dir: "node_modules".into(),
      project_root: None,
    }
  }
}

impl LoaderOptions {
  /// Attempt to load configuration from the provided directory.
  ///
  /// A missing or malformed configuration file falls back to default values.
  pub fn discover(project_dir: &Path) -> Self {
    Self::load(&project_dir.join(DEFAULT_CONFIG_FILE)).unwrap_or_default()
  }

  /// Read configuration from a specific JSON file, reporting why it could not be used.
  pub fn load(path: &Path) -> Result<Self> {
    let content = fs::read_to_string(path)
      .with_context(|| format!("failed to read loader config at {}", path.display()))?;
    serde_json::from_str(&content)
      .with_context(|| format!("failed to parse loader config at {}", path.display()))
  }

  /// Location of the installed dependency packages used by manifest copy rules.
  pub fn dependencies_root(&self) -> PathBuf {
    match &self.project_root {
      Some(root) => root.join(&self.dependencies_dir),
      None => PathBuf::from(&self.dependencies_dir),
    }
  }
}
