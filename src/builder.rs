//! Build-pass orchestrator locating theme folders and rewriting stylesheets.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};

use crate::asset_paths::{locate_theme_root, normalize_path};
use crate::config::LoaderOptions;
use crate::logger::StyleLogger;
use crate::manifest::{CachedManifests, ManifestError};
use crate::styles::{RewriteContext, rewrite_css_urls};

/// High-level helper rewriting the stylesheets handled during one build pass.
///
/// Theme manifests are parsed once per theme folder and reused until
/// [`ThemeLoader::start_pass`] is called. The loader can be shared between threads
/// processing independent stylesheets.
pub struct ThemeLoader<L: StyleLogger> {
  options: LoaderOptions,
  logger: L,
  manifests: CachedManifests,
}

impl<L: StyleLogger> ThemeLoader<L> {
  /// Create a loader for the provided options and logger.
  pub fn new(options: LoaderOptions, logger: L) -> Self {
    let manifests = CachedManifests::new(options.manifest_file.clone());
    Self {
      options,
      logger,
      manifests,
    }
  }

  /// Options the loader was created with.
  pub fn options(&self) -> &LoaderOptions {
    &self.options
  }

  /// Drop cached manifests so edits made since the previous pass are picked up.
  pub fn start_pass(&self) {
    self.manifests.clear();
  }

  /// Rewrite stylesheet text that originates from `stylesheet_folder`.
  ///
  /// Stylesheets outside a theme folder are returned unchanged.
  pub fn process(&self, source: &str, stylesheet_folder: &Path) -> Result<String, ManifestError> {
    let folder = normalize_path(stylesheet_folder);
    let theme_root = locate_theme_root(&folder, &self.options.themes_dir_name);
    let context = RewriteContext {
      options: &self.options,
      logger: &self.logger,
      manifests: &self.manifests,
    };

    rewrite_css_urls(source, &folder, theme_root.as_deref(), &context)
  }

  /// Read a stylesheet from disk and return its rewritten text.
  pub fn process_file(&self, stylesheet: &Path) -> Result<String> {
    let source = fs::read_to_string(stylesheet)
      .with_context(|| format!("failed to read stylesheet at {}", stylesheet.display()))?;
    let folder = stylesheet_folder(stylesheet)?;

    self
      .process(&source, &folder)
      .with_context(|| format!("failed to rewrite urls in {}", stylesheet.display()))
  }

  /// Rewrite a stylesheet on disk, writing only when its content changes.
  ///
  /// Returns `true` when the file was updated.
  pub fn rewrite_file_in_place(&self, stylesheet: &Path) -> Result<bool> {
    let original = fs::read_to_string(stylesheet)
      .with_context(|| format!("failed to read stylesheet at {}", stylesheet.display()))?;
    let folder = stylesheet_folder(stylesheet)?;
    let rewritten = self
      .process(&original, &folder)
      .with_context(|| format!("failed to rewrite urls in {}", stylesheet.display()))?;

    if rewritten == original {
      return Ok(false);
    }

    fs::write(stylesheet, rewritten)
      .with_context(|| format!("failed to write {}", stylesheet.display()))?;
    Ok(true)
  }
}

/// Absolute folder containing `stylesheet`, resolved against the current directory.
fn stylesheet_folder(stylesheet: &Path) -> Result<std::path::PathBuf> {
  let absolute = if stylesheet.is_absolute() {
    stylesheet.to_path_buf()
  } else {
    std::env::current_dir()
      .context("failed to determine the current directory")?
      .join(stylesheet)
  };

  absolute
    .parent()
    .map(Path::to_path_buf)
    .ok_or_else(|| anyhow!("stylesheet {} has no parent folder", stylesheet.display()))
}
