//! Existence checks deciding whether a stylesheet reference points at a theme asset.

use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::asset_paths::to_forward_slashes;
use crate::logger::StyleLogger;
use crate::manifest::{ManifestError, ManifestSource};
use crate::models::CopyRule;

/// Resolves referenced files against one theme folder and its manifest copy rules.
pub struct AssetResolver<'a> {
  theme_root: &'a Path,
  dependencies_root: PathBuf,
  manifests: &'a dyn ManifestSource,
  logger: &'a dyn StyleLogger,
}

impl<'a> AssetResolver<'a> {
  /// Create a resolver for `theme_root`, expanding copy rules below `dependencies_root`.
  pub fn new(
    theme_root: &'a Path,
    dependencies_root: PathBuf,
    manifests: &'a dyn ManifestSource,
    logger: &'a dyn StyleLogger,
  ) -> Self {
    Self {
      theme_root,
      dependencies_root,
      manifests,
      logger,
    }
  }

  /// Returns `true` when `candidate` lies inside the theme folder and exists on disk.
  ///
  /// Both conditions are required: a file reached through `..` outside the theme folder
  /// does not count even if it exists.
  pub fn exists_in_theme(&self, candidate: &Path) -> bool {
    candidate.starts_with(self.theme_root) && candidate.exists()
  }

  /// Returns `true` when a manifest copy rule provides `file_url`.
  ///
  /// Rules are tried in manifest order. A rule applies when `file_url` starts with its
  /// destination prefix; the remainder must then be the suffix of a file produced by the
  /// rule's glob inside the module's installed location. Directories never match.
  pub fn provided_by_copy_rules(&self, file_url: &str) -> Result<bool, ManifestError> {
    let manifest = self.manifests.manifest(self.theme_root)?;
    if manifest.is_empty() {
      self.logger.debug(&format!(
        "No assets declared in theme manifest of {}",
        self.theme_root.display()
      ));
      return Ok(false);
    }

    for rule in manifest.copy_rules() {
      let Some(remainder) = file_url.strip_prefix(rule.destination.as_str()) else {
        continue;
      };

      for file in expand_copy_rule(&self.dependencies_root, rule)? {
        if to_forward_slashes(&file).ends_with(remainder) {
          return Ok(true);
        }
      }
    }

    Ok(false)
  }
}

/// Expand a copy rule's glob inside the module directory, keeping files only.
fn expand_copy_rule(dependencies_root: &Path, rule: &CopyRule) -> Result<Vec<PathBuf>, ManifestError> {
  let module_dir = dependencies_root.join(&rule.module);
  let pattern = format!(
    "{}/{}",
    Pattern::escape(&to_forward_slashes(&module_dir)).trim_end_matches('/'),
    rule.pattern.trim_start_matches("./")
  );

  let entries = glob::glob(&pattern).map_err(|err| ManifestError::InvalidPattern {
    module: rule.module.clone(),
    pattern: rule.pattern.clone(),
    source: err,
  })?;

  Ok(entries.flatten().filter(|path| path.is_file()).collect())
}
