use std::path::Path;

use super::find_url_references;
use crate::asset_paths::{is_theme_asset_path, make_theme_asset_path, normalize_path};
use crate::config::LoaderOptions;
use crate::logger::StyleLogger;
use crate::manifest::{ManifestError, ManifestSource};
use crate::models::UrlReference;
use crate::resolver::AssetResolver;

/// Marker telling the bundler to copy an asset verbatim instead of resolving it.
const SKIP_LOADER_PREFIX: &str = "./";

/// Collaborators shared by every stylesheet rewritten during a build pass.
#[derive(Clone, Copy)]
pub struct RewriteContext<'a> {
  /// Loader options (theme layout and dev mode).
  pub options: &'a LoaderOptions,
  /// Sink for rewrite and no-rewrite notices.
  pub logger: &'a dyn StyleLogger,
  /// Provider of parsed theme manifests.
  pub manifests: &'a dyn ManifestSource,
}

/// Rewrite relative `url(...)` references of a themed stylesheet.
///
/// References whose asset exists inside `theme_root` become `themes/<theme>/<path>`.
/// References provided by a manifest copy rule become `./themes/<theme>/<path>`. Anything
/// else, and every reference when `theme_root` is `None`, is kept byte for byte. Only the
/// prefix and path inside the parentheses change; quotes and whitespace are preserved.
///
/// A manifest that cannot be loaded aborts the whole stylesheet.
pub fn rewrite_css_urls(
  source: &str,
  stylesheet_folder: &Path,
  theme_root: Option<&Path>,
  context: &RewriteContext<'_>,
) -> Result<String, ManifestError> {
  let Some(theme_root) = theme_root else {
    return Ok(source.to_string());
  };

  let references = find_url_references(source);
  if references.is_empty() {
    return Ok(source.to_string());
  }

  let theme_root = normalize_path(theme_root);
  let stylesheet_folder = normalize_path(stylesheet_folder);
  let theme_name = theme_root
    .file_name()
    .map(|name| name.to_string_lossy().into_owned())
    .unwrap_or_default();
  let resolver = AssetResolver::new(
    &theme_root,
    context.options.dependencies_root(),
    context.manifests,
    context.logger,
  );
  let rewriter = ReferenceRewriter {
    stylesheet_folder: &stylesheet_folder,
    theme_root: &theme_root,
    theme_name: &theme_name,
    resolver: &resolver,
    context,
  };

  let mut output = String::with_capacity(source.len());
  let mut last = 0;
  for reference in &references {
    output.push_str(&source[last..reference.span.start]);
    match rewriter.target_for(reference)? {
      Some(target) => output.push_str(&reference.with_target(&target)),
      None => output.push_str(reference.matched),
    }
    last = reference.span.end;
  }
  output.push_str(&source[last..]);

  Ok(output)
}

struct ReferenceRewriter<'r, 'a> {
  stylesheet_folder: &'r Path,
  theme_root: &'r Path,
  theme_name: &'r str,
  resolver: &'r AssetResolver<'a>,
  context: &'r RewriteContext<'a>,
}

impl ReferenceRewriter<'_, '_> {
  /// New prefix-and-path for `reference`, or `None` to keep it as written.
  fn target_for(&self, reference: &UrlReference<'_>) -> Result<Option<String>, ManifestError> {
    let themes_dir_name = self.context.options.themes_dir_name.as_str();

    // Output of an earlier pass for a dependency asset.
    if reference.prefix == SKIP_LOADER_PREFIX
      && is_theme_asset_path(themes_dir_name, self.theme_name, reference.path)
    {
      return Ok(None);
    }

    let absolute = normalize_path(
      &self
        .stylesheet_folder
        .join(reference.prefix)
        .join(reference.path),
    );

    let existing_theme_resource = self.resolver.exists_in_theme(&absolute);
    if !existing_theme_resource && !self.resolver.provided_by_copy_rules(reference.path)? {
      if self.context.options.dev_mode {
        self.context.logger.log(&format!(
          "No rewrite for '{}' as the file was not found.",
          reference.matched
        ));
      }
      return Ok(None);
    }

    let theme_path = match absolute.strip_prefix(self.theme_root) {
      Ok(relative) => make_theme_asset_path(themes_dir_name, self.theme_name, relative),
      Err(_) => make_theme_asset_path(themes_dir_name, self.theme_name, Path::new(reference.path)),
    };
    let target = if existing_theme_resource {
      theme_path
    } else {
      format!("{SKIP_LOADER_PREFIX}{theme_path}")
    };

    self.context.logger.log(&format!(
      "Updating url for file '{}' to use '{}'",
      reference.relative_reference(),
      target
    ));

    Ok(Some(target))
  }
}
