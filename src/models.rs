//! Data structures produced while rewriting theme stylesheets.

use std::ops::Range;

use indexmap::IndexMap;
use serde::Deserialize;

/// Raw `theme.json` document as written by theme authors.
///
/// Only the `assets` section matters for url rewriting; any other keys of the document are
/// ignored. The nested maps keep their insertion order so copy rules are consulted in the
/// order they were declared.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ThemeManifestFile {
  /// Module name to copy rules (`glob pattern -> destination prefix`).
  #[serde(default)]
  pub assets: IndexMap<String, IndexMap<String, String>>,
}

/// A single asset copy rule declared for a dependency module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyRule {
  /// Dependency package the rule copies from.
  pub module: String,
  /// Glob pattern evaluated inside the module's installed location.
  pub pattern: String,
  /// Prefix the copied files are served under, relative to the theme.
  pub destination: String,
}

/// Validated theme manifest holding the declared copy rules in manifest order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ThemeManifest {
  rules: Vec<CopyRule>,
}

impl ThemeManifest {
  /// Build a manifest from already validated copy rules.
  pub fn from_rules(rules: Vec<CopyRule>) -> Self {
    Self { rules }
  }

  /// Copy rules in declaration order, module by module.
  pub fn copy_rules(&self) -> &[CopyRule] {
    &self.rules
  }

  /// Returns `true` when the manifest declares no assets.
  pub fn is_empty(&self) -> bool {
    self.rules.is_empty()
  }
}

impl From<ThemeManifestFile> for ThemeManifest {
  fn from(file: ThemeManifestFile) -> Self {
    let rules = file
      .assets
      .into_iter()
      .flat_map(|(module, rules)| {
        rules.into_iter().map(move |(pattern, destination)| CopyRule {
          module: module.clone(),
          pattern,
          destination,
        })
      })
      .collect();

    Self { rules }
  }
}

/// One `url(...)` occurrence found in stylesheet text.
///
/// Borrowed slices point into the scanned source and only live for a single rewrite pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlReference<'a> {
  /// Byte range of the whole match inside the source text.
  pub span: Range<usize>,
  /// Full matched text, e.g. `url("../images/logo.svg")`.
  pub matched: &'a str,
  /// Opening token including any whitespace after the parenthesis.
  pub open: &'a str,
  /// Quote character wrapping the path, if any.
  pub quote: Option<char>,
  /// Relative prefix, either `./` or `../`.
  pub prefix: &'a str,
  /// Referenced file path following the prefix.
  pub path: &'a str,
  /// Closing token including any whitespace before the parenthesis.
  pub close: &'a str,
}

impl UrlReference<'_> {
  /// Render the reference with `target` in place of the prefix and path.
  ///
  /// The opening token, quoting style and closing token are kept exactly as found.
  pub fn with_target(&self, target: &str) -> String {
    let quote = self.quote.map(String::from).unwrap_or_default();
    format!("{}{quote}{target}{quote}{}", self.open, self.close)
  }

  /// Prefix and path as written in the stylesheet, e.g. `../images/logo.svg`.
  pub fn relative_reference(&self) -> String {
    format!("{}{}", self.prefix, self.path)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn flattens_assets_in_declaration_order() {
    let file: ThemeManifestFile = serde_json::from_str(
      r#"{
        "lumoImports": ["typography"],
        "assets": {
          "zeta-icons": { "dist/*.svg": "icons/", "dist/*.png": "icons/" },
          "alpha-fonts": { "fonts/**": "fonts" }
        }
      }"#,
    )
    .unwrap();

    let manifest = ThemeManifest::from(file);
    let modules: Vec<(&str, &str)> = manifest
      .copy_rules()
      .iter()
      .map(|rule| (rule.module.as_str(), rule.pattern.as_str()))
      .collect();

    assert_eq!(modules, vec![
      ("zeta-icons", "dist/*.svg"),
      ("zeta-icons", "dist/*.png"),
      ("alpha-fonts", "fonts/**"),
    ]);
  }

  #[test]
  fn missing_assets_key_is_empty() {
    let file: ThemeManifestFile = serde_json::from_str(r#"{"parent": "base"}"#).unwrap();
    assert!(ThemeManifest::from(file).is_empty());
  }

  #[test]
  fn rejects_non_string_destinations() {
    let result =
      serde_json::from_str::<ThemeManifestFile>(r#"{"assets": {"module": {"*.png": 3}}}"#);
    assert!(result.is_err());
  }

  #[test]
  fn renders_target_with_original_quotes() {
    let reference = UrlReference {
      span: 0..23,
      matched: "url( '../img/a.png' )",
      open: "url( ",
      quote: Some('\''),
      prefix: "../",
      path: "img/a.png",
      close: " )",
    };

    assert_eq!(
      reference.with_target("themes/dark/img/a.png"),
      "url( 'themes/dark/img/a.png' )"
    );
    assert_eq!(reference.relative_reference(), "../img/a.png");
  }
}
