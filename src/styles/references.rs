use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::models::UrlReference;

/// `url(` + optional quote + `./` or `../` + path + the same quote + `)`.
///
/// The regex engine has no backreferences, so each quoting style gets its own branch.
/// Unquoted paths stop at whitespace, a quote or the closing parenthesis.
const URL_PATTERN: &str = r#"(?P<open>url\(\s*)(?:"(?P<dq_prefix>\.\.?/)(?P<dq_path>[^"\s]*)"|'(?P<sq_prefix>\.\.?/)(?P<sq_path>[^'\s]*)'|(?P<bare_prefix>\.\.?/)(?P<bare_path>[^"'\s)]*))(?P<close>\s*\))"#;

fn url_pattern() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| Regex::new(URL_PATTERN).expect("invalid url regex"))
}

/// Find every relative `url(...)` reference in stylesheet text, in source order.
///
/// Absolute urls, data URIs and paths without a leading `./` or `../` are not reported.
pub fn find_url_references(source: &str) -> Vec<UrlReference<'_>> {
  url_pattern()
    .captures_iter(source)
    .filter_map(|caps| reference_from_captures(&caps))
    .collect()
}

fn reference_from_captures<'a>(caps: &Captures<'a>) -> Option<UrlReference<'a>> {
  let whole = caps.get(0)?;
  let (quote, prefix, path) = if let Some(prefix) = caps.name("dq_prefix") {
    (Some('"'), prefix, caps.name("dq_path")?)
  } else if let Some(prefix) = caps.name("sq_prefix") {
    (Some('\''), prefix, caps.name("sq_path")?)
  } else {
    (None, caps.name("bare_prefix")?, caps.name("bare_path")?)
  };

  Some(UrlReference {
    span: whole.range(),
    matched: whole.as_str(),
    open: caps.name("open")?.as_str(),
    quote,
    prefix: prefix.as_str(),
    path: path.as_str(),
    close: caps.name("close")?.as_str(),
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn finds_each_quoting_style() {
    let css = r#"a { background: url("./a.png"); } b { background: url('../b.png'); } c { background: url(./c.png); }"#;
    let references = find_url_references(css);

    let parts: Vec<(Option<char>, &str, &str)> = references
      .iter()
      .map(|reference| (reference.quote, reference.prefix, reference.path))
      .collect();
    assert_eq!(parts, vec![
      (Some('"'), "./", "a.png"),
      (Some('\''), "../", "b.png"),
      (None, "./", "c.png"),
    ]);
  }

  #[test]
  fn keeps_whitespace_inside_parentheses() {
    let css = "src: url(  '../fonts/inter.woff2'  ) format('woff2');";
    let references = find_url_references(css);
    assert_eq!(references.len(), 1);
    assert_eq!(references[0].open, "url(  ");
    assert_eq!(references[0].close, "  )");
    assert_eq!(references[0].matched, "url(  '../fonts/inter.woff2'  )");
    assert_eq!(&css[references[0].span.clone()], references[0].matched);
  }

  #[test]
  fn adjacent_unquoted_urls_do_not_merge() {
    let css = "background: url(./a.png),url(../b.png);";
    let references = find_url_references(css);
    assert_eq!(references.len(), 2);
    assert_eq!(references[0].path, "a.png");
    assert_eq!(references[1].path, "b.png");
  }

  #[test]
  fn ignores_non_relative_urls() {
    let css = r#"
      a { background: url(https://example.com/a.png); }
      b { background: url("data:image/png;base64,AAAA"); }
      c { background: url(images/c.png); }
      d { background: url(/static/d.png); }
      e { background: url(themes/dark/e.png); }
    "#;
    assert!(find_url_references(css).is_empty());
  }

  #[test]
  fn mismatched_quotes_are_not_references() {
    assert!(find_url_references(r#"url("./a.png')"#).is_empty());
    assert!(find_url_references(r#"url('./a.png)"#).is_empty());
  }

  #[test]
  fn query_suffixes_stay_part_of_the_path() {
    let references = find_url_references("url('../fonts/icons.woff?v=4')");
    assert_eq!(references[0].path, "fonts/icons.woff?v=4");
  }
}
