//! Stylesheet helpers rewriting relative asset urls to canonical theme paths.

mod references;
mod rewrite;

pub use references::find_url_references;
pub use rewrite::{RewriteContext, rewrite_css_urls};
