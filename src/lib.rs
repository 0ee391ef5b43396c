#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![allow(clippy::module_inception)]

pub mod asset_paths;
pub mod builder;
pub mod config;
pub mod logger;
pub mod manifest;
pub mod models;
pub mod resolver;
pub mod styles;

pub use builder::ThemeLoader;
pub use config::LoaderOptions;
pub use logger::{StyleLogger, TracingLogger};
pub use manifest::{CachedManifests, DiskManifests, ManifestError, ManifestSource};
pub use models::{CopyRule, ThemeManifest};
pub use styles::{RewriteContext, rewrite_css_urls};
