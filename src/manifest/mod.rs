//! Theme manifest loading, validation and per-pass caching.

mod error;
mod loading;
mod source;

pub use error::ManifestError;
pub use loading::load_theme_manifest;
pub use source::{CachedManifests, DiskManifests, ManifestSource};
