//! Helpers for locating theme folders and normalising asset paths.
//!
//! The responsibilities are split into focused submodules so that theme discovery, lexical
//! path normalisation and canonical theme path construction can be tested independently of
//! the stylesheet rewriter that combines them.

mod normalize;
mod theme_path;
mod theme_root;

pub use normalize::{normalize_path, to_forward_slashes};
pub use theme_path::{is_theme_asset_path, make_theme_asset_path};
pub use theme_root::locate_theme_root;
