use std::path::PathBuf;

/// Errors that abort rewriting a stylesheet because its theme manifest is unusable.
#[derive(Debug)]
pub enum ManifestError {
  /// Failed to read the manifest file from disk.
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },
  /// The manifest is not valid JSON or does not have the expected shape.
  Parse {
    /// Path that caused the error.
    path: PathBuf,
    /// Source parse error.
    source: serde_json::Error,
  },
  /// A copy rule declares a glob pattern that cannot be compiled.
  InvalidPattern {
    /// Module the copy rule belongs to.
    module: String,
    /// Offending glob pattern.
    pattern: String,
    /// Source pattern error.
    source: glob::PatternError,
  },
}

impl std::fmt::Display for ManifestError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Io { path, source } => {
        write!(f, "failed to read {}: {}", path.display(), source)
      }
      Self::Parse { path, source } => {
        write!(f, "failed to parse {}: {}", path.display(), source)
      }
      Self::InvalidPattern {
        module,
        pattern,
        source,
      } => {
        write!(
          f,
          "invalid copy rule pattern `{}` for module `{}`: {}",
          pattern, module, source
        )
      }
    }
  }
}

impl std::error::Error for ManifestError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Io { source, .. } => Some(source),
      Self::Parse { source, .. } => Some(source),
      Self::InvalidPattern { source, .. } => Some(source),
    }
  }
}
