//! Logger capability handed to the rewriter instead of an ambient build-tool logger.

/// Sink for the messages emitted while rewriting stylesheets.
pub trait StyleLogger: Send + Sync {
  /// Diagnostic detail, e.g. a theme without declared assets.
  fn debug(&self, message: &str);
  /// User facing notice, e.g. a rewritten or skipped url.
  fn log(&self, message: &str);
}

/// Forwards messages to `tracing` under the crate's target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl StyleLogger for TracingLogger {
  fn debug(&self, message: &str) {
    tracing::debug!(target: "theme_url_rewriter", "{message}");
  }

  fn log(&self, message: &str) {
    tracing::info!(target: "theme_url_rewriter", "{message}");
  }
}

impl<T: StyleLogger + ?Sized> StyleLogger for &T {
  fn debug(&self, message: &str) {
    (**self).debug(message);
  }

  fn log(&self, message: &str) {
    (**self).log(message);
  }
}

#[cfg(test)]
pub(crate) mod testing {
  use std::sync::Mutex;

  use super::StyleLogger;

  /// Logger recording every message for assertions.
  #[derive(Debug, Default)]
  pub struct RecordingLogger {
    pub debug: Mutex<Vec<String>>,
    pub log: Mutex<Vec<String>>,
  }

  impl RecordingLogger {
    pub fn logged(&self) -> Vec<String> {
      self.log.lock().unwrap().clone()
    }

    pub fn debugged(&self) -> Vec<String> {
      self.debug.lock().unwrap().clone()
    }
  }

  impl StyleLogger for RecordingLogger {
    fn debug(&self, message: &str) {
      self.debug.lock().unwrap().push(message.to_string());
    }

    fn log(&self, message: &str) {
      self.log.lock().unwrap().push(message.to_string());
    }
  }
}
