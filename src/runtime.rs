// Process-wide transform settings
//
// The embedding application owns the settings and may replace them at
// any time; every call reads them fresh, so a mode change takes effect
// immediately without restarting.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::{DirectiveMode, TransformConfig};
use crate::error::UrlError;
use crate::url::codec;
use crate::url::options::TransformOptions;
use crate::url::parts::UrlParts;

/// Shared handle to the active transform settings.
///
/// Clones share the same underlying settings: a `store` or `set_mode`
/// on any clone is visible to every subsequent call on all of them.
/// The codec itself never caches the mode.
#[derive(Debug, Clone, Default)]
pub struct SharedSettings {
    inner: Arc<RwLock<TransformConfig>>,
}

impl SharedSettings {
    pub fn new(config: TransformConfig) -> Self {
        SharedSettings {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Snapshot of the current settings.
    pub fn current(&self) -> TransformConfig {
        self.inner.read().clone()
    }

    /// Replace the settings wholesale.
    pub fn store(&self, config: TransformConfig) {
        *self.inner.write() = config;
    }

    pub fn mode(&self) -> DirectiveMode {
        self.inner.read().mode
    }

    pub fn set_mode(&self, mode: DirectiveMode) {
        self.inner.write().mode = mode;
    }

    /// [`codec::extract`] against the settings as of this call.
    pub fn extract(&self, url: &str) -> Result<(UrlParts, TransformOptions), UrlError> {
        codec::extract(url, &self.current())
    }

    /// [`codec::transform`] against the settings as of this call.
    pub fn transform(&self, url: &str, options: &TransformOptions) -> Result<String, UrlError> {
        codec::transform(url, options, &self.current())
    }

    /// [`codec::transform_with_defaults`] against the settings as of
    /// this call.
    pub fn transform_with_defaults(
        &self,
        url: &str,
        options: &TransformOptions,
    ) -> Result<String, UrlError> {
        codec::transform_with_defaults(url, options, &self.current())
    }
}
