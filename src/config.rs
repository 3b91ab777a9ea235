// Configuration module

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Where the transformation directive is carried in a URL.
///
/// Mirrors the CDN's two behaviors: `path` when the edge actually resizes
/// images, `query` when resizing is disabled and the directive is only a
/// preview marker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DirectiveMode {
    /// Directive carried as a `cdn-cgi` query parameter (default)
    #[default]
    Query,
    /// Directive carried as a `/cdn-cgi/image/...` path prefix
    Path,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TransformConfig {
    /// Directive encoding mode (default: query)
    #[serde(default)]
    pub mode: DirectiveMode,

    /// Options layered beneath caller-supplied options on every
    /// defaulted transform. Order is irrelevant; emission order is always
    /// the canonical whitelist order.
    #[serde(default)]
    pub default_options: BTreeMap<String, String>,
}

impl TransformConfig {
    pub fn with_mode(mode: DirectiveMode) -> Self {
        TransformConfig {
            mode,
            ..Default::default()
        }
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str(yaml).map_err(|e| e.to_string())
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;
        Self::from_yaml(&yaml)
    }
}
