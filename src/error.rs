//! Error types for URL directive handling
//!
//! Malformed or absent directives are not errors: they degrade to empty
//! option sets. The only failure this crate ever surfaces is a URL that
//! cannot be split into its structural components.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlError {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl UrlError {
    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        UrlError::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }
}
