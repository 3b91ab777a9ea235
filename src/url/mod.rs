//! URL transformation directive codec
//!
//! Rewrites image URLs to carry a CDN image-resizing directive and
//! re-parses that directive back out of a previously rewritten URL, so
//! repeated transformations merge instead of stacking.
//!
//! # Directive Formats
//!
//! Two encodings are supported, selected by
//! [`DirectiveMode`](crate::config::DirectiveMode):
//!
//! ## Path directive
//! ```text
//! /cdn-cgi/image/width=400,fit=cover/images/1.jpg
//! ```
//!
//! ## Query directive
//! ```text
//! /images/1.jpg?cdn-cgi=width-400.fit-cover
//! ```
//!
//! Both carry the same logical option set; only the recognized option
//! keys survive encoding, emitted in a fixed canonical order. Every
//! other part of the URL (scheme, authority, unrelated query parameters,
//! fragment) passes through untouched.

// Core modules
pub mod codec;
pub mod options;
pub mod parts;
pub mod query_string;
pub mod srcset;

// Re-export commonly used types
pub use codec::{extract, transform, transform_with_defaults};
pub use options::{OptionKey, OptionValue, TransformOptions};
pub use parts::UrlParts;
pub use query_string::QueryString;
pub use srcset::{hidpi_srcset, responsive_srcset, variation_widths};
