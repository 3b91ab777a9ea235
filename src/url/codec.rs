//! Directive extraction and URL transformation
//!
//! The pipeline is decode → merge → encode: any existing directive is
//! parsed out of the URL, caller options are overlaid onto it, and the
//! merged set is re-encoded from scratch in the active mode's syntax.
//! The mode is read from the supplied config on every call, so it may
//! legally change between calls; a directive read in one syntax is
//! simply re-emitted in the other.

use tracing::{debug, trace};

use crate::config::{DirectiveMode, TransformConfig};
use crate::error::UrlError;

use super::options::TransformOptions;
use super::parts::UrlParts;
use super::query_string::QueryString;

/// Leading path segments of a path-mode directive
const PATH_DIRECTIVE_PREFIX: &str = "/cdn-cgi/image/";

/// Name of the query parameter carrying a query-mode directive
const QUERY_DIRECTIVE_PARAM: &str = "cdn-cgi";

/// Pull an existing directive (if any) out of a URL.
///
/// Returns the URL with the directive stripped from the path (path
/// mode) plus the decoded options. In query mode the `cdn-cgi`
/// parameter is left in the base URL; replacing or removing it is
/// [`transform`]'s job. Absent or malformed directives are not errors,
/// they just yield an empty option bag.
pub fn extract(
    url: &str,
    config: &TransformConfig,
) -> Result<(UrlParts, TransformOptions), UrlError> {
    let mut parts = UrlParts::parse(url)?;
    let mut options = TransformOptions::new();

    match config.mode {
        DirectiveMode::Path => {
            if let Some((segment, rest)) = split_path_directive(&parts.path) {
                options = parse_directive(&segment, ',', '=');
                debug!(directive = %segment, "extracted path directive");
                parts.path = rest;
            }
        }
        DirectiveMode::Query => {
            if let Some(query) = &parts.query {
                let params = QueryString::parse(query);
                if let Some(directive) = params.get(QUERY_DIRECTIVE_PARAM) {
                    options = parse_directive(directive, '.', '-');
                    debug!(directive = %directive, "extracted query directive");
                }
            }
        }
    }

    Ok((parts, options))
}

/// Rewrite a URL to carry the given transform options.
///
/// Options already present in the URL's directive are merged in, the
/// caller's values winning per key, and the merged set is re-encoded in
/// canonical order. Keys outside the whitelist never reach the output.
/// When nothing whitelisted remains the URL is returned bare: the
/// encoder always starts from the freshly merged set, so a directive
/// that contributed no recognized options collapses away instead of
/// being preserved verbatim.
pub fn transform(
    url: &str,
    options: &TransformOptions,
    config: &TransformConfig,
) -> Result<String, UrlError> {
    let (mut base, mut merged) = extract(url, config)?;
    merged.overlay(options);

    let pairs = merged.sanitize();
    if pairs.is_empty() {
        if config.mode == DirectiveMode::Query {
            remove_query_directive(&mut base);
        }
        trace!(url = %url, "no recognized options, returning bare URL");
        return Ok(base.to_string());
    }

    match config.mode {
        DirectiveMode::Path => {
            let kv: Vec<String> = pairs
                .iter()
                .map(|(key, value)| format!("{}={}", key, value))
                .collect();
            let segment = format!("{}{}", PATH_DIRECTIVE_PREFIX, kv.join(","));
            debug!(directive = %segment, "encoded path directive");
            base.path = format!("{}{}", segment, base.path);
        }
        DirectiveMode::Query => {
            let kv: Vec<String> = pairs
                .iter()
                .map(|(key, value)| format!("{}-{}", key, value))
                .collect();
            let directive = kv.join(".");
            debug!(directive = %directive, "encoded query directive");

            let mut params = base
                .query
                .as_deref()
                .map(QueryString::parse)
                .unwrap_or_default();
            params.set(QUERY_DIRECTIVE_PARAM, &directive);
            base.query = params.to_query();
        }
    }

    Ok(base.to_string())
}

/// Like [`transform`], with the config's default options layered
/// beneath the caller's. Defaults override options recovered from an
/// existing directive but lose to anything supplied explicitly.
pub fn transform_with_defaults(
    url: &str,
    options: &TransformOptions,
    config: &TransformConfig,
) -> Result<String, UrlError> {
    let mut merged: TransformOptions = config
        .default_options
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    merged.overlay(options);
    transform(url, &merged, config)
}

/// Matches a path that literally starts with
/// `/cdn-cgi/image/<segment>/`, returning the directive segment and the
/// remaining path. Anything else is a pass-through.
fn split_path_directive(path: &str) -> Option<(String, String)> {
    let after = path.strip_prefix(PATH_DIRECTIVE_PREFIX)?;
    let (segment, rest) = after.split_once('/')?;
    if segment.is_empty() {
        return None;
    }
    Some((segment.to_string(), format!("/{}", rest)))
}

/// Parse a directive string into an option bag. Path directives use
/// `,` and `=` (`width=100,fit=pad`), query directives use `.` and `-`
/// (`width-100.fit-pad`). Values stay opaque; a pair without an
/// assigner gets an empty value.
fn parse_directive(directive: &str, separator: char, assigner: char) -> TransformOptions {
    let mut options = TransformOptions::new();
    for pair in directive.split(separator) {
        let pair = pair.trim();
        if pair.is_empty() {
            continue;
        }
        match pair.split_once(assigner) {
            Some((key, value)) => options.set(key, value),
            None => options.set(pair, ""),
        }
    }
    options
}

fn remove_query_directive(base: &mut UrlParts) {
    if let Some(query) = &base.query {
        let mut params = QueryString::parse(query);
        if params.contains_key(QUERY_DIRECTIVE_PARAM) {
            params.remove(QUERY_DIRECTIVE_PARAM);
            base.query = params.to_query();
        }
    }
}
