//! Srcset variant generation
//!
//! Computes scaled URL variants for devices with different pixel
//! densities, as `srcset`-style `(url, descriptor)` values. Only the
//! URL and string computation lives here; assembling markup out of the
//! result is the embedding application's concern.

use crate::config::TransformConfig;
use crate::error::UrlError;

use super::codec::transform_with_defaults;
use super::options::TransformOptions;

/// DPR variants used when the caller does not name any.
pub const DEFAULT_DPRS: [f64; 2] = [1.0, 2.0];

/// Bucket size for deduplicating near-identical variation widths.
pub const DEFAULT_GRANULARITY: u32 = 180;

/// One transformed URL per DPR, each tagged with an `Nx` descriptor and
/// comma-joined, e.g.
/// `/cdn-cgi/image/width=400,dpr=1/img.jpg 1x, /cdn-cgi/image/width=400,dpr=2/img.jpg 2x`.
pub fn hidpi_srcset(
    url: &str,
    dprs: &[f64],
    options: &TransformOptions,
    config: &TransformConfig,
) -> Result<String, UrlError> {
    let mut entries = Vec::with_capacity(dprs.len());
    for &dpr in dprs {
        let variant = options.clone().with("dpr", dpr);
        entries.push(format!(
            "{} {}x",
            transform_with_defaults(url, &variant, config)?,
            dpr
        ));
    }
    Ok(entries.join(", "))
}

/// Expand breakpoint widths into the physical widths needed to cover
/// the given DPRs. Widths landing in the same `granularity`-sized
/// bucket as an earlier one are dropped, so `[300, 900] × [1, 2]`
/// yields `[300, 600, 900, 1800]` but near-duplicates collapse.
pub fn variation_widths(breakpoints: &[u32], dprs: &[f64], granularity: u32) -> Vec<u32> {
    let granularity = granularity.max(1);
    let mut seen_buckets = Vec::new();
    let mut widths = Vec::new();

    for &breakpoint in breakpoints {
        for &dpr in dprs {
            let width = (breakpoint as f64 * dpr).round() as u32;
            let bucket = width / granularity;
            if !seen_buckets.contains(&bucket) {
                seen_buckets.push(bucket);
                widths.push(width);
            }
        }
    }
    widths
}

/// Width-descriptor variants for a responsive image: every variation
/// width is served by scaling the `base_width` rendition with a
/// fractional `dpr`, rounded to two decimals. The base width itself is
/// always part of the variation set.
pub fn responsive_srcset(
    url: &str,
    base_width: u32,
    breakpoints: &[u32],
    dprs: &[f64],
    options: &TransformOptions,
    config: &TransformConfig,
) -> Result<Vec<(String, String)>, UrlError> {
    let mut all_breakpoints = breakpoints.to_vec();
    all_breakpoints.push(base_width);

    let mut variants = Vec::new();
    for width in variation_widths(&all_breakpoints, dprs, DEFAULT_GRANULARITY) {
        let scale = ((width as f64 / base_width as f64) * 100.0).round() / 100.0;
        let variant = options
            .clone()
            .with("width", base_width)
            .with("dpr", scale);
        variants.push((
            transform_with_defaults(url, &variant, config)?,
            format!("{}w", width),
        ));
    }
    Ok(variants)
}
