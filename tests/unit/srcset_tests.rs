// Srcset variant generation tests against the public API

use cdn_image_url::config::{DirectiveMode, TransformConfig};
use cdn_image_url::url::{hidpi_srcset, responsive_srcset, TransformOptions};
use cdn_image_url::url::srcset::DEFAULT_DPRS;

fn path_config() -> TransformConfig {
    TransformConfig::with_mode(DirectiveMode::Path)
}

#[test]
fn test_hidpi_srcset_generates_one_variant_per_dpr() {
    let options = TransformOptions::new().with("width", 400u32);
    let srcset = hidpi_srcset("/img.jpg", &[1.0, 2.0, 3.0], &options, &path_config()).unwrap();

    assert_eq!(
        srcset,
        "/cdn-cgi/image/width=400,dpr=1/img.jpg 1x, \
         /cdn-cgi/image/width=400,dpr=2/img.jpg 2x, \
         /cdn-cgi/image/width=400,dpr=3/img.jpg 3x"
    );
}

#[test]
fn test_hidpi_srcset_with_default_dprs() {
    let options = TransformOptions::new().with("width", 400u32);
    let srcset = hidpi_srcset("/img.jpg", &DEFAULT_DPRS, &options, &path_config()).unwrap();

    assert_eq!(
        srcset,
        "/cdn-cgi/image/width=400,dpr=1/img.jpg 1x, /cdn-cgi/image/width=400,dpr=2/img.jpg 2x"
    );
}

#[test]
fn test_hidpi_srcset_keeps_canonical_option_order() {
    let options = TransformOptions::new()
        .with("height", 300u32)
        .with("width", 400u32);
    let srcset = hidpi_srcset("/img.jpg", &[2.0], &options, &path_config()).unwrap();

    assert_eq!(srcset, "/cdn-cgi/image/width=400,height=300,dpr=2/img.jpg 2x");
}

#[test]
fn test_hidpi_srcset_applies_config_defaults() {
    let mut config = path_config();
    config.default_options.insert("format".to_string(), "auto".to_string());

    let options = TransformOptions::new().with("width", 400u32);
    let srcset = hidpi_srcset("/img.jpg", &[1.0], &options, &config).unwrap();

    assert_eq!(srcset, "/cdn-cgi/image/width=400,dpr=1,format=auto/img.jpg 1x");
}

#[test]
fn test_responsive_srcset_scales_the_base_rendition() {
    let variants = responsive_srcset(
        "/bird.jpg",
        1200,
        &[600, 800],
        &[1.0, 2.0],
        &TransformOptions::new(),
        &path_config(),
    )
    .unwrap();

    assert_eq!(
        variants,
        vec![
            (
                "/cdn-cgi/image/width=1200,dpr=0.5/bird.jpg".to_string(),
                "600w".to_string()
            ),
            (
                "/cdn-cgi/image/width=1200,dpr=1/bird.jpg".to_string(),
                "1200w".to_string()
            ),
            (
                "/cdn-cgi/image/width=1200,dpr=0.67/bird.jpg".to_string(),
                "800w".to_string()
            ),
            (
                "/cdn-cgi/image/width=1200,dpr=1.33/bird.jpg".to_string(),
                "1600w".to_string()
            ),
            (
                "/cdn-cgi/image/width=1200,dpr=2/bird.jpg".to_string(),
                "2400w".to_string()
            ),
        ]
    );
}

#[test]
fn test_responsive_srcset_works_in_query_mode() {
    let variants = responsive_srcset(
        "/bird.jpg",
        400,
        &[],
        &[1.0, 2.0],
        &TransformOptions::new(),
        &TransformConfig::default(),
    )
    .unwrap();

    assert_eq!(
        variants,
        vec![
            (
                "/bird.jpg?cdn-cgi=width-400.dpr-1".to_string(),
                "400w".to_string()
            ),
            (
                "/bird.jpg?cdn-cgi=width-400.dpr-2".to_string(),
                "800w".to_string()
            ),
        ]
    );
}
