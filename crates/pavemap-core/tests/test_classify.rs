mod common;

use ndarray::Array3;
use pavemap_core::detection::{classify, ClassifierConfig, Hue};
use pavemap_core::error::PavemapError;
use pavemap_core::raster::RasterImage;

use common::{paint, solid_raster};

// ---------------------------------------------------------------------------
// Red
// ---------------------------------------------------------------------------

#[test]
fn test_red_marks_only_red_pixels() {
    let mut image = solid_raster(3, 4, [255, 255, 255]);
    paint(&mut image, 0, 0, [200, 10, 10]);
    paint(&mut image, 2, 3, [101, 49, 49]);
    paint(&mut image, 1, 1, [0, 200, 200]);

    let mask = classify(&image, &ClassifierConfig::new(Hue::Red)).unwrap();
    assert_eq!(mask.dim(), (3, 4));
    assert!(mask[[0, 0]]);
    assert!(mask[[2, 3]]);
    assert!(!mask[[1, 1]]);
    assert_eq!(mask.iter().filter(|&&v| v).count(), 2);
}

#[test]
fn test_red_boundary_values_are_background() {
    let mut image = solid_raster(1, 3, [0, 0, 0]);
    paint(&mut image, 0, 0, [100, 0, 0]);
    paint(&mut image, 0, 1, [255, 50, 0]);
    paint(&mut image, 0, 2, [255, 0, 50]);

    let mask = classify(&image, &ClassifierConfig::new(Hue::Red)).unwrap();
    assert!(mask.iter().all(|&v| !v), "boundary pixels must be background");
}

// ---------------------------------------------------------------------------
// Cyan
// ---------------------------------------------------------------------------

#[test]
fn test_cyan_marks_only_cyan_pixels() {
    let mut image = solid_raster(2, 2, [0, 0, 0]);
    paint(&mut image, 0, 1, [0, 255, 255]);
    paint(&mut image, 1, 0, [255, 0, 0]);

    let mask = classify(&image, &ClassifierConfig::new(Hue::Cyan)).unwrap();
    assert!(mask[[0, 1]]);
    assert!(!mask[[1, 0]]);
    assert_eq!(mask.iter().filter(|&&v| v).count(), 1);
}

#[test]
fn test_cyan_boundary_values_are_background() {
    let mut image = solid_raster(1, 3, [0, 0, 0]);
    paint(&mut image, 0, 0, [50, 255, 255]);
    paint(&mut image, 0, 1, [0, 100, 255]);
    paint(&mut image, 0, 2, [0, 255, 100]);

    let mask = classify(&image, &ClassifierConfig::new(Hue::Cyan)).unwrap();
    assert!(mask.iter().all(|&v| !v));
}

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

#[test]
fn test_custom_thresholds_override_defaults() {
    let image = solid_raster(2, 2, [150, 80, 80]);

    let default_mask = classify(&image, &ClassifierConfig::new(Hue::Red)).unwrap();
    assert!(default_mask.iter().all(|&v| !v));

    let loose = ClassifierConfig {
        hue: Hue::Red,
        upper_threshold: 120,
        lower_threshold: 90,
    };
    let loose_mask = classify(&image, &loose).unwrap();
    assert!(loose_mask.iter().all(|&v| v));
}

#[test]
fn test_inverted_thresholds_are_not_an_error() {
    let image = solid_raster(2, 2, [255, 0, 0]);
    let config = ClassifierConfig {
        hue: Hue::Red,
        upper_threshold: 255,
        lower_threshold: 0,
    };
    let mask = classify(&image, &config).unwrap();
    assert!(mask.iter().all(|&v| !v));
}

#[test]
fn test_out_of_range_threshold_is_rejected() {
    let image = solid_raster(2, 2, [255, 0, 0]);
    let config = ClassifierConfig {
        hue: Hue::Red,
        upper_threshold: 300,
        lower_threshold: 50,
    };
    let err = classify(&image, &config).unwrap_err();
    assert!(matches!(err, PavemapError::InvalidConfig(_)), "got: {err}");
}

#[test]
fn test_predicate_holds_for_every_foreground_pixel() {
    let image = RasterImage::new(Array3::from_shape_fn((16, 16, 3), |(r, c, ch)| {
        ((r * 31 + c * 17 + ch * 89) % 256) as f32 / 255.0
    }));
    let config = ClassifierConfig::new(Hue::Red);
    let mask = classify(&image, &config).unwrap();

    for ((row, col), &fg) in mask.indexed_iter() {
        let scaled = |ch: usize| (image.data[[row, col, ch]] * 255.0).round() as i32;
        let expected = scaled(0) > 100 && scaled(1) < 50 && scaled(2) < 50;
        assert_eq!(fg, expected, "pixel ({row}, {col})");
    }
}

// ---------------------------------------------------------------------------
// Invalid input
// ---------------------------------------------------------------------------

#[test]
fn test_two_channel_image_is_rejected() {
    let image = RasterImage::new(Array3::zeros((4, 4, 2)));
    let err = classify(&image, &ClassifierConfig::default()).unwrap_err();
    assert!(
        matches!(err, PavemapError::MissingChannels { found: 2, required: 3 }),
        "got: {err}"
    );
}

#[test]
fn test_empty_image_is_rejected() {
    let image = RasterImage::new(Array3::zeros((0, 0, 3)));
    let err = classify(&image, &ClassifierConfig::default()).unwrap_err();
    assert!(matches!(err, PavemapError::InvalidDimensions { .. }), "got: {err}");
}

#[test]
fn test_extra_channels_are_ignored() {
    let mut data = Array3::<f32>::zeros((1, 1, 4));
    data[[0, 0, 0]] = 1.0;
    data[[0, 0, 3]] = 1.0;
    let mask = classify(&RasterImage::new(data), &ClassifierConfig::new(Hue::Red)).unwrap();
    assert!(mask[[0, 0]]);
}
