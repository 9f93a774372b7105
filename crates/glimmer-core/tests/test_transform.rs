mod common;

use approx::assert_relative_eq;

use glimmer_core::adjust::{clamp8, contrast_factor, transform, transform_samples, AdjustParams};
use glimmer_core::buffer::PixelBuffer;
use glimmer_core::error::GlimmerError;

use common::{ramp_buffer, reference_alpha, reference_color, single_pixel};

fn px(buffer: &PixelBuffer) -> [u8; 4] {
    buffer.pixel(0, 0).unwrap()
}

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

#[test]
fn test_identity_reproduces_every_sample() {
    let source = ramp_buffer(17, 9);
    let out = transform(&source, &AdjustParams::default()).unwrap();
    assert_eq!(out, source);
}

#[test]
fn test_identity_covers_all_byte_values() {
    let data: Vec<u8> = (0..=255u8).flat_map(|v| [v, 255 - v, v / 2, v]).collect();
    let source = PixelBuffer::from_raw(256, 1, data).unwrap();
    let out = transform(&source, &AdjustParams::new(0, 0, 1.0)).unwrap();
    assert_eq!(out.as_raw(), source.as_raw());
}

#[test]
fn test_source_is_not_modified() {
    let source = ramp_buffer(8, 8);
    let before = source.clone();
    let _ = transform(&source, &AdjustParams::new(80, -40, 0.3)).unwrap();
    assert_eq!(source, before);
}

#[test]
fn test_transform_is_idempotent() {
    let source = ramp_buffer(12, 5);
    let params = AdjustParams::new(-30, 120, 0.6);
    let a = transform(&source, &params).unwrap();
    let b = transform(&source, &params).unwrap();
    assert_eq!(a, b);
}

// ---------------------------------------------------------------------------
// Contrast factor
// ---------------------------------------------------------------------------

#[test]
fn test_contrast_factor_zero_is_one() {
    assert_eq!(contrast_factor(0).unwrap(), 1.0);
}

#[test]
fn test_contrast_factor_values() {
    assert_relative_eq!(contrast_factor(255).unwrap(), 129.5, epsilon = 1e-9);
    assert_relative_eq!(contrast_factor(-255).unwrap(), 0.0, epsilon = 1e-12);
    assert!(contrast_factor(100).unwrap() > 1.0);
    assert!(contrast_factor(-100).unwrap() < 1.0);
}

#[test]
fn test_contrast_factor_singular_value_rejected() {
    match contrast_factor(259) {
        Err(GlimmerError::InvalidParameter { contrast }) => assert_eq!(contrast, 259),
        other => panic!("expected InvalidParameter, got {other:?}"),
    }
}

#[test]
fn test_transform_rejects_singular_contrast() {
    let source = single_pixel([10, 20, 30, 255]);
    let err = transform(&source, &AdjustParams::new(0, 259, 1.0)).unwrap_err();
    assert!(matches!(err, GlimmerError::InvalidParameter { contrast: 259 }));
}

#[test]
fn test_mid_gray_is_fixed_under_any_contrast() {
    let source = single_pixel([128, 128, 128, 255]);
    for contrast in [-255, -100, 0, 100, 200, 255, 258, 300] {
        let out = transform(&source, &AdjustParams::new(0, contrast, 1.0)).unwrap();
        assert_eq!(px(&out), [128, 128, 128, 255], "contrast {contrast}");
    }
}

#[test]
fn test_high_contrast_pushes_to_extremes() {
    let source = single_pixel([100, 160, 128, 255]);
    let out = transform(&source, &AdjustParams::new(0, 255, 1.0)).unwrap();
    assert_eq!(px(&out), [0, 255, 128, 255]);
}

#[test]
fn test_minimum_contrast_flattens_to_mid_gray() {
    let source = single_pixel([0, 77, 255, 9]);
    let out = transform(&source, &AdjustParams::new(0, -255, 1.0)).unwrap();
    assert_eq!(px(&out), [128, 128, 128, 9]);
}

// ---------------------------------------------------------------------------
// Brightness and clamping
// ---------------------------------------------------------------------------

#[test]
fn test_brightness_is_additive() {
    let source = single_pixel([10, 100, 200, 255]);
    let out = transform(&source, &AdjustParams::new(40, 0, 1.0)).unwrap();
    assert_eq!(px(&out), [50, 140, 240, 255]);
}

#[test]
fn test_clamp_high() {
    let source = single_pixel([0, 0, 0, 255]);
    let out = transform(&source, &AdjustParams::new(300, 0, 1.0)).unwrap();
    assert_eq!(px(&out), [255, 255, 255, 255]);
}

#[test]
fn test_clamp_low() {
    let source = single_pixel([0, 0, 0, 255]);
    let out = transform(&source, &AdjustParams::new(-300, 0, 1.0)).unwrap();
    assert_eq!(px(&out), [0, 0, 0, 255]);
}

#[test]
fn test_clamp_after_contrast_and_brightness() {
    // factor at 100 is ~2.27, so 10 lands well below zero before brightness
    let source = single_pixel([250, 10, 128, 255]);
    let out = transform(&source, &AdjustParams::new(-200, 100, 1.0)).unwrap();
    let expected = [
        reference_color(250, -200, 100),
        reference_color(10, -200, 100),
        reference_color(128, -200, 100),
        255,
    ];
    assert_eq!(px(&out), expected);
    assert_eq!(expected[1], 0);
}

#[test]
fn test_rgb_pipeline_leaves_alpha_alone() {
    let source = single_pixel([30, 60, 90, 77]);
    let out = transform(&source, &AdjustParams::new(255, 200, 1.0)).unwrap();
    assert_eq!(px(&out)[3], 77);
}

#[test]
fn test_clamp8_boundaries() {
    assert_eq!(clamp8(-0.5).unwrap(), 0);
    assert_eq!(clamp8(-300.0).unwrap(), 0);
    assert_eq!(clamp8(300.0).unwrap(), 255);
    assert_eq!(clamp8(255.0).unwrap(), 255);
    assert_eq!(clamp8(f64::INFINITY).unwrap(), 255);
    assert_eq!(clamp8(f64::NEG_INFINITY).unwrap(), 0);
    assert_eq!(clamp8(99.4).unwrap(), 99);
    assert_eq!(clamp8(99.6).unwrap(), 100);
    // ties go to even
    assert_eq!(clamp8(100.5).unwrap(), 100);
    assert_eq!(clamp8(101.5).unwrap(), 102);
}

#[test]
fn test_clamp8_rejects_nan() {
    assert!(matches!(
        clamp8(f64::NAN),
        Err(GlimmerError::InvalidValue { .. })
    ));
}

// ---------------------------------------------------------------------------
// Opacity
// ---------------------------------------------------------------------------

#[test]
fn test_opacity_half() {
    let source = single_pixel([1, 2, 3, 200]);
    let out = transform(&source, &AdjustParams::new(0, 0, 0.5)).unwrap();
    assert_eq!(px(&out), [1, 2, 3, 100]);
}

#[test]
fn test_opacity_zero() {
    let source = single_pixel([1, 2, 3, 200]);
    let out = transform(&source, &AdjustParams::new(0, 0, 0.0)).unwrap();
    assert_eq!(px(&out)[3], 0);
}

#[test]
fn test_opacity_one_keeps_alpha() {
    let source = single_pixel([1, 2, 3, 200]);
    let out = transform(&source, &AdjustParams::new(0, 0, 1.0)).unwrap();
    assert_eq!(px(&out)[3], 200);
}

#[test]
fn test_opacity_out_of_range_is_clamped() {
    let source = single_pixel([1, 2, 3, 200]);
    let over = transform(&source, &AdjustParams::new(0, 0, 2.0)).unwrap();
    assert_eq!(px(&over)[3], 255);
    let under = transform(&source, &AdjustParams::new(0, 0, -1.0)).unwrap();
    assert_eq!(px(&under)[3], 0);
}

#[test]
fn test_opacity_double_precision_ties() {
    // 5 * 0.7 and 15 * 0.3 are exactly 3.5 and 4.5 in double precision.
    let a = transform(&single_pixel([0, 0, 0, 5]), &AdjustParams::new(0, 0, 0.7)).unwrap();
    assert_eq!(px(&a)[3], 4);
    let b = transform(&single_pixel([0, 0, 0, 15]), &AdjustParams::new(0, 0, 0.3)).unwrap();
    assert_eq!(px(&b)[3], 4);
}

#[test]
fn test_nan_opacity_is_invalid_value() {
    let source = single_pixel([1, 2, 3, 200]);
    let err = transform(&source, &AdjustParams::new(0, 0, f64::NAN)).unwrap_err();
    assert!(matches!(err, GlimmerError::InvalidValue { .. }));
}

// ---------------------------------------------------------------------------
// Independence
// ---------------------------------------------------------------------------

#[test]
fn test_equal_inputs_give_equal_outputs_regardless_of_position() {
    let mut data = Vec::new();
    for i in 0..64u8 {
        data.extend_from_slice(&[90, i, 255 - i, i.wrapping_mul(3)]);
    }
    let source = PixelBuffer::from_raw(8, 8, data).unwrap();
    let out = transform(&source, &AdjustParams::new(12, 70, 0.4)).unwrap();

    let first_red = out.pixel(0, 0).unwrap()[0];
    for y in 0..8 {
        for x in 0..8 {
            assert_eq!(out.pixel(x, y).unwrap()[0], first_red);
        }
    }
}

#[test]
fn test_channels_do_not_couple() {
    let a = single_pixel([50, 0, 0, 255]);
    let b = single_pixel([50, 255, 128, 10]);
    let params = AdjustParams::new(-20, 150, 0.9);
    let out_a = transform(&a, &params).unwrap();
    let out_b = transform(&b, &params).unwrap();
    assert_eq!(px(&out_a)[0], px(&out_b)[0]);
}

#[test]
fn test_matches_reference_on_ramp() {
    let source = ramp_buffer(31, 7);
    let params = AdjustParams::new(-45, 90, 0.35);
    let out = transform(&source, &params).unwrap();
    for (s, o) in source.as_raw().chunks(4).zip(out.as_raw().chunks(4)) {
        assert_eq!(o[0], reference_color(s[0], -45, 90));
        assert_eq!(o[1], reference_color(s[1], -45, 90));
        assert_eq!(o[2], reference_color(s[2], -45, 90));
        assert_eq!(o[3], reference_alpha(s[3], 0.35));
    }
}

#[test]
fn test_large_buffer_matches_reference() {
    // Above the parallel threshold, so rows are processed on the Rayon pool.
    let source = ramp_buffer(300, 260);
    let params = AdjustParams::new(33, -60, 0.75);
    let out = transform(&source, &params).unwrap();
    assert_eq!(out.width(), 300);
    assert_eq!(out.height(), 260);
    for (s, o) in source.as_raw().chunks(4).zip(out.as_raw().chunks(4)) {
        assert_eq!(o[0], reference_color(s[0], 33, -60));
        assert_eq!(o[1], reference_color(s[1], 33, -60));
        assert_eq!(o[2], reference_color(s[2], 33, -60));
        assert_eq!(o[3], reference_alpha(s[3], 0.75));
    }
}

// ---------------------------------------------------------------------------
// Flat sample slices
// ---------------------------------------------------------------------------

#[test]
fn test_transform_samples_matches_buffer_transform() {
    let source = ramp_buffer(20, 20);
    let params = AdjustParams::new(5, 25, 0.5);
    let via_buffer = transform(&source, &params).unwrap();
    let via_samples = transform_samples(source.as_raw(), &params).unwrap();
    assert_eq!(via_buffer.as_raw(), via_samples.as_slice());
}

#[test]
fn test_transform_samples_rejects_partial_pixel() {
    let err = transform_samples(&[1, 2, 3, 4, 5, 6], &AdjustParams::default()).unwrap_err();
    assert!(matches!(err, GlimmerError::InvalidBufferLength { len: 6 }));
}

#[test]
fn test_transform_samples_large_flat_slice() {
    let samples: Vec<u8> = (0..70_000 * 4).map(|i| (i % 251) as u8).collect();
    let params = AdjustParams::new(-10, 10, 0.2);
    let out = transform_samples(&samples, &params).unwrap();
    for (s, o) in samples.chunks(4).zip(out.chunks(4)) {
        assert_eq!(o[0], reference_color(s[0], -10, 10));
        assert_eq!(o[3], reference_alpha(s[3], 0.2));
    }
}

#[test]
fn test_empty_buffer() {
    let source = PixelBuffer::from_raw(0, 0, Vec::new()).unwrap();
    let out = transform(&source, &AdjustParams::new(10, 10, 0.5)).unwrap();
    assert!(out.as_raw().is_empty());
}
