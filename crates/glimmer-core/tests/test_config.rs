use std::path::PathBuf;

use approx::assert_relative_eq;

use glimmer_core::adjust::AdjustParams;
use glimmer_core::config::AdjustConfig;
use glimmer_core::error::GlimmerError;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn test_default_params_are_identity() {
    let p = AdjustParams::default();
    assert_eq!(p.brightness, 0);
    assert_eq!(p.contrast, 0);
    assert_relative_eq!(p.opacity, 1.0);
    assert!(p.is_identity());
}

#[test]
fn test_default_config_output_is_result_png() {
    let config = AdjustConfig::default();
    assert_eq!(config.output, PathBuf::from("result.png"));
    assert!(config.input.is_none());
}

#[test]
fn test_params_display() {
    let p = AdjustParams::new(-5, 40, 0.5);
    assert_eq!(format!("{p}"), "brightness=-5, contrast=40, opacity=0.50");
}

// ---------------------------------------------------------------------------
// TOML
// ---------------------------------------------------------------------------

#[test]
fn test_toml_roundtrip() {
    let config = AdjustConfig {
        input: Some(PathBuf::from("photo.jpg")),
        output: PathBuf::from("out.png"),
        params: AdjustParams::new(20, -40, 0.75),
    };
    let text = config.to_toml_string().unwrap();
    let parsed = AdjustConfig::from_toml_str(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_partial_params_use_defaults() {
    let config = AdjustConfig::from_toml_str("[params]\ncontrast = 30\n").unwrap();
    assert_eq!(config.params.contrast, 30);
    assert_eq!(config.params.brightness, 0);
    assert_relative_eq!(config.params.opacity, 1.0);
    assert_eq!(config.output, PathBuf::from("result.png"));
}

#[test]
fn test_empty_document_is_default() {
    let config = AdjustConfig::from_toml_str("").unwrap();
    assert_eq!(config, AdjustConfig::default());
}

#[test]
fn test_invalid_toml_is_config_error() {
    let err = AdjustConfig::from_toml_str("[params\nbrightness = ").unwrap_err();
    assert!(matches!(err, GlimmerError::Config(_)));
}

#[test]
fn test_wrong_type_is_config_error() {
    let err = AdjustConfig::from_toml_str("[params]\nbrightness = \"high\"\n").unwrap_err();
    assert!(matches!(err, GlimmerError::Config(_)));
}

#[test]
fn test_save_and_load_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preset.toml");
    let config = AdjustConfig {
        params: AdjustParams::new(1, 2, 0.25),
        ..AdjustConfig::default()
    };
    config.save(&path).unwrap();
    assert_eq!(AdjustConfig::load(&path).unwrap(), config);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AdjustConfig::load(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, GlimmerError::Io(_)));
}

#[test]
fn test_out_of_range_preset_is_clamped() {
    let config = AdjustConfig::from_toml_str(
        "[params]\nbrightness = -900\ncontrast = 259\nopacity = 3.5\n",
    )
    .unwrap();
    let params = config.params.clamped();
    assert_eq!(params, AdjustParams::new(-255, 255, 1.0));
    assert!(glimmer_core::adjust::contrast_factor(params.contrast).is_ok());

    let high = AdjustParams::new(0, 400, -0.5).clamped();
    assert_eq!(high, AdjustParams::new(0, 255, 0.0));
}

#[test]
fn test_in_range_params_are_unchanged_by_clamp() {
    let params = AdjustParams::new(-20, 80, 0.7);
    assert_eq!(params.clamped(), params);
    assert_eq!(AdjustParams::new(0, 0, f64::NAN).clamped(), AdjustParams::default());
}
