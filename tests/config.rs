use windingplot::{PeriodSliderConfig, WindingConfig, WindingConfigFile, WindingError};

#[test]
fn default_slider_matches_viewer_defaults() {
    let s = PeriodSliderConfig::default();
    assert_eq!(s.min, 0.1);
    assert_eq!(s.max, 10.0);
    assert_eq!(s.step, None);
    assert!(s.validate().is_ok());
    assert_eq!(s.clamp(50.0), 10.0);
    assert_eq!(s.clamp(0.0), 0.1);
}

#[test]
fn yaml_round_trip() {
    let mut cfg = WindingConfig::default();
    cfg.title = "Sweep".to_string();
    cfg.slider.max = 25.0;
    cfg.slider.step = Some(0.5);
    cfg.features.legend = false;

    let yaml = cfg.to_file().to_yaml_string().unwrap();
    let file = WindingConfigFile::from_yaml_str(&yaml).unwrap();
    assert_eq!(file, cfg.to_file());

    let mut restored = WindingConfig::default();
    restored.apply_file(file);
    assert_eq!(restored.title, "Sweep");
    assert_eq!(restored.slider.step, Some(0.5));
    assert!(!restored.features.legend);
}

#[test]
fn partial_yaml_uses_defaults() {
    let file = WindingConfigFile::from_yaml_str("slider:\n  max: 4.0\n").unwrap();
    assert_eq!(file.slider.min, 0.1);
    assert_eq!(file.slider.max, 4.0);
    assert_eq!(file.title, "Winding");
    assert!(file.features.export);
}

#[test]
fn inverted_slider_range_is_rejected() {
    let err = WindingConfigFile::from_yaml_str("slider:\n  min: 5.0\n  max: 1.0\n").unwrap_err();
    assert!(matches!(err, WindingError::InvalidConfig(_)));

    let bad_step = PeriodSliderConfig {
        step: Some(0.0),
        ..PeriodSliderConfig::default()
    };
    assert!(bad_step.validate().is_err());

    let zero_min = PeriodSliderConfig {
        min: 0.0,
        ..PeriodSliderConfig::default()
    };
    assert!(zero_min.validate().is_err());
}

#[test]
fn malformed_yaml_is_a_yaml_error() {
    let err = WindingConfigFile::from_yaml_str("slider: [1, 2").unwrap_err();
    assert!(matches!(err, WindingError::Yaml(_)));
}

#[test]
fn save_and_load_file() {
    let dir = std::env::temp_dir().join(format!("windingplot_cfg_{}", std::process::id()));
    let path = dir.join("viewer.yaml");
    let file = WindingConfigFile {
        headline: Some("harmonics".to_string()),
        ..WindingConfigFile::default()
    };
    file.save(&path).unwrap();
    let loaded = WindingConfigFile::load(&path).unwrap();
    let _ = std::fs::remove_dir_all(&dir);
    assert_eq!(loaded, file);
}
