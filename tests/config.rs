use std::collections::BTreeMap;

use traystencil::config::{Config, IconConfig};
use traystencil::settings::{EdgeMode, StencilOverrides, TargetSize};

#[test]
fn parse_empty_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stencil.toml");
    std::fs::write(&path, "").unwrap();

    let config = Config::load(&path).unwrap();
    assert!(config.icons.is_empty());
    assert_eq!(config.defaults.size, TargetSize::square(44));
    assert!(config.defaults.crop_to_content);
}

#[test]
fn parse_full_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("icon.png"), b"fake").unwrap();

    let path = dir.path().join("stencil.toml");
    std::fs::write(
        &path,
        r#"
[defaults]
size = 36
white_brightness = 210
edges = "soft"

[icons.tray]
source = "icon.png"
output = "out/tray.png"

[icons.wide]
source = "icon.png"
output = "out/wide.png"
size = { width = 40, height = 22 }
circular_mask = false
white_saturation = 45
"#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.icons.len(), 2);

    let tray = config.resolve("tray").unwrap();
    assert_eq!(tray.size, TargetSize::square(36));
    assert_eq!(tray.white_brightness, 210);
    assert_eq!(tray.edges, EdgeMode::Soft);
    assert!(tray.circular_mask);

    let wide = config.resolve("wide").unwrap();
    assert_eq!(
        wide.size,
        TargetSize {
            width: 40,
            height: 22
        }
    );
    assert!(!wide.circular_mask);
    assert_eq!(wide.white_saturation, 45);
    assert_eq!(wide.white_brightness, 210);

    assert!(config.resolve("missing").is_none());
}

#[test]
fn missing_source_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stencil.toml");
    std::fs::write(
        &path,
        r#"
[icons.tray]
source = "nonexistent.png"
output = "tray.png"
"#,
    )
    .unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("does not exist"), "error: {}", err);
}

#[test]
fn missing_output_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("icon.png"), b"fake").unwrap();
    let path = dir.path().join("stencil.toml");
    std::fs::write(
        &path,
        r#"
[icons.tray]
source = "icon.png"
"#,
    )
    .unwrap();

    assert!(Config::load(&path).is_err());
}

#[test]
fn output_cannot_overwrite_source() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("icon.png"), b"fake").unwrap();
    let path = dir.path().join("stencil.toml");
    std::fs::write(
        &path,
        r#"
[icons.tray]
source = "icon.png"
output = "icon.png"
"#,
    )
    .unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("overwrite"), "error: {}", err);
}

#[test]
fn zero_size_override_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("icon.png"), b"fake").unwrap();
    let path = dir.path().join("stencil.toml");
    std::fs::write(
        &path,
        r#"
[icons.tray]
source = "icon.png"
output = "tray.png"
size = 0
"#,
    )
    .unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("non-zero"), "error: {:#}", err);
}

#[test]
fn out_of_range_threshold_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stencil.toml");
    std::fs::write(&path, "[defaults]\nwhite_brightness = 300\n").unwrap();

    assert!(Config::load(&path).is_err());
}

#[test]
fn invalid_edge_mode() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stencil.toml");
    std::fs::write(&path, "[defaults]\nedges = \"fuzzy\"\n").unwrap();

    assert!(Config::load(&path).is_err());
}

#[test]
fn default_template_is_valid_toml() {
    let template = Config::default_template();
    let result: Result<toml::Value, _> = toml::from_str(&template);
    assert!(
        result.is_ok(),
        "default template is not valid TOML: {:?}",
        result.err()
    );
}

#[test]
fn save_skips_defaults_and_empty_overrides() {
    let config = Config {
        defaults: Default::default(),
        icons: BTreeMap::from([(
            "tray".into(),
            IconConfig {
                source: "icon.png".into(),
                output: "tray.png".into(),
                overrides: StencilOverrides {
                    white_brightness: Some(200),
                    ..Default::default()
                },
                unknown: BTreeMap::new(),
            },
        )]),
    };

    let serialized = toml::to_string(&config).unwrap();
    assert!(!serialized.contains("[defaults]"));
    assert!(serialized.contains("white_brightness = 200"));
    assert!(!serialized.contains("circular_mask"));
}

#[test]
fn save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("icon.png"), b"fake").unwrap();
    let path = dir.path().join("stencil.toml");

    let config = Config {
        defaults: traystencil::StencilConfig {
            mask_margin: 3,
            ..Default::default()
        },
        icons: BTreeMap::from([(
            "tray".into(),
            IconConfig {
                source: "icon.png".into(),
                output: "tray.png".into(),
                overrides: StencilOverrides {
                    size: Some(TargetSize {
                        width: 30,
                        height: 20,
                    }),
                    ..Default::default()
                },
                unknown: BTreeMap::new(),
            },
        )]),
    };

    config.save(&path).unwrap();
    let loaded = Config::load(&path).unwrap();
    assert_eq!(loaded.defaults.mask_margin, 3);
    assert_eq!(loaded.icons, config.icons);
}

#[test]
fn misspelled_icon_setting_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("icon.png"), b"fake").unwrap();
    let path = dir.path().join("stencil.toml");
    std::fs::write(
        &path,
        r#"
[icons.tray]
source = "icon.png"
output = "tray.png"
white_brigthness = 200
"#,
    )
    .unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(
        err.to_string().contains("white_brigthness"),
        "error: {}",
        err
    );
}

#[test]
fn misspelled_default_setting_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stencil.toml");
    std::fs::write(&path, "[defaults]
white_brigthness = 200
").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(
        format!("{:#}", err).contains("white_brigthness"),
        "error: {:#}",
        err
    );
}

#[test]
fn known_icon_settings_leave_nothing_over() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("icon.png"), b"fake").unwrap();
    let path = dir.path().join("stencil.toml");
    std::fs::write(
        &path,
        r#"
[icons.tray]
source = "icon.png"
output = "tray.png"
white_brightness = 200
edges = "soft"
size = { width = 30, height = 20 }
"#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert!(config.icons["tray"].unknown.is_empty());
    assert_eq!(config.icons["tray"].overrides.white_brightness, Some(200));
}
