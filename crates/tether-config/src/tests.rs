//! Tests for shuffle configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        random_seed = 42

        [[items]]
        value = "Chemmy"

        [[items]]
        value = "Irish"
        anchor = "to_previous"

        [[items]]
        value = "Overhand"
        anchor = "position"

        [[items]]
        value = "Stripping"
        anchor = "to_next"
    "#;

    let config = ShuffleConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.items.len(), 4);
    assert_eq!(config.items[0].anchor, AnchorKind::None);
    assert_eq!(config.items[1].anchor, AnchorKind::ToPrevious);
    assert_eq!(config.items[2].anchor, AnchorKind::Position);
    assert_eq!(config.items[3].anchor, AnchorKind::ToNext);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        random_seed: 42
        items:
          - value: Faro
          - value: Weave
            anchor: position
    "#;

    let config = ShuffleConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.items[1], ItemConfig::new("Weave", AnchorKind::Position));
}

#[test]
fn test_defaults() {
    let config = ShuffleConfig::from_toml_str("").unwrap();
    assert_eq!(config, ShuffleConfig::default());
    assert!(config.random_seed.is_none());
    assert!(config.items.is_empty());
}

#[test]
fn test_unknown_anchor_rejected() {
    let toml = r#"
        [[items]]
        value = "Pile"
        anchor = "sideways"
    "#;

    let err = ShuffleConfig::from_toml_str(toml).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_empty_value_invalid() {
    let toml = r#"
        [[items]]
        value = ""
    "#;

    let err = ShuffleConfig::from_toml_str(toml).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert_eq!(err.to_string(), "Invalid configuration: item 0 has an empty value");
}

#[test]
fn test_missing_file() {
    let err = ShuffleConfig::load("does/not/exist.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_builder() {
    let config = ShuffleConfig::new()
        .with_random_seed(123)
        .with_item("Riffle", AnchorKind::None)
        .with_item("Wash", AnchorKind::ToPrevious);

    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.items.len(), 2);
    assert!(config.validate().is_ok());
}

#[test]
fn test_toml_roundtrip_keeps_anchor_names() {
    let config = ShuffleConfig::new().with_item("Mongean", AnchorKind::ToNext);
    let text = toml::to_string(&config).unwrap();
    assert!(text.contains("anchor = \"to_next\""));
}

#[test]
fn test_unknown_anchor_serializes_as_none() {
    let config = ShuffleConfig::new()
        .with_random_seed(3)
        .with_item("Riffle", AnchorKind::from(9));
    let text = toml::to_string(&config).unwrap();
    assert!(text.contains("anchor = \"none\""), "{}", text);

    let parsed = ShuffleConfig::from_toml_str(&text).unwrap();
    assert_eq!(parsed.items[0].anchor, AnchorKind::None);
}
