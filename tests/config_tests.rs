use anyhow::Result;
use calorie_cart::config::{parse_selection_spec, CliConfig};
use calorie_cart::utils::validation::Validate;
use calorie_cart::CartError;

fn config() -> CliConfig {
    CliConfig {
        catalog_endpoint: "http://localhost:5000/api/foods".to_string(),
        encoder_endpoint: "http://localhost:5000/api/scan/generate".to_string(),
        query: None,
        select: vec![],
        verbose: false,
    }
}

#[test]
fn test_default_style_config_validates() -> Result<()> {
    config().validate()?;
    Ok(())
}

#[test]
fn test_invalid_endpoint_scheme_is_rejected() {
    let mut config = config();
    config.catalog_endpoint = "ftp://example.com/foods".to_string();

    let result = config.validate();
    assert!(matches!(
        result,
        Err(CartError::InvalidConfigValueError { ref field, .. }) if field == "catalog_endpoint"
    ));
}

#[test]
fn test_empty_encoder_endpoint_is_rejected() {
    let mut config = config();
    config.encoder_endpoint = String::new();

    assert!(config.validate().is_err());
}

#[test]
fn test_selection_spec_defaults_to_quantity_one() -> Result<()> {
    let (name, quantity) = parse_selection_spec("Apple")?;
    assert_eq!(name, "Apple");
    assert_eq!(quantity, 1);
    Ok(())
}

#[test]
fn test_selection_spec_with_quantity() -> Result<()> {
    let (name, quantity) = parse_selection_spec("Pizza Slice=3")?;
    assert_eq!(name, "Pizza Slice");
    assert_eq!(quantity, 3);
    Ok(())
}

#[test]
fn test_selection_spec_trims_whitespace() -> Result<()> {
    let (name, quantity) = parse_selection_spec("  Banana = 2 ")?;
    assert_eq!(name, "Banana");
    assert_eq!(quantity, 2);
    Ok(())
}

#[test]
fn test_selection_spec_rejects_zero_quantity() {
    assert!(parse_selection_spec("Apple=0").is_err());
}

#[test]
fn test_selection_spec_rejects_garbage_quantity() {
    assert!(parse_selection_spec("Apple=lots").is_err());
}

#[test]
fn test_selection_spec_rejects_empty_name() {
    assert!(parse_selection_spec("=2").is_err());
    assert!(parse_selection_spec("   ").is_err());
}

#[test]
fn test_bad_selection_spec_fails_config_validation() {
    let mut config = config();
    config.select = vec!["Apple".to_string(), "Banana=0".to_string()];

    assert!(config.validate().is_err());
}
