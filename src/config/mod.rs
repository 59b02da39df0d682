use crate::core::ConfigProvider;
use crate::utils::error::{CartError, Result};
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "calorie-cart")]
#[command(about = "Browse a food catalog, build a cart, and QR-encode the order manifest")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:5000/api/foods")]
    pub catalog_endpoint: String,

    #[arg(long, default_value = "http://localhost:5000/api/scan/generate")]
    pub encoder_endpoint: String,

    #[arg(long, help = "Substring to search the catalog with; omit to list everything")]
    pub query: Option<String>,

    #[arg(
        long,
        value_delimiter = ',',
        help = "Items to put in the cart, as name or name=quantity"
    )]
    pub select: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn catalog_endpoint(&self) -> &str {
        &self.catalog_endpoint
    }

    fn encoder_endpoint(&self) -> &str {
        &self.encoder_endpoint
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("catalog_endpoint", &self.catalog_endpoint)?;
        validate_url("encoder_endpoint", &self.encoder_endpoint)?;
        for spec in &self.select {
            parse_selection_spec(spec)?;
        }
        Ok(())
    }
}

/// Parses one `--select` value: either `name` (quantity 1) or
/// `name=quantity` with quantity at least 1.
pub fn parse_selection_spec(spec: &str) -> Result<(String, u32)> {
    let (name, quantity) = match spec.split_once('=') {
        Some((name, qty)) => {
            let quantity: u32 = qty.trim().parse().map_err(|_| {
                CartError::InvalidConfigValueError {
                    field: "select".to_string(),
                    value: spec.to_string(),
                    reason: format!("'{}' is not a valid quantity", qty.trim()),
                }
            })?;
            (name, quantity)
        }
        None => (spec, 1),
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(CartError::InvalidConfigValueError {
            field: "select".to_string(),
            value: spec.to_string(),
            reason: "item name cannot be empty".to_string(),
        });
    }
    if quantity == 0 {
        return Err(CartError::InvalidConfigValueError {
            field: "select".to_string(),
            value: spec.to_string(),
            reason: "quantity must be at least 1".to_string(),
        });
    }

    Ok((name.to_string(), quantity))
}
