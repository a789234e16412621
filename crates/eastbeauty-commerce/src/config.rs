//! Store configuration.
//!
//! The crate never touches the filesystem or environment. The embedding
//! application reads whatever text it wants and hands it over here.

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::money::Currency;

/// Default maximum quantity allowed per cart line.
pub const DEFAULT_MAX_QUANTITY_PER_LINE: u32 = 9999;

/// Cart store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Currency the cart totals are computed in.
    pub currency: Currency,

    /// Maximum quantity of a single product in the cart.
    pub max_quantity_per_line: u32,

    /// Whether `set_quantity` on a product that is not in the cart creates
    /// the line from the catalog. Requires a catalog to be wired in.
    pub materialize_on_set_quantity: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            currency: Currency::RUB,
            max_quantity_per_line: DEFAULT_MAX_QUANTITY_PER_LINE,
            materialize_on_set_quantity: false,
        }
    }
}

impl StoreConfig {
    /// Parse from TOML text and validate.
    ///
    /// Malformed text and invalid values are both `CommerceError::Config`.
    pub fn from_toml_str(content: &str) -> Result<Self, CommerceError> {
        let config: StoreConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse from JSON text and validate.
    ///
    /// Errors are reported the same way as [`StoreConfig::from_toml_str`].
    pub fn from_json_str(content: &str) -> Result<Self, CommerceError> {
        let config: StoreConfig = serde_json::from_str(content)
            .map_err(|e| CommerceError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> Result<String, CommerceError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check the configured values.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.max_quantity_per_line == 0 {
            return Err(CommerceError::Config(
                "max_quantity_per_line must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.currency, Currency::RUB);
        assert_eq!(config.max_quantity_per_line, 9999);
        assert!(!config.materialize_on_set_quantity);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let text = "max_quantity_per_line = 10\n";
        let config = StoreConfig::from_toml_str(text).unwrap();
        assert_eq!(config.max_quantity_per_line, 10);
        assert_eq!(config.currency, Currency::RUB);
    }

    #[test]
    fn test_empty_toml() {
        let config = StoreConfig::from_toml_str("").unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_json_config() {
        let config = StoreConfig::from_json_str(
            r#"{"currency": "CNY", "materialize_on_set_quantity": true}"#,
        )
        .unwrap();
        assert_eq!(config.currency, Currency::CNY);
        assert!(config.materialize_on_set_quantity);
    }

    #[test]
    fn test_zero_limit_rejected() {
        let result = StoreConfig::from_toml_str("max_quantity_per_line = 0\n");
        assert!(matches!(result, Err(CommerceError::Config(_))));
    }

    #[test]
    fn test_malformed_toml() {
        let result = StoreConfig::from_toml_str("max_quantity_per_line = \"many\"\n");
        assert!(matches!(result, Err(CommerceError::Config(_))));
    }

    #[test]
    fn test_malformed_json() {
        let result = StoreConfig::from_json_str(r#"{"max_quantity_per_line": "many"}"#);
        assert!(matches!(result, Err(CommerceError::Config(_))));

        let result = StoreConfig::from_json_str("{not json");
        assert!(matches!(result, Err(CommerceError::Config(_))));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = StoreConfig {
            currency: Currency::EUR,
            max_quantity_per_line: 50,
            materialize_on_set_quantity: true,
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(StoreConfig::from_toml_str(&text).unwrap(), config);
    }
}
