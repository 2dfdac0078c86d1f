//! Configuration for the lunch order operator tool

use anyhow::{Context, Result};
use lunch_sheet::SheetLayout;
use serde::Deserialize;
use shared::CONFIG;
use std::path::Path;

// =============================================================================
// File-based Configuration (lunch.toml)
// =============================================================================

/// Configuration loaded from lunch.toml; everything is optional
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub endpoints: EndpointOverrides,
    /// Replacement layout for the lookup export
    #[serde(default)]
    pub lookup: Option<SheetLayout>,
    /// Replacement layout for the management export
    #[serde(default)]
    pub management: Option<SheetLayout>,
}

/// Endpoint overrides section
#[derive(Debug, Default, Deserialize)]
pub struct EndpointOverrides {
    pub lookup_csv: Option<String>,
    pub management_csv: Option<String>,
    pub management_script: Option<String>,
    pub settings_script: Option<String>,
}

impl FileConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content).with_context(|| {
            "Failed to parse lunch.toml. Check for:\n\
             - Invalid TOML syntax (missing quotes, brackets, etc.)\n\
             - Layout sections missing header_row or columns\n\
             - Unknown column keys (buyer, item, price, rice-addon, extra-addon,\n\
               quantity, subtotal, timestamp, note, staff)\n\n\
             See lunch.toml.example for the expected format."
        })
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Endpoints and layouts after applying overrides
#[derive(Debug, Clone)]
pub struct Config {
    pub lookup_csv: String,
    pub management_csv: String,
    pub management_script: String,
    pub settings_script: String,
    pub lookup_layout: SheetLayout,
    pub management_layout: SheetLayout,
}

impl Config {
    /// Built-in endpoints and layouts, overridden by whatever the file sets
    pub fn from_file(file_config: FileConfig) -> Self {
        let endpoints = file_config.endpoints;
        let defaults = &CONFIG.endpoints;

        Self {
            lookup_csv: endpoints.lookup_csv.unwrap_or_else(|| defaults.lookup_csv.to_string()),
            management_csv: endpoints
                .management_csv
                .unwrap_or_else(|| defaults.management_csv.to_string()),
            management_script: endpoints
                .management_script
                .unwrap_or_else(|| defaults.management_script.to_string()),
            settings_script: endpoints
                .settings_script
                .unwrap_or_else(|| defaults.settings_script.to_string()),
            lookup_layout: file_config.lookup.unwrap_or_else(SheetLayout::lookup),
            management_layout: file_config.management.unwrap_or_else(SheetLayout::management),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lunch_sheet::Field;

    #[test]
    fn test_missing_file_config_uses_defaults() {
        let config = Config::from_file(FileConfig::default());
        assert_eq!(config.management_script, CONFIG.endpoints.management_script);
        assert_eq!(config.management_layout, SheetLayout::management());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::from_file(FileConfig::parse("").unwrap());
        assert_eq!(config.lookup_csv, CONFIG.endpoints.lookup_csv);
        assert_eq!(config.settings_script, CONFIG.endpoints.settings_script);
        assert_eq!(config.lookup_layout, SheetLayout::lookup());
        assert_eq!(config.management_layout, SheetLayout::management());
    }

    #[test]
    fn test_endpoint_override() {
        let file = FileConfig::parse(
            r#"
            [endpoints]
            management_script = "https://script.google.com/macros/s/test/exec"
            "#,
        )
        .unwrap();
        let config = Config::from_file(file);

        assert_eq!(config.management_script, "https://script.google.com/macros/s/test/exec");
        assert_eq!(config.management_csv, CONFIG.endpoints.management_csv);
    }

    #[test]
    fn test_layout_override() {
        let file = FileConfig::parse(
            r#"
            [management]
            header_row = 0

            [management.columns]
            timestamp = "Timestamp"
            staff = "Name"
            "#,
        )
        .unwrap();
        let config = Config::from_file(file);

        assert_eq!(config.management_layout.columns.name(Field::Staff), Some("Name"));
        assert_eq!(config.management_layout.columns.name(Field::Item), None);
        assert_eq!(config.lookup_layout, SheetLayout::lookup());
    }

    #[test]
    fn test_layout_requires_columns() {
        assert!(FileConfig::parse("[lookup]\nheader_row = 1\n").is_err());
    }
}
