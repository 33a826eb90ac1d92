use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LookupError, Result};

/// Marker text that closes a part's group in the inventory report.
pub const DEFAULT_SENTINEL: &str = "Item Total";
/// File name prefix of the published price list workbooks.
pub const DEFAULT_CATALOG_PREFIX: &str = "CNA_Parts_Price_List_All";
/// Age after which the inventory snapshot is reported as stale.
pub const DEFAULT_STALE_AFTER_DAYS: u64 = 7;

/// Column positions of the price list, counted from zero after the header row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogLayout {
    pub part_column: usize,
    pub description_column: usize,
    pub price_column: usize,
}

impl Default for CatalogLayout {
    fn default() -> Self {
        Self {
            part_column: 2,
            description_column: 4,
            price_column: 5,
        }
    }
}

/// Column positions of the inventory report and its group-closing marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryLayout {
    pub part_column: usize,
    pub sentinel_column: usize,
    pub quantity_column: usize,
    pub sentinel: String,
}

impl Default for InventoryLayout {
    fn default() -> Self {
        Self {
            part_column: 2,
            sentinel_column: 3,
            quantity_column: 10,
            sentinel: DEFAULT_SENTINEL.to_string(),
        }
    }
}

/// Settings for a lookup run. Every field falls back to its default when it is
/// missing from the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    pub catalog: CatalogLayout,
    pub inventory: InventoryLayout,
    /// Leading worksheet rows treated as headers and skipped on load.
    pub header_rows: usize,
    pub catalog_prefix: String,
    pub stale_after_days: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogLayout::default(),
            inventory: InventoryLayout::default(),
            header_rows: 1,
            catalog_prefix: DEFAULT_CATALOG_PREFIX.to_string(),
            stale_after_days: DEFAULT_STALE_AFTER_DAYS,
        }
    }
}

impl LookupConfig {
    /// Loads a JSON configuration file and validates it.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LookupError::MissingInput(path.to_path_buf()));
        }
        let data = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings that would make every lookup miss.
    pub fn validate(&self) -> Result<()> {
        if self.inventory.sentinel.trim().is_empty() {
            return Err(LookupError::InvalidConfig(
                "inventory sentinel text must not be blank".into(),
            ));
        }
        if self.catalog_prefix.is_empty() {
            return Err(LookupError::InvalidConfig(
                "catalog prefix must not be empty".into(),
            ));
        }
        Ok(())
    }
}
