//! Joins extracted part numbers against the catalog and inventory indexes
//! and renders the two report views.

mod render;

pub use render::{format_price, format_quantity, render_report, render_stock_summary};

use tracing::{debug, instrument};

use crate::config::LookupConfig;
use crate::index::{CatalogIndex, InventoryIndex};
use crate::model::{LookupResult, PartNumber, StockStatus, Table};

/// Indexes used by a single search. Built per request and never mutated.
#[derive(Debug, Clone, Default)]
pub struct LookupContext {
    pub catalog: CatalogIndex,
    pub inventory: InventoryIndex,
}

impl LookupContext {
    pub fn new(catalog: CatalogIndex, inventory: InventoryIndex) -> Self {
        Self { catalog, inventory }
    }

    /// Builds both indexes from freshly loaded tables.
    #[instrument(level = "debug", skip_all)]
    pub fn from_tables(catalog: &Table, inventory: &Table, config: &LookupConfig) -> Self {
        Self {
            catalog: CatalogIndex::build(catalog, &config.catalog),
            inventory: InventoryIndex::build(inventory, &config.inventory),
        }
    }

    /// Resolves each token on its own, keeping order and duplicates.
    pub fn lookup(&self, tokens: &[PartNumber]) -> Vec<LookupResult> {
        let results: Vec<LookupResult> = tokens.iter().map(|token| self.resolve(token)).collect();
        debug!(results = results.len(), "lookup complete");
        results
    }

    fn resolve(&self, token: &str) -> LookupResult {
        let part_number = token.trim().to_string();

        let Some(entry) = self.catalog.get(&part_number) else {
            return LookupResult {
                part_number,
                found: false,
                description: None,
                price: None,
                quantity: None,
                status: StockStatus::NotFoundInCatalog,
            };
        };

        let quantity = self.inventory.get(&part_number);
        let status = quantity.map_or(StockStatus::NotFoundInInventory, StockStatus::for_quantity);

        LookupResult {
            part_number,
            found: true,
            description: Some(entry.description.clone()),
            price: Some(entry.price),
            quantity,
            status,
        }
    }
}
