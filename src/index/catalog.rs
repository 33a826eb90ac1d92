use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::config::CatalogLayout;
use crate::model::{CatalogEntry, Table};

/// Part number → price-list entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogIndex {
    entries: HashMap<String, CatalogEntry>,
}

impl CatalogIndex {
    /// Indexes every row with a non-blank part number.
    ///
    /// Prices are read from native numbers or currency-formatted text. A price
    /// that cannot be parsed becomes zero and the row is still indexed.
    #[instrument(level = "debug", skip_all, fields(rows = table.len()))]
    pub fn build(table: &Table, layout: &CatalogLayout) -> Self {
        let mut entries = HashMap::new();

        for row in 0..table.len() {
            let Some(part_number) = table.cell(row, layout.part_column).as_key() else {
                continue;
            };
            let price = table.cell(row, layout.price_column).decimal_or_zero();
            let description = table.cell(row, layout.description_column).display_text();

            entries.insert(
                part_number.clone(),
                CatalogEntry {
                    part_number,
                    description,
                    price,
                },
            );
        }

        debug!(entries = entries.len(), "catalog index built");
        Self { entries }
    }

    pub fn get(&self, part_number: &str) -> Option<&CatalogEntry> {
        self.entries.get(part_number)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<CatalogEntry> for CatalogIndex {
    fn from_iter<I: IntoIterator<Item = CatalogEntry>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|entry| (entry.part_number.clone(), entry))
                .collect(),
        }
    }
}
