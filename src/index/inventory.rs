use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::config::InventoryLayout;
use crate::model::Table;

/// Part number → on-hand quantity, recovered from a grouped inventory report.
///
/// The report has no explicit key/value rows. A row with a part number opens
/// a group for that part, and the group is closed by the first later row
/// whose sentinel column contains the marker text (`"Item Total"` by
/// default). The quantity column of that closing row holds the part's stock.
/// Any number of unrelated rows may sit between the two.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryIndex {
    levels: HashMap<String, Decimal>,
}

impl InventoryIndex {
    /// Scans the table once, keeping every opened-but-unclosed group pending.
    ///
    /// Each opening row resolves to the first sentinel row strictly after it,
    /// so groups that are open at the same time all receive the quantity of
    /// the same closing row. A row that both opens a group and carries the
    /// sentinel closes the groups opened before it, never its own. Groups still
    /// open when the table ends produce no entry.
    #[instrument(level = "debug", skip_all, fields(rows = table.len()))]
    pub fn build(table: &Table, layout: &InventoryLayout) -> Self {
        let mut levels = HashMap::new();
        let mut pending: Vec<String> = Vec::new();

        for row in 0..table.len() {
            if is_sentinel_row(table, row, layout) && !pending.is_empty() {
                let quantity = table.cell(row, layout.quantity_column).decimal_or_zero();
                for part_number in pending.drain(..) {
                    levels.insert(part_number, quantity);
                }
            }

            if let Some(part_number) = table.cell(row, layout.part_column).as_key() {
                pending.push(part_number);
            }
        }

        if !pending.is_empty() {
            debug!(unclosed = pending.len(), "groups without a closing row were skipped");
        }
        debug!(entries = levels.len(), "inventory index built");
        Self { levels }
    }

    pub fn get(&self, part_number: &str) -> Option<Decimal> {
        self.levels.get(part_number).copied()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl FromIterator<(String, Decimal)> for InventoryIndex {
    fn from_iter<I: IntoIterator<Item = (String, Decimal)>>(iter: I) -> Self {
        Self {
            levels: iter.into_iter().collect(),
        }
    }
}

fn is_sentinel_row(table: &Table, row: usize, layout: &InventoryLayout) -> bool {
    table
        .cell(row, layout.sentinel_column)
        .as_text()
        .is_some_and(|text| text.contains(layout.sentinel.as_str()))
}
