use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Part number after normalization: trimmed, otherwise untouched.
pub type PartNumber = String;

/// Quantity at or above which stock counts as healthy.
pub const HEALTHY_STOCK_THRESHOLD: Decimal = Decimal::TEN;

/// A single spreadsheet cell as seen by the indexes.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    /// Any numeric cell, including dates stored as serial numbers.
    Number(f64),
    /// Free text.
    Text(String),
    /// Blank, missing, or error cell.
    #[default]
    Empty,
}

impl Cell {
    /// Creates a text cell.
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// Normalizes the cell into a lookup key.
    ///
    /// Text is trimmed and whole numbers lose their fractional part, so a part
    /// number typed as `123456` and one stored as the float `123456.0` index
    /// identically. Blank cells yield `None`.
    pub fn as_key(&self) -> Option<PartNumber> {
        match self {
            Cell::Text(value) => {
                let trimmed = value.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Cell::Number(value) if !value.is_finite() => None,
            Cell::Number(value) if value.fract() == 0.0 && value.abs() < 1e15 => {
                Some(format!("{}", *value as i64))
            }
            Cell::Number(value) => Some(value.to_string()),
            Cell::Empty => None,
        }
    }

    /// Converts the cell into a decimal, accepting native numbers as well as
    /// currency-formatted text such as `"$1,234.56"`.
    pub fn to_decimal(&self) -> Option<Decimal> {
        match self {
            Cell::Number(value) => Decimal::from_f64(*value),
            Cell::Text(value) => parse_price(value),
            Cell::Empty => None,
        }
    }

    /// Same as [`Cell::to_decimal`] but degrades to zero. Both indexes read
    /// their numeric columns through this.
    pub fn decimal_or_zero(&self) -> Decimal {
        self.to_decimal().unwrap_or_else(|| {
            debug!(cell = ?self, "unparsable numeric cell, using 0");
            Decimal::ZERO
        })
    }

    /// Returns the text content, if this is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Renders the cell for display. Blank cells render as an empty string.
    pub fn display_text(&self) -> String {
        match self {
            Cell::Text(value) => value.trim().to_string(),
            Cell::Number(_) => self.as_key().unwrap_or_default(),
            Cell::Empty => String::new(),
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Number(value as f64)
    }
}

/// Parses a decimal from text, ignoring surrounding whitespace, `$` signs and
/// thousands separators. Scientific notation is accepted.
pub fn parse_price(value: &str) -> Option<Decimal> {
    let cleaned: String = value
        .trim()
        .chars()
        .filter(|ch| *ch != '$' && *ch != ',')
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(cleaned)
        .or_else(|_| Decimal::from_scientific(cleaned))
        .ok()
}

/// Row-major table with random access by index. Rows may be ragged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Wraps already-loaded rows.
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the cell at the given position, or [`Cell::Empty`] when the
    /// position lies outside the row.
    pub fn cell(&self, row: usize, column: usize) -> &Cell {
        const EMPTY: &Cell = &Cell::Empty;
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .unwrap_or(EMPTY)
    }
}

/// Price-list record for one part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub part_number: PartNumber,
    pub description: String,
    pub price: Decimal,
}

/// Coarse availability classification for a looked-up part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    HealthyStock,
    LowStock,
    OutOfStock,
    NotFoundInInventory,
    NotFoundInCatalog,
}

impl StockStatus {
    /// Classifies an on-hand quantity.
    pub fn for_quantity(quantity: Decimal) -> Self {
        if quantity >= HEALTHY_STOCK_THRESHOLD {
            StockStatus::HealthyStock
        } else if quantity > Decimal::ZERO {
            StockStatus::LowStock
        } else {
            StockStatus::OutOfStock
        }
    }

    /// Text shown in the availability column of the report.
    pub fn label(self) -> &'static str {
        match self {
            StockStatus::HealthyStock => "Healthy stock",
            StockStatus::LowStock => "Low stock",
            StockStatus::OutOfStock => "Out of stock",
            StockStatus::NotFoundInInventory | StockStatus::NotFoundInCatalog => "N/A",
        }
    }
}

/// Outcome of resolving one extracted token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupResult {
    pub part_number: PartNumber,
    /// Whether the part exists in the price catalog.
    pub found: bool,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub quantity: Option<Decimal>,
    pub status: StockStatus,
}
