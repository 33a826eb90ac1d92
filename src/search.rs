use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::config::LookupConfig;
use crate::error::{LookupError, Result};
use crate::extract::extract_part_numbers;
use crate::io::discovery::{SourceInfo, find_latest_workbook};
use crate::io::excel_read;
use crate::lookup::{LookupContext, render_report, render_stock_summary};
use crate::model::{LookupResult, PartNumber, Table};

/// Results of one search together with both rendered views.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    pub results: Vec<LookupResult>,
    pub report: String,
    pub stock_summary: String,
}

impl SearchOutcome {
    /// Renders both views from the same results so they cannot disagree.
    pub fn from_results(results: Vec<LookupResult>) -> Self {
        let report = render_report(&results);
        let stock_summary = render_stock_summary(&results);
        Self {
            results,
            report,
            stock_summary,
        }
    }
}

/// Runs a search against tables the caller has already loaded.
///
/// Fails with [`LookupError::EmptyInput`] before either table is looked at
/// when the text holds no part numbers, and with
/// [`LookupError::MissingSourceData`] when a table is absent or has no rows.
/// No results are produced in either case.
#[instrument(level = "info", skip_all)]
pub fn search_tables(
    text: &str,
    catalog: Option<&Table>,
    inventory: Option<&Table>,
    config: &LookupConfig,
) -> Result<SearchOutcome> {
    let tokens = require_tokens(text)?;
    search_tokens(&tokens, catalog, inventory, config)
}

fn require_tokens(text: &str) -> Result<Vec<PartNumber>> {
    let tokens = extract_part_numbers(text);
    if tokens.is_empty() {
        return Err(LookupError::EmptyInput);
    }
    info!(token_count = tokens.len(), "extracted part numbers");
    Ok(tokens)
}

fn search_tokens(
    tokens: &[PartNumber],
    catalog: Option<&Table>,
    inventory: Option<&Table>,
    config: &LookupConfig,
) -> Result<SearchOutcome> {
    let catalog = require_table(catalog, "price list")?;
    let inventory = require_table(inventory, "inventory")?;

    let context = LookupContext::from_tables(catalog, inventory, config);
    info!(
        catalog_entries = context.catalog.len(),
        inventory_entries = context.inventory.len(),
        "indexes built"
    );

    Ok(SearchOutcome::from_results(context.lookup(tokens)))
}

fn require_table<'a>(table: Option<&'a Table>, name: &str) -> Result<&'a Table> {
    match table {
        Some(table) if !table.is_empty() => Ok(table),
        Some(_) => Err(LookupError::MissingSourceData(format!(
            "{name} table has no data rows"
        ))),
        None => Err(LookupError::MissingSourceData(format!(
            "{name} table was not loaded"
        ))),
    }
}

/// Where the price list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// A specific workbook.
    File(PathBuf),
    /// The newest workbook in a directory matching the configured prefix.
    Latest(PathBuf),
}

/// Workbook-backed search result with the inventory file's freshness.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchReport {
    #[serde(flatten)]
    pub outcome: SearchOutcome,
    pub catalog_path: PathBuf,
    pub inventory_path: PathBuf,
    pub inventory_modified: String,
    pub stale_warning: Option<String>,
}

impl SearchReport {
    /// Report, stock summary and inventory footer as plain text.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.outcome.report);
        out.push('\n');
        out.push_str(&self.outcome.stock_summary);
        out.push('\n');
        out.push_str(&format!(
            "Inventory Last Modified: {}\n",
            self.inventory_modified
        ));
        if let Some(warning) = &self.stale_warning {
            out.push_str(&format!("Warning: {warning}\n"));
        }
        out
    }
}

/// Locates and loads both workbooks, then resolves the part numbers the same
/// way [`search_tables`] does.
///
/// The input text is validated before any file is touched.
#[instrument(
    level = "info",
    skip_all,
    fields(inventory = %inventory.display())
)]
pub fn search_workbooks(
    text: &str,
    catalog: &CatalogSource,
    inventory: &Path,
    config: &LookupConfig,
) -> Result<SearchReport> {
    let tokens = require_tokens(text)?;

    let catalog_path = match catalog {
        CatalogSource::File(path) => path.clone(),
        CatalogSource::Latest(dir) => find_latest_workbook(dir, &config.catalog_prefix)?,
    };
    debug!(catalog = %catalog_path.display(), "price list selected");

    let inventory_info = SourceInfo::read(inventory)?;
    let stale_warning = inventory_info
        .is_stale(SystemTime::now(), config.stale_after_days)
        .then(|| {
            format!(
                "the inventory file is more than {} days old; refresh it from the inventory dashboard",
                config.stale_after_days
            )
        });
    if let Some(message) = &stale_warning {
        warn!(modified = %inventory_info.modified_label(), "{message}");
    }

    let catalog_table = excel_read::read_table(&catalog_path, config.header_rows)?;
    let inventory_table = excel_read::read_table(inventory, config.header_rows)?;

    let outcome = search_tokens(&tokens, Some(&catalog_table), Some(&inventory_table), config)?;

    Ok(SearchReport {
        outcome,
        catalog_path,
        inventory_path: inventory.to_path_buf(),
        inventory_modified: inventory_info.modified_label(),
        stale_warning,
    })
}
