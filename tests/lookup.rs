use part_lookup::LookupError;
use part_lookup::config::LookupConfig;
use part_lookup::index::{CatalogIndex, InventoryIndex};
use part_lookup::lookup::{LookupContext, format_price, render_report, render_stock_summary};
use part_lookup::model::{CatalogEntry, Cell, StockStatus, Table, parse_price};
use part_lookup::search::search_tables;
use rust_decimal::Decimal;

fn dec(value: &str) -> Decimal {
    value.parse().expect("decimal literal")
}

fn entry(part: &str, description: &str, price: &str) -> CatalogEntry {
    CatalogEntry {
        part_number: part.to_string(),
        description: description.to_string(),
        price: dec(price),
    }
}

fn context() -> LookupContext {
    let catalog: CatalogIndex = [
        entry("100000", "Healthy part", "12.50"),
        entry("200000", "Boundary part", "3"),
        entry("300000", "Low part", "1999.999"),
        entry("400000", "Empty bin", "0"),
        entry("500000", "Unstocked part", "45"),
        entry("1234567890", "Long part", "1000000"),
    ]
    .into_iter()
    .collect();
    let inventory: InventoryIndex = [
        ("100000".to_string(), dec("25")),
        ("200000".to_string(), dec("10")),
        ("300000".to_string(), dec("9.999")),
        ("400000".to_string(), dec("0")),
        ("900000".to_string(), dec("3")),
        ("1234567890".to_string(), dec("-2")),
    ]
    .into_iter()
    .collect();
    LookupContext::new(catalog, inventory)
}

fn tokens(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|part| part.to_string()).collect()
}

#[test]
fn classifies_stock_at_the_tier_boundaries() {
    let results = context().lookup(&tokens(&["200000", "300000", "400000", "1234567890"]));
    let statuses: Vec<StockStatus> = results.iter().map(|result| result.status).collect();

    assert_eq!(
        statuses,
        vec![
            StockStatus::HealthyStock,
            StockStatus::LowStock,
            StockStatus::OutOfStock,
            StockStatus::OutOfStock,
        ]
    );
}

#[test]
fn catalog_hit_without_inventory_keeps_the_price() {
    let results = context().lookup(&tokens(&["500000"]));
    let result = &results[0];

    assert!(result.found);
    assert_eq!(result.status, StockStatus::NotFoundInInventory);
    assert_eq!(result.price, Some(dec("45")));
    assert_eq!(result.description.as_deref(), Some("Unstocked part"));
    assert_eq!(result.quantity, None);
}

#[test]
fn catalog_miss_is_reported_even_when_inventory_has_the_part() {
    let results = context().lookup(&tokens(&["900000"]));
    let result = &results[0];

    assert!(!result.found);
    assert_eq!(result.status, StockStatus::NotFoundInCatalog);
    assert_eq!(result.description, None);
    assert_eq!(result.price, None);
    assert_eq!(result.quantity, None);
}

#[test]
fn duplicate_tokens_resolve_independently_in_order() {
    let results = context().lookup(&tokens(&["100000", "900000", "100000"]));

    assert_eq!(results.len(), 3);
    assert_eq!(results[0], results[2]);
    assert_eq!(results[0].status, StockStatus::HealthyStock);
    assert_eq!(results[1].part_number, "900000");
}

#[test]
fn report_uses_fixed_width_columns() {
    let results = context().lookup(&tokens(&["100000", "500000", "900000"]));
    let report = render_report(&results);
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(
        lines[0],
        format!("{:<15} {:<30} {:<15} {:<15}", "Part #", "Description", "Cost", "Availability")
    );
    assert_eq!(
        lines[1],
        format!("{:<15} {:<30} {:<15} {:<15}", "100000", "Healthy part", "$12.50", "Healthy stock")
    );
    assert_eq!(
        lines[2],
        format!("{:<15} {:<30} {:<15} {:<15}", "500000", "Unstocked part", "$45.00", "N/A")
    );
    assert_eq!(
        lines[3],
        format!("{:<15} {:<30} {:<15} {:<15}", "900000", "Not found in price list", "N/A", "N/A")
    );
    assert_eq!(lines.len(), 4);
}

#[test]
fn stock_summary_agrees_with_the_report() {
    let results = context().lookup(&tokens(&["100000", "300000", "500000", "900000"]));
    let summary = render_stock_summary(&results);

    assert_eq!(
        summary,
        "Stock Levels:\n100000: 25\n300000: 9.999\n500000: Not Found\n900000: Not Found\n"
    );
    assert_eq!(summary.lines().count() - 1, render_report(&results).lines().count() - 1);
}

#[test]
fn formats_prices_with_grouping_and_cents() {
    assert_eq!(format_price(dec("0")), "$0.00");
    assert_eq!(format_price(dec("7.5")), "$7.50");
    assert_eq!(format_price(dec("999.99")), "$999.99");
    assert_eq!(format_price(dec("1234.56")), "$1,234.56");
    assert_eq!(format_price(dec("1000000")), "$1,000,000.00");
    assert_eq!(format_price(dec("1999.999")), "$2,000.00");
    assert_eq!(format_price(dec("-12.3")), "-$12.30");
}

#[test]
fn formatted_prices_parse_back_to_the_same_cents() {
    for literal in ["0", "0.01", "5.5", "12.345", "999.999", "1234.56", "98765432.1"] {
        let price = dec(literal);
        let reparsed = parse_price(&format_price(price)).expect("formatted price parses");
        assert_eq!(reparsed, price.round_dp(2), "round trip of {literal}");
    }
}

#[test]
fn blank_input_is_rejected_before_tables_are_consulted() {
    let config = LookupConfig::default();
    for text in ["", "   \n\t", "no parts here 12345"] {
        let error = search_tables(text, None, None, &config).expect_err("empty input rejected");
        assert!(matches!(error, LookupError::EmptyInput), "unexpected {error:?}");
    }
}

#[test]
fn missing_or_empty_tables_abort_the_search() {
    let config = LookupConfig::default();
    let populated = Table::new(vec![vec![Cell::Empty, Cell::Empty, Cell::text("123456")]]);

    let error = search_tables("123456", None, Some(&populated), &config).expect_err("no catalog");
    assert!(matches!(error, LookupError::MissingSourceData(_)));

    let empty = Table::default();
    let error =
        search_tables("123456", Some(&populated), Some(&empty), &config).expect_err("no rows");
    assert!(matches!(error, LookupError::MissingSourceData(_)));
}

#[test]
fn search_tables_runs_the_whole_pipeline() {
    let config = LookupConfig::default();
    let catalog = Table::new(vec![vec![
        Cell::Empty,
        Cell::Empty,
        Cell::text("111111"),
        Cell::Empty,
        Cell::text("Hinge"),
        Cell::text("$2,500.00"),
    ]]);
    let mut opening = vec![Cell::Empty; 11];
    opening[2] = Cell::text("111111");
    let mut closing = vec![Cell::Empty; 11];
    closing[3] = Cell::text("Item Total");
    closing[10] = Cell::from(3.0);
    let inventory = Table::new(vec![opening, closing]);

    let outcome = search_tables("111111 111111 222222", Some(&catalog), Some(&inventory), &config)
        .expect("search succeeds");

    assert_eq!(outcome.results.len(), 3);
    assert_eq!(outcome.results[0].status, StockStatus::LowStock);
    assert_eq!(outcome.results[0].price, Some(dec("2500")));
    assert_eq!(outcome.results[2].status, StockStatus::NotFoundInCatalog);
    assert!(outcome.report.contains("$2,500.00"));
    assert_eq!(
        outcome.stock_summary,
        "Stock Levels:\n111111: 3\n111111: 3\n222222: Not Found\n"
    );
}
