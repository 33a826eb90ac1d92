use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use part_lookup::config::LookupConfig;
use part_lookup::search::{self, CatalogSource};
use part_lookup::{LookupError, Result};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = init_tracing().and_then(|()| run(cli)) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| LookupError::Logging(err.to_string()))
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Search(args) => execute_search(args),
    }
}

fn execute_search(args: SearchArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => LookupConfig::from_path(path)?,
        None => LookupConfig::default(),
    };
    if let Some(prefix) = &args.catalog_prefix {
        config.catalog_prefix = prefix.clone();
    }
    if let Some(days) = args.stale_after_days {
        config.stale_after_days = days;
    }
    config.validate()?;

    let text = read_parts_text(&args)?;
    let catalog = args.catalog_source()?;
    let report = search::search_workbooks(&text, &catalog, &args.inventory, &config)?;

    match args.format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn read_parts_text(args: &SearchArgs) -> Result<String> {
    if let Some(parts) = &args.parts {
        return Ok(parts.clone());
    }
    if let Some(path) = &args.parts_file {
        if !path.exists() {
            return Err(LookupError::MissingInput(path.clone()));
        }
        return Ok(std::fs::read_to_string(path)?);
    }
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Look up part prices and stock levels in the price list and inventory workbooks."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve part numbers found in the given text.
    Search(SearchArgs),
}

#[derive(clap::Args)]
struct SearchArgs {
    /// Text containing part numbers. Read from stdin when neither this nor
    /// --parts-file is given.
    #[arg(long, conflicts_with = "parts_file")]
    parts: Option<String>,

    /// File containing part numbers.
    #[arg(long)]
    parts_file: Option<PathBuf>,

    /// Price list workbook.
    #[arg(long, conflicts_with = "catalog_dir")]
    catalog: Option<PathBuf>,

    /// Directory searched for the newest price list workbook.
    #[arg(long)]
    catalog_dir: Option<PathBuf>,

    /// File name prefix used with --catalog-dir.
    #[arg(long)]
    catalog_prefix: Option<String>,

    /// Inventory workbook.
    #[arg(long)]
    inventory: PathBuf,

    /// Optional JSON file overriding column positions and thresholds.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Days after which the inventory file is reported as stale.
    #[arg(long)]
    stale_after_days: Option<u64>,

    /// Output representation.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl SearchArgs {
    fn catalog_source(&self) -> Result<CatalogSource> {
        match (&self.catalog, &self.catalog_dir) {
            (Some(path), _) => Ok(CatalogSource::File(path.clone())),
            (None, Some(dir)) => Ok(CatalogSource::Latest(dir.clone())),
            (None, None) => Err(LookupError::MissingSourceData(
                "pass --catalog or --catalog-dir to locate the price list".into(),
            )),
        }
    }
}
