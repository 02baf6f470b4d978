use clap::{Parser, Subcommand};
use packprice::grid::{self, GridSnapshot, RowAnnotation};
use packprice::logger;
use packprice::notation;
use packprice::pricing::{self, PricingConfig};

#[derive(Parser)]
#[command(name = "packprice")]
#[command(about = "Unit and markup pricing from pack-size notation", long_about = None)]
struct Cli {
    /// Log debug output, including parse diagnostics
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a pack-size notation
    Parse {
        /// Pack size (e.g., "12 x 1.5 LB")
        pack_size: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Price one row from its pack size and total price
    Price {
        /// Pack size (e.g., "12 x 1.5 LB")
        pack_size: String,

        /// Total case price (e.g., "$45.60")
        total_price: String,

        /// Print the full pricing as JSON
        #[arg(long)]
        json: bool,

        /// Pricing config file (TOML)
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Annotate every row of a grid snapshot
    Grid {
        /// Grid snapshot file with [[row]] tables
        #[arg(default_value = "data/sample_grid.toml")]
        path: String,

        /// Print annotated rows as JSON
        #[arg(long)]
        json: bool,

        /// Pricing config file (TOML)
        #[arg(short, long)]
        config: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let result = match cli.command {
        Commands::Parse { pack_size, json } => parse_pack_size(&pack_size, json),
        Commands::Price {
            pack_size,
            total_price,
            json,
            config,
        } => price(&pack_size, &total_price, json, config.as_deref()),
        Commands::Grid { path, json, config } => annotate_grid(&path, json, config.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&str>) -> Result<PricingConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let config = PricingConfig::load_from_file(path)?;
            tracing::debug!(path, "loaded pricing config");
            Ok(config)
        }
        None => Ok(PricingConfig::default()),
    }
}

fn parse_pack_size(pack_size: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let parsed = notation::parse_pack_size(pack_size)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
        return Ok(());
    }

    println!("Quantity: {}", parsed.quantity);
    println!("Measure:  {}", parsed.measure);
    println!("Unit:     {}", parsed.unit);
    if !parsed.diagnostics.is_empty() {
        println!("\nDiagnostics ({}):", parsed.diagnostics.len());
        for diagnostic in &parsed.diagnostics {
            println!("  - {}", diagnostic);
        }
    }

    Ok(())
}

fn price(
    pack_size: &str,
    total_price: &str,
    json: bool,
    config_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let result = pricing::price_row_with(&config, pack_size, total_price)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.summary());
    }

    Ok(())
}

fn annotate_grid(
    path: &str,
    json: bool,
    config_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let snapshot = GridSnapshot::load_from_file(path)?;
    tracing::info!(rows = snapshot.rows.len(), path, "annotating grid");

    let annotations = grid::annotate_rows_with(&config, &snapshot.rows);

    if json {
        let rows: Vec<_> = annotations
            .iter()
            .map(|outcome| match outcome {
                RowAnnotation::Annotated(a) => serde_json::json!({
                    "index": a.index,
                    "summary": a.summary,
                    "pricing": a.pricing,
                }),
                RowAnnotation::Skipped { index, error } => serde_json::json!({
                    "index": index,
                    "error": error.to_string(),
                }),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for (row, outcome) in snapshot.rows.iter().zip(&annotations) {
        let label = row
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(&row.pack_size);
        match outcome {
            RowAnnotation::Annotated(a) => {
                println!("{}", label);
                println!("  {}", a.summary);
            }
            RowAnnotation::Skipped { index, error } => {
                eprintln!("Row {} ({}) skipped: {}", index, label, error);
            }
        }
    }

    let skipped = annotations
        .iter()
        .filter(|a| a.annotation().is_none())
        .count();
    println!(
        "\n{} of {} rows annotated",
        annotations.len() - skipped,
        annotations.len()
    );

    Ok(())
}
