use analytics::{AnalyticsEngine, OrderAnalyzer};
use anyhow::Context;
use clap::{Parser, Subcommand};
use configuration::OutputFormat;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod render;

/// The main entry point for the orderscope application.
fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; it only supplies optional overrides.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = configuration::load_config(cli.config.as_deref(), cli.orders.as_deref())
        .context("Failed to load configuration")?;
    init_logging(&config.logging.level)?;
    tracing::debug!("Configuration loaded: {:?}", config);

    let orders = loader::load_orders_from_path(&config.data.orders_path).with_context(|| {
        format!(
            "Failed to load orders from {}",
            config.data.orders_path.display()
        )
    })?;
    let engine = AnalyticsEngine::new(orders);
    let format = cli.format.unwrap_or(config.report.format);

    // Execute the appropriate command
    match cli.command {
        Commands::Report(args) => {
            let top = args.top.unwrap_or(config.report.top_products);
            render::report(&engine.summarize(top), format)
        }
        Commands::Customer(args) => {
            let orders = engine.orders_by_customer(&args.name)?;
            render::orders(&orders, format)
        }
        Commands::Top(args) => {
            let products = engine.top_n_most_ordered_products(args.n);
            render::products(&products, format)
        }
    }
}

/// Installs the global `tracing` subscriber. `RUST_LOG` wins over the configured level.
fn init_logging(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Analytical queries over a retail order export.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./config.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Order export to analyze; overrides `data.orders_path`.
    #[arg(long, global = true)]
    orders: Option<PathBuf>,

    /// Output format; overrides `report.format`.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every query and print the combined report.
    Report(ReportArgs),
    /// List the orders placed by one customer.
    Customer(CustomerArgs),
    /// List the most frequently ordered products.
    Top(TopArgs),
}

#[derive(Parser)]
struct ReportArgs {
    /// How many products to list; overrides `report.top_products`.
    #[arg(long)]
    top: Option<usize>,
}

#[derive(Parser)]
struct CustomerArgs {
    /// Customer name, matched exactly.
    name: String,
}

#[derive(Parser)]
struct TopArgs {
    /// Number of products to list.
    n: usize,
}
