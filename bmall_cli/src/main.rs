mod commands;
mod datetime;
mod output;

use anyhow::Result;
use bmall_api::Client;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "bmall")]
#[command(about = "Browse the bmall catalog: brands, SKUs, and live listings")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API base URL. Overrides the BMALL_API_URL environment variable.
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List brands with listing counts
    Brands,
    /// List SKUs with price ranges
    Skus(commands::skus::SkusArgs),
    /// List live listings for a SKU
    Items(commands::items::ItemsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bmall=info".parse().unwrap())
                .add_directive("bmall_api=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let base_url = cli
        .api_url
        .or_else(|| std::env::var("BMALL_API_URL").ok())
        .unwrap_or_else(|| "http://localhost:8000".to_string());
    let client = Client::with_base_url(&base_url)?;

    match &cli.command {
        Commands::Brands => commands::brands::run(&client, &format).await?,
        Commands::Skus(args) => commands::skus::run(args, &client, &format).await?,
        Commands::Items(args) => commands::items::run(args, &client, &format).await?,
    }

    Ok(())
}
