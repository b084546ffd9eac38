mod commands;
mod output;
mod validation;

use anyhow::Result;
use clap::{Parser, Subcommand};
use stockratings_api::{Client, Config};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "stockratings")]
#[command(about = "Browse analyst stock ratings")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API base URL (overrides the API_URL environment variable)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List analyst ratings
    Ratings(commands::ratings::RatingsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("stockratings=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let config = match cli.base_url.as_deref() {
        Some(base_url) => Config::new(base_url),
        None => Config::from_env()?,
    };
    let client = Client::new(config)?;

    match &cli.command {
        Commands::Ratings(args) => commands::ratings::run(args, &client, &format).await?,
    }

    Ok(())
}
