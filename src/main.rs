use asset_sniffer::{
    extract_assets_from_text_with_custom_config, Asset, AssetExtractorConfig,
    DEFAULT_ASSET_EXTRACTOR_CONFIG, DEFAULT_MAX_ASSETS,
};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use log::{error, info};
use std::io::{self, Read};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Reads free-form text from stdin and prints the financial assets it mentions.
#[derive(Parser, Debug)]
#[command(name = "asset-sniffer-cli", version, about)]
struct Cli {
    /// Maximum number of assets to print
    #[arg(long, default_value_t = DEFAULT_MAX_ASSETS)]
    max_assets: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Date (YYYY-MM-DD) used to fill in missing option expiry years; defaults to today
    #[arg(long)]
    reference_date: Option<NaiveDate>,

    /// Roll option expiries without a year over to next year once they have passed
    #[arg(long)]
    roll_past_expiries: bool,
}

fn format_text_line(asset: &Asset) -> String {
    format!(
        "{}\t{}\t{}",
        asset.kind.name(),
        asset.display_symbol,
        asset.matched_text
    )
}

fn main() {
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let cli = Cli::parse();

    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        error!("Failed to read from stdin: {}", e);
        std::process::exit(1);
    }

    let asset_extractor_config = AssetExtractorConfig {
        reference_date: cli.reference_date,
        roll_past_expiries: cli.roll_past_expiries,
        ..DEFAULT_ASSET_EXTRACTOR_CONFIG
    };

    let mut assets =
        match extract_assets_from_text_with_custom_config(&input, &asset_extractor_config) {
            Ok(assets) => assets,
            Err(e) => {
                error!("Error extracting assets: {}", e);
                std::process::exit(1);
            }
        };

    if assets.len() > cli.max_assets {
        info!(
            "Truncating {} asset(s) to the first {}",
            assets.len(),
            cli.max_assets
        );
        eprintln!(
            "Showing {} of {} assets",
            cli.max_assets,
            assets.len()
        );
        assets.truncate(cli.max_assets);
    }

    for asset in &assets {
        match cli.format {
            OutputFormat::Text => println!("{}", format_text_line(asset)),
            OutputFormat::Json => match serde_json::to_string(asset) {
                Ok(line) => println!("{}", line),
                Err(e) => {
                    error!("Failed to serialize asset {}: {}", asset.key(), e);
                    std::process::exit(1);
                }
            },
        }
    }
}
