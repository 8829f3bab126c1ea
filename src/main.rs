use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use asset_colors::models::{token_key, AppConfig};
use asset_colors::services::{
    CacheManager, CacheStore, CatalogSource, ColorExtractor, IconStore, RegistryClient,
};

#[derive(Parser)]
#[command(name = "asset-colors")]
#[command(about = "Extract brand colors from chain and token icons")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the catalog and fill in missing colors in the cache
    Extract {
        /// YAML config file (defaults to $CONFIG_FILE)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Save a copy of each sampled icon with the ring painted red
        #[arg(long)]
        highlight: bool,
    },
    /// Print the dominant ring color of a single PNG
    Sample {
        /// PNG file to sample
        file: PathBuf,

        /// Also write the ring highlight image here
        #[arg(long)]
        highlight: Option<PathBuf>,
    },
    /// Print the cache key of a token
    Key {
        chain_id: String,
        address: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "asset_colors=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Commands::Extract { config, highlight } => run_extract(config, highlight).await,
        Commands::Sample { file, highlight } => run_sample(&file, highlight.as_deref()),
        Commands::Key { chain_id, address } => {
            println!("{}", token_key(&chain_id, &address));
            Ok(())
        }
    }
}

/// One incremental run over the registry catalog
async fn run_extract(config_path: Option<PathBuf>, highlight: bool) -> anyhow::Result<()> {
    let config_path = config_path.or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from));
    let config = AppConfig::load(config_path.as_deref()).with_env_overrides();

    let client = reqwest::Client::builder()
        .timeout(config.http_timeout())
        .build()?;

    tracing::info!("Extracting asset colors");

    let catalog = match config.registry_url.as_deref() {
        Some(url) => {
            RegistryClient::new(client.clone(), url)
                .integrator_id(config.integrator_id.clone())
                .retries(config.catalog_retries)
                .backoff(std::time::Duration::from_millis(config.catalog_backoff_ms))
                .fetch()
                .await
        }
        None => {
            tracing::error!("No registry URL configured (set registry_url or REGISTRY_URL)");
            Default::default()
        }
    };

    let highlight_dir = (highlight || config.highlight).then(|| config.highlight_dir.clone());
    let extractor = ColorExtractor::new(IconStore::new(client, &config.token_icon_dir))
        .highlight_dir(highlight_dir);
    let store = CacheStore::new(&config.cache_file, &config.ledger_file);
    let manager = CacheManager::new(extractor, store).token_delay(config.token_delay());

    let summary = manager.run(&catalog).await?;
    println!(
        "Chains: {} new, {} failed, {} cached. Tokens: {} new, {} failed, {} cached.",
        summary.chains.resolved,
        summary.chains.failed,
        summary.chains.skipped,
        summary.tokens.resolved,
        summary.tokens.failed,
        summary.tokens.skipped,
    );

    Ok(())
}

/// Sample a single file, no cache involved
fn run_sample(file: &std::path::Path, highlight: Option<&std::path::Path>) -> anyhow::Result<()> {
    use asset_colors::imaging::{decode_png, encode_png};
    use ring_sampler::{RingSampler, TextColor};

    let bytes = std::fs::read(file)?;
    let image = decode_png(&bytes)?;
    let sampler = RingSampler::new();
    let sample = sampler.sample(&image)?;

    if let Some(out) = highlight {
        std::fs::write(out, encode_png(&sampler.highlight(&image))?)?;
        println!("Highlighted image saved to {}", out.display());
    }

    println!(
        "{} (text {}, {} colors on ring)",
        sample.dominant,
        TextColor::for_background(sample.dominant),
        sample.histogram.len()
    );
    Ok(())
}
