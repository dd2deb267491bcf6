//! Command-line front end: load a feed once, or keep watching it.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use url::Url;

use feedloader::api::{ClientConfig, RemoteFeedLoader, ReqwestHttpClient};
use feedloader::feed::{load_once, FeedEntry};
use feedloader::poll::{self, PollMsg};

#[derive(Parser)]
#[command(name = "feedloader")]
#[command(about = "Fetch a JSON image feed and print its entries", long_about = None)]
struct Cli {
    /// Feed endpoint
    #[arg(env = "FEED_URL")]
    url: Url,

    /// Request timeout in seconds
    #[arg(long, env = "FEED_TIMEOUT", default_value = "30")]
    timeout: u64,

    /// User agent sent with each request
    #[arg(long)]
    user_agent: Option<String>,

    /// Re-load every N seconds instead of exiting after one load
    #[arg(long)]
    interval: Option<u64>,

    /// Print entries as JSON lines
    #[arg(long)]
    json: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig {
            timeout: Duration::from_secs(self.timeout),
            ..ClientConfig::default()
        };
        if let Some(user_agent) = &self.user_agent {
            config.user_agent = user_agent.clone();
        }
        config
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("feedloader={default_level}")));

    // Logs go to stderr so stdout carries only feed output.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_entries(entries: &[FeedEntry], json: bool) -> Result<()> {
    for entry in entries {
        if json {
            println!("{}", serde_json::to_string(entry)?);
        } else {
            println!(
                "{}  {}  {}  {}",
                entry.id(),
                entry.image(),
                entry.location().unwrap_or("-"),
                entry.description().unwrap_or(""),
            );
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let client = Arc::new(ReqwestHttpClient::from_config(&cli.client_config())?);
    let loader = Arc::new(RemoteFeedLoader::new(cli.url.clone(), client));

    let Some(interval) = cli.interval else {
        let entries = load_once(loader.as_ref())
            .await
            .ok_or_else(|| anyhow!("load finished without a result"))??;
        tracing::info!(count = entries.len(), url = %loader.url(), "feed loaded");
        return print_entries(&entries, cli.json);
    };

    let mut rx = poll::spawn(loader, Duration::from_secs(interval.max(1)));
    while let Some(msg) = rx.recv().await {
        match msg {
            PollMsg::Entries(entries) => {
                tracing::info!(count = entries.len(), "fetched entries");
                print_entries(&entries, cli.json)?;
            }
            PollMsg::Error(e) => tracing::error!(error = %e, "load failed"),
        }
    }

    Ok(())
}
