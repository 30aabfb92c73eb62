use chrono::Local;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt as tfmt, EnvFilter};

use news_fetcher::cli::Cli;
use news_fetcher::config::Config;
use news_fetcher::errors::NewsResult;
use news_fetcher::services::{FetchOutcome, FetchService};
use news_fetcher::sources::NewsApiClient;
use news_fetcher::storage::FsContentStore;

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();
}

fn run() -> NewsResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env()?;
    let content_dir = cli.content_dir.clone().unwrap_or_else(|| config.content_dir.clone());
    debug!(content_dir = %content_dir.display(), dry_run = cli.dry_run, "Configuration loaded");

    let source = NewsApiClient::from_config(&config);
    let store = FsContentStore::new(content_dir);
    let service = FetchService::new(source, store, cli.query());

    let today = Local::now().date_naive();

    if cli.dry_run {
        return cmd_dry_run(&service, today);
    }

    match service.run(today)? {
        FetchOutcome::NoArticles => {
            println!("No articles found.");
        }
        FetchOutcome::Saved(paths) => {
            for path in &paths {
                println!("Saved article to {}", path.display());
            }
            println!("Saved {} articles.", paths.len());
        }
    }

    Ok(())
}

fn cmd_dry_run(
    service: &FetchService<NewsApiClient, FsContentStore>,
    today: chrono::NaiveDate,
) -> NewsResult<()> {
    let documents = service.fetch_documents(today)?;

    if documents.is_empty() {
        println!("No articles found.");
        return Ok(());
    }

    for document in &documents {
        println!("[DRY RUN] {}\n", document.file_name);
        println!("{}", document.body);
    }
    println!("Dry run complete. Would save {} articles.", documents.len());

    Ok(())
}
