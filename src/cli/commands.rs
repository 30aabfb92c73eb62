use std::path::PathBuf;

use clap::Parser;

use crate::domain::NewsQuery;

#[derive(Parser, Debug)]
#[command(name = "fetch-news")]
#[command(about = "Fetch the latest news from NewsAPI and save each article as markdown")]
#[command(version)]
pub struct Cli {
    /// Directory to write markdown files into (overrides NEWS_CONTENT_DIR)
    #[arg(long, value_name = "PATH")]
    pub content_dir: Option<PathBuf>,

    /// Fetch Mexican top headlines instead of searching all articles
    #[arg(long)]
    pub headlines: bool,

    /// Dry run - print the rendered articles without writing any files
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    pub fn query(&self) -> NewsQuery {
        if self.headlines {
            NewsQuery::top_headlines()
        } else {
            NewsQuery::everything()
        }
    }
}
