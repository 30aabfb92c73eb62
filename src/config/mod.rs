use std::path::PathBuf;

use url::Url;

use crate::errors::{NewsError, NewsResult};

pub const DEFAULT_API_URL: &str = "https://newsapi.org/v2";
pub const DEFAULT_CONTENT_DIR: &str = "content";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_url: Url,
    pub content_dir: PathBuf,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> NewsResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> NewsResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("NEWSAPI_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| NewsError::MissingEnvVar("NEWSAPI_KEY".to_string()))?;

        let raw_url = lookup("NEWSAPI_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url =
            Url::parse(&raw_url).map_err(|e| NewsError::InvalidUrl(format!("{}: {}", raw_url, e)))?;

        let content_dir = lookup("NEWS_CONTENT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTENT_DIR));

        Ok(Self {
            api_key,
            api_url,
            content_dir,
        })
    }
}
