use reqwest::blocking::Client;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::domain::{Endpoint, NewsQuery, NewsResponse};
use crate::errors::NewsResult;
use crate::sources::traits::NewsSource;

// NewsAPI rejects requests that carry no user agent.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub struct NewsApiClient {
    client: Client,
    api_url: Url,
    api_key: String,
}

impl NewsApiClient {
    pub fn new(api_url: Url, api_key: String) -> Self {
        Self {
            client: Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .unwrap_or_else(|_| Client::new()),
            api_url,
            api_key,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_url.clone(), config.api_key.clone())
    }

    fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!(
            "{}/{}",
            self.api_url.as_str().trim_end_matches('/'),
            endpoint.as_str()
        )
    }
}

impl NewsSource for NewsApiClient {
    fn fetch(&self, query: &NewsQuery) -> NewsResult<NewsResponse> {
        let url = self.endpoint_url(query.endpoint);
        debug!(%url, endpoint = %query.endpoint, "Requesting articles");

        let response = self
            .client
            .get(&url)
            .query(&query.params)
            .query(&[("apiKey", self.api_key.as_str())])
            .send()?;

        // Error envelopes arrive with 4xx/5xx codes, so the body is decoded regardless.
        let http_status = response.status();
        let body = response.text()?;
        debug!(status = %http_status, bytes = body.len(), "Received response");

        let parsed: NewsResponse = serde_json::from_str(&body)?;
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(base: &str) -> NewsApiClient {
        NewsApiClient::new(Url::parse(base).unwrap(), "key".to_string())
    }

    #[test]
    fn test_endpoint_url() {
        let client = client_for("https://newsapi.org/v2");

        assert_eq!(
            client.endpoint_url(Endpoint::Everything),
            "https://newsapi.org/v2/everything"
        );
        assert_eq!(
            client.endpoint_url(Endpoint::TopHeadlines),
            "https://newsapi.org/v2/top-headlines"
        );
    }

    #[test]
    fn test_endpoint_url_with_trailing_slash() {
        let client = client_for("http://127.0.0.1:9000/v2/");
        assert_eq!(
            client.endpoint_url(Endpoint::Everything),
            "http://127.0.0.1:9000/v2/everything"
        );
    }

    #[test]
    fn test_user_agent_names_the_crate() {
        assert!(USER_AGENT.starts_with("news-fetcher/"));
    }
}
