use serde::{Deserialize, Deserializer};

use crate::errors::{NewsError, NewsResult};

const STATUS_OK: &str = "ok";

/// Treat `null` like an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ArticleSource {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: ArticleSource,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub published_at: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl Article {
    pub fn new(title: String, source_name: String, url: String, published_at: String) -> Self {
        Self {
            title,
            source: ArticleSource { name: source_name },
            url,
            published_at,
            description: None,
            content: None,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_content(mut self, content: Option<String>) -> Self {
        self.content = content;
        self
    }

    /// Date portion of `published_at`: its first 10 characters
    pub fn published_date(&self) -> &str {
        match self.published_at.char_indices().nth(10) {
            Some((end, _)) => &self.published_at[..end],
            None => &self.published_at,
        }
    }
}

/// Envelope returned by every NewsAPI endpoint, for success and error alike
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponse {
    pub status: String,
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl NewsResponse {
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Check the provider status and hand back the article batch
    pub fn into_articles(self) -> NewsResult<Vec<Article>> {
        if !self.is_ok() {
            return Err(NewsError::Api {
                code: self.code.unwrap_or_else(|| self.status.clone()),
                message: self.message.unwrap_or_default(),
            });
        }

        Ok(self.articles)
    }
}
