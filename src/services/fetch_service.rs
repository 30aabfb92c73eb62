use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::domain::{NewsDocument, NewsQuery};
use crate::errors::NewsResult;
use crate::sources::NewsSource;
use crate::storage::ContentStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The provider answered "ok" with an empty batch
    NoArticles,
    /// Paths written, in batch order
    Saved(Vec<PathBuf>),
}

pub struct FetchService<S: NewsSource, W: ContentStore> {
    source: S,
    store: W,
    query: NewsQuery,
}

impl<S: NewsSource, W: ContentStore> FetchService<S, W> {
    pub fn new(source: S, store: W, query: NewsQuery) -> Self {
        Self {
            source,
            store,
            query,
        }
    }

    /// Fetch one page of articles and render each one, numbered from 1
    pub fn fetch_documents(&self, date: NaiveDate) -> NewsResult<Vec<NewsDocument>> {
        let response = self.source.fetch(&self.query)?;
        let articles = response.into_articles()?;
        debug!(count = articles.len(), endpoint = %self.query.endpoint, "Fetched articles");

        Ok(articles
            .iter()
            .enumerate()
            .map(|(i, article)| NewsDocument::from_article(article, date, i + 1))
            .collect())
    }

    /// Fetch the batch for `date` and write every document to the store.
    /// The first failed write aborts the rest of the batch.
    pub fn run(&self, date: NaiveDate) -> NewsResult<FetchOutcome> {
        let documents = self.fetch_documents(date)?;

        if documents.is_empty() {
            info!("No articles found");
            return Ok(FetchOutcome::NoArticles);
        }

        self.store.prepare()?;

        let mut saved = Vec::with_capacity(documents.len());
        for document in &documents {
            let path = self.store.write(document)?;
            info!(path = %path.display(), "Article saved");
            saved.push(path);
        }

        Ok(FetchOutcome::Saved(saved))
    }
}
