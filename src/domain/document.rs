use chrono::NaiveDate;

use super::Article;

/// An article rendered to markdown, ready to be stored under `file_name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsDocument {
    pub file_name: String,
    pub body: String,
}

impl NewsDocument {
    /// `ordinal` is the 1-based position of the article in its batch
    pub fn from_article(article: &Article, date: NaiveDate, ordinal: usize) -> Self {
        Self {
            file_name: Self::file_name_for(date, ordinal),
            body: Self::render(article),
        }
    }

    pub fn file_name_for(date: NaiveDate, ordinal: usize) -> String {
        format!("news-{}-{}.md", date.format("%Y-%m-%d"), ordinal)
    }

    // The two trailing spaces after the source link are a markdown line break.
    fn render(article: &Article) -> String {
        format!(
            "# {}\n\n**Fuente:** [{}]({})  \n**Fecha:** {}\n\n{}\n\n{}\n",
            article.title,
            article.source.name,
            article.url,
            article.published_date(),
            article.description.as_deref().unwrap_or_default(),
            article.content.as_deref().unwrap_or_default(),
        )
    }
}
