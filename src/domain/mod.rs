pub mod article;
pub mod document;
pub mod query;

pub use article::{Article, ArticleSource, NewsResponse};
pub use document::NewsDocument;
pub use query::{Endpoint, NewsQuery};
