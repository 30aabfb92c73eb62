use crate::domain::{NewsQuery, NewsResponse};
use crate::errors::NewsResult;

#[cfg_attr(test, mockall::automock)]
pub trait NewsSource: Send + Sync {
    /// Perform the request for `query` and decode the response envelope.
    /// The provider status is left unchecked.
    fn fetch(&self, query: &NewsQuery) -> NewsResult<NewsResponse>;
}
