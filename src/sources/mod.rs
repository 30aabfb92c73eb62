pub mod newsapi;
pub mod traits;

pub use newsapi::NewsApiClient;
pub use traits::NewsSource;
