pub mod fetch_service;

pub use fetch_service::{FetchOutcome, FetchService};
