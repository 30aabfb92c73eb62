//! Fetch news articles from NewsAPI and write them as markdown content files.

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;
pub mod sources;
pub mod storage;
