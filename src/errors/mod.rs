use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsError {
    // Configuration errors
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    // Provider errors
    #[error("API error: {code} - {message}")]
    Api { code: String, message: String },

    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // Parsing errors
    #[error("Response decoding failed: {0}")]
    Decode(#[from] serde_json::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NewsResult<T> = Result<T, NewsError>;
