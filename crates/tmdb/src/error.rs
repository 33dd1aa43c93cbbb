use thiserror::Error;

#[derive(Debug, Error)]
pub enum TmdbError {
    #[error("tmdb request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("tmdb returned {status} for {path}")]
    Status {
        status: reqwest::StatusCode,
        path: String,
    },
    #[error("failed to decode tmdb response for {path}: {source}")]
    Decode {
        path: String,
        source: reqwest::Error,
    },
}
