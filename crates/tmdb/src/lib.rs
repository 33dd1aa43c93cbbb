//! Thin client for The Movie Database (TMDB) REST API.

use reqwest::header;
use serde::de::DeserializeOwned;
use tracing::debug;

pub mod error;
pub mod models;

pub use error::TmdbError;
use models::{CollectionDetails, MovieDetails, PersonDetails, SearchPage};

const API_BASE: &str = "https://api.themoviedb.org";
const IMAGE_BASE: &str = "https://image.tmdb.org/t/p/original";

/// Builds the search request path. An absent, empty, or
/// whitespace-only year leaves the year filter off; anything else is
/// appended verbatim.
pub fn search_path(title: &str, year: Option<&str>) -> String {
    let mut path = format!("/3/search/movie?query={}", urlencoding::encode(title));
    if let Some(year) = year.map(str::trim).filter(|y| !y.is_empty()) {
        path.push_str("&year=");
        path.push_str(year);
    }
    path
}

/// Fully-qualified CDN URL for a poster path as TMDB returns it
/// (leading slash included).
pub fn poster_url(poster_path: &str) -> String {
    format!("{IMAGE_BASE}{poster_path}")
}

/// Bearer-authenticated TMDB client.
///
/// Holds one pooled `reqwest::Client`; construct it once and share it
/// across command invocations.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    token: String,
    base_url: String,
}

impl TmdbClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, API_BASE)
    }

    /// Client pointed at a custom base URL, for exercising against a
    /// local stand-in server.
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            token: token.into(),
            base_url: base_url.into(),
        }
    }

    pub async fn search_movies(
        &self,
        title: &str,
        year: Option<&str>,
    ) -> Result<SearchPage<MovieDetails>, TmdbError> {
        self.get_json(&search_path(title, year)).await
    }

    pub async fn movie(&self, id: u64) -> Result<MovieDetails, TmdbError> {
        self.get_json(&format!("/3/movie/{id}")).await
    }

    pub async fn collection(&self, id: u64) -> Result<CollectionDetails, TmdbError> {
        self.get_json(&format!("/3/collection/{id}")).await
    }

    pub async fn person(&self, id: u64) -> Result<PersonDetails, TmdbError> {
        self.get_json(&format!("/3/person/{id}")).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, TmdbError> {
        debug!(path, "tmdb request");
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
            .header(header::CONTENT_TYPE, "application/json;charset=utf-8")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TmdbError::Status {
                status,
                path: path.to_string(),
            });
        }

        response.json().await.map_err(|source| TmdbError::Decode {
            path: path.to_string(),
            source,
        })
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
