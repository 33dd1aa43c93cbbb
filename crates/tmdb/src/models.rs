use std::cmp::Ordering;

use serde::Deserialize;

/// One page of a TMDB search response.
///
/// `total_results` is advisory only; TMDB has been observed returning
/// counts that disagree with `results.len()`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPage<T> {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: i64,
    #[serde(default)]
    pub results: Vec<T>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Movie {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub original_title: String,
    #[serde(default)]
    pub original_language: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: i64,
    #[serde(default)]
    pub adult: bool,
    #[serde(default)]
    pub video: bool,
}

/// Movie with the detail-endpoint extras.
///
/// Every extra field is defaulted so that search-result entries, which
/// carry only the base `Movie` fields, still deserialize into this
/// shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieDetails {
    #[serde(flatten)]
    pub movie: Movie,
    #[serde(default)]
    pub belongs_to_collection: Option<Collection>,
    #[serde(default)]
    pub budget: u64,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub imdb_id: Option<String>,
    #[serde(default)]
    pub production_companies: Vec<Company>,
    #[serde(default)]
    pub production_countries: Vec<Country>,
    #[serde(default)]
    pub revenue: u64,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub spoken_languages: Vec<Language>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub tagline: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Collection {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CollectionDetails {
    #[serde(flatten)]
    pub collection: Collection,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub parts: Vec<Movie>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Genre {
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Company {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub logo_path: Option<String>,
    #[serde(default)]
    pub origin_country: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Country {
    #[serde(default)]
    pub iso_3166_1: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Language {
    #[serde(default)]
    pub iso_639_1: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub english_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Person {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default)]
    pub adult: bool,
    #[serde(default)]
    pub known_for_department: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersonDetails {
    #[serde(flatten)]
    pub person: Person,
    #[serde(default)]
    pub also_known_as: Vec<String>,
    #[serde(default)]
    pub biography: String,
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub deathday: Option<String>,
    #[serde(default)]
    pub gender: u8,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub imdb_id: Option<String>,
    #[serde(default)]
    pub place_of_birth: Option<String>,
}

impl SearchPage<MovieDetails> {
    /// Picks the entry to act on: none for an empty page, the sole
    /// entry for a single hit, otherwise the highest popularity score.
    ///
    /// A negative count, or a positive count paired with an empty
    /// result list, selects nothing rather than panicking.
    pub fn most_popular(self) -> Option<MovieDetails> {
        if self.total_results <= 0 || self.results.is_empty() {
            return None;
        }
        if self.total_results == 1 {
            return self.results.into_iter().next();
        }
        self.results.into_iter().max_by(|a, b| {
            a.movie
                .popularity
                .partial_cmp(&b.movie.popularity)
                .unwrap_or(Ordering::Equal)
        })
    }
}

#[cfg(test)]
#[path = "tests/models_tests.rs"]
mod tests;
