/// External data provider abstractions
///
/// This module keeps the two upstream collaborators behind traits so the
/// engines stay testable and the concrete APIs stay swappable: a movie
/// catalog (search, genre discovery, reviews) and a pretrained binary
/// sentiment classifier.
use crate::{
    error::AppResult,
    models::{Classification, MovieRecord, ReviewEntry},
};

#[cfg(test)]
use mockall::automock;

pub mod huggingface;
pub mod tmdb;

pub use huggingface::HuggingFaceClassifier;
pub use tmdb::TmdbCatalog;

/// Trait for movie metadata providers
///
/// All three operations are read-only listings: implementations unwrap the
/// upstream JSON envelope and return the raw result list. Deciding what an
/// empty list means (not found vs. no candidate) is the caller's job.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Search movies by free-text title query
    async fn search_movies(&self, query: &str) -> AppResult<Vec<MovieRecord>>;

    /// List movies matching all of the given genre ids
    async fn discover_by_genres(&self, genre_ids: &[u64]) -> AppResult<Vec<MovieRecord>>;

    /// Fetch the review listing for a resolved movie id
    async fn fetch_reviews(&self, movie_id: u64) -> AppResult<Vec<ReviewEntry>>;
}

/// Trait for the sentiment classifier
///
/// The classifier is a black box: text in (at most 512 characters), one
/// POSITIVE/NEGATIVE label plus a confidence score out. The production
/// implementation is constructed once at startup and shared read-only.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait SentimentClassifier: Send + Sync {
    /// Classify a single piece of text
    async fn classify(&self, text: &str) -> AppResult<Classification>;
}
