/// TMDB (The Movie Database) catalog provider
///
/// Three read endpoints, each wrapping its payload in a `results` envelope:
/// 1. Search: /search/movie?query={title}
/// 2. Discover: /discover/movie?with_genres={comma-joined ids}
/// 3. Reviews: /movie/{id}/reviews
///
/// The API key is optional at construction so the service can boot without
/// credentials; every call then fails with a configuration error before any
/// request is attempted.
use crate::{
    error::{AppError, AppResult},
    models::{MovieListEnvelope, MovieRecord, ReviewEntry, ReviewListEnvelope},
    services::providers::MovieCatalog,
};
use reqwest::Client as HttpClient;

#[derive(Clone)]
pub struct TmdbCatalog {
    http_client: HttpClient,
    api_key: Option<String>,
    base_url: String,
}

impl TmdbCatalog {
    pub fn new(api_key: Option<String>, base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            base_url,
        }
    }

    /// Returns the API key or a configuration error, checked before every call
    fn api_key(&self) -> AppResult<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            AppError::Misconfigured("TMDB_API_KEY is not set; catalog calls are disabled".to_string())
        })
    }

    /// Issues a GET returning a `results`-enveloped movie listing
    async fn fetch_movie_listing(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> AppResult<Vec<MovieRecord>> {
        let response = self.http_client.get(url).query(query).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!(
                "TMDB returned status {}: {}",
                status, body
            )));
        }

        let envelope: MovieListEnvelope = response.json().await?;
        Ok(envelope.results)
    }
}

#[async_trait::async_trait]
impl MovieCatalog for TmdbCatalog {
    async fn search_movies(&self, query: &str) -> AppResult<Vec<MovieRecord>> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Movie title cannot be empty".to_string(),
            ));
        }

        let api_key = self.api_key()?.to_string();
        let url = format!("{}/search/movie", self.base_url);

        let results = self
            .fetch_movie_listing(&url, &[("query", query), ("api_key", api_key.as_str())])
            .await?;

        tracing::info!(
            query = %query,
            results = results.len(),
            provider = "tmdb",
            "Movie search completed"
        );

        Ok(results)
    }

    async fn discover_by_genres(&self, genre_ids: &[u64]) -> AppResult<Vec<MovieRecord>> {
        let api_key = self.api_key()?.to_string();
        let url = format!("{}/discover/movie", self.base_url);

        let with_genres = genre_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");

        let results = self
            .fetch_movie_listing(
                &url,
                &[
                    ("with_genres", with_genres.as_str()),
                    ("api_key", api_key.as_str()),
                ],
            )
            .await?;

        tracing::info!(
            genres = %with_genres,
            results = results.len(),
            provider = "tmdb",
            "Genre discovery completed"
        );

        Ok(results)
    }

    async fn fetch_reviews(&self, movie_id: u64) -> AppResult<Vec<ReviewEntry>> {
        let api_key = self.api_key()?.to_string();
        let url = format!("{}/movie/{}/reviews", self.base_url, movie_id);

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!(
                "TMDB returned status {}: {}",
                status, body
            )));
        }

        let envelope: ReviewListEnvelope = response.json().await?;

        tracing::info!(
            movie_id = movie_id,
            reviews = envelope.results.len(),
            provider = "tmdb",
            "Review listing fetched"
        );

        Ok(envelope.results)
    }
}
