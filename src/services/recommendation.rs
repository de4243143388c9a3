use crate::{
    error::{AppError, AppResult},
    models::{MovieRecord, Recommendation},
    services::providers::MovieCatalog,
};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Minimum genre similarity for a recommendation.
///
/// The comparison is strict: a score of exactly 0.1 is still "not similar
/// enough" and short-circuits before any discover call.
pub const SIMILARITY_THRESHOLD: f64 = 0.1;

/// Resolves a free-text title to its first search match
async fn resolve_movie(catalog: &dyn MovieCatalog, title: &str) -> AppResult<MovieRecord> {
    let results = catalog.search_movies(title).await?;
    results
        .into_iter()
        .next()
        .ok_or_else(|| AppError::NotFound(format!("Movie not found: {}", title)))
}

/// Cosine similarity between two genre sets
///
/// Both sets are projected onto 0/1 indicator vectors over their union, in a
/// single shared order. With non-negative entries the score is always in
/// [0, 1]; the caller guarantees both sets are non-empty, so the union is
/// never empty and the denominator never zero.
fn cosine_similarity(a: &BTreeSet<u64>, b: &BTreeSet<u64>) -> f64 {
    let union: Vec<u64> = a.union(b).copied().collect();

    let vec_a: Vec<f64> = union
        .iter()
        .map(|g| if a.contains(g) { 1.0 } else { 0.0 })
        .collect();
    let vec_b: Vec<f64> = union
        .iter()
        .map(|g| if b.contains(g) { 1.0 } else { 0.0 })
        .collect();

    let dot: f64 = vec_a.iter().zip(&vec_b).map(|(x, y)| x * y).sum();
    let norm_a: f64 = vec_a.iter().map(|x| x * x).sum();
    let norm_b: f64 = vec_b.iter().map(|x| x * x).sum();

    // sqrt of the product, not product of sqrts: keeps exact results for
    // exact inputs (identical sets score 1.0, one-in-ten overlap scores 0.1).
    dot / (norm_a * norm_b).sqrt()
}

/// Recommends a movie based on the genre overlap of two titles
///
/// Resolves both titles, scores their genre similarity, and only when the
/// score clears the threshold asks the catalog for a title sharing the
/// combined genres. The first listed candidate wins.
pub async fn recommend(
    catalog: Arc<dyn MovieCatalog>,
    movie1: &str,
    movie2: &str,
) -> AppResult<Recommendation> {
    let first = resolve_movie(catalog.as_ref(), movie1).await?;
    let second = resolve_movie(catalog.as_ref(), movie2).await?;

    let genres_first: BTreeSet<u64> = first.genre_ids.iter().copied().collect();
    let genres_second: BTreeSet<u64> = second.genre_ids.iter().copied().collect();

    if genres_first.is_empty() {
        return Err(AppError::InsufficientData(format!(
            "No genre data available for: {}",
            first.title
        )));
    }
    if genres_second.is_empty() {
        return Err(AppError::InsufficientData(format!(
            "No genre data available for: {}",
            second.title
        )));
    }

    let similarity_score = cosine_similarity(&genres_first, &genres_second);

    tracing::info!(
        movie1 = %first.title,
        movie2 = %second.title,
        similarity = similarity_score,
        "Genre similarity computed"
    );

    if similarity_score <= SIMILARITY_THRESHOLD {
        return Ok(Recommendation::LowSimilarity { similarity_score });
    }

    let union: Vec<u64> = genres_first.union(&genres_second).copied().collect();
    let candidates = catalog.discover_by_genres(&union).await?;

    match candidates.into_iter().next() {
        Some(candidate) => Ok(Recommendation::Match {
            recommended_movie: candidate.title,
            similarity_score,
        }),
        None => Ok(Recommendation::NoCandidate { similarity_score }),
    }
}
