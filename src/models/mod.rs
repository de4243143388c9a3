use serde::{Deserialize, Serialize};

// ============================================================================
// TMDB API Types
// ============================================================================

/// One movie entry as returned by TMDB search and discover endpoints
///
/// `genre_ids` are small integer codes from TMDB's fixed genre taxonomy.
/// Records are fetched fresh per request and never persisted.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MovieRecord {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub genre_ids: Vec<u64>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
}

/// JSON envelope wrapping TMDB movie listings (`/search/movie`, `/discover/movie`)
#[derive(Debug, Clone, Deserialize)]
pub struct MovieListEnvelope {
    #[serde(default)]
    pub results: Vec<MovieRecord>,
}

/// One review entry from TMDB's `/movie/{id}/reviews`
///
/// Entries without `content` are dropped before classification.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewEntry {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// JSON envelope wrapping TMDB review listings
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewListEnvelope {
    #[serde(default)]
    pub results: Vec<ReviewEntry>,
}

// ============================================================================
// Classifier Types
// ============================================================================

/// Label emitted by the binary sentiment classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Negative,
}

/// Single classification result: one label plus the model's confidence in it
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: SentimentLabel,
    pub score: f64,
}

// ============================================================================
// API Request/Response Types
// ============================================================================

/// Body of `POST /movies/recommend`
#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub movie1: String,
    pub movie2: String,
}

/// Outcome of the recommendation engine
///
/// Low similarity and an empty discover listing are legitimate negative
/// results, not errors; only `Match` carries a recommended title.
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation {
    /// Similarity above the threshold and a candidate was found
    Match {
        recommended_movie: String,
        similarity_score: f64,
    },
    /// Similarity at or below the threshold; no discover call was made
    LowSimilarity { similarity_score: f64 },
    /// Similarity was sufficient but discover returned no candidates
    NoCandidate { similarity_score: f64 },
}

/// Wire shape of a recommendation outcome
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RecommendationReply {
    Match {
        recommended_movie: String,
        similarity_score: f64,
    },
    NoMatch {
        message: String,
        similarity_score: f64,
    },
}

impl From<Recommendation> for RecommendationReply {
    fn from(outcome: Recommendation) -> Self {
        match outcome {
            Recommendation::Match {
                recommended_movie,
                similarity_score,
            } => RecommendationReply::Match {
                recommended_movie,
                similarity_score,
            },
            Recommendation::LowSimilarity { similarity_score } => RecommendationReply::NoMatch {
                message: "Os filmes não possuem similaridade suficiente para uma recomendação."
                    .to_string(),
                similarity_score,
            },
            Recommendation::NoCandidate { similarity_score } => RecommendationReply::NoMatch {
                message: "Nenhuma recomendação encontrada para os gêneros combinados.".to_string(),
                similarity_score,
            },
        }
    }
}

/// Overall sentiment verdict, serialized with the Portuguese labels the
/// public API has always used
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Sentiment {
    #[serde(rename = "positivo")]
    Positive,
    #[serde(rename = "negativo")]
    Negative,
    #[serde(rename = "neutro")]
    Neutral,
    #[serde(rename = "indefinido")]
    Undefined,
}

/// Body of `GET /movies/sentiment/{movie_name}` responses
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SentimentReport {
    pub movie: String,
    pub sentiment: Sentiment,
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_reviews_analyzed: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
