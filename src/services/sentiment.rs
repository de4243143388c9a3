use crate::{
    config::ReviewLimits,
    error::{AppError, AppResult},
    models::{Sentiment, SentimentLabel, SentimentReport},
    services::{
        providers::{MovieCatalog, SentimentClassifier},
        reviews,
    },
};

/// Analyzes the overall sentiment of a movie's reviews
///
/// Each review is classified independently; a single classification failure
/// is logged and the review excluded from the tally. Only when every review
/// fails does the whole request fail. An empty review list is a successful
/// "undefined" verdict, not an error.
pub async fn analyze(
    catalog: &dyn MovieCatalog,
    classifier: &dyn SentimentClassifier,
    movie_name: &str,
    limits: ReviewLimits,
) -> AppResult<SentimentReport> {
    let (movie, review_texts) = reviews::fetch_review_texts(catalog, movie_name, limits).await?;

    if review_texts.is_empty() {
        return Ok(SentimentReport {
            movie: movie.title,
            sentiment: Sentiment::Undefined,
            confidence: 0.0,
            total_reviews_analyzed: None,
            message: Some("Nenhuma avaliação encontrada para este filme.".to_string()),
        });
    }

    let total_reviews = review_texts.len();
    let mut positive_count = 0usize;
    let mut negative_count = 0usize;

    for review in &review_texts {
        match classifier.classify(review).await {
            Ok(classification) => match classification.label {
                SentimentLabel::Positive => positive_count += 1,
                SentimentLabel::Negative => negative_count += 1,
            },
            Err(e) => {
                tracing::warn!(
                    movie = %movie.title,
                    error = %e,
                    "Review classification failed; excluding review from tally"
                );
            }
        }
    }

    let classified = positive_count + negative_count;
    if classified == 0 {
        return Err(AppError::ClassifierUnavailable(format!(
            "All {} review classifications failed for: {}",
            total_reviews, movie.title
        )));
    }

    let sentiment = if positive_count > negative_count {
        Sentiment::Positive
    } else if negative_count > positive_count {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    };

    let confidence = positive_count.max(negative_count) as f64 / classified as f64;
    let confidence = round2(confidence);

    tracing::info!(
        movie = %movie.title,
        positive = positive_count,
        negative = negative_count,
        sentiment = ?sentiment,
        confidence = confidence,
        "Sentiment verdict computed"
    );

    Ok(SentimentReport {
        movie: movie.title,
        sentiment,
        confidence,
        total_reviews_analyzed: Some(total_reviews),
        message: None,
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
