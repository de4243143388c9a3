use crate::{
    config::ReviewLimits,
    error::{AppError, AppResult},
    models::MovieRecord,
    services::providers::MovieCatalog,
};

/// Fetches the review texts for a movie title
///
/// Resolves the title to its first search match, lists its reviews, keeps
/// only entries that carry content, truncates each text to the configured
/// character limit, and caps the list length. Upstream order is preserved.
pub async fn fetch_review_texts(
    catalog: &dyn MovieCatalog,
    movie_name: &str,
    limits: ReviewLimits,
) -> AppResult<(MovieRecord, Vec<String>)> {
    let movie = catalog
        .search_movies(movie_name)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| AppError::NotFound(format!("Movie not found: {}", movie_name)))?;

    let entries = catalog.fetch_reviews(movie.id).await?;

    let reviews: Vec<String> = entries
        .into_iter()
        .filter_map(|entry| entry.content)
        .map(|content| truncate_chars(&content, limits.max_chars))
        .take(limits.max_reviews)
        .collect();

    tracing::info!(
        movie = %movie.title,
        movie_id = movie.id,
        reviews = reviews.len(),
        "Review texts prepared"
    );

    Ok((movie, reviews))
}

/// Truncates to a character count, not a byte count, so multi-byte text
/// never splits mid-codepoint.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReviewEntry;
    use crate::services::providers::MockMovieCatalog;
    use mockall::predicate::eq;

    fn limits(max_reviews: usize, max_chars: usize) -> ReviewLimits {
        ReviewLimits {
            max_reviews,
            max_chars,
        }
    }

    fn entry(content: Option<&str>) -> ReviewEntry {
        ReviewEntry {
            author: Some("tester".to_string()),
            content: content.map(str::to_string),
        }
    }

    fn searchable_movie() -> crate::models::MovieRecord {
        crate::models::MovieRecord {
            id: 27205,
            title: "Inception".to_string(),
            genre_ids: vec![28, 878],
            overview: None,
            release_date: None,
        }
    }

    #[test]
    fn test_truncate_shorter_text_unchanged() {
        assert_eq!(truncate_chars("short", 512), "short");
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        // 4 characters, 8 bytes in UTF-8
        assert_eq!(truncate_chars("ação!", 4), "ação");
    }

    #[tokio::test]
    async fn test_entries_without_content_are_dropped_and_order_preserved() {
        let mut catalog = MockMovieCatalog::new();
        catalog
            .expect_search_movies()
            .withf(|q| q == "Inception")
            .returning(|_| Ok(vec![searchable_movie()]));
        catalog
            .expect_fetch_reviews()
            .with(eq(27205))
            .returning(|_| {
                Ok(vec![
                    entry(Some("first")),
                    entry(None),
                    entry(Some("second")),
                    entry(Some("third")),
                ])
            });

        let (_, reviews) = fetch_review_texts(&catalog, "Inception", limits(5, 512))
            .await
            .unwrap();

        assert_eq!(reviews, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_review_count_is_capped() {
        let mut catalog = MockMovieCatalog::new();
        catalog
            .expect_search_movies()
            .returning(|_| Ok(vec![searchable_movie()]));
        catalog.expect_fetch_reviews().returning(|_| {
            Ok((0..10)
                .map(|i| ReviewEntry {
                    author: None,
                    content: Some(format!("review {}", i)),
                })
                .collect())
        });

        let (_, reviews) = fetch_review_texts(&catalog, "Inception", limits(5, 512))
            .await
            .unwrap();

        assert_eq!(reviews.len(), 5);
        assert_eq!(reviews[0], "review 0");
        assert_eq!(reviews[4], "review 4");
    }

    #[tokio::test]
    async fn test_each_review_is_truncated() {
        let mut catalog = MockMovieCatalog::new();
        catalog
            .expect_search_movies()
            .returning(|_| Ok(vec![searchable_movie()]));
        catalog.expect_fetch_reviews().returning(|_| {
            Ok(vec![ReviewEntry {
                author: None,
                content: Some("x".repeat(600)),
            }])
        });

        let (_, reviews) = fetch_review_texts(&catalog, "Inception", limits(5, 512))
            .await
            .unwrap();

        assert_eq!(reviews[0].chars().count(), 512);
    }

    #[tokio::test]
    async fn test_unknown_title_is_not_found() {
        let mut catalog = MockMovieCatalog::new();
        catalog.expect_search_movies().returning(|_| Ok(vec![]));

        let err = fetch_review_texts(&catalog, "Nope", limits(5, 512))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
