use std::sync::Arc;

use crate::config::ReviewLimits;
use crate::services::providers::{MovieCatalog, SentimentClassifier};

/// Shared application state
///
/// Both collaborators are constructed once at startup and shared read-only
/// across requests. A failed classifier initialization is recorded here as
/// `None` and checked on every sentiment request instead of being retried.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn MovieCatalog>,
    pub classifier: Option<Arc<dyn SentimentClassifier>>,
    pub review_limits: ReviewLimits,
}

impl AppState {
    pub fn new(
        catalog: Arc<dyn MovieCatalog>,
        classifier: Option<Arc<dyn SentimentClassifier>>,
        review_limits: ReviewLimits,
    ) -> Self {
        Self {
            catalog,
            classifier,
            review_limits,
        }
    }
}
