use serde::Deserialize;

/// Default number of reviews considered per sentiment request.
///
/// Earlier revisions of the service used 15; the current policy is 5 to keep
/// per-request classifier load bounded.
pub const DEFAULT_MAX_REVIEWS: usize = 5;

/// Default per-review truncation length, in characters. Matches the 512-token
/// input limit of the sentiment model.
pub const DEFAULT_REVIEW_MAX_CHARS: usize = 512;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// TMDB API key. Optional at startup: catalog calls fail with a
    /// configuration error when absent, instead of attempting the request.
    pub tmdb_api_key: Option<String>,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_base_url")]
    pub tmdb_base_url: String,

    /// Hugging Face inference API token. Optional at startup: when absent the
    /// classifier is never constructed and sentiment requests fail fast.
    pub hf_api_token: Option<String>,

    /// Sentiment model inference endpoint
    #[serde(default = "default_hf_api_url")]
    pub hf_api_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Maximum number of reviews analyzed per sentiment request
    #[serde(default = "default_max_reviews")]
    pub max_reviews: usize,

    /// Maximum review length (characters) passed to the classifier
    #[serde(default = "default_review_max_chars")]
    pub review_max_chars: usize,
}

fn default_tmdb_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_hf_api_url() -> String {
    "https://api-inference.huggingface.co/models/distilbert-base-uncased-finetuned-sst-2-english"
        .to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_max_reviews() -> usize {
    DEFAULT_MAX_REVIEWS
}

fn default_review_max_chars() -> usize {
    DEFAULT_REVIEW_MAX_CHARS
}

/// Review fetching limits, carried in application state so handlers don't
/// need the full `Config`.
#[derive(Debug, Clone, Copy)]
pub struct ReviewLimits {
    pub max_reviews: usize,
    pub max_chars: usize,
}

impl Default for ReviewLimits {
    fn default() -> Self {
        Self {
            max_reviews: DEFAULT_MAX_REVIEWS,
            max_chars: DEFAULT_REVIEW_MAX_CHARS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn review_limits(&self) -> ReviewLimits {
        ReviewLimits {
            max_reviews: self.max_reviews,
            max_chars: self.review_max_chars,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied_when_env_is_empty() {
        let config: Config = envy::from_iter::<_, Config>(std::iter::empty::<(String, String)>())
            .expect("empty environment should deserialize with defaults");

        assert_eq!(config.tmdb_api_key, None);
        assert_eq!(config.tmdb_base_url, "https://api.themoviedb.org/3");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.max_reviews, DEFAULT_MAX_REVIEWS);
        assert_eq!(config.review_max_chars, DEFAULT_REVIEW_MAX_CHARS);
    }

    #[test]
    fn test_explicit_values_override_defaults() {
        let vars = vec![
            ("TMDB_API_KEY".to_string(), "abc123".to_string()),
            ("PORT".to_string(), "8080".to_string()),
            ("MAX_REVIEWS".to_string(), "15".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();

        assert_eq!(config.tmdb_api_key.as_deref(), Some("abc123"));
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_reviews, 15);
        assert_eq!(config.review_max_chars, DEFAULT_REVIEW_MAX_CHARS);
    }

    #[test]
    fn test_review_limits_from_config() {
        let vars = vec![
            ("MAX_REVIEWS".to_string(), "3".to_string()),
            ("REVIEW_MAX_CHARS".to_string(), "100".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();
        let limits = config.review_limits();

        assert_eq!(limits.max_reviews, 3);
        assert_eq!(limits.max_chars, 100);
    }
}
