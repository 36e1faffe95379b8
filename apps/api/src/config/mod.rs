use crate::error::{ApiError, Result};
use serde::Deserialize;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SEARCH_MAX_RESULTS: usize = 5;
const DEFAULT_DAILY_CHAPTER_COUNT: usize = 2;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Upper bound on verses returned for a search
    pub search_max_results: usize,
    /// Chapters scheduled per daily reading
    pub daily_chapter_count: usize,
    /// Single allowed CORS origin; any origin when unset
    #[serde(default)]
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    /// Load configuration from `.env` and the process environment,
    /// falling back to defaults for unset keys.
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();

        let settings = config::Config::builder()
            .set_default("host", DEFAULT_HOST)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("search_max_results", DEFAULT_SEARCH_MAX_RESULTS as i64)?
            .set_default("daily_chapter_count", DEFAULT_DAILY_CHAPTER_COUNT as i64)?
            .add_source(config::Environment::default().try_parsing(true))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(ApiError::Configuration("PORT must be non-zero".into()));
        }
        if self.search_max_results == 0 {
            return Err(ApiError::Configuration(
                "SEARCH_MAX_RESULTS must be at least 1".into(),
            ));
        }
        if self.daily_chapter_count == 0 {
            return Err(ApiError::Configuration(
                "DAILY_CHAPTER_COUNT must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            search_max_results: DEFAULT_SEARCH_MAX_RESULTS,
            daily_chapter_count: DEFAULT_DAILY_CHAPTER_COUNT,
            cors_allowed_origin: None,
        }
    }
}
