use crate::error::ConfigError;
use std::time::Duration;

/// Where the review list lives unless told otherwise.
pub const DEFAULT_BASE_URL: &str = "https://whatsapp-reviews-1.onrender.com";
pub const REVIEWS_PATH: &str = "/api/reviews";
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(3000);

/// Endpoint and cadence for the live review feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    pub endpoint: String,
    pub interval: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self::for_base_url(DEFAULT_BASE_URL)
    }
}

impl FeedConfig {
    /// Points the feed at `<base>/api/reviews`.
    pub fn for_base_url(base: &str) -> Self {
        Self {
            endpoint: format!("{}{}", base.trim_end_matches('/'), REVIEWS_PATH),
            interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::EmptyEndpoint);
        }
        if self.interval_millis() == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(())
    }

    /// Interval in the unit browser timers take, saturating at `u32::MAX`.
    pub fn interval_millis(&self) -> u32 {
        u32::try_from(self.interval.as_millis()).unwrap_or(u32::MAX)
    }
}
