use std::time::Duration;
use clap::Parser;
use crate::tools::maps_adapter::{
    TruncationLimits, DEFAULT_MAX_PLACES, DEFAULT_MAX_REVIEWS, DEFAULT_MAX_STEPS,
    DEFAULT_REVIEW_TEXT_CHARS,
};

/// Inside docker compose the backend is reachable as `http://backend:8432/api/maps`.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8432/api/maps";

#[derive(Parser, Clone, Debug)]
#[command(name = "maps-tool-adapter", about = "Google Maps tools for AI hosts, backed by the maps service")]
pub struct Config {
    #[clap(env, long, default_value = "local")]
    pub environment: String,

    /// Base address of the maps backend, without a trailing endpoint.
    #[clap(env, long, default_value = DEFAULT_BACKEND_URL)]
    pub maps_backend_url: String,

    #[clap(env, long, default_value_t = 10)]
    pub request_timeout_secs: u64,

    #[clap(env, long, default_value_t = 3000)]
    pub port: u16,

    /// Comma separated list of origins allowed to call the tool endpoints.
    #[clap(env, long, default_value = "http://localhost:8080")]
    pub origin_urls: String,

    #[clap(env, long, default_value_t = DEFAULT_MAX_PLACES)]
    pub max_places: usize,

    #[clap(env, long, default_value_t = DEFAULT_MAX_STEPS)]
    pub max_steps: usize,

    #[clap(env, long, default_value_t = DEFAULT_MAX_REVIEWS)]
    pub max_reviews: usize,

    #[clap(env, long, default_value_t = DEFAULT_REVIEW_TEXT_CHARS)]
    pub review_text_chars: usize,
}

impl Config {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn truncation_limits(&self) -> TruncationLimits {
        TruncationLimits {
            max_places: self.max_places,
            max_steps: self.max_steps,
            max_reviews: self.max_reviews,
            review_text_chars: self.review_text_chars,
        }
    }
}
