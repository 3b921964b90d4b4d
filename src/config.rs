use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::upstream;

pub struct Config {
    pub port: u16,
    pub allowed_origin: String,
    pub rate_limit_points: u32,
    pub rate_limit_duration: Duration,
    pub searxng_base_url: String,
    pub upstream_timeout: Duration,
}

impl Config {
    /// Build a Config from the process environment, loading a .env file if
    /// present. Malformed numeric values fall back to their defaults.
    pub fn from_env() -> Config {
        dotenv().ok();
        Config {
            port: get_env_parsed("PORT", 3001),
            allowed_origin: get_env_or_default("ALLOWED_ORIGIN", "http://localhost:3000"),
            rate_limit_points: get_env_parsed("RATE_LIMIT_POINTS", 30),
            rate_limit_duration: Duration::from_secs(get_env_parsed("RATE_LIMIT_DURATION", 60)),
            searxng_base_url: get_env_or_default("SEARXNG_BASE_URL", "http://searxng:8080"),
            upstream_timeout: upstream::DEFAULT_TIMEOUT,
        }
    }
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn get_env_parsed<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
