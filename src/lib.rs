pub mod api;
pub mod config;
pub mod rate_limiter;
pub mod upstream;
