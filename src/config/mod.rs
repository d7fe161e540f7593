/// Process settings read from the environment
pub mod app;

/// Database configuration and connection management
pub mod database;

/// Seed dataset loading (relational TOML or legacy JSON)
pub mod seed;

pub use app::AppConfig;
