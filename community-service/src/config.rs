/// Configuration management for Community Service
///
/// This module handles loading and managing configuration from environment
/// variables.
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Cache (Redis) configuration
    pub cache: CacheConfig,
    /// Trending ranking configuration
    pub trending: TrendingConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development, staging, production)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins
    pub allowed_origins: String,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL
    pub url: String,
}

/// Cache (Redis) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Redis URL
    pub url: String,
}

/// Trending ranking configuration (weights, candidate window, cache TTL)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingConfig {
    pub freshness_weight: f64,
    pub engagement_weight: f64,
    pub freshness_lambda: f64,
    pub max_candidates: usize,
    pub cache_ttl_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            app: AppConfig {
                env: app_env.clone(),
                host: std::env::var("COMMUNITY_SERVICE_HOST")
                    .unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("COMMUNITY_SERVICE_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
            },
            cors: {
                let allowed_origins = match std::env::var("CORS_ALLOWED_ORIGINS") {
                    Ok(value) => value,
                    Err(_) if app_env.eq_ignore_ascii_case("production") => {
                        return Err("CORS_ALLOWED_ORIGINS must be set in production".to_string())
                    }
                    Err(_) => "http://localhost:3000".to_string(),
                };

                if app_env.eq_ignore_ascii_case("production") && allowed_origins.trim() == "*" {
                    return Err("CORS_ALLOWED_ORIGINS cannot be '*' in production".to_string());
                }

                CorsConfig { allowed_origins }
            },
            database: DatabaseConfig {
                url: std::env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "postgresql://localhost/konnect".to_string()),
            },
            cache: CacheConfig {
                url: std::env::var("REDIS_URL")
                    .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
            },
            trending: TrendingConfig {
                freshness_weight: parse_env_or_default("TRENDING_FRESHNESS_WEIGHT", 0.4)?,
                engagement_weight: parse_env_or_default("TRENDING_ENGAGEMENT_WEIGHT", 0.6)?,
                freshness_lambda: parse_env_or_default("TRENDING_FRESHNESS_LAMBDA", 0.08)?,
                max_candidates: std::env::var("TRENDING_MAX_CANDIDATES")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(500),
                cache_ttl_secs: std::env::var("TRENDING_CACHE_TTL_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60),
            },
        })
    }
}

fn parse_env_or_default(key: &str, default: f64) -> Result<f64, String> {
    match std::env::var(key) {
        Ok(val) => val
            .parse()
            .map_err(|e| format!("Failed to parse {}='{}': {}", key, val, e)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_default_values() {
        std::env::remove_var("APP_ENV");
        std::env::remove_var("COMMUNITY_SERVICE_PORT");
        std::env::remove_var("TRENDING_MAX_CANDIDATES");

        let config = Config::from_env().unwrap();

        assert_eq!(config.app.env, "development");
        assert_eq!(config.app.host, "0.0.0.0");
        assert_eq!(config.app.port, 8080);
        assert_eq!(config.trending.max_candidates, 500);
        assert_eq!(config.trending.cache_ttl_secs, 60);
    }

    #[test]
    #[serial]
    fn test_bad_weight_is_an_error() {
        std::env::set_var("TRENDING_FRESHNESS_WEIGHT", "not-a-number");
        assert!(Config::from_env().is_err());
        std::env::remove_var("TRENDING_FRESHNESS_WEIGHT");
    }
}
