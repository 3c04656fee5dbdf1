use redis::{aio::ConnectionManager, AsyncCommands};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::metrics::feed::{FEED_CACHE_EVENTS, FEED_CACHE_WRITE_TOTAL};

/// Cached ranked id-list for the trending feed, shared by all users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedFeed {
    pub post_ids: Vec<Uuid>,
}

/// Trending feed cache backed by Redis
#[derive(Clone)]
pub struct FeedCache {
    redis: ConnectionManager,
    default_ttl: Duration,
}

impl FeedCache {
    pub fn new(redis: ConnectionManager, default_ttl_secs: u64) -> Self {
        Self {
            redis,
            default_ttl: Duration::from_secs(default_ttl_secs),
        }
    }

    fn trending_key() -> &'static str {
        "feed:trending:v1"
    }

    pub async fn read_trending(&self) -> Result<Option<CachedFeed>> {
        let mut conn = self.redis.clone();

        match conn
            .get::<_, Option<String>>(Self::trending_key())
            .await
        {
            Ok(Some(data)) => {
                debug!("Trending cache HIT");
                FEED_CACHE_EVENTS.with_label_values(&["hit"]).inc();
                serde_json::from_str::<CachedFeed>(&data).map(Some).map_err(|e| {
                    FEED_CACHE_EVENTS.with_label_values(&["error"]).inc();
                    AppError::Internal(format!("Cache deserialization error: {}", e))
                })
            }
            Ok(None) => {
                debug!("Trending cache MISS");
                FEED_CACHE_EVENTS.with_label_values(&["miss"]).inc();
                Ok(None)
            }
            Err(e) => {
                warn!("Redis read error for trending cache: {}", e);
                FEED_CACHE_EVENTS.with_label_values(&["error"]).inc();
                Err(AppError::Cache(e.to_string()))
            }
        }
    }

    pub async fn write_trending(&self, post_ids: Vec<Uuid>) -> Result<()> {
        let total_posts = post_ids.len();
        let cached = CachedFeed { post_ids };

        let data = serde_json::to_string(&cached)
            .map_err(|e| AppError::Internal(format!("Cache serialization error: {}", e)))?;

        // Jitter the TTL up to 10% so concurrent instances do not refill
        // the cache in lockstep
        let jitter = (rand::random::<u32>() % 10) as f64 / 100.0;
        let jitter_secs = (self.default_ttl.as_secs_f64() * jitter).round() as u64;
        let final_ttl = self.default_ttl + Duration::from_secs(jitter_secs);

        let mut conn = self.redis.clone();
        conn.set_ex::<_, _, ()>(Self::trending_key(), data, final_ttl.as_secs())
            .await
            .map_err(|e| {
                warn!("Failed to write trending cache: {}", e);
                FEED_CACHE_WRITE_TOTAL.with_label_values(&["error"]).inc();
                AppError::Cache(e.to_string())
            })?;

        debug!(
            "Trending cache WRITE ({} posts) with TTL {:?}",
            total_posts, final_ttl
        );
        FEED_CACHE_WRITE_TOTAL.with_label_values(&["success"]).inc();

        Ok(())
    }

    pub async fn invalidate_trending(&self) -> Result<()> {
        let mut conn = self.redis.clone();
        conn.del::<_, ()>(Self::trending_key())
            .await
            .map_err(|e| AppError::Cache(e.to_string()))?;

        Ok(())
    }
}
