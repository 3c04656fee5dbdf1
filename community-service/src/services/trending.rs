//! Trending ranking for the feed's `trending` sort mode.
//!
//! Score = freshness_weight * exp(-freshness_lambda * age_hours)
//!       + engagement_weight * ln(1 + reactions + 2 * comments)
//!
//! Ranking runs over a bounded window of the most recent posts; the
//! resulting id-list is cached in Redis and re-hydrated into full post
//! views per request. Cache failures fall through to computing from
//! PostgreSQL.
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use crate::cache::FeedCache;
use crate::config::TrendingConfig;
use crate::db::post_repo::{self, TrendingCandidate};
use crate::error::Result;
use crate::models::PostView;

#[derive(Debug, Clone)]
pub struct TrendingRankingConfig {
    pub freshness_weight: f64,
    pub engagement_weight: f64,
    pub freshness_lambda: f64,
    pub max_candidates: usize,
}

impl From<&TrendingConfig> for TrendingRankingConfig {
    fn from(config: &TrendingConfig) -> Self {
        TrendingRankingConfig {
            freshness_weight: config.freshness_weight,
            engagement_weight: config.engagement_weight,
            freshness_lambda: config.freshness_lambda,
            max_candidates: config.max_candidates.max(1),
        }
    }
}

pub struct TrendingService {
    pool: PgPool,
    cache: Option<Arc<FeedCache>>,
    config: TrendingRankingConfig,
}

impl TrendingService {
    pub fn new(
        pool: PgPool,
        cache: Option<Arc<FeedCache>>,
        config: TrendingRankingConfig,
    ) -> Self {
        Self {
            pool,
            cache,
            config,
        }
    }

    /// Ranked trending page, hydrated into full post views
    pub async fn trending_post_views(&self, limit: i64, offset: i64) -> Result<Vec<PostView>> {
        let ids = self.trending_post_ids().await?;

        let start = (offset.max(0) as usize).min(ids.len());
        let end = (start + limit.max(0) as usize).min(ids.len());
        let page = &ids[start..end];

        if page.is_empty() {
            return Ok(Vec::new());
        }

        let views = post_repo::get_post_views_by_ids(&self.pool, page).await?;

        // ANY($1) loses ranking order; re-apply it
        let mut ordered = Vec::with_capacity(page.len());
        for id in page {
            if let Some(view) = views.iter().find(|v| &v.id == id) {
                ordered.push(view.clone());
            }
        }

        Ok(ordered)
    }

    async fn trending_post_ids(&self) -> Result<Vec<Uuid>> {
        if let Some(cache) = &self.cache {
            match cache.read_trending().await {
                Ok(Some(cached)) => return Ok(cached.post_ids),
                Ok(None) => {}
                Err(e) => warn!("Trending cache read failed, recomputing: {}", e),
            }
        }

        let candidates =
            post_repo::list_trending_candidates(&self.pool, self.config.max_candidates as i64)
                .await?;
        let ids = rank_candidates(&candidates, &self.config, Utc::now());

        if let Some(cache) = &self.cache {
            if let Err(e) = cache.write_trending(ids.clone()).await {
                warn!("Trending cache write failed: {}", e);
            }
        }

        Ok(ids)
    }
}

/// Score candidates and return their ids best-first
pub fn rank_candidates(
    candidates: &[TrendingCandidate],
    config: &TrendingRankingConfig,
    now: DateTime<Utc>,
) -> Vec<Uuid> {
    let mut scored: Vec<(Uuid, f64)> = candidates
        .iter()
        .map(|c| (c.post_id, compute_score(c, config, now)))
        .collect();

    // NaN-safe sorting: NaN compares equal rather than panicking
    scored.sort_by(|a, b| match b.1.partial_cmp(&a.1) {
        Some(ord) => ord,
        None => {
            warn!(
                post_a = %a.0,
                post_b = %b.0,
                "Encountered NaN score in trending ranking, treating as equal"
            );
            std::cmp::Ordering::Equal
        }
    });

    scored.into_iter().map(|(id, _)| id).collect()
}

fn compute_score(
    candidate: &TrendingCandidate,
    config: &TrendingRankingConfig,
    now: DateTime<Utc>,
) -> f64 {
    let age_hours = ((now - candidate.created_at).num_seconds().max(0)) as f64 / 3600.0;
    let engagement = (candidate.reactions_total + 2 * candidate.comment_count) as f64;

    config.freshness_weight * (-config.freshness_lambda * age_hours).exp()
        + config.engagement_weight * (1.0 + engagement).ln()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn test_config() -> TrendingRankingConfig {
        TrendingRankingConfig {
            freshness_weight: 0.4,
            engagement_weight: 0.6,
            freshness_lambda: 0.08,
            max_candidates: 500,
        }
    }

    fn candidate(
        now: DateTime<Utc>,
        age_hours: i64,
        reactions: i64,
        comments: i64,
    ) -> TrendingCandidate {
        TrendingCandidate {
            post_id: Uuid::new_v4(),
            created_at: now - Duration::hours(age_hours),
            reactions_total: reactions,
            comment_count: comments,
        }
    }

    #[test]
    fn test_newer_wins_at_equal_engagement() {
        let now = Utc::now();
        let fresh = candidate(now, 1, 5, 2);
        let stale = candidate(now, 48, 5, 2);

        let ranked = rank_candidates(&[stale.clone(), fresh.clone()], &test_config(), now);
        assert_eq!(ranked, vec![fresh.post_id, stale.post_id]);
    }

    #[test]
    fn test_engagement_wins_at_equal_age() {
        let now = Utc::now();
        let busy = candidate(now, 6, 40, 10);
        let quiet = candidate(now, 6, 1, 0);

        let ranked = rank_candidates(&[quiet.clone(), busy.clone()], &test_config(), now);
        assert_eq!(ranked, vec![busy.post_id, quiet.post_id]);
    }

    #[test]
    fn test_comments_weigh_double() {
        let now = Utc::now();
        let commented = candidate(now, 3, 0, 4);
        let reacted = candidate(now, 3, 7, 0);

        // 2 * 4 comments = 8 engagement > 7 reactions
        let ranked = rank_candidates(&[reacted.clone(), commented.clone()], &test_config(), now);
        assert_eq!(ranked, vec![commented.post_id, reacted.post_id]);
    }

    #[test]
    fn test_future_timestamps_do_not_boost() {
        let now = Utc::now();
        let skewed = TrendingCandidate {
            post_id: Uuid::new_v4(),
            created_at: now + Duration::hours(5),
            reactions_total: 0,
            comment_count: 0,
        };
        let current = candidate(now, 0, 0, 0);

        let score_skewed = compute_score(&skewed, &test_config(), now);
        let score_current = compute_score(&current, &test_config(), now);
        assert!((score_skewed - score_current).abs() < f64::EPSILON);
    }

    #[test]
    fn test_nan_weights_do_not_panic() {
        let now = Utc::now();
        let config = TrendingRankingConfig {
            freshness_weight: f64::NAN,
            ..test_config()
        };
        let candidates = vec![candidate(now, 1, 1, 1), candidate(now, 2, 2, 2)];

        let ranked = rank_candidates(&candidates, &config, now);
        assert_eq!(ranked.len(), 2);
    }
}
