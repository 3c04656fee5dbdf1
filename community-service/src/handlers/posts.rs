/// Post handlers - feed reads and post creation
use crate::error::{AppError, Result};
use crate::metrics::feed::{FEED_REQUEST_DURATION_SECONDS, FEED_REQUEST_TOTAL};
use crate::models::PostType;
use crate::services::{PostService, TrendingService};
use actix_web::{web, HttpResponse};
use auth_token::UserId;
use serde::Deserialize;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Instant;

/// Shared state for the feed read path
pub struct FeedState {
    pub trending: Arc<TrendingService>,
}

#[derive(Debug, Deserialize)]
pub struct FeedQueryParams {
    #[serde(default = "default_sort")]
    pub sort: String,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_sort() -> String {
    "latest".to_string()
}

fn default_limit() -> i64 {
    50
}

/// List the feed, ordered by the requested sort mode
pub async fn list_posts(
    pool: web::Data<PgPool>,
    state: web::Data<FeedState>,
    query: web::Query<FeedQueryParams>,
) -> Result<HttpResponse> {
    let limit = query.limit.clamp(1, 100);
    let offset = query.offset.max(0);

    let start = Instant::now();
    let posts = match query.sort.as_str() {
        "latest" => {
            PostService::new((**pool).clone())
                .list_latest(limit, offset)
                .await?
        }
        "trending" => state.trending.trending_post_views(limit, offset).await?,
        _ => {
            return Err(AppError::BadRequest(
                "Invalid sort parameter. Must be 'latest' or 'trending'".to_string(),
            ))
        }
    };

    let elapsed = start.elapsed().as_secs_f64();
    FEED_REQUEST_DURATION_SECONDS
        .with_label_values(&[query.sort.as_str()])
        .observe(elapsed);
    FEED_REQUEST_TOTAL
        .with_label_values(&[query.sort.as_str()])
        .inc();

    Ok(HttpResponse::Ok().json(posts))
}

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub content: String,
    #[serde(rename = "type")]
    pub post_type: PostType,
}

/// Create a new post attributed to the caller
pub async fn create_post(
    pool: web::Data<PgPool>,
    user_id: UserId,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let post = service
        .create_post(user_id.0, &req.content, req.post_type)
        .await?;

    Ok(HttpResponse::Ok().json(post))
}
