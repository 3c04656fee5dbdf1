/// Comment handlers - HTTP endpoints for comment operations
use crate::error::Result;
use crate::services::CommentService;
use actix_web::{web, HttpResponse};
use auth_token::UserId;
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    50
}

/// Request body for creating a comment
#[derive(Deserialize)]
pub struct CreateCommentRequest {
    pub content: String,
}

/// Create a new comment on a post
pub async fn create_comment(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    user_id: UserId,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    let service = CommentService::new((**pool).clone());
    let comment = service
        .create_comment(*post_id, user_id.0, &req.content)
        .await?;

    Ok(HttpResponse::Ok().json(comment))
}

/// Get comments for a post, newest first
pub async fn list_comments(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    let service = CommentService::new((**pool).clone());
    let comments = service
        .get_post_comments(*post_id, query.limit.clamp(1, 100), query.offset.max(0))
        .await?;

    Ok(HttpResponse::Ok().json(comments))
}
