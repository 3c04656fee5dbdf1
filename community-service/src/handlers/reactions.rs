/// Reaction handlers - HTTP endpoints for reaction operations
use crate::error::Result;
use crate::models::{Reaction, ReactionCounts, ReactionKind};
use crate::services::ReactionService;
use actix_web::{web, HttpResponse};
use auth_token::UserId;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Request body for creating a reaction; unknown kinds fail
/// deserialization and never reach the store
#[derive(Deserialize)]
pub struct CreateReactionRequest {
    pub reaction: ReactionKind,
}

/// The stored reaction plus the post's authoritative aggregate counts,
/// so clients re-render from server state instead of bumping a local
/// counter
#[derive(Serialize)]
pub struct ReactionResponse {
    #[serde(flatten)]
    pub reaction: Reaction,
    pub reactions: ReactionCounts,
}

/// Attach a reaction to a post
pub async fn create_reaction(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    user_id: UserId,
    req: web::Json<CreateReactionRequest>,
) -> Result<HttpResponse> {
    let service = ReactionService::new((**pool).clone());
    let (reaction, counts) = service.react(*post_id, user_id.0, req.reaction).await?;

    Ok(HttpResponse::Ok().json(ReactionResponse {
        reaction,
        reactions: counts,
    }))
}
