/// Decision handlers - swipe outcomes on job listings
use crate::error::{AppError, Result};
use crate::models::SwipeDecision;
use crate::services::JobService;
use actix_web::{web, HttpResponse};
use auth_token::UserId;
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

/// Request body for recording a swipe; unknown decisions fail
/// deserialization
#[derive(Debug, Deserialize)]
pub struct CreateDecisionRequest {
    pub decision: SwipeDecision,
}

/// Record a swipe decision on a job
pub async fn create_decision(
    pool: web::Data<PgPool>,
    job_id: web::Path<Uuid>,
    user_id: UserId,
    req: web::Json<CreateDecisionRequest>,
) -> Result<HttpResponse> {
    let decision = JobService::new((**pool).clone())
        .decide(*job_id, user_id.0, req.decision)
        .await?;

    Ok(HttpResponse::Ok().json(decision))
}

/// Undo the caller's decision on a job
pub async fn undo_decision(
    pool: web::Data<PgPool>,
    job_id: web::Path<Uuid>,
    user_id: UserId,
) -> Result<HttpResponse> {
    JobService::new((**pool).clone())
        .undo_decision(*job_id, user_id.0)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

#[derive(Debug, Deserialize)]
pub struct DecisionListParams {
    pub decision: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    50
}

/// List the caller's decisions, optionally filtered by outcome
pub async fn list_decisions(
    pool: web::Data<PgPool>,
    user_id: UserId,
    query: web::Query<DecisionListParams>,
) -> Result<HttpResponse> {
    let filter = match query.decision.as_deref() {
        None | Some("") => None,
        Some("applied") => Some(SwipeDecision::Applied),
        Some("skipped") => Some(SwipeDecision::Skipped),
        Some(other) => {
            return Err(AppError::BadRequest(format!(
                "Unknown decision filter '{other}'"
            )))
        }
    };

    let decisions = JobService::new((**pool).clone())
        .list_decisions(
            user_id.0,
            filter,
            query.limit.clamp(1, 100),
            query.offset.max(0),
        )
        .await?;

    Ok(HttpResponse::Ok().json(decisions))
}
