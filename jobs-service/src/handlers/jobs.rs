/// Job handlers - listing, detail, saved jobs
use crate::error::Result;
use crate::metrics::listings::JOB_LIST_TOTAL;
use crate::services::{JobFilter, JobService, JobSort};
use actix_web::{web, HttpResponse};
use auth_token::UserId;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct JobListParams {
    pub search: Option<String>,
    pub location: Option<String>,
    /// Comma-separated work models (remote, hybrid, on_site)
    pub work_model: Option<String>,
    /// Comma-separated job types (full_time, part_time, internship, contract)
    pub job_type: Option<String>,
    /// Comma-separated experience levels (entry, junior, mid, senior)
    pub experience: Option<String>,
    #[serde(default)]
    pub sort: String,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    50
}

/// List open jobs matching the query filters
pub async fn list_jobs(
    pool: web::Data<PgPool>,
    query: web::Query<JobListParams>,
) -> Result<HttpResponse> {
    let filter = JobFilter::parse(
        query.search.as_deref(),
        query.location.as_deref(),
        query.work_model.as_deref(),
        query.job_type.as_deref(),
        query.experience.as_deref(),
    )?;
    let sort = JobSort::parse(&query.sort)?;

    let jobs = JobService::new((**pool).clone())
        .list_jobs(&filter, sort, query.limit.clamp(1, 100), query.offset.max(0))
        .await?;

    let sort_label = if query.sort.is_empty() {
        "recent"
    } else {
        query.sort.as_str()
    };
    JOB_LIST_TOTAL.with_label_values(&[sort_label]).inc();

    Ok(HttpResponse::Ok().json(jobs))
}

/// Get a job by ID
pub async fn get_job(pool: web::Data<PgPool>, job_id: web::Path<Uuid>) -> Result<HttpResponse> {
    let service = JobService::new((**pool).clone());
    match service.get_job(*job_id).await? {
        Some(job) => Ok(HttpResponse::Ok().json(job)),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

#[derive(Debug, Serialize)]
pub struct SavedToggleResponse {
    pub saved: bool,
}

/// Toggle a saved-job marker for the caller
pub async fn toggle_saved_job(
    pool: web::Data<PgPool>,
    job_id: web::Path<Uuid>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let saved = JobService::new((**pool).clone())
        .toggle_saved(*job_id, user_id.0)
        .await?;

    Ok(HttpResponse::Ok().json(SavedToggleResponse { saved }))
}

/// List the caller's saved jobs
pub async fn list_saved_jobs(pool: web::Data<PgPool>, user_id: UserId) -> Result<HttpResponse> {
    let jobs = JobService::new((**pool).clone())
        .list_saved(user_id.0)
        .await?;

    Ok(HttpResponse::Ok().json(jobs))
}
