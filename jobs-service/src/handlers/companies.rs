/// Company handlers - directory and detail pages
use crate::error::Result;
use crate::models::{CompanyView, JobView};
use crate::services::JobService;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CompanyListParams {
    pub search: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    50
}

/// List companies matching the search term
pub async fn list_companies(
    pool: web::Data<PgPool>,
    query: web::Query<CompanyListParams>,
) -> Result<HttpResponse> {
    let companies = JobService::new((**pool).clone())
        .list_companies(
            query.search.as_deref().unwrap_or("").trim(),
            query.limit.clamp(1, 100),
            query.offset.max(0),
        )
        .await?;

    Ok(HttpResponse::Ok().json(companies))
}

/// Company detail: directory fields plus its open jobs
#[derive(Debug, Serialize)]
pub struct CompanyDetail {
    #[serde(flatten)]
    pub company: CompanyView,
    pub jobs: Vec<JobView>,
}

/// Get a company with its open jobs
pub async fn get_company(
    pool: web::Data<PgPool>,
    company_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = JobService::new((**pool).clone());
    match service.get_company(*company_id).await? {
        Some((company, jobs)) => Ok(HttpResponse::Ok().json(CompanyDetail { company, jobs })),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}
