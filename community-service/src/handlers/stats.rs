/// Community activity totals shown in the feed sidebar
use crate::error::Result;
use crate::services::PostService;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

pub async fn community_stats(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let stats = PostService::new((**pool).clone()).stats().await?;

    Ok(HttpResponse::Ok().json(stats))
}
