/// Profile handlers - own profile and the role preference
///
/// The role preference used to live in browser local storage under a
/// single key; it is now explicit server state the client loads at
/// startup (GET) and persists on change (PUT).
use crate::db::profile_repo;
use crate::error::{AppError, Result};
use crate::models::UserRole;
use actix_web::{web, HttpResponse};
use auth_token::UserId;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Get the caller's profile
pub async fn get_my_profile(pool: web::Data<PgPool>, user_id: UserId) -> Result<HttpResponse> {
    match profile_repo::find_profile_by_id(&pool, user_id.0).await? {
        Some(profile) => Ok(HttpResponse::Ok().json(profile)),
        None => Err(AppError::NotFound("Profile not found".into())),
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub full_name: String,
    pub role_label: Option<String>,
    pub avatar_url: Option<String>,
}

/// Create or update the caller's profile display fields
pub async fn update_my_profile(
    pool: web::Data<PgPool>,
    user_id: UserId,
    req: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse> {
    let profile = profile_repo::upsert_profile(
        &pool,
        user_id.0,
        &req.full_name,
        req.role_label.as_deref(),
        req.avatar_url.as_deref(),
    )
    .await?;

    Ok(HttpResponse::Ok().json(profile))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RolePreference {
    pub role: UserRole,
}

/// Load the caller's role preference; defaults to talent when unset
pub async fn get_role_preference(
    pool: web::Data<PgPool>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let stored = profile_repo::get_user_role(&pool, user_id.0).await?;
    let role = match stored.as_str() {
        "employer" => UserRole::Employer,
        _ => UserRole::Talent,
    };

    Ok(HttpResponse::Ok().json(RolePreference { role }))
}

/// Persist the caller's role preference
pub async fn set_role_preference(
    pool: web::Data<PgPool>,
    user_id: UserId,
    req: web::Json<RolePreference>,
) -> Result<HttpResponse> {
    profile_repo::set_user_role(&pool, user_id.0, req.role.as_str()).await?;

    Ok(HttpResponse::Ok().json(RolePreference { role: req.role }))
}
