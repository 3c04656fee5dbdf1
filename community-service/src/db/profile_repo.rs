use crate::models::Profile;
use sqlx::{PgPool, Row};
use uuid::Uuid;

/// Find a profile by user ID
pub async fn find_profile_by_id(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<Profile>, sqlx::Error> {
    let profile = sqlx::query_as::<_, Profile>(
        r#"
        SELECT id, full_name, role_label, avatar_url, user_role, created_at, updated_at
        FROM profiles
        WHERE id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(profile)
}

/// Create or update the caller's profile display fields
pub async fn upsert_profile(
    pool: &PgPool,
    user_id: Uuid,
    full_name: &str,
    role_label: Option<&str>,
    avatar_url: Option<&str>,
) -> Result<Profile, sqlx::Error> {
    let profile = sqlx::query_as::<_, Profile>(
        r#"
        INSERT INTO profiles (id, full_name, role_label, avatar_url)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (id) DO UPDATE
        SET full_name = EXCLUDED.full_name,
            role_label = EXCLUDED.role_label,
            avatar_url = EXCLUDED.avatar_url,
            updated_at = NOW()
        RETURNING id, full_name, role_label, avatar_url, user_role, created_at, updated_at
        "#,
    )
    .bind(user_id)
    .bind(full_name)
    .bind(role_label)
    .bind(avatar_url)
    .fetch_one(pool)
    .await?;

    Ok(profile)
}

/// Read the caller's role preference; absent profiles default to talent
pub async fn get_user_role(pool: &PgPool, user_id: Uuid) -> Result<String, sqlx::Error> {
    let row = sqlx::query("SELECT user_role FROM profiles WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    Ok(row
        .map(|r| r.get::<String, _>("user_role"))
        .unwrap_or_else(|| "talent".to_string()))
}

/// Persist the caller's role preference, creating a minimal profile row
/// when none exists yet
pub async fn set_user_role(
    pool: &PgPool,
    user_id: Uuid,
    user_role: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO profiles (id, full_name, user_role)
        VALUES ($1, 'Community Member', $2)
        ON CONFLICT (id) DO UPDATE
        SET user_role = EXCLUDED.user_role, updated_at = NOW()
        "#,
    )
    .bind(user_id)
    .bind(user_role)
    .execute(pool)
    .await?;

    Ok(())
}
