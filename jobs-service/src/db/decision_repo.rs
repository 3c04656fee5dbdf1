use crate::models::JobDecision;
use sqlx::PgPool;
use uuid::Uuid;

/// Record a swipe decision, replacing any earlier decision for the same
/// (job, user) pair
pub async fn upsert_decision(
    pool: &PgPool,
    job_id: Uuid,
    user_id: Uuid,
    decision: &str,
) -> Result<JobDecision, sqlx::Error> {
    let decision = sqlx::query_as::<_, JobDecision>(
        r#"
        INSERT INTO job_decisions (job_id, user_id, decision)
        VALUES ($1, $2, $3)
        ON CONFLICT (job_id, user_id) DO UPDATE
        SET decision = EXCLUDED.decision, created_at = NOW()
        RETURNING id, job_id, user_id, decision, created_at
        "#,
    )
    .bind(job_id)
    .bind(user_id)
    .bind(decision)
    .fetch_one(pool)
    .await?;

    Ok(decision)
}

/// Undo a decision. Returns false when there was nothing to undo.
pub async fn delete_decision(
    pool: &PgPool,
    job_id: Uuid,
    user_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM job_decisions WHERE job_id = $1 AND user_id = $2")
        .bind(job_id)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// List the caller's decisions, newest first; an empty filter lists both
/// applied and skipped
pub async fn list_decisions_by_user(
    pool: &PgPool,
    user_id: Uuid,
    decision_filter: &str,
    limit: i64,
    offset: i64,
) -> Result<Vec<JobDecision>, sqlx::Error> {
    let decisions = sqlx::query_as::<_, JobDecision>(
        r#"
        SELECT id, job_id, user_id, decision, created_at
        FROM job_decisions
        WHERE user_id = $1
          AND ($2 = '' OR decision = $2)
        ORDER BY created_at DESC
        LIMIT $3 OFFSET $4
        "#,
    )
    .bind(user_id)
    .bind(decision_filter)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(decisions)
}
