use crate::models::{Reaction, ReactionCounts};
use sqlx::{PgPool, Row};
use uuid::Uuid;

/// Insert a reaction, letting the unique index arbitrate duplicates.
///
/// Returns `None` when a row for the same (post, user, kind) already
/// exists. There is no pre-insert existence check: the insert itself
/// reports the conflict, so two concurrent identical requests cannot
/// both succeed.
pub async fn create_reaction(
    pool: &PgPool,
    post_id: Uuid,
    user_id: Uuid,
    reaction: &str,
) -> Result<Option<Reaction>, sqlx::Error> {
    let reaction = sqlx::query_as::<_, Reaction>(
        r#"
        INSERT INTO post_reactions (post_id, user_id, reaction)
        VALUES ($1, $2, $3)
        ON CONFLICT (post_id, user_id, reaction) DO NOTHING
        RETURNING id, post_id, user_id, reaction, created_at
        "#,
    )
    .bind(post_id)
    .bind(user_id)
    .bind(reaction)
    .fetch_optional(pool)
    .await?;

    Ok(reaction)
}

/// Aggregate reaction counts for a post
pub async fn count_reactions_by_post(
    pool: &PgPool,
    post_id: Uuid,
) -> Result<ReactionCounts, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT COUNT(*) FILTER (WHERE reaction = 'fire')  AS fire,
               COUNT(*) FILTER (WHERE reaction = 'bulb')  AS bulb,
               COUNT(*) FILTER (WHERE reaction = 'clap')  AS clap,
               COUNT(*) FILTER (WHERE reaction = 'heart') AS heart
        FROM post_reactions
        WHERE post_id = $1
        "#,
    )
    .bind(post_id)
    .fetch_one(pool)
    .await?;

    Ok(ReactionCounts {
        fire: row.get("fire"),
        bulb: row.get("bulb"),
        clap: row.get("clap"),
        heart: row.get("heart"),
    })
}

/// Count all reactions across all posts
pub async fn count_all_reactions(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let row = sqlx::query("SELECT COUNT(*) AS count FROM post_reactions")
        .fetch_one(pool)
        .await?;

    Ok(row.get::<i64, _>("count"))
}
