use crate::models::{Post, PostView, ProfileSummary, ReactionCounts};
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

/// Create a new post
/// Returns the created post
pub async fn create_post(
    pool: &PgPool,
    author_id: Uuid,
    content: &str,
    post_type: &str,
) -> Result<Post, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (author_id, content, post_type)
        VALUES ($1, $2, $3)
        RETURNING id, author_id, content, post_type, created_at
        "#,
    )
    .bind(author_id)
    .bind(content)
    .bind(post_type)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// Shared SELECT for post reads with embedded author profile and
/// aggregate counts. Aggregates are derived here instead of stored, so
/// they cannot drift from the reaction/comment tables.
const POST_VIEW_SELECT: &str = r#"
    SELECT p.id, p.author_id, p.content, p.post_type, p.created_at,
           COALESCE(pr.full_name, 'Community Member') AS full_name,
           pr.role_label,
           pr.avatar_url,
           COALESCE(rc.fire, 0)  AS fire,
           COALESCE(rc.bulb, 0)  AS bulb,
           COALESCE(rc.clap, 0)  AS clap,
           COALESCE(rc.heart, 0) AS heart,
           COALESCE(cc.comment_count, 0) AS comment_count
    FROM posts p
    LEFT JOIN profiles pr ON pr.id = p.author_id
    LEFT JOIN (
        SELECT post_id,
               COUNT(*) FILTER (WHERE reaction = 'fire')  AS fire,
               COUNT(*) FILTER (WHERE reaction = 'bulb')  AS bulb,
               COUNT(*) FILTER (WHERE reaction = 'clap')  AS clap,
               COUNT(*) FILTER (WHERE reaction = 'heart') AS heart
        FROM post_reactions
        GROUP BY post_id
    ) rc ON rc.post_id = p.id
    LEFT JOIN (
        SELECT post_id, COUNT(*) AS comment_count
        FROM comments
        GROUP BY post_id
    ) cc ON cc.post_id = p.id
"#;

fn row_to_post_view(row: &PgRow) -> PostView {
    PostView {
        id: row.get("id"),
        content: row.get("content"),
        post_type: row.get("post_type"),
        created_at: row.get("created_at"),
        author_id: row.get("author_id"),
        profiles: ProfileSummary {
            id: row.get("author_id"),
            full_name: row.get("full_name"),
            role: row.get("role_label"),
            avatar_url: row.get("avatar_url"),
        },
        reactions: ReactionCounts {
            fire: row.get("fire"),
            bulb: row.get("bulb"),
            clap: row.get("clap"),
            heart: row.get("heart"),
        },
        comments: row.get("comment_count"),
    }
}

/// Fetch posts newest-first with embedded profile and aggregates
pub async fn list_recent_post_views(
    pool: &PgPool,
    limit: i64,
    offset: i64,
) -> Result<Vec<PostView>, sqlx::Error> {
    let sql = format!("{POST_VIEW_SELECT} ORDER BY p.created_at DESC LIMIT $1 OFFSET $2");
    let rows = sqlx::query(&sql)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(row_to_post_view).collect())
}

/// Fetch a single post view with embedded profile and aggregates
pub async fn find_post_view_by_id(
    pool: &PgPool,
    post_id: Uuid,
) -> Result<Option<PostView>, sqlx::Error> {
    let sql = format!("{POST_VIEW_SELECT} WHERE p.id = $1");
    let row = sqlx::query(&sql).bind(post_id).fetch_optional(pool).await?;

    Ok(row.as_ref().map(row_to_post_view))
}

/// Fetch post views for a set of ids (unordered; the caller re-applies
/// its ranking order)
pub async fn get_post_views_by_ids(
    pool: &PgPool,
    post_ids: &[Uuid],
) -> Result<Vec<PostView>, sqlx::Error> {
    let sql = format!("{POST_VIEW_SELECT} WHERE p.id = ANY($1)");
    let rows = sqlx::query(&sql).bind(post_ids).fetch_all(pool).await?;

    Ok(rows.iter().map(row_to_post_view).collect())
}

/// A post reduced to the fields the trending ranker scores on
#[derive(Debug, Clone)]
pub struct TrendingCandidate {
    pub post_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub reactions_total: i64,
    pub comment_count: i64,
}

/// Fetch the most recent posts as ranking candidates
pub async fn list_trending_candidates(
    pool: &PgPool,
    limit: i64,
) -> Result<Vec<TrendingCandidate>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT p.id, p.created_at,
               COALESCE(rc.reactions_total, 0) AS reactions_total,
               COALESCE(cc.comment_count, 0) AS comment_count
        FROM posts p
        LEFT JOIN (
            SELECT post_id, COUNT(*) AS reactions_total
            FROM post_reactions
            GROUP BY post_id
        ) rc ON rc.post_id = p.id
        LEFT JOIN (
            SELECT post_id, COUNT(*) AS comment_count
            FROM comments
            GROUP BY post_id
        ) cc ON cc.post_id = p.id
        ORDER BY p.created_at DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|r| TrendingCandidate {
            post_id: r.get("id"),
            created_at: r.get("created_at"),
            reactions_total: r.get("reactions_total"),
            comment_count: r.get("comment_count"),
        })
        .collect())
}

/// Count all posts
pub async fn count_posts(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let row = sqlx::query("SELECT COUNT(*) AS count FROM posts")
        .fetch_one(pool)
        .await?;

    Ok(row.get::<i64, _>("count"))
}
