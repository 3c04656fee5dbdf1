/// Comment service - comment creation and listing
///
/// Comment content is stored as given; no length or emptiness checks are
/// applied, matching the write contract clients already rely on.
use crate::db::comment_repo;
use crate::error::Result;
use crate::models::Comment;
use sqlx::PgPool;
use uuid::Uuid;

pub struct CommentService {
    pool: PgPool,
}

impl CommentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new comment attributed to the caller
    pub async fn create_comment(
        &self,
        post_id: Uuid,
        author_id: Uuid,
        content: &str,
    ) -> Result<Comment> {
        let comment = comment_repo::create_comment(&self.pool, post_id, author_id, content).await?;
        Ok(comment)
    }

    /// Get comments for a post, newest first
    pub async fn get_post_comments(
        &self,
        post_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Comment>> {
        let comments =
            comment_repo::get_comments_by_post(&self.pool, post_id, limit, offset).await?;
        Ok(comments)
    }
}
