/// Post service - post creation and the latest read path
use crate::db::{post_repo, reaction_repo};
use crate::error::{AppError, Result};
use crate::models::{CommunityStats, PostType, PostView};
use sqlx::PgPool;
use uuid::Uuid;

pub struct PostService {
    pool: PgPool,
}

impl PostService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a post and return it as the feed renders it: embedded
    /// author profile, zeroed aggregates
    pub async fn create_post(
        &self,
        author_id: Uuid,
        content: &str,
        post_type: PostType,
    ) -> Result<PostView> {
        let post = post_repo::create_post(&self.pool, author_id, content, post_type.as_str())
            .await?;

        post_repo::find_post_view_by_id(&self.pool, post.id)
            .await?
            .ok_or_else(|| AppError::Internal("Created post vanished before read-back".into()))
    }

    /// Latest feed: newest-first straight from the store
    pub async fn list_latest(&self, limit: i64, offset: i64) -> Result<Vec<PostView>> {
        let posts = post_repo::list_recent_post_views(&self.pool, limit, offset).await?;
        Ok(posts)
    }

    /// Single post with aggregates
    pub async fn get_post(&self, post_id: Uuid) -> Result<Option<PostView>> {
        let post = post_repo::find_post_view_by_id(&self.pool, post_id).await?;
        Ok(post)
    }

    /// Community-wide activity totals
    pub async fn stats(&self) -> Result<CommunityStats> {
        let total_posts = post_repo::count_posts(&self.pool).await?;
        let total_reactions = reaction_repo::count_all_reactions(&self.pool).await?;

        Ok(CommunityStats {
            total_posts,
            total_reactions,
        })
    }
}
