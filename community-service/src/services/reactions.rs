/// Reaction service - reaction inserts and authoritative aggregates
use crate::db::reaction_repo;
use crate::error::{AppError, Result};
use crate::models::{Reaction, ReactionCounts, ReactionKind};
use sqlx::PgPool;
use uuid::Uuid;

pub struct ReactionService {
    pool: PgPool,
}

impl ReactionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Attach a reaction to a post.
    ///
    /// The unique index on (post_id, user_id, reaction) arbitrates
    /// duplicates, including concurrent ones. On success the post's
    /// aggregate counts are read back so the response carries the
    /// authoritative state instead of leaving the client to bump a
    /// local counter.
    pub async fn react(
        &self,
        post_id: Uuid,
        user_id: Uuid,
        kind: ReactionKind,
    ) -> Result<(Reaction, ReactionCounts)> {
        let reaction =
            reaction_repo::create_reaction(&self.pool, post_id, user_id, kind.as_str())
                .await?
                .ok_or(AppError::AlreadyReacted)?;

        let counts = reaction_repo::count_reactions_by_post(&self.pool, post_id).await?;

        Ok((reaction, counts))
    }
}
