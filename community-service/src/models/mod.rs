/// Data models for community-service
///
/// This module defines structures for:
/// - Post: Community feed entries with a category tag
/// - Comment: Comments on posts
/// - Reaction: Per-user engagement signals (fire, bulb, clap, heart)
/// - Profile: Display fields and the role preference
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Closed set of post category tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostType {
    Text,
    Image,
    PortfolioDrop,
    Brainstorm,
    CollabCall,
    Win,
    FeedbackRequest,
}

impl PostType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostType::Text => "text",
            PostType::Image => "image",
            PostType::PortfolioDrop => "portfolio_drop",
            PostType::Brainstorm => "brainstorm",
            PostType::CollabCall => "collab_call",
            PostType::Win => "win",
            PostType::FeedbackRequest => "feedback_request",
        }
    }
}

/// Closed set of reaction kinds a user may attach once per post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactionKind {
    Fire,
    Bulb,
    Clap,
    Heart,
}

impl ReactionKind {
    pub const ALL: [ReactionKind; 4] = [
        ReactionKind::Fire,
        ReactionKind::Bulb,
        ReactionKind::Clap,
        ReactionKind::Heart,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReactionKind::Fire => "fire",
            ReactionKind::Bulb => "bulb",
            ReactionKind::Clap => "clap",
            ReactionKind::Heart => "heart",
        }
    }
}

/// Role preference, formerly a browser local-storage key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Talent,
    Employer,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Talent => "talent",
            UserRole::Employer => "employer",
        }
    }
}

/// Post entity as stored
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub post_type: String,
    pub created_at: DateTime<Utc>,
}

/// Comment entity - immutable once created
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Reaction entity - at most one row per (post, user, kind)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Reaction {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub reaction: String,
    pub created_at: DateTime<Utc>,
}

/// Profile entity
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub full_name: String,
    pub role_label: Option<String>,
    pub avatar_url: Option<String>,
    pub user_role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Aggregate reaction counts for a post, derived by query
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReactionCounts {
    pub fire: i64,
    pub bulb: i64,
    pub clap: i64,
    pub heart: i64,
}

impl ReactionCounts {
    pub fn total(&self) -> i64 {
        self.fire + self.bulb + self.clap + self.heart
    }
}

/// Author fields embedded on post reads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub id: Uuid,
    pub full_name: String,
    pub role: Option<String>,
    pub avatar_url: Option<String>,
}

/// A post as returned by the feed: stored fields plus embedded author
/// profile and aggregate counts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostView {
    pub id: Uuid,
    pub content: String,
    #[serde(rename = "type")]
    pub post_type: String,
    pub created_at: DateTime<Utc>,
    pub author_id: Uuid,
    pub profiles: ProfileSummary,
    pub reactions: ReactionCounts,
    pub comments: i64,
}

/// Community-wide activity totals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityStats {
    pub total_posts: i64,
    pub total_reactions: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_type_wire_names() {
        let t: PostType = serde_json::from_str("\"portfolio_drop\"").unwrap();
        assert_eq!(t, PostType::PortfolioDrop);
        assert_eq!(t.as_str(), "portfolio_drop");
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"portfolio_drop\"");
    }

    #[test]
    fn test_unknown_reaction_kind_rejected() {
        let result: Result<ReactionKind, _> = serde_json::from_str("\"thumbs_up\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_reaction_counts_total() {
        let counts = ReactionCounts {
            fire: 2,
            bulb: 1,
            clap: 0,
            heart: 3,
        };
        assert_eq!(counts.total(), 6);
        assert_eq!(ReactionCounts::default().total(), 0);
    }
}
