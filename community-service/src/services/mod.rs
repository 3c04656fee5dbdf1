/// Business logic layer for community-service
///
/// - Post service: post creation and the latest read path
/// - Comment service: comment creation and listing
/// - Reaction service: reaction inserts and authoritative aggregates
/// - Trending: ranking for the trending sort mode
pub mod comments;
pub mod posts;
pub mod reactions;
pub mod trending;

pub use comments::CommentService;
pub use posts::PostService;
pub use reactions::ReactionService;
pub use trending::{TrendingRankingConfig, TrendingService};
