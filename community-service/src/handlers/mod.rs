/// HTTP handlers for community endpoints
///
/// - Posts: feed reads (latest/trending) and post creation
/// - Comments: create and list comments on a post
/// - Reactions: attach a reaction to a post
/// - Profiles: own profile and the role preference
/// - Stats: community activity totals
pub mod comments;
pub mod posts;
pub mod profiles;
pub mod reactions;
pub mod stats;

pub use comments::{create_comment, list_comments};
pub use posts::{create_post, list_posts, FeedState};
pub use profiles::{get_my_profile, get_role_preference, set_role_preference, update_my_profile};
pub use reactions::create_reaction;
pub use stats::community_stats;
