/// Database access layer
///
/// Repository modules over the community schema. All functions take a
/// `&PgPool` and return `sqlx::Error` for the service layer to wrap.
pub mod comment_repo;
pub mod post_repo;
pub mod profile_repo;
pub mod reaction_repo;
