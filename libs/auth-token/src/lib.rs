//! # Auth Token Library
//!
//! Shared JWT validation and authentication middleware for Kwik Konnect
//! services. Token issuance belongs to the hosted identity provider; this
//! library only validates what it issued.
//!
//! ## Modules
//! - `jwt`: RS256 token validation with startup-initialized keys
//! - `middleware`: Actix middleware that guards protected route scopes

pub mod jwt;
pub mod middleware;

pub use jwt::{validate_token, Claims};
pub use middleware::{JwtAuthMiddleware, UserId};
