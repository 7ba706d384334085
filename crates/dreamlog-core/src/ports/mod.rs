//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod policy;
mod repository;

pub use auth::{AuthError, PasswordService, TokenClaims, TokenService};
pub use policy::{AccessPolicy, Actor};
pub use repository::{BaseRepository, PostRepository, UserRepository};
