//! # Dreamlog Infrastructure
//!
//! Concrete implementations of the ports defined in `dreamlog-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL repositories via SeaORM. Without it
//!   only the in-memory repositories are built.

pub mod auth;
pub mod database;
pub mod policy;

pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
pub use database::{InMemoryPostRepository, InMemoryUserRepository};
pub use policy::OwnerOnlyPolicy;

#[cfg(feature = "postgres")]
pub use database::{PostgresPostRepository, PostgresUserRepository};
