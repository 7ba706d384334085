//! SeaORM entities.

pub mod comment;
pub mod dream_post;
pub mod user;
