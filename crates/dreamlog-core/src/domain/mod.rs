//! Domain entities - the core business objects.

mod comment;
mod post;
mod user;

pub use comment::Comment;
pub use post::{DreamPost, Owner, PostChanges};
pub use user::User;
