/// Database access layer
pub mod comment_repo;

pub use comment_repo::{CommentStore, PgCommentStore};
