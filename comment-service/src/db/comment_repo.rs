/// Comment repository - the persistent comment collection.
use crate::error::Result;
use crate::models::{Comment, ContentRef};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// Persistent collection of comment records.
///
/// A trait so endpoint tests can run against an in-memory double; the
/// service binary always uses [`PgCommentStore`].
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Persist a new comment attached to a resolved content reference.
    async fn insert(&self, target: &ContentRef, user_id: Uuid, body: &str) -> Result<Comment>;

    /// All comments attached to a content reference, in insertion order.
    async fn list_for_target(&self, target: &ContentRef) -> Result<Vec<Comment>>;
}

/// Postgres-backed comment store.
pub struct PgCommentStore {
    pool: PgPool,
}

impl PgCommentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentStore for PgCommentStore {
    async fn insert(&self, target: &ContentRef, user_id: Uuid, body: &str) -> Result<Comment> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (content_type, object_id, user_id, body)
            VALUES ($1, $2, $3, $4)
            RETURNING id, content_type, object_id, user_id, body, created_at
            "#,
        )
        .bind(&target.content_type)
        .bind(target.object_id)
        .bind(user_id)
        .bind(body)
        .fetch_one(&self.pool)
        .await?;

        Ok(comment)
    }

    async fn list_for_target(&self, target: &ContentRef) -> Result<Vec<Comment>> {
        // Insertion order; id tiebreak keeps equal-timestamp rows stable.
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, content_type, object_id, user_id, body, created_at
            FROM comments
            WHERE content_type = $1 AND object_id = $2
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(&target.content_type)
        .bind(target.object_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }
}
