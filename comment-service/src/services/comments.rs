/// Comment service - resolves content references and reads/writes the
/// comment collection on behalf of the HTTP handlers.
use crate::db::CommentStore;
use crate::error::Result;
use crate::metrics;
use crate::models::{Comment, ContentRef};
use crate::registry::ContentRegistry;
use crate::AppState;
use std::sync::Arc;
use uuid::Uuid;

pub struct CommentService {
    registry: Arc<ContentRegistry>,
    comments: Arc<dyn CommentStore>,
}

impl CommentService {
    pub fn new(registry: Arc<ContentRegistry>, comments: Arc<dyn CommentStore>) -> Self {
        Self { registry, comments }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(state.registry.clone(), state.comments.clone())
    }

    /// Resolve a content reference from raw identifier tokens.
    ///
    /// Fails with Not-Found when either token does not lead to an
    /// existing record.
    pub async fn target(&self, content_type: &str, raw_object_id: &str) -> Result<ContentRef> {
        self.registry.resolve(content_type, raw_object_id).await
    }

    /// All comments attached to the target, in insertion order.
    pub async fn list_comments(&self, target: &ContentRef) -> Result<Vec<Comment>> {
        let comments = self.comments.list_for_target(target).await?;

        metrics::COMMENT_LIST_REQUESTS_TOTAL
            .with_label_values(&[target.content_type.as_str()])
            .inc();

        Ok(comments)
    }

    /// Persist a new comment by `user_id` on the target.
    ///
    /// Callers validate the submitted form first; this only sees clean text.
    pub async fn post_comment(
        &self,
        target: &ContentRef,
        user_id: Uuid,
        text: &str,
    ) -> Result<Comment> {
        let comment = self.comments.insert(target, user_id, text).await?;

        metrics::COMMENTS_CREATED_TOTAL
            .with_label_values(&[target.content_type.as_str()])
            .inc();
        tracing::info!(comment_id = %comment.id, target = %target, "comment created");

        Ok(comment)
    }
}
