/// Data models for comment-service
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

/// Comment entity - a single comment attached to a content reference
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Comment {
    pub id: Uuid,
    pub content_type: String,
    pub object_id: Uuid,
    pub user_id: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Composite key naming a commentable entity in the host application.
///
/// Only produced by `ContentRegistry::resolve`, so holding one means both
/// halves of the key resolved to an existing record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentRef {
    pub content_type: String,
    pub object_id: Uuid,
}

impl ContentRef {
    pub fn new(content_type: impl Into<String>, object_id: Uuid) -> Self {
        Self {
            content_type: content_type.into(),
            object_id,
        }
    }
}

impl fmt::Display for ContentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.content_type, self.object_id)
    }
}
