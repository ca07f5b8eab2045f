//! Shared test doubles and helpers.
//!
//! Provides an in-memory comment store and a static content resolver so
//! endpoint tests can exercise the full route tree without a database,
//! plus helpers for minting bearer tokens.

use async_trait::async_trait;
use chrono::Utc;
use comment_service::db::CommentStore;
use comment_service::error::Result;
use comment_service::models::{Comment, ContentRef};
use comment_service::registry::ContentResolver;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

pub const JWT_SECRET: &str = "test-secret-key-min-32-chars-long!!!";

/// In-memory comment store, seeded and inspected directly by tests.
#[derive(Clone, Default)]
pub struct InMemoryCommentStore {
    comments: Arc<Mutex<Vec<Comment>>>,
}

impl InMemoryCommentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.comments.lock().unwrap().len()
    }

    pub fn all(&self) -> Vec<Comment> {
        self.comments.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommentStore for InMemoryCommentStore {
    async fn insert(&self, target: &ContentRef, user_id: Uuid, body: &str) -> Result<Comment> {
        let comment = Comment {
            id: Uuid::new_v4(),
            content_type: target.content_type.clone(),
            object_id: target.object_id,
            user_id,
            body: body.to_string(),
            created_at: Utc::now(),
        };

        self.comments.lock().unwrap().push(comment.clone());
        Ok(comment)
    }

    async fn list_for_target(&self, target: &ContentRef) -> Result<Vec<Comment>> {
        let comments = self.comments.lock().unwrap();
        Ok(comments
            .iter()
            .filter(|c| c.content_type == target.content_type && c.object_id == target.object_id)
            .cloned()
            .collect())
    }
}

/// Resolver over a fixed set of known object ids.
pub struct StaticContentResolver {
    ids: HashSet<Uuid>,
}

impl StaticContentResolver {
    pub fn new(ids: &[Uuid]) -> Self {
        Self {
            ids: ids.iter().copied().collect(),
        }
    }
}

#[async_trait]
impl ContentResolver for StaticContentResolver {
    async fn exists(&self, object_id: Uuid) -> Result<bool> {
        Ok(self.ids.contains(&object_id))
    }
}

#[derive(Serialize)]
struct Claims {
    sub: String,
    iat: usize,
    exp: usize,
}

fn sign_token(user_id: Uuid, exp_offset_secs: i64, secret: &str) -> String {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: user_id.to_string(),
        iat: now as usize,
        exp: (now + exp_offset_secs) as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .expect("Failed to encode JWT")
}

pub fn valid_token(user_id: Uuid) -> String {
    sign_token(user_id, 3600, JWT_SECRET)
}

pub fn expired_token(user_id: Uuid) -> String {
    sign_token(user_id, -3600, JWT_SECRET)
}

pub fn wrong_key_token(user_id: Uuid) -> String {
    sign_token(user_id, 3600, "wrong-secret-key!!!!!!!!!!!!!!!!!!!!")
}
