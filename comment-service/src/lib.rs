/// Comment Service Library
///
/// A pluggable commenting add-on: any content kind registered with the
/// content registry can receive comments, addressed by a
/// (content type, object id) pair.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and route tree
/// - `models`: Comment record and content reference types
/// - `forms`: Submission form validation
/// - `registry`: Content-type registry and resolvers
/// - `services`: Business logic layer
/// - `db`: Comment store trait and Postgres implementation
/// - `middleware`: JWT bearer authentication
/// - `error`: Error types and handling
/// - `config`: Configuration management
/// - `metrics`: Prometheus collectors and `/metrics` handler
/// - `openapi`: OpenAPI document for the comment endpoints
pub mod config;
pub mod db;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod registry;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};

use crate::db::CommentStore;
use crate::registry::ContentRegistry;
use std::sync::Arc;

/// Shared application state handed to handlers.
pub struct AppState {
    /// Commentable kinds, registered at startup.
    pub registry: Arc<ContentRegistry>,
    /// The persistent comment collection.
    pub comments: Arc<dyn CommentStore>,
}

impl AppState {
    pub fn new(registry: ContentRegistry, comments: Arc<dyn CommentStore>) -> Self {
        Self {
            registry: Arc::new(registry),
            comments,
        }
    }
}
