/// Content registry - resolves (content type, object id) pairs to
/// concrete commentable entities.
///
/// The set of commentable kinds is registered once at startup and handed
/// to handlers through application state; there is no global registry.
use crate::error::{AppError, Result};
use crate::metrics;
use crate::models::ContentRef;
use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Resolves object ids for one registered content kind.
#[async_trait]
pub trait ContentResolver: Send + Sync {
    /// Whether an object with this id exists for the kind.
    async fn exists(&self, object_id: Uuid) -> Result<bool>;
}

/// Lookup table from content-type token to resolver.
pub struct ContentRegistry {
    kinds: HashMap<String, Arc<dyn ContentResolver>>,
}

impl ContentRegistry {
    pub fn new() -> Self {
        Self {
            kinds: HashMap::new(),
        }
    }

    /// Register a commentable kind under a content-type token.
    pub fn register(mut self, content_type: &str, resolver: Arc<dyn ContentResolver>) -> Self {
        self.kinds.insert(content_type.to_string(), resolver);
        self
    }

    /// Registered content-type tokens, sorted for stable logging.
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.kinds.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }

    /// Resolve a content reference from raw identifier tokens.
    ///
    /// Any identifier that does not lead to an existing record is a
    /// Not-Found: an unregistered content type, an object id that is not
    /// a UUID, or an id with no matching row.
    pub async fn resolve(&self, content_type: &str, raw_object_id: &str) -> Result<ContentRef> {
        let resolver = self.kinds.get(content_type).ok_or_else(|| {
            metrics::CONTENT_RESOLVE_FAILURES_TOTAL
                .with_label_values(&["unknown_type"])
                .inc();
            AppError::NotFound(format!("unknown content type '{content_type}'"))
        })?;

        let object_id = Uuid::parse_str(raw_object_id).map_err(|_| {
            metrics::CONTENT_RESOLVE_FAILURES_TOTAL
                .with_label_values(&["invalid_object_id"])
                .inc();
            AppError::NotFound(format!(
                "no {content_type} with id '{raw_object_id}'"
            ))
        })?;

        if resolver.exists(object_id).await? {
            Ok(ContentRef::new(content_type, object_id))
        } else {
            metrics::CONTENT_RESOLVE_FAILURES_TOTAL
                .with_label_values(&["missing_object"])
                .inc();
            Err(AppError::NotFound(format!(
                "no {content_type} with id '{object_id}'"
            )))
        }
    }
}

impl Default for ContentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Postgres-backed resolver checking row existence in a fixed table.
pub struct SqlContentResolver {
    pool: PgPool,
    table: &'static str,
}

impl SqlContentResolver {
    pub fn new(pool: PgPool, table: &'static str) -> Self {
        Self { pool, table }
    }
}

#[async_trait]
impl ContentResolver for SqlContentResolver {
    async fn exists(&self, object_id: Uuid) -> Result<bool> {
        // `table` is a compile-time constant chosen at registration, never
        // request input.
        let query = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)", self.table);
        let exists: bool = sqlx::query_scalar(&query)
            .bind(object_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct StaticResolver {
        ids: HashSet<Uuid>,
    }

    #[async_trait]
    impl ContentResolver for StaticResolver {
        async fn exists(&self, object_id: Uuid) -> Result<bool> {
            Ok(self.ids.contains(&object_id))
        }
    }

    fn registry_with(ids: &[Uuid]) -> ContentRegistry {
        ContentRegistry::new().register(
            "post",
            Arc::new(StaticResolver {
                ids: ids.iter().copied().collect(),
            }),
        )
    }

    #[tokio::test]
    async fn resolves_registered_kind_with_existing_object() {
        let id = Uuid::new_v4();
        let registry = registry_with(&[id]);

        let content = registry.resolve("post", &id.to_string()).await.unwrap();
        assert_eq!(content, ContentRef::new("post", id));
    }

    #[tokio::test]
    async fn unknown_content_type_is_not_found() {
        let registry = registry_with(&[Uuid::new_v4()]);

        let err = registry
            .resolve("page", &Uuid::new_v4().to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn missing_object_is_not_found() {
        let registry = registry_with(&[Uuid::new_v4()]);

        let err = registry
            .resolve("post", &Uuid::new_v4().to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn non_uuid_object_id_is_not_found() {
        let registry = registry_with(&[Uuid::new_v4()]);

        let err = registry.resolve("post", "234455").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn kinds_are_sorted() {
        let registry = ContentRegistry::new()
            .register(
                "story",
                Arc::new(StaticResolver {
                    ids: HashSet::new(),
                }),
            )
            .register(
                "post",
                Arc::new(StaticResolver {
                    ids: HashSet::new(),
                }),
            );

        assert_eq!(registry.kinds(), vec!["post", "story"]);
    }
}
