//! `EloquentBackend` - Eloquent-Family Adapter
//!
//! Wraps an Eloquent-style engine. This is the fully featured adapter:
//! it advertises all three optional capabilities. Query building and
//! connection management live in the engine itself and are out of
//! scope here; the adapter resolves names and materializes handles.

use std::sync::Arc;

use super::traits::{ModelDetector, NewModelCapable, OrmBackend, QueryBuilderCapable};
use super::{last_segment, snake_case};
use crate::config::BackendConfig;
use crate::constants::{CONFIG_CONNECTION_BYTES_MAX, ELOQUENT_BASE_MODEL, MODEL_NAME_BYTES_MAX};
use crate::error::{BackendError, BackendResult};
use crate::family::BackendFamily;
use crate::logging::{LogLevel, SharedLogSink};
use crate::model::{ModelHandle, QueryBuilder};
use crate::registry::ModelRegistry;

/// Adapter for the Eloquent ORM family.
pub struct EloquentBackend {
    #[allow(dead_code)]
    config: BackendConfig,
    registry: Arc<ModelRegistry>,
    #[allow(dead_code)]
    logger: Option<SharedLogSink>,
}

impl EloquentBackend {
    /// Create the adapter, validating its own config.
    ///
    /// The selector passes the config through untouched; rejecting a
    /// missing connection string happens here.
    ///
    /// # Errors
    /// Returns `BackendError::InvalidConfig` if the connection string
    /// is empty.
    pub fn new(
        config: BackendConfig,
        registry: Arc<ModelRegistry>,
        logger: Option<SharedLogSink>,
    ) -> BackendResult<Self> {
        if config.connection.is_empty() {
            return Err(BackendError::invalid_config("connection string is empty"));
        }

        // Precondition
        assert!(
            config.connection.len() <= CONFIG_CONNECTION_BYTES_MAX,
            "connection string {} bytes exceeds max {}",
            config.connection.len(),
            CONFIG_CONNECTION_BYTES_MAX
        );

        if let Some(sink) = &logger {
            sink.log(LogLevel::Info, "eloquent backend initialized");
        }

        Ok(Self {
            config,
            registry,
            logger,
        })
    }

    /// Resolve the backing table for a model name.
    ///
    /// Registered descriptors win; descriptors without a table get the
    /// Eloquent convention (snake_case of the short name, pluralized);
    /// unregistered names are taken as bare table names.
    fn resolve_table(&self, model: &str) -> String {
        match self.registry.get(model) {
            Some(descriptor) if !descriptor.table_is_inferred() => descriptor.table.clone(),
            Some(descriptor) => infer_table(&descriptor.name),
            None => model.to_string(),
        }
    }
}

/// Eloquent table convention: snake_case short name, pluralized.
fn infer_table(model: &str) -> String {
    let mut table = snake_case(last_segment(model));
    if !table.ends_with('s') {
        table.push('s');
    }
    table
}

impl OrmBackend for EloquentBackend {
    #[tracing::instrument(skip(self))]
    fn make(&self, model: &str) -> BackendResult<ModelHandle> {
        // Preconditions
        assert!(!model.is_empty(), "model name cannot be empty");
        assert!(
            model.len() <= MODEL_NAME_BYTES_MAX,
            "model name {} bytes exceeds max {}",
            model.len(),
            MODEL_NAME_BYTES_MAX
        );

        let table = self.resolve_table(model);
        if self.registry.contains(model) {
            Ok(ModelHandle::for_type(model, table, BackendFamily::Eloquent))
        } else {
            Ok(ModelHandle::for_table(table, BackendFamily::Eloquent))
        }
    }

    fn as_query_builder(&self) -> Option<&dyn QueryBuilderCapable> {
        Some(self)
    }

    fn as_new_model(&self) -> Option<&dyn NewModelCapable> {
        Some(self)
    }

    fn as_model_detector(&self) -> Option<&dyn ModelDetector> {
        Some(self)
    }
}

impl QueryBuilderCapable for EloquentBackend {
    fn builder(&self, model: &str) -> BackendResult<QueryBuilder> {
        assert!(!model.is_empty(), "model name cannot be empty");

        Ok(QueryBuilder::new(
            self.resolve_table(model),
            BackendFamily::Eloquent,
        ))
    }
}

impl NewModelCapable for EloquentBackend {
    fn new_model(&self, model: &str) -> BackendResult<ModelHandle> {
        // A fresh materialization every call, no caching anywhere.
        self.make(model)
    }
}

impl ModelDetector for EloquentBackend {
    fn is_model(&self, model: &str) -> bool {
        self.registry.is_subtype_of(model, ELOQUENT_BASE_MODEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ModelDescriptor;

    fn backend() -> EloquentBackend {
        let registry = ModelRegistry::new()
            .with_model(ModelDescriptor::new("app::User", "users").with_parent(ELOQUENT_BASE_MODEL))
            .with_model(ModelDescriptor::inferred("app::AdminUser").with_parent("app::User"))
            .with_model(ModelDescriptor::new("app::Report", "reports"));

        EloquentBackend::new(
            BackendConfig::with_connection("mysql://localhost/app"),
            Arc::new(registry),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_empty_connection() {
        let result = EloquentBackend::new(
            BackendConfig::default(),
            Arc::new(ModelRegistry::new()),
            None,
        );
        assert!(matches!(result, Err(BackendError::InvalidConfig { .. })));
    }

    #[test]
    fn test_make_registered_type() {
        let backend = backend();
        let handle = backend.make("app::User").unwrap();

        assert_eq!(handle.model_type.as_deref(), Some("app::User"));
        assert_eq!(handle.table, "users");
        assert_eq!(handle.family, BackendFamily::Eloquent);
    }

    #[test]
    fn test_make_infers_table_by_convention() {
        let backend = backend();
        let handle = backend.make("app::AdminUser").unwrap();
        assert_eq!(handle.table, "admin_users");
    }

    #[test]
    fn test_make_bare_table_name() {
        let backend = backend();
        let handle = backend.make("audit_log").unwrap();

        assert!(handle.is_table_backed());
        assert_eq!(handle.table, "audit_log");
    }

    #[test]
    fn test_advertises_all_capabilities() {
        let backend = backend();
        assert!(backend.as_query_builder().is_some());
        assert!(backend.as_new_model().is_some());
        assert!(backend.as_model_detector().is_some());
    }

    #[test]
    fn test_builder_roots_at_table() {
        let backend = backend();
        let builder = QueryBuilderCapable::builder(&backend, "app::User").unwrap();
        assert_eq!(builder.table, "users");
        assert_eq!(builder.family, BackendFamily::Eloquent);
    }

    #[test]
    fn test_native_detection_uses_eloquent_base_only() {
        let backend = backend();
        assert!(ModelDetector::is_model(&backend, "app::User"));
        assert!(ModelDetector::is_model(&backend, "app::AdminUser"));
        // Registered, but not rooted at the Eloquent base.
        assert!(!ModelDetector::is_model(&backend, "app::Report"));
        assert!(!ModelDetector::is_model(&backend, "app::Ghost"));
    }

    #[test]
    fn test_infer_table_pluralizes() {
        assert_eq!(infer_table("app::User"), "users");
        assert_eq!(infer_table("app::Address"), "address");
        assert_eq!(infer_table("Invoice"), "invoices");
    }
}
