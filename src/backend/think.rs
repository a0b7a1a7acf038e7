//! `ThinkBackend` - ThinkORM-Family Adapter
//!
//! The thinner of the two production adapters: it advertises only the
//! query-builder capability, so `new_model` and `is_model` calls on
//! the facade take the documented fallback paths. Table naming follows
//! the ThinkORM convention: configured prefix + snake_case name, no
//! pluralization.

use std::sync::Arc;

use super::traits::{OrmBackend, QueryBuilderCapable};
use super::{last_segment, snake_case};
use crate::config::BackendConfig;
use crate::constants::{CONFIG_CONNECTION_BYTES_MAX, MODEL_NAME_BYTES_MAX};
use crate::error::{BackendError, BackendResult};
use crate::family::BackendFamily;
use crate::logging::{LogLevel, SharedLogSink};
use crate::model::{ModelHandle, QueryBuilder};
use crate::registry::ModelRegistry;

/// Adapter for the ThinkORM family.
pub struct ThinkBackend {
    config: BackendConfig,
    registry: Arc<ModelRegistry>,
    #[allow(dead_code)]
    logger: Option<SharedLogSink>,
}

impl ThinkBackend {
    /// Create the adapter, validating its own config.
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
            sink.log(LogLevel::Info, "think backend initialized");
        }

        Ok(Self {
            config,
            registry,
            logger,
        })
    }

    /// Resolve the backing table for a model name.
    ///
    /// Registered tables are used verbatim (they are expected to carry
    /// the prefix already); inferred tables get prefix + snake_case
    /// short name. Unregistered names are bare table names from the
    /// caller and pass through untouched.
    fn resolve_table(&self, model: &str) -> String {
        match self.registry.get(model) {
            Some(descriptor) if !descriptor.table_is_inferred() => descriptor.table.clone(),
            Some(descriptor) => format!(
                "{}{}",
                self.config.table_prefix,
                snake_case(last_segment(&descriptor.name))
            ),
            None => model.to_string(),
        }
    }
}

impl OrmBackend for ThinkBackend {
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
            Ok(ModelHandle::for_type(model, table, BackendFamily::Think))
        } else {
            Ok(ModelHandle::for_table(table, BackendFamily::Think))
        }
    }

    fn as_query_builder(&self) -> Option<&dyn QueryBuilderCapable> {
        Some(self)
    }

    // No NewModelCapable, no ModelDetector: the facade falls back.
}

impl QueryBuilderCapable for ThinkBackend {
    fn builder(&self, model: &str) -> BackendResult<QueryBuilder> {
        assert!(!model.is_empty(), "model name cannot be empty");

        Ok(QueryBuilder::new(
            self.resolve_table(model),
            BackendFamily::Think,
        ))
    }
}
