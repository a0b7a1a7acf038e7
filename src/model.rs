//! Model Handles and Query Builders
//!
//! Opaque handles materialized by a backend. The facade never looks
//! inside them; it only caches and returns them.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::family::BackendFamily;

// =============================================================================
// Model Handle
// =============================================================================

/// A materialized model instance.
///
/// `instance_id` is unique per materialization, which is what lets
/// callers (and tests) tell a cached handle from a fresh one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelHandle {
    /// Unique identifier of this materialization (UUID v4)
    pub instance_id: Uuid,
    /// Model type name; `None` when materialized from a bare table name
    pub model_type: Option<String>,
    /// Resolved backing table
    pub table: String,
    /// Family of the backend that materialized it
    pub family: BackendFamily,
    /// Materialization timestamp
    pub created_at: DateTime<Utc>,
}

impl ModelHandle {
    /// Materialize a handle for a registered model type.
    #[must_use]
    pub fn for_type(
        model_type: impl Into<String>,
        table: impl Into<String>,
        family: BackendFamily,
    ) -> Self {
        Self {
            instance_id: Uuid::new_v4(),
            model_type: Some(model_type.into()),
            table: table.into(),
            family,
            created_at: Utc::now(),
        }
    }

    /// Materialize a handle bound directly to a table name.
    #[must_use]
    pub fn for_table(table: impl Into<String>, family: BackendFamily) -> Self {
        Self {
            instance_id: Uuid::new_v4(),
            model_type: None,
            table: table.into(),
            family,
            created_at: Utc::now(),
        }
    }

    /// Whether this handle was materialized from a bare table name.
    #[must_use]
    pub fn is_table_backed(&self) -> bool {
        self.model_type.is_none()
    }
}

// =============================================================================
// Query Builder
// =============================================================================

/// An opaque query builder handle produced by a backend.
///
/// Query construction itself lives in the engine; the facade only
/// routes the handle to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryBuilder {
    /// Family of the backend that produced it
    pub family: BackendFamily,
    /// Table the builder is rooted at
    pub table: String,
}

impl QueryBuilder {
    /// Create a builder rooted at a table.
    #[must_use]
    pub fn new(table: impl Into<String>, family: BackendFamily) -> Self {
        Self {
            family,
            table: table.into(),
        }
    }
}

// =============================================================================
// Builder Output
// =============================================================================

/// What `BackendSelector::builder` hands back.
///
/// When the active backend lacks the query-builder capability the
/// facade silently substitutes the result of `make`, so the caller may
/// receive a model handle where it asked for a builder. The mixed
/// shape is inherited behavior, kept deliberately.
#[derive(Debug, Clone)]
pub enum BuilderOutput {
    /// The backend's query builder, verbatim
    Builder(QueryBuilder),
    /// Fallback: the (possibly cached) model handle from `make`
    Model(Arc<ModelHandle>),
}

impl BuilderOutput {
    /// The builder, if the backend produced one.
    #[must_use]
    pub fn as_builder(&self) -> Option<&QueryBuilder> {
        match self {
            Self::Builder(builder) => Some(builder),
            Self::Model(_) => None,
        }
    }

    /// The fallback model handle, if that is what came back.
    #[must_use]
    pub fn as_model(&self) -> Option<&Arc<ModelHandle>> {
        match self {
            Self::Builder(_) => None,
            Self::Model(handle) => Some(handle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_type() {
        let handle = ModelHandle::for_type("app::User", "users", BackendFamily::Eloquent);
        assert_eq!(handle.model_type.as_deref(), Some("app::User"));
        assert_eq!(handle.table, "users");
        assert!(!handle.is_table_backed());
    }

    #[test]
    fn test_for_table() {
        let handle = ModelHandle::for_table("audit_log", BackendFamily::Think);
        assert!(handle.model_type.is_none());
        assert!(handle.is_table_backed());
    }

    #[test]
    fn test_instance_ids_are_unique() {
        let a = ModelHandle::for_table("t", BackendFamily::Eloquent);
        let b = ModelHandle::for_table("t", BackendFamily::Eloquent);
        assert_ne!(a.instance_id, b.instance_id);
    }

    #[test]
    fn test_builder_output_accessors() {
        let builder = BuilderOutput::Builder(QueryBuilder::new("users", BackendFamily::Eloquent));
        assert!(builder.as_builder().is_some());
        assert!(builder.as_model().is_none());

        let model = BuilderOutput::Model(Arc::new(ModelHandle::for_table(
            "users",
            BackendFamily::Eloquent,
        )));
        assert!(model.as_builder().is_none());
        assert!(model.as_model().is_some());
    }
}
