//! Backend Capability Contract
//!
//! One required operation plus three optional capabilities. A backend
//! advertises a capability by overriding the matching accessor to
//! return itself; the default is "not supported". The selector probes
//! the accessor and falls back silently when it gets `None` — absence
//! is never an error.

use crate::error::BackendResult;
use crate::model::{ModelHandle, QueryBuilder};

/// The one operation every backend must support.
pub trait OrmBackend: Send + Sync {
    /// Materialize a model instance.
    ///
    /// `model` is either a registered model type name or a bare table
    /// name; the backend resolves which.
    fn make(&self, model: &str) -> BackendResult<ModelHandle>;

    /// The query-builder capability, if this backend has one.
    fn as_query_builder(&self) -> Option<&dyn QueryBuilderCapable> {
        None
    }

    /// The new-model capability, if this backend has one.
    fn as_new_model(&self) -> Option<&dyn NewModelCapable> {
        None
    }

    /// The model-detection capability, if this backend has one.
    fn as_model_detector(&self) -> Option<&dyn ModelDetector> {
        None
    }
}

/// Optional: produce a query builder rooted at a model's table.
pub trait QueryBuilderCapable: Send + Sync {
    /// Build a query builder for the given model.
    fn builder(&self, model: &str) -> BackendResult<QueryBuilder>;
}

/// Optional: mint a fresh model instance, bypassing any caching.
pub trait NewModelCapable: Send + Sync {
    /// Materialize a fresh instance for the given model.
    fn new_model(&self, model: &str) -> BackendResult<ModelHandle>;
}

/// Optional: native detection of whether a name denotes an ORM model.
pub trait ModelDetector: Send + Sync {
    /// Whether `model` names a model type this backend recognizes.
    fn is_model(&self, model: &str) -> bool;
}
