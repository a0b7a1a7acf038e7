//! Kakehashi - ORM Backend Selector Facade
//!
//! One facade, two incompatible ORM families. The selector picks a
//! backend by tag at construction, forwards calls to the backend's
//! optional capabilities when present, falls back to the generic path
//! otherwise, and memoizes one model instance per registered type.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              BackendSelector                 │
//! ├─────────────────────────────────────────────┤
//! │  tag → family     │ chosen once, stored      │
//! │  ModelCache       │ one entry per type       │
//! │  capability probe │ silent fallback          │
//! ├─────────────────────────────────────────────┤
//! │  EloquentBackend  │  ThinkBackend  │ SimBackend │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use kakehashi::{
//!     BackendConfig, BackendSelector, ModelDescriptor, ModelRegistry, ELOQUENT_BASE_MODEL,
//! };
//!
//! let registry = Arc::new(
//!     ModelRegistry::new().with_model(
//!         ModelDescriptor::new("app::User", "users").with_parent(ELOQUENT_BASE_MODEL),
//!     ),
//! );
//!
//! let selector = BackendSelector::new(
//!     BackendConfig::with_connection("mysql://localhost/app"),
//!     "laravelORM",
//!     registry,
//!     None,
//! )
//! .unwrap();
//!
//! assert!(selector.is_eloquent_family());
//! assert!(selector.is_model("app::User"));
//!
//! // Cached: the same shared instance comes back every time.
//! let first = selector.make("app::User").unwrap();
//! let second = selector.make("app::User").unwrap();
//! assert!(Arc::ptr_eq(&first, &second));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod backend;
pub mod config;
pub mod constants;
pub mod error;
pub mod family;
pub mod logging;
pub mod model;
pub mod registry;
pub mod selector;

// Re-export common types
pub use backend::{
    EloquentBackend, ModelDetector, NewModelCapable, OrmBackend, QueryBuilderCapable, SimBackend,
    ThinkBackend,
};
pub use config::BackendConfig;
pub use constants::{ELOQUENT_BASE_MODEL, KNOWN_BASE_MODELS, THINK_BASE_MODEL};
pub use error::{BackendError, BackendResult, SelectorError, SelectorResult};
pub use family::BackendFamily;
pub use logging::{LogLevel, LogSink, SharedLogSink};
pub use model::{BuilderOutput, ModelHandle, QueryBuilder};
pub use registry::{ModelDescriptor, ModelRegistry};
pub use selector::BackendSelector;
