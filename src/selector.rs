//! `BackendSelector` - The Facade
//!
//! Owns exactly one backend, chosen once at construction by tag, plus
//! the per-type model cache. Every call either hits the cache or
//! delegates to the backend; optional capabilities are probed and fall
//! back silently when absent.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      BackendSelector                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  family: BackendFamily      (set once, never recomputed)     │
//! │  backend: Box<dyn OrmBackend>                                │
//! │  cache: Mutex<HashMap<type name, Arc<ModelHandle>>>          │
//! └─────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::backend::{EloquentBackend, OrmBackend, ThinkBackend};
use crate::config::BackendConfig;
use crate::constants::{KNOWN_BASE_MODELS, MODEL_NAME_BYTES_MAX};
use crate::error::{SelectorError, SelectorResult};
use crate::family::BackendFamily;
use crate::logging::SharedLogSink;
use crate::model::{BuilderOutput, ModelHandle};
use crate::registry::ModelRegistry;

/// Facade selecting between the two ORM backend families.
///
/// The cache is unbounded and never evicted: one entry per registered
/// model type, live for the selector's lifetime.
pub struct BackendSelector {
    backend: Box<dyn OrmBackend>,
    family: BackendFamily,
    registry: Arc<ModelRegistry>,
    /// Pass-through sink handed to the backend at construction; the
    /// selector itself never logs through it.
    #[allow(dead_code)]
    logger: Option<SharedLogSink>,
    cache: Mutex<HashMap<String, Arc<ModelHandle>>>,
}

impl BackendSelector {
    /// Construct the selector and its one backend.
    ///
    /// The tag must match the enumerated alias set exactly:
    /// `"laravelORM"` / `"laravel"` for the Eloquent family,
    /// `"thinkORM"` for the Think family. Config and logger pass
    /// through to the backend untouched; config validation is the
    /// backend's responsibility.
    ///
    /// # Errors
    /// Returns [`SelectorError::UnsupportedBackendKind`] for any other
    /// tag, before any backend is created. Backend construction errors
    /// propagate unchanged.
    pub fn new(
        config: BackendConfig,
        tag: &str,
        registry: Arc<ModelRegistry>,
        logger: Option<SharedLogSink>,
    ) -> SelectorResult<Self> {
        let family =
            BackendFamily::from_tag(tag).ok_or_else(|| SelectorError::unsupported_kind(tag))?;

        let backend: Box<dyn OrmBackend> = match family {
            BackendFamily::Eloquent => Box::new(EloquentBackend::new(
                config,
                Arc::clone(&registry),
                logger.clone(),
            )?),
            BackendFamily::Think => Box::new(ThinkBackend::new(
                config,
                Arc::clone(&registry),
                logger.clone(),
            )?),
        };

        tracing::debug!(%family, "backend selected");

        Ok(Self {
            backend,
            family,
            registry,
            logger,
            cache: Mutex::new(HashMap::new()),
        })
    }

    /// Construct a selector around an already-built backend.
    ///
    /// Simulation-first escape hatch: the tag path only ever builds the
    /// two production adapters, so tests inject a `SimBackend` here.
    #[must_use]
    pub fn with_backend(
        backend: Box<dyn OrmBackend>,
        family: BackendFamily,
        registry: Arc<ModelRegistry>,
    ) -> Self {
        Self {
            backend,
            family,
            registry,
            logger: None,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// The active backend family.
    #[must_use]
    pub fn family(&self) -> BackendFamily {
        self.family
    }

    /// Whether the active backend is the Eloquent family.
    #[must_use]
    pub fn is_eloquent_family(&self) -> bool {
        self.family == BackendFamily::Eloquent
    }

    /// Whether the active backend is the Think family.
    #[must_use]
    pub fn is_think_family(&self) -> bool {
        self.family == BackendFamily::Think
    }

    /// Get a query builder for a model.
    ///
    /// Delegates to the backend's query-builder capability when it has
    /// one. Otherwise silently falls back to [`make`](Self::make) and
    /// the caller receives the (possibly cached) model handle in the
    /// builder's place — inherited leak, kept deliberately.
    ///
    /// # Errors
    /// Backend errors propagate unchanged.
    pub fn builder(&self, model: &str) -> SelectorResult<BuilderOutput> {
        if let Some(capability) = self.backend.as_query_builder() {
            return Ok(BuilderOutput::Builder(capability.builder(model)?));
        }
        Ok(BuilderOutput::Model(self.make(model)?))
    }

    /// Get a fresh model instance, preferring the backend's new-model
    /// capability; falls back to the caching [`make`](Self::make) when
    /// the capability is absent.
    ///
    /// # Errors
    /// Backend errors propagate unchanged.
    pub fn new_model(&self, model: &str) -> SelectorResult<Arc<ModelHandle>> {
        if let Some(capability) = self.backend.as_new_model() {
            return Ok(Arc::new(capability.new_model(model)?));
        }
        self.make(model)
    }

    /// Whether `model` names an ORM model.
    ///
    /// Delegates to the backend's detection capability when present.
    /// Fallback heuristic: a name that is not a registered type is
    /// never a model; a registered type is a model iff it is a
    /// (possibly indirect) subtype of one of the known base model
    /// types.
    #[must_use]
    pub fn is_model(&self, model: &str) -> bool {
        if let Some(detector) = self.backend.as_model_detector() {
            return detector.is_model(model);
        }

        if !self.registry.contains(model) {
            return false;
        }
        KNOWN_BASE_MODELS
            .iter()
            .any(|base| self.registry.is_subtype_of(model, base))
    }

    /// Call-style delegation straight to the backend's `make`.
    ///
    /// Never reads or populates the model cache: every call yields a
    /// fresh instance, even for types [`make`](Self::make) has already
    /// cached. Callers rely on that asymmetry.
    ///
    /// # Errors
    /// Backend errors propagate unchanged.
    pub fn invoke(&self, model: &str) -> SelectorResult<Arc<ModelHandle>> {
        Ok(Arc::new(self.backend.make(model)?))
    }

    /// Get the model instance for a type, materializing it on first
    /// use.
    ///
    /// A name that is not a registered type is a bare table name: the
    /// cache is skipped entirely and every call delegates. For a
    /// registered type the backend is asked at most once over the
    /// selector's lifetime; every later call returns the same shared
    /// handle (the `Arc` is cloned, the instance is not). Cached
    /// handles must therefore be treated as read-only.
    ///
    /// # Errors
    /// Backend errors propagate unchanged.
    ///
    /// # Panics
    /// Panics if the model name is empty or exceeds limits.
    #[tracing::instrument(skip(self))]
    pub fn make(&self, model: &str) -> SelectorResult<Arc<ModelHandle>> {
        // Preconditions
        assert!(!model.is_empty(), "model name cannot be empty");
        assert!(
            model.len() <= MODEL_NAME_BYTES_MAX,
            "model name {} bytes exceeds max {}",
            model.len(),
            MODEL_NAME_BYTES_MAX
        );

        if !self.registry.contains(model) {
            return Ok(Arc::new(self.backend.make(model)?));
        }

        // The lock spans check, delegate, and insert, so a concurrent
        // first access cannot materialize the same type twice.
        let mut cache = self.cache.lock().unwrap();
        if let Some(handle) = cache.get(model) {
            return Ok(Arc::clone(handle));
        }

        tracing::debug!(model, "model cache miss");
        let handle = Arc::new(self.backend.make(model)?);
        cache.insert(model.to_string(), Arc::clone(&handle));

        Ok(handle)
    }

    /// Number of cached model instances (for testing).
    #[must_use]
    pub fn cached_model_count(&self) -> usize {
        self.cache.lock().unwrap().len()
    }
}
