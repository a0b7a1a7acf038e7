//! `SimBackend` - In-Memory Backend for Testing
//!
//! `TigerStyle`: Deterministic testing with call counting and fault
//! injection.
//!
//! # Simulation-First
//!
//! The facade's delegation and fallback policy is verified against
//! this backend before the production adapters. Capabilities toggle
//! per test, counters are shared through `Arc` so a test can keep a
//! clone while the selector owns the boxed original.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use super::traits::{ModelDetector, NewModelCapable, OrmBackend, QueryBuilderCapable};
use crate::error::{BackendError, BackendResult};
use crate::family::BackendFamily;
use crate::model::{ModelHandle, QueryBuilder};
use crate::registry::ModelRegistry;

/// Counting, capability-toggling backend for tests.
#[derive(Clone)]
pub struct SimBackend {
    family: BackendFamily,
    registry: Arc<ModelRegistry>,
    with_builder: bool,
    with_new_model: bool,
    with_detector: bool,
    fail_make: Arc<AtomicBool>,
    make_calls: Arc<AtomicUsize>,
    builder_calls: Arc<AtomicUsize>,
    new_model_calls: Arc<AtomicUsize>,
}

impl SimBackend {
    /// Create a sim backend with no optional capabilities.
    #[must_use]
    pub fn new(family: BackendFamily, registry: Arc<ModelRegistry>) -> Self {
        Self {
            family,
            registry,
            with_builder: false,
            with_new_model: false,
            with_detector: false,
            fail_make: Arc::new(AtomicBool::new(false)),
            make_calls: Arc::new(AtomicUsize::new(0)),
            builder_calls: Arc::new(AtomicUsize::new(0)),
            new_model_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Enable the query-builder capability.
    #[must_use]
    pub fn with_builder(mut self) -> Self {
        self.with_builder = true;
        self
    }

    /// Enable the new-model capability.
    #[must_use]
    pub fn with_new_model(mut self) -> Self {
        self.with_new_model = true;
        self
    }

    /// Enable the model-detection capability.
    ///
    /// Native detection in the sim recognizes every registered type.
    #[must_use]
    pub fn with_detector(mut self) -> Self {
        self.with_detector = true;
        self
    }

    /// Make every subsequent `make` fail with a simulated fault.
    pub fn fail_make(&self, fail: bool) {
        self.fail_make.store(fail, Ordering::SeqCst);
    }

    /// Number of `make` calls that reached this backend.
    #[must_use]
    pub fn make_calls(&self) -> usize {
        self.make_calls.load(Ordering::SeqCst)
    }

    /// Number of `builder` calls that reached this backend.
    #[must_use]
    pub fn builder_calls(&self) -> usize {
        self.builder_calls.load(Ordering::SeqCst)
    }

    /// Number of `new_model` calls that reached this backend.
    #[must_use]
    pub fn new_model_calls(&self) -> usize {
        self.new_model_calls.load(Ordering::SeqCst)
    }
}

impl OrmBackend for SimBackend {
    fn make(&self, model: &str) -> BackendResult<ModelHandle> {
        self.make_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_make.load(Ordering::SeqCst) {
            return Err(BackendError::simulated_fault("make"));
        }

        if self.registry.contains(model) {
            Ok(ModelHandle::for_type(model, model.to_lowercase(), self.family))
        } else {
            Ok(ModelHandle::for_table(model, self.family))
        }
    }

    fn as_query_builder(&self) -> Option<&dyn QueryBuilderCapable> {
        self.with_builder.then_some(self as &dyn QueryBuilderCapable)
    }

    fn as_new_model(&self) -> Option<&dyn NewModelCapable> {
        self.with_new_model.then_some(self as &dyn NewModelCapable)
    }

    fn as_model_detector(&self) -> Option<&dyn ModelDetector> {
        self.with_detector.then_some(self as &dyn ModelDetector)
    }
}

impl QueryBuilderCapable for SimBackend {
    fn builder(&self, model: &str) -> BackendResult<QueryBuilder> {
        self.builder_calls.fetch_add(1, Ordering::SeqCst);
        Ok(QueryBuilder::new(model.to_lowercase(), self.family))
    }
}

impl NewModelCapable for SimBackend {
    fn new_model(&self, model: &str) -> BackendResult<ModelHandle> {
        self.new_model_calls.fetch_add(1, Ordering::SeqCst);
        if self.registry.contains(model) {
            Ok(ModelHandle::for_type(model, model.to_lowercase(), self.family))
        } else {
            Ok(ModelHandle::for_table(model, self.family))
        }
    }
}

impl ModelDetector for SimBackend {
    fn is_model(&self, model: &str) -> bool {
        self.registry.contains(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_make_calls() {
        let backend = SimBackend::new(BackendFamily::Eloquent, Arc::new(ModelRegistry::new()));

        backend.make("t1").unwrap();
        backend.make("t2").unwrap();

        assert_eq!(backend.make_calls(), 2);
    }

    #[test]
    fn test_counters_shared_across_clones() {
        let backend = SimBackend::new(BackendFamily::Think, Arc::new(ModelRegistry::new()));
        let observer = backend.clone();

        backend.make("t").unwrap();

        assert_eq!(observer.make_calls(), 1);
    }

    #[test]
    fn test_capabilities_default_off() {
        let backend = SimBackend::new(BackendFamily::Eloquent, Arc::new(ModelRegistry::new()));
        assert!(backend.as_query_builder().is_none());
        assert!(backend.as_new_model().is_none());
        assert!(backend.as_model_detector().is_none());
    }

    #[test]
    fn test_capability_toggles() {
        let backend = SimBackend::new(BackendFamily::Eloquent, Arc::new(ModelRegistry::new()))
            .with_builder()
            .with_detector();

        assert!(backend.as_query_builder().is_some());
        assert!(backend.as_new_model().is_none());
        assert!(backend.as_model_detector().is_some());
    }

    #[test]
    fn test_fault_injection() {
        let backend = SimBackend::new(BackendFamily::Eloquent, Arc::new(ModelRegistry::new()));
        backend.fail_make(true);

        let result = backend.make("t");
        assert!(matches!(result, Err(BackendError::SimulatedFault { .. })));

        // The failed call still counts as a delegation.
        assert_eq!(backend.make_calls(), 1);
    }
}
