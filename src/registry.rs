//! Model Registry
//!
//! `TigerStyle`: Explicit model-type table instead of ambient class
//! reflection.
//!
//! The registry answers the two questions the facade needs from the
//! type system: does a model type exist, and is it a (possibly
//! indirect) subtype of a known ORM base. A name that is not
//! registered is treated as a bare table name by the backends.

use std::collections::HashMap;

use crate::constants::{
    MODEL_NAME_BYTES_MAX, REGISTRY_MODELS_COUNT_MAX, REGISTRY_PARENT_CHAIN_DEPTH_MAX,
};

// =============================================================================
// Model Descriptor
// =============================================================================

/// A registered model type: its name, backing table, and parent link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDescriptor {
    /// Fully qualified model type name, e.g. `"app::User"`
    pub name: String,
    /// Backing table name; empty means "let the backend infer it"
    pub table: String,
    /// Parent type name; the chain ends at an ORM base model
    pub parent: Option<String>,
}

impl ModelDescriptor {
    /// Create a descriptor with an explicit table.
    ///
    /// # Panics
    /// Panics if the name is empty or exceeds limits.
    #[must_use]
    pub fn new(name: impl Into<String>, table: impl Into<String>) -> Self {
        let name = name.into();
        let table = table.into();

        // Preconditions
        assert!(!name.is_empty(), "model name cannot be empty");
        assert!(
            name.len() <= MODEL_NAME_BYTES_MAX,
            "model name {} bytes exceeds max {}",
            name.len(),
            MODEL_NAME_BYTES_MAX
        );
        assert!(
            table.len() <= MODEL_NAME_BYTES_MAX,
            "table name {} bytes exceeds max {}",
            table.len(),
            MODEL_NAME_BYTES_MAX
        );

        Self {
            name,
            table,
            parent: None,
        }
    }

    /// Create a descriptor whose table the backend infers by convention.
    #[must_use]
    pub fn inferred(name: impl Into<String>) -> Self {
        Self::new(name, "")
    }

    /// Set the parent type name.
    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Whether the backend must infer the table name.
    #[must_use]
    pub fn table_is_inferred(&self) -> bool {
        self.table.is_empty()
    }
}

// =============================================================================
// Model Registry
// =============================================================================

/// The table of model types the facade knows about.
///
/// Shared between the selector and its backend via `Arc`; populated
/// once at startup, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    models: HashMap<String, ModelDescriptor>,
}

impl ModelRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model type, replacing any previous descriptor.
    ///
    /// # Panics
    /// Panics if the registry is full.
    pub fn register(&mut self, descriptor: ModelDescriptor) {
        // Precondition
        assert!(
            self.models.len() < REGISTRY_MODELS_COUNT_MAX,
            "registry full: {} models",
            self.models.len()
        );

        self.models.insert(descriptor.name.clone(), descriptor);
    }

    /// Register a model type, builder-style.
    #[must_use]
    pub fn with_model(mut self, descriptor: ModelDescriptor) -> Self {
        self.register(descriptor);
        self
    }

    /// Whether a model type with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    /// Look up a descriptor by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ModelDescriptor> {
        self.models.get(name)
    }

    /// Number of registered model types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Whether `name` is a (possibly indirect) subtype of `base`.
    ///
    /// A nonexistent starting type is never a subtype of anything.
    /// The walk is depth-capped so a mis-registered parent cycle
    /// terminates instead of spinning.
    #[must_use]
    pub fn is_subtype_of(&self, name: &str, base: &str) -> bool {
        if !self.contains(name) {
            return false;
        }

        let mut current = name;
        for _ in 0..REGISTRY_PARENT_CHAIN_DEPTH_MAX {
            let Some(descriptor) = self.models.get(current) else {
                // Parent names an unregistered type; the only remaining
                // match is the base itself.
                return current == base;
            };
            match descriptor.parent.as_deref() {
                Some(parent) if parent == base => return true,
                Some(parent) => current = parent,
                None => return false,
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ELOQUENT_BASE_MODEL, THINK_BASE_MODEL};

    fn registry() -> ModelRegistry {
        ModelRegistry::new()
            .with_model(ModelDescriptor::new("app::User", "users").with_parent(ELOQUENT_BASE_MODEL))
            .with_model(ModelDescriptor::new("app::AdminUser", "admin_users").with_parent("app::User"))
            .with_model(ModelDescriptor::new("app::Order", "orders").with_parent(THINK_BASE_MODEL))
            .with_model(ModelDescriptor::new("app::Report", "reports"))
    }

    #[test]
    fn test_contains() {
        let registry = registry();
        assert!(registry.contains("app::User"));
        assert!(!registry.contains("app::Missing"));
        assert!(!registry.contains(""));
    }

    #[test]
    fn test_direct_subtype() {
        let registry = registry();
        assert!(registry.is_subtype_of("app::User", ELOQUENT_BASE_MODEL));
        assert!(registry.is_subtype_of("app::Order", THINK_BASE_MODEL));
    }

    #[test]
    fn test_indirect_subtype() {
        let registry = registry();
        assert!(registry.is_subtype_of("app::AdminUser", ELOQUENT_BASE_MODEL));
        assert!(!registry.is_subtype_of("app::AdminUser", THINK_BASE_MODEL));
    }

    #[test]
    fn test_no_parent_is_not_subtype() {
        let registry = registry();
        assert!(!registry.is_subtype_of("app::Report", ELOQUENT_BASE_MODEL));
    }

    #[test]
    fn test_nonexistent_type_is_never_subtype() {
        let registry = registry();
        assert!(!registry.is_subtype_of("app::Ghost", ELOQUENT_BASE_MODEL));
    }

    #[test]
    fn test_parent_cycle_terminates() {
        let mut registry = ModelRegistry::new();
        registry.register(ModelDescriptor::new("a::A", "a").with_parent("a::B"));
        registry.register(ModelDescriptor::new("a::B", "b").with_parent("a::A"));

        assert!(!registry.is_subtype_of("a::A", ELOQUENT_BASE_MODEL));
    }

    #[test]
    fn test_inferred_table() {
        let descriptor = ModelDescriptor::inferred("app::Invoice");
        assert!(descriptor.table_is_inferred());
    }

    #[test]
    #[should_panic(expected = "model name cannot be empty")]
    fn test_empty_name_rejected() {
        let _ = ModelDescriptor::new("", "t");
    }
}
