//! TigerStyle Constants
//!
//! All limits use big-endian naming: CATEGORY_SPECIFICS_UNIT_LIMIT
//! Example: MODEL_NAME_BYTES_MAX (not MAX_MODEL_NAME).

// =============================================================================
// Backend Tags
// =============================================================================

/// Tag selecting the Eloquent-family backend (long form)
pub const BACKEND_TAG_LARAVEL_ORM: &str = "laravelORM";

/// Tag selecting the Eloquent-family backend (short alias)
pub const BACKEND_TAG_LARAVEL: &str = "laravel";

/// Tag selecting the Think-family backend
pub const BACKEND_TAG_THINK_ORM: &str = "thinkORM";

// =============================================================================
// Base Model Types
// =============================================================================

/// Base model type of the Eloquent family
pub const ELOQUENT_BASE_MODEL: &str = "eloquent::Model";

/// Base model type of the Think family
pub const THINK_BASE_MODEL: &str = "think::Model";

/// All base model types the `is_model` fallback recognizes
pub const KNOWN_BASE_MODELS: [&str; 2] = [ELOQUENT_BASE_MODEL, THINK_BASE_MODEL];

// =============================================================================
// Model Limits
// =============================================================================

/// Maximum length of a model type name or table name
pub const MODEL_NAME_BYTES_MAX: usize = 256;

/// Maximum depth of a parent chain walked during subtype checks
pub const REGISTRY_PARENT_CHAIN_DEPTH_MAX: usize = 32;

/// Maximum number of registered model types
pub const REGISTRY_MODELS_COUNT_MAX: usize = 10_000;

// =============================================================================
// Config Limits
// =============================================================================

/// Maximum length of a backend connection string
pub const CONFIG_CONNECTION_BYTES_MAX: usize = 4096;
